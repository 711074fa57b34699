// ==========================================
// 设备可靠性分析 - 可靠性 API
// ==========================================
// 职责: 对外暴露报告 / 月度负荷 / 均衡模拟 / 数据质量 四类接口
// 架构: API 层 → 引擎层 (ReliabilityReportAssembler / LoadLevelingSimulator)
// 红线: API 持有的快照只读; 均衡结果仅为提案
// ==========================================

use crate::api::dto::{
    LevelingRequest, MonthlyLoadResponse, ReportRequest, ReportResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::config::EngineConfig;
use crate::domain::data_quality::DqReport;
use crate::domain::leveling::{EquipmentPlan, LevelingProposal};
use crate::domain::snapshot::MaintenanceSnapshot;
use crate::engine::{
    group_into_plans, CommitGate, DataQualityScanner, LoadLevelingSimulator,
    ReliabilityReportAssembler,
};
use chrono::NaiveDate;
use tracing::{info, warn};

// ==========================================
// ReliabilityApi - 可靠性 API
// ==========================================
pub struct ReliabilityApi {
    snapshot: MaintenanceSnapshot,
    assembler: ReliabilityReportAssembler,
    simulator: LoadLevelingSimulator,
    scanner: DataQualityScanner,
}

impl ReliabilityApi {
    /// 创建新的 ReliabilityApi 实例
    ///
    /// # 参数
    /// - snapshot: 本次请求使用的设备/工单快照
    /// - config: 引擎参数
    pub fn new(snapshot: MaintenanceSnapshot, config: &EngineConfig) -> Self {
        Self {
            snapshot,
            assembler: ReliabilityReportAssembler::from_config(config),
            simulator: LoadLevelingSimulator::from_config(config),
            scanner: DataQualityScanner::new(),
        }
    }

    pub fn snapshot(&self) -> &MaintenanceSnapshot {
        &self.snapshot
    }

    // ==========================================
    // 可靠性报告
    // ==========================================

    /// 组装可靠性报告 + 设备群汇总
    ///
    /// 只读路径降级返回, 不因局部脏数据整体失败:
    /// - 空白设备ID 忽略 (其余设备照常出报告)
    /// - 起始晚于结束: 区间汇总按零值返回
    pub fn build_report(&self, request: &ReportRequest) -> ApiResult<ReportResponse> {
        let (selected_ids, blank): (Vec<String>, Vec<String>) = request
            .equipment_ids
            .iter()
            .cloned()
            .partition(|id| !id.trim().is_empty());
        if !blank.is_empty() {
            warn!(ignored = blank.len(), "equipmentIds 含空白设备ID, 已忽略");
        }
        if request.start_date > request.end_date {
            warn!(
                start = %request.start_date,
                end = %request.end_date,
                "报告区间起始晚于结束, 区间指标将为零值"
            );
        }

        let reports = self.assembler.build_report(
            &self.snapshot.equipment,
            &self.snapshot.work_orders,
            &selected_ids,
            request.start_date,
            request.end_date,
            request.criticality_filter,
        );
        let portfolio = self.assembler.summarize_portfolio(&reports);

        info!(
            reports = reports.len(),
            failures = portfolio.total_failures,
            "可靠性报告已生成"
        );
        Ok(ReportResponse { reports, portfolio })
    }

    // ==========================================
    // 月度负荷
    // ==========================================

    pub fn monthly_load(&self, year: i32) -> ApiResult<MonthlyLoadResponse> {
        validate_year(year)?;

        let plans = group_into_plans(&self.snapshot.equipment, &self.snapshot.work_orders);
        let monthly_load = self.simulator.monthly_load(&plans, year);
        let capacity_limit = self.simulator.capacity_limit();
        let overloaded_months = monthly_load
            .iter()
            .enumerate()
            .filter(|(_, load)| **load > capacity_limit)
            .map(|(index, _)| index as u32)
            .collect();

        Ok(MonthlyLoadResponse {
            year,
            monthly_load,
            capacity_limit,
            overloaded_months,
        })
    }

    // ==========================================
    // 均衡模拟
    // ==========================================

    /// 生成均衡提案 (不修改 API 持有的快照)
    pub fn simulate_leveling(&self, request: &LevelingRequest) -> ApiResult<LevelingProposal> {
        validate_year(request.year)?;

        let plans = group_into_plans(&self.snapshot.equipment, &self.snapshot.work_orders);
        let proposal = self
            .simulator
            .simulate(&plans, request.year, request.strategy)?;
        Ok(proposal)
    }

    /// 生成均衡提案并经审批提交, 返回待落库的计划快照
    ///
    /// 审批拒绝时返回 CommitRejected; API 持有的快照不变, 落库由调用方完成
    pub fn commit_leveling(
        &self,
        request: &LevelingRequest,
        gate: &dyn CommitGate,
    ) -> ApiResult<Vec<EquipmentPlan>> {
        let proposal = self.simulate_leveling(request)?;
        let moves = proposal.moves.len();
        let plans = proposal.commit(gate)?;
        info!(year = request.year, moves, "均衡提案已提交");
        Ok(plans)
    }

    // ==========================================
    // 数据质量
    // ==========================================

    pub fn scan_data_quality(&self) -> DqReport {
        self.scanner
            .scan(&self.snapshot.equipment, &self.snapshot.work_orders)
    }

    // ==========================================
    // JSON 便捷入口
    // ==========================================

    /// JSON 请求 `{equipmentIds, startDate, endDate, criticalityFilter}` → JSON 响应
    pub fn handle_report_json(&self, raw: &str) -> ApiResult<String> {
        let request: ReportRequest = serde_json::from_str(raw)?;
        let response = self.build_report(&request)?;
        serde_json::to_string(&response).map_err(|e| ApiError::InternalError(e.to_string()))
    }

    /// JSON 请求 `{year, strategy}` → JSON 提案
    pub fn handle_leveling_json(&self, raw: &str) -> ApiResult<String> {
        let request: LevelingRequest = serde_json::from_str(raw)?;
        let proposal = self.simulate_leveling(&request)?;
        serde_json::to_string(&proposal).map_err(|e| ApiError::InternalError(e.to_string()))
    }
}

fn validate_year(year: i32) -> ApiResult<()> {
    if NaiveDate::from_ymd_opt(year, 1, 1).is_none() || NaiveDate::from_ymd_opt(year, 12, 31).is_none() {
        return Err(ApiError::InvalidInput(format!("年份超出范围: {}", year)));
    }
    Ok(())
}
