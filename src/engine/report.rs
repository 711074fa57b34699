// ==========================================
// 设备可靠性分析 - 可靠性报告组装引擎
// ==========================================
// 职责: 设备筛选 → 单设备指标 → 重复故障标记 → 设备群汇总
// 输入: 设备清单 + 工单快照 + 选中设备 + 查询区间 + 关键性筛选
// 输出: Vec<AggregateReport> / PortfolioSummary
// 红线: FACILITY 设备永不进入报告
// ==========================================

use crate::config::EngineConfig;
use crate::domain::equipment::Equipment;
use crate::domain::reliability::{AggregateReport, PortfolioSummary, RecurrentFailure};
use crate::domain::types::{ComplianceStatus, CriticalityFilter};
use crate::domain::work_order::WorkOrder;
use crate::engine::calendar::OperationalCalendar;
use crate::engine::metrics::{mean_time_to_repair, EquipmentMetricsCalculator};
use crate::config::engine_config::DEFAULT_RECURRENCE_THRESHOLD;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, instrument};

// ==========================================
// ReliabilityReportAssembler - 报告组装引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct ReliabilityReportAssembler {
    calculator: EquipmentMetricsCalculator,
    recurrence_threshold: u32,
}

impl Default for ReliabilityReportAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl ReliabilityReportAssembler {
    pub fn new() -> Self {
        Self {
            calculator: EquipmentMetricsCalculator::new(),
            recurrence_threshold: DEFAULT_RECURRENCE_THRESHOLD,
        }
    }

    /// 按引擎参数构造 (日历小时数 + 重复故障阈值)
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            calculator: EquipmentMetricsCalculator::with_calendar(
                OperationalCalendar::with_hours_per_day(config.productive_hours_per_day),
            ),
            recurrence_threshold: config.recurrence_threshold,
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 组装可靠性报告
    ///
    /// 筛选顺序: 排除 FACILITY → 仅保留 selected_ids → 关键性筛选
    /// 输出顺序与设备清单一致
    #[instrument(skip_all, fields(
        equipment = equipment.len(),
        orders = work_orders.len(),
        selected = selected_ids.len(),
        %criticality_filter
    ))]
    pub fn build_report(
        &self,
        equipment: &[Equipment],
        work_orders: &[WorkOrder],
        selected_ids: &[String],
        range_start: NaiveDate,
        range_end: NaiveDate,
        criticality_filter: CriticalityFilter,
    ) -> Vec<AggregateReport> {
        let selected: HashSet<&str> = selected_ids.iter().map(String::as_str).collect();

        let reports: Vec<AggregateReport> = equipment
            .iter()
            .filter(|e| e.is_reliability_tracked())
            .filter(|e| selected.contains(e.id.as_str()))
            .filter(|e| criticality_filter.accepts(e.is_critical))
            .map(|e| self.build_single(e, work_orders, range_start, range_end))
            .collect();

        debug!(reports = reports.len(), "可靠性报告组装完成");
        reports
    }

    /// 单设备报告
    fn build_single(
        &self,
        equipment: &Equipment,
        work_orders: &[WorkOrder],
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> AggregateReport {
        let metrics =
            self.calculator
                .compute_for_equipment(equipment, work_orders, range_start, range_end);
        let totals = metrics.totals;

        AggregateReport {
            equipment_id: equipment.id.clone(),
            equipment_name: equipment.name.clone(),
            is_critical: equipment.is_critical,
            mttr: totals.mttr,
            mtbf: totals.mtbf,
            availability: totals.availability,
            global_availability: totals.global_availability,
            total_failures: totals.failure_count,
            total_corrective_hours: totals.corrective_hours,
            monthly_history: metrics.monthly_history,
            compliance_status: totals.compliance_status,
            recurrent_failure: self.detect_recurrent_failure(
                &equipment.id,
                work_orders,
                range_start,
                range_end,
            ),
        }
    }

    /// 重复故障检测
    ///
    /// 区间内本设备的故障工单按故障分类计数, 达到阈值时返回次数最多的分类
    /// (次数相同取分类名字典序最小者); 缺失分类不计
    pub fn detect_recurrent_failure(
        &self,
        equipment_id: &str,
        work_orders: &[WorkOrder],
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> Option<RecurrentFailure> {
        let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
        for order in work_orders.iter().filter(|o| {
            o.equipment_id == equipment_id
                && o.is_failure()
                && o.scheduled_within(range_start, range_end)
        }) {
            if let Some(category) = order.failure_category() {
                *counts.entry(category).or_insert(0) += 1;
            }
        }

        let mut top: Option<(&str, u32)> = None;
        for (category, count) in counts {
            if top.map_or(true, |(_, best)| count > best) {
                top = Some((category, count));
            }
        }

        top.filter(|(_, count)| *count >= self.recurrence_threshold)
            .map(|(category, count)| RecurrentFailure {
                category: category.to_string(),
                count,
            })
    }

    // ==========================================
    // 设备群汇总
    // ==========================================

    /// 设备群汇总
    ///
    /// - MTTR: Σ故障停机 / Σ故障次数
    /// - MTBF: 各设备非空 MTBF 的均值
    /// - 可用率: 各设备均值; 空设备群为 100
    pub fn summarize_portfolio(&self, reports: &[AggregateReport]) -> PortfolioSummary {
        let total_failures: u32 = reports.iter().map(|r| r.total_failures).sum();
        let total_corrective_hours: f64 = reports.iter().map(|r| r.total_corrective_hours).sum();

        let mtbf_values: Vec<f64> = reports.iter().filter_map(|r| r.mtbf).collect();
        let mtbf = if mtbf_values.is_empty() {
            None
        } else {
            Some(mtbf_values.iter().sum::<f64>() / mtbf_values.len() as f64)
        };

        let (mean_availability, mean_global_availability) = if reports.is_empty() {
            (100.0, 100.0)
        } else {
            let n = reports.len() as f64;
            (
                reports.iter().map(|r| r.availability).sum::<f64>() / n,
                reports.iter().map(|r| r.global_availability).sum::<f64>() / n,
            )
        };

        let approved_count = reports
            .iter()
            .filter(|r| r.compliance_status == ComplianceStatus::Approved)
            .count();

        PortfolioSummary {
            equipment_count: reports.len(),
            total_failures,
            total_corrective_hours,
            mttr: mean_time_to_repair(total_corrective_hours, total_failures),
            mtbf,
            mean_availability,
            mean_global_availability,
            approved_count,
            rejected_count: reports.len() - approved_count,
            recurrent_flag_count: reports
                .iter()
                .filter(|r| r.recurrent_failure.is_some())
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{EquipmentCategory, WorkOrderStatus, WorkOrderType};
    use chrono::{Duration, TimeZone, Utc};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn failure(id: &str, equipment_id: &str, day: u32, category: Option<&str>) -> WorkOrder {
        let start = Utc.with_ymd_and_hms(2024, 4, day, 8, 0, 0).unwrap();
        WorkOrder {
            id: id.to_string(),
            equipment_id: equipment_id.to_string(),
            order_type: WorkOrderType::Corrective,
            status: WorkOrderStatus::Executed,
            scheduled_date: start,
            end_date: Some(start + Duration::minutes(30)),
            corrective_category: category.map(str::to_string),
        }
    }

    fn fleet() -> Vec<Equipment> {
        vec![
            Equipment::new("EQ-A", "Extruder", true, EquipmentCategory::Production),
            Equipment::new("EQ-B", "Chiller", false, EquipmentCategory::Utility),
            Equipment::new("EQ-F", "Roof", false, EquipmentCategory::Facility),
        ]
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_facility_always_excluded() {
        let assembler = ReliabilityReportAssembler::new();
        let reports = assembler.build_report(
            &fleet(),
            &[],
            &ids(&["EQ-A", "EQ-B", "EQ-F"]),
            d(2024, 1, 1),
            d(2024, 12, 31),
            CriticalityFilter::All,
        );
        let got: Vec<&str> = reports.iter().map(|r| r.equipment_id.as_str()).collect();
        assert_eq!(got, vec!["EQ-A", "EQ-B"]);
    }

    #[test]
    fn test_criticality_filter_applied() {
        let assembler = ReliabilityReportAssembler::new();
        let critical = assembler.build_report(
            &fleet(),
            &[],
            &ids(&["EQ-A", "EQ-B"]),
            d(2024, 1, 1),
            d(2024, 12, 31),
            CriticalityFilter::CriticalOnly,
        );
        assert_eq!(critical.len(), 1);
        assert!(critical[0].is_critical);

        let non_critical = assembler.build_report(
            &fleet(),
            &[],
            &ids(&["EQ-A"]),
            d(2024, 1, 1),
            d(2024, 12, 31),
            CriticalityFilter::NonCriticalOnly,
        );
        assert!(non_critical.is_empty());
    }

    #[test]
    fn test_recurrent_failure_threshold() {
        let assembler = ReliabilityReportAssembler::new();
        let orders = vec![
            failure("1", "EQ-B", 1, Some("bearing")),
            failure("2", "EQ-B", 2, Some("bearing")),
            failure("3", "EQ-B", 3, Some("seal")),
            failure("4", "EQ-B", 4, None),
        ];
        assert_eq!(
            assembler.detect_recurrent_failure("EQ-B", &orders, d(2024, 4, 1), d(2024, 4, 30)),
            None
        );

        let mut more = orders.clone();
        more.push(failure("5", "EQ-B", 5, Some("bearing")));
        let flag = assembler
            .detect_recurrent_failure("EQ-B", &more, d(2024, 4, 1), d(2024, 4, 30))
            .unwrap();
        assert_eq!(flag.category, "bearing");
        assert_eq!(flag.count, 3);

        // 区间外不计
        assert_eq!(
            assembler.detect_recurrent_failure("EQ-B", &more, d(2024, 4, 2), d(2024, 4, 30)),
            None
        );
    }

    #[test]
    fn test_recurrent_tie_breaks_by_name() {
        let assembler = ReliabilityReportAssembler::new();
        let orders: Vec<WorkOrder> = (1..=6)
            .map(|i| {
                let category = if i % 2 == 0 { "vibration" } else { "electrical" };
                failure(&i.to_string(), "EQ-A", i, Some(category))
            })
            .collect();
        let flag = assembler
            .detect_recurrent_failure("EQ-A", &orders, d(2024, 4, 1), d(2024, 4, 30))
            .unwrap();
        assert_eq!(flag.category, "electrical");
    }

    #[test]
    fn test_portfolio_summary() {
        let assembler = ReliabilityReportAssembler::new();
        let orders = vec![
            failure("1", "EQ-A", 1, None),
            failure("2", "EQ-A", 2, None),
        ];
        let reports = assembler.build_report(
            &fleet(),
            &orders,
            &ids(&["EQ-A", "EQ-B"]),
            d(2024, 4, 1),
            d(2024, 4, 30),
            CriticalityFilter::All,
        );
        let summary = assembler.summarize_portfolio(&reports);
        assert_eq!(summary.equipment_count, 2);
        assert_eq!(summary.total_failures, 2);
        assert_eq!(summary.mttr, 0.5);
        assert_eq!(summary.approved_count, 2);
        assert_eq!(summary.rejected_count, 0);
        // 仅 EQ-A 有 MTBF
        assert_eq!(summary.mtbf, reports[0].mtbf);
    }

    #[test]
    fn test_empty_portfolio() {
        let summary = ReliabilityReportAssembler::new().summarize_portfolio(&[]);
        assert_eq!(summary.mttr, 0.0);
        assert_eq!(summary.mtbf, None);
        assert_eq!(summary.mean_availability, 100.0);
    }
}
