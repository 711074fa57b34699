// ==========================================
// 设备可靠性分析 - 可靠性指标视图
// ==========================================
// 职责: 月度指标 / 区间汇总 / 单设备报告 / 设备群汇总
// 生命周期: 每次调用按快照重新计算, 不持久化
// ==========================================

use crate::domain::types::{ComplianceFlag, ComplianceStatus};
use serde::{Deserialize, Serialize};

/// MTTR 合规阈值(小时), 边界含等号
pub const COMPLIANCE_MTTR_THRESHOLD_H: f64 = 1.0;

// ==========================================
// MonthlyMetric - 月度指标
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyMetric {
    pub month_index: u32,      // 0 = 一月
    pub mtbf: Option<f64>,     // 无故障时为 None (不是 NaN)
    pub mttr: f64,             // 无故障时为 0
    pub availability: f64,     // 固有可用率 [0, 100]
    pub failure_count: u32,
    pub corrective_hours: f64,
    pub compliance_flag: ComplianceFlag,
}

// ==========================================
// RangeTotals - 查询区间汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeTotals {
    pub gross_hours: f64,
    pub failure_count: u32,
    pub corrective_hours: f64,
    pub planned_hours: f64,
    pub total_downtime_hours: f64,
    pub mttr: f64,
    pub mtbf: Option<f64>,
    pub availability: f64,        // 固有可用率 (仅扣除故障停机)
    pub global_availability: f64, // 运行可用率 (扣除全部停机)
    pub compliance_status: ComplianceStatus,
}

/// 单设备计算结果 (12 个月 + 区间汇总)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentMetrics {
    pub monthly_history: Vec<MonthlyMetric>,
    pub totals: RangeTotals,
}

// ==========================================
// RecurrentFailure - 重复故障标记
// ==========================================
// 仅为升级提示, 不参与 KPI 公式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrentFailure {
    pub category: String,
    pub count: u32,
}

// ==========================================
// AggregateReport - 单设备可靠性报告
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateReport {
    // ===== 设备元数据 =====
    pub equipment_id: String,
    pub equipment_name: String,
    pub is_critical: bool,

    // ===== 区间 KPI =====
    pub mttr: f64,
    pub mtbf: Option<f64>,
    pub availability: f64,
    pub global_availability: f64,
    pub total_failures: u32,
    pub total_corrective_hours: f64,

    pub monthly_history: Vec<MonthlyMetric>,
    pub compliance_status: ComplianceStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrent_failure: Option<RecurrentFailure>,
}

// ==========================================
// PortfolioSummary - 设备群汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub equipment_count: usize,
    pub total_failures: u32,
    pub total_corrective_hours: f64,
    pub mttr: f64,
    pub mtbf: Option<f64>,
    pub mean_availability: f64,
    pub mean_global_availability: f64,
    pub approved_count: usize,
    pub rejected_count: usize,
    pub recurrent_flag_count: usize,
}
