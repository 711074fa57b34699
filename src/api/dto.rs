// ==========================================
// 设备可靠性分析 - API 请求/响应对象
// ==========================================
// 序列化: camelCase (与前端数据契约一致)
// ==========================================

use crate::domain::reliability::{AggregateReport, PortfolioSummary};
use crate::domain::types::{CriticalityFilter, LevelingStrategy};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 可靠性报告请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub equipment_ids: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub criticality_filter: CriticalityFilter,
}

/// 可靠性报告响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub reports: Vec<AggregateReport>,
    pub portfolio: PortfolioSummary,
}

/// 月度负荷响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyLoadResponse {
    pub year: i32,
    pub monthly_load: [u32; 12],
    pub capacity_limit: u32,
    /// 超过容量上限的月份 (0 = 一月)
    pub overloaded_months: Vec<u32>,
}

/// 均衡模拟请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelingRequest {
    pub year: i32,
    pub strategy: LevelingStrategy,
}
