// ==========================================
// 设备可靠性分析 - 数据质量模型
// ==========================================
// 职责: 计算器容忍但需要暴露的数据质量信号
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// DqLevel - 数据质量级别
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DqLevel {
    Info,    // 提示（仅记录）
    Warning, // 警告（按零停机计算）
    Error,   // 错误（工单无法归属设备）
}

// ==========================================
// DqViolation - 违规明细
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DqViolation {
    pub work_order_id: String,
    pub equipment_id: String,
    pub level: DqLevel,
    pub field: String,
    pub message: String,
}

// ==========================================
// DqSummary - 数据质量汇总
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DqSummary {
    pub total_orders: usize,
    pub error: usize,
    pub warning: usize,
    pub info: usize,
}

// ==========================================
// DqReport - 数据质量报告
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DqReport {
    pub summary: DqSummary,
    pub violations: Vec<DqViolation>,
}

impl DqReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}
