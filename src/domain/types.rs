// ==========================================
// 设备可靠性分析 - 领域类型定义
// ==========================================
// 职责: 设备类别、工单类型/状态、合规标记、筛选与均衡策略
// 序列化格式: 实体枚举使用 SCREAMING_SNAKE_CASE (与快照一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 设备类别 (Equipment Category)
// ==========================================
// 红线: FACILITY 为非生产设施, 永不参与可靠性 KPI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EquipmentCategory {
    Production, // 生产设备
    Utility,    // 公用工程
    Facility,   // 厂房设施(非生产)
    #[serde(other)]
    Other,
}

impl EquipmentCategory {
    /// 是否为非生产设施
    pub fn is_facility(&self) -> bool {
        matches!(self, EquipmentCategory::Facility)
    }

    /// 从字符串解析类别(宽松)
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "PRODUCTION" => EquipmentCategory::Production,
            "UTILITY" => EquipmentCategory::Utility,
            "FACILITY" => EquipmentCategory::Facility,
            _ => EquipmentCategory::Other,
        }
    }
}

impl fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquipmentCategory::Production => write!(f, "PRODUCTION"),
            EquipmentCategory::Utility => write!(f, "UTILITY"),
            EquipmentCategory::Facility => write!(f, "FACILITY"),
            EquipmentCategory::Other => write!(f, "OTHER"),
        }
    }
}

// ==========================================
// 工单类型 (Work Order Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkOrderType {
    Preventive,     // 预防性
    Predictive,     // 预测性
    Corrective,     // 纠正性(故障)
    Overhaul,       // 大修
    PeriodicReview, // 定期检修
    #[serde(other)]
    Other,
}

impl WorkOrderType {
    /// 计划性停机类型(计入计划停机, 不计入故障)
    pub fn is_planned(&self) -> bool {
        matches!(
            self,
            WorkOrderType::Preventive
                | WorkOrderType::Predictive
                | WorkOrderType::Overhaul
                | WorkOrderType::PeriodicReview
        )
    }

    /// 参与月度负荷统计的类型
    pub fn counts_toward_load(&self) -> bool {
        matches!(self, WorkOrderType::Preventive | WorkOrderType::Predictive)
    }

    /// 从字符串解析工单类型(宽松)
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_uppercase().replace(['-', ' '], "_").as_str() {
            "PREVENTIVE" => WorkOrderType::Preventive,
            "PREDICTIVE" => WorkOrderType::Predictive,
            "CORRECTIVE" => WorkOrderType::Corrective,
            "OVERHAUL" => WorkOrderType::Overhaul,
            "PERIODIC_REVIEW" => WorkOrderType::PeriodicReview,
            _ => WorkOrderType::Other,
        }
    }
}

impl fmt::Display for WorkOrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkOrderType::Preventive => write!(f, "PREVENTIVE"),
            WorkOrderType::Predictive => write!(f, "PREDICTIVE"),
            WorkOrderType::Corrective => write!(f, "CORRECTIVE"),
            WorkOrderType::Overhaul => write!(f, "OVERHAUL"),
            WorkOrderType::PeriodicReview => write!(f, "PERIODIC_REVIEW"),
            WorkOrderType::Other => write!(f, "OTHER"),
        }
    }
}

// ==========================================
// 工单状态 (Work Order Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkOrderStatus {
    Scheduled,  // 已排期
    Executed,   // 已执行
    Delayed,    // 已延期
    InProgress, // 执行中
    Cancelled,  // 已取消
    #[serde(other)]
    Other,
}

impl WorkOrderStatus {
    /// 从字符串解析工单状态(宽松)
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_uppercase().replace(['-', ' '], "_").as_str() {
            "SCHEDULED" => WorkOrderStatus::Scheduled,
            "EXECUTED" => WorkOrderStatus::Executed,
            "DELAYED" => WorkOrderStatus::Delayed,
            "IN_PROGRESS" => WorkOrderStatus::InProgress,
            "CANCELLED" => WorkOrderStatus::Cancelled,
            _ => WorkOrderStatus::Other,
        }
    }
}

impl fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkOrderStatus::Scheduled => write!(f, "SCHEDULED"),
            WorkOrderStatus::Executed => write!(f, "EXECUTED"),
            WorkOrderStatus::Delayed => write!(f, "DELAYED"),
            WorkOrderStatus::InProgress => write!(f, "IN_PROGRESS"),
            WorkOrderStatus::Cancelled => write!(f, "CANCELLED"),
            WorkOrderStatus::Other => write!(f, "OTHER"),
        }
    }
}

// ==========================================
// 月度合规标记 (Compliance Flag)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceFlag {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "ALERT")]
    Alert,
}

impl fmt::Display for ComplianceFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceFlag::Ok => write!(f, "OK"),
            ComplianceFlag::Alert => write!(f, "ALERT"),
        }
    }
}

// ==========================================
// 区间合规结论 (Compliance Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceStatus {
    Approved,
    Rejected,
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceStatus::Approved => write!(f, "Approved"),
            ComplianceStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

// ==========================================
// 关键性筛选 (Criticality Filter)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriticalityFilter {
    #[default]
    All,
    CriticalOnly,
    NonCriticalOnly,
}

impl CriticalityFilter {
    /// 设备是否通过筛选
    pub fn accepts(&self, is_critical: bool) -> bool {
        match self {
            CriticalityFilter::All => true,
            CriticalityFilter::CriticalOnly => is_critical,
            CriticalityFilter::NonCriticalOnly => !is_critical,
        }
    }
}

impl fmt::Display for CriticalityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriticalityFilter::All => write!(f, "all"),
            CriticalityFilter::CriticalOnly => write!(f, "critical_only"),
            CriticalityFilter::NonCriticalOnly => write!(f, "non_critical_only"),
        }
    }
}

// ==========================================
// 负荷均衡策略 (Leveling Strategy)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelingStrategy {
    Gentle,     // 温和: 顺延 1~3 个月
    Aggressive, // 激进: 顺延 1~6 个月
}

impl LevelingStrategy {
    /// 顺延倍数
    pub fn shift_factor(&self) -> u32 {
        match self {
            LevelingStrategy::Gentle => 1,
            LevelingStrategy::Aggressive => 2,
        }
    }
}

impl fmt::Display for LevelingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelingStrategy::Gentle => write!(f, "gentle"),
            LevelingStrategy::Aggressive => write!(f, "aggressive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planned_types() {
        assert!(WorkOrderType::Preventive.is_planned());
        assert!(WorkOrderType::PeriodicReview.is_planned());
        assert!(!WorkOrderType::Corrective.is_planned());
        assert!(!WorkOrderType::Other.is_planned());
    }

    #[test]
    fn test_unknown_enum_values_fall_back_to_other() {
        let t: WorkOrderType = serde_json::from_str("\"LUBRICATION\"").unwrap();
        assert_eq!(t, WorkOrderType::Other);
        let s: WorkOrderStatus = serde_json::from_str("\"ON_HOLD\"").unwrap();
        assert_eq!(s, WorkOrderStatus::Other);
        assert_eq!(WorkOrderType::from_str("periodic review"), WorkOrderType::PeriodicReview);
    }

    #[test]
    fn test_criticality_filter() {
        assert!(CriticalityFilter::All.accepts(true));
        assert!(CriticalityFilter::CriticalOnly.accepts(true));
        assert!(!CriticalityFilter::CriticalOnly.accepts(false));
        assert!(CriticalityFilter::NonCriticalOnly.accepts(false));
    }

    #[test]
    fn test_compliance_serialization() {
        assert_eq!(serde_json::to_string(&ComplianceFlag::Alert).unwrap(), "\"ALERT\"");
        assert_eq!(
            serde_json::to_string(&ComplianceStatus::Approved).unwrap(),
            "\"Approved\""
        );
        let strategy: LevelingStrategy = serde_json::from_str("\"aggressive\"").unwrap();
        assert_eq!(strategy.shift_factor(), 2);
    }
}
