// ==========================================
// 设备可靠性分析 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、派生视图
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod data_quality;
pub mod equipment;
pub mod leveling;
pub mod reliability;
pub mod snapshot;
pub mod types;
pub mod work_order;

// 重导出核心类型
pub use data_quality::{DqLevel, DqReport, DqSummary, DqViolation};
pub use equipment::Equipment;
pub use leveling::{EquipmentPlan, LevelingProposal, TaskMove};
pub use reliability::{
    AggregateReport, EquipmentMetrics, MonthlyMetric, PortfolioSummary, RangeTotals,
    RecurrentFailure, COMPLIANCE_MTTR_THRESHOLD_H,
};
pub use snapshot::MaintenanceSnapshot;
pub use types::{
    ComplianceFlag, ComplianceStatus, CriticalityFilter, EquipmentCategory, LevelingStrategy,
    WorkOrderStatus, WorkOrderType,
};
pub use work_order::WorkOrder;
