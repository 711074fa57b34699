// ==========================================
// 设备可靠性分析 - 引擎层
// ==========================================
// 职责: 实现可靠性计算与负荷均衡规则
// 红线: 引擎无 I/O、无共享可变状态; 相同输入必得相同输出
// ==========================================

pub mod calendar;
pub mod data_quality;
pub mod leveling;
pub mod metrics;
pub mod report;

// 重导出核心引擎
pub use calendar::{month_bounds, OperationalCalendar};
pub use data_quality::DataQualityScanner;
pub use leveling::{
    group_into_plans, CommitGate, LevelingError, LoadLevelingSimulator, TARGET_MONTH_INDEX,
};
pub use metrics::EquipmentMetricsCalculator;
pub use report::ReliabilityReportAssembler;
