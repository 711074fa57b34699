// ==========================================
// 设备可靠性分析 - 核心库
// ==========================================
// 系统定位: 维修工单 → 可靠性 KPI (MTBF/MTTR/可用率)
//           + 预防性维修负荷均衡模拟 (仅生成提案)
// 红线: 引擎纯函数、无 I/O、相同输入必得相同输出
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 计算规则
pub mod engine;

// 导入层 - 快照文件
pub mod importer;

// 配置层 - 引擎参数
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 请求/响应接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    ComplianceFlag, ComplianceStatus, CriticalityFilter, EquipmentCategory, LevelingStrategy,
    WorkOrderStatus, WorkOrderType,
};

// 领域实体
pub use domain::{
    AggregateReport, DqReport, Equipment, EquipmentPlan, LevelingProposal, MaintenanceSnapshot,
    MonthlyMetric, PortfolioSummary, RecurrentFailure, WorkOrder,
};

// 引擎
pub use engine::{
    CommitGate, DataQualityScanner, EquipmentMetricsCalculator, LevelingError,
    LoadLevelingSimulator, OperationalCalendar, ReliabilityReportAssembler,
};

// API
pub use api::{ApiError, ApiResult, ReliabilityApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "设备可靠性分析";
