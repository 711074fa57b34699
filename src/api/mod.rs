// ==========================================
// 设备可靠性分析 - API 层
// ==========================================
// 职责: 请求校验 + 调用引擎 + 错误转换
// ==========================================

pub mod dto;
pub mod error;
pub mod reliability_api;

pub use dto::{LevelingRequest, MonthlyLoadResponse, ReportRequest, ReportResponse};
pub use error::{ApiError, ApiResult};
pub use reliability_api::ReliabilityApi;
