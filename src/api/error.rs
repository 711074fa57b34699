// ==========================================
// 设备可靠性分析 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，将引擎/导入/配置错误转换为调用方可读的错误消息
// 红线: 只读报表路径降级返回, 均衡提案路径显式失败
// ==========================================

use crate::config::ConfigError;
use crate::engine::LevelingError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 请求错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("请求解析失败: {0}")]
    RequestParseError(String),

    // ==========================================
    // 均衡提案错误
    // ==========================================
    #[error("快照结构异常: {0}")]
    InconsistentSnapshot(String),

    #[error("提案提交被拒绝: {0}")]
    CommitRejected(String),

    #[error("任务日期顺延越界: {0}")]
    DateShiftOutOfRange(String),

    // ==========================================
    // 外围错误
    // ==========================================
    #[error("快照导入失败: {0}")]
    ImportError(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),
}

// ==========================================
// 从 LevelingError 转换
// ==========================================
impl From<LevelingError> for ApiError {
    fn from(err: LevelingError) -> Self {
        match err {
            LevelingError::CommitRejected(reason) => ApiError::CommitRejected(reason),
            LevelingError::DateOutOfRange { .. } => ApiError::DateShiftOutOfRange(err.to_string()),
            other @ (LevelingError::MisplacedTask { .. } | LevelingError::DuplicateEquipment(_)) => {
                ApiError::InconsistentSnapshot(other.to_string())
            }
        }
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::ImportError(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::RequestParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
