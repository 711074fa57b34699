// ==========================================
// 设备可靠性分析 - 配置层
// ==========================================
// 职责: 系统配置管理,支持文件加载与覆写
// ==========================================

pub mod config_manager;
pub mod engine_config;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigError, ConfigManager};
pub use engine_config::EngineConfig;
