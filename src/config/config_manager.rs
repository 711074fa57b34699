// ==========================================
// 设备可靠性分析 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: 内存 key-value (可从 JSON 文件加载, 可导出快照)
// ==========================================

use crate::config::engine_config::{
    EngineConfig, DEFAULT_MONTHLY_CAPACITY_LIMIT, DEFAULT_PRODUCTIVE_HOURS_PER_DAY,
    DEFAULT_RECURRENCE_THRESHOLD,
};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置 JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("配置格式错误: 顶层必须是对象")]
    NotAnObject,

    #[error("配置项无效: key={key}, value={value}, reason={reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    entries: BTreeMap<String, String>,
}

impl ConfigManager {
    /// 创建空配置(全部取默认值)
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 字符串加载
    ///
    /// 顶层为对象; 值可以是字符串、数字或布尔, 统一按字符串存储
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(raw)?;
        let object = value.as_object().ok_or(ConfigError::NotAnObject)?;

        let mut entries = BTreeMap::new();
        for (key, v) in object {
            let text = match v {
                Value::String(s) => s.clone(),
                Value::Null => continue,
                other => other.to_string(),
            };
            entries.insert(key.clone(), text);
        }

        debug!(count = entries.len(), "配置已加载");
        Ok(Self { entries })
    }

    /// 从 JSON 文件加载
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let manager = Self::from_json_str(&raw)?;
        info!(path = %path.display(), "配置文件已加载");
        Ok(manager)
    }

    /// 覆写配置项
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.entries.insert(key.to_string(), value.into());
    }

    /// 读取配置值
    pub fn get_config_value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// 读取配置值，带默认值
    pub fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_config_value(key)
            .map(str::to_string)
            .unwrap_or_else(|| default.to_string())
    }

    /// 获取所有配置的快照（JSON格式, 按 key 排序）
    pub fn get_config_snapshot(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// 从快照恢复配置(整体替换)
    pub fn restore_from_snapshot(&mut self, snapshot: &str) -> Result<usize, ConfigError> {
        let restored = Self::from_json_str(snapshot)?;
        self.entries = restored.entries;
        Ok(self.entries.len())
    }

    // ==========================================
    // 强类型读取
    // ==========================================

    /// 工作日生产小时数, 取值 (0, 24]
    pub fn get_productive_hours_per_day(&self) -> Result<f64, ConfigError> {
        let key = config_keys::PRODUCTIVE_HOURS_PER_DAY;
        let raw = self.get_config_or_default(key, &DEFAULT_PRODUCTIVE_HOURS_PER_DAY.to_string());
        let hours: f64 = raw.trim().parse().map_err(|_| invalid(key, &raw, "不是数字"))?;
        if !hours.is_finite() || hours <= 0.0 || hours > 24.0 {
            return Err(invalid(key, &raw, "必须在 (0, 24] 范围内"));
        }
        Ok(hours)
    }

    /// 重复故障阈值, 至少为 1
    pub fn get_recurrence_threshold(&self) -> Result<u32, ConfigError> {
        let key = config_keys::RECURRENCE_THRESHOLD;
        let raw = self.get_config_or_default(key, &DEFAULT_RECURRENCE_THRESHOLD.to_string());
        let threshold: u32 = raw.trim().parse().map_err(|_| invalid(key, &raw, "不是正整数"))?;
        if threshold == 0 {
            return Err(invalid(key, &raw, "必须大于 0"));
        }
        Ok(threshold)
    }

    /// 月度容量上限
    pub fn get_monthly_capacity_limit(&self) -> Result<u32, ConfigError> {
        let key = config_keys::MONTHLY_CAPACITY_LIMIT;
        let raw = self.get_config_or_default(key, &DEFAULT_MONTHLY_CAPACITY_LIMIT.to_string());
        raw.trim()
            .parse()
            .map_err(|_| invalid(key, &raw, "不是非负整数"))
    }

    /// 组装引擎参数
    pub fn load_engine_config(&self) -> Result<EngineConfig, ConfigError> {
        Ok(EngineConfig {
            productive_hours_per_day: self.get_productive_hours_per_day()?,
            recurrence_threshold: self.get_recurrence_threshold()?,
            monthly_capacity_limit: self.get_monthly_capacity_limit()?,
        })
    }
}

fn invalid(key: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 运行日历
    pub const PRODUCTIVE_HOURS_PER_DAY: &str = "productive_hours_per_day";

    // 重复故障
    pub const RECURRENCE_THRESHOLD: &str = "recurrence_threshold";

    // 负荷均衡
    pub const MONTHLY_CAPACITY_LIMIT: &str = "monthly_capacity_limit";
}
