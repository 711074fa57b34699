// ==========================================
// 设备可靠性分析 - 引擎参数
// ==========================================
// 职责: 引擎运行所需参数的强类型视图 (由 ConfigManager 产出)
// ==========================================

use serde::{Deserialize, Serialize};

/// 工作日生产小时数默认值
pub const DEFAULT_PRODUCTIVE_HOURS_PER_DAY: f64 = 10.0;

/// 重复故障判定阈值默认值(同一故障分类出现次数)
pub const DEFAULT_RECURRENCE_THRESHOLD: u32 = 3;

/// 月度预防性任务容量上限默认值
pub const DEFAULT_MONTHLY_CAPACITY_LIMIT: u32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// 周一至周五每日生产小时数
    pub productive_hours_per_day: f64,

    /// 同一故障分类达到该次数即标记为重复故障
    pub recurrence_threshold: u32,

    /// 月度负荷超过该值视为过载
    pub monthly_capacity_limit: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            productive_hours_per_day: DEFAULT_PRODUCTIVE_HOURS_PER_DAY,
            recurrence_threshold: DEFAULT_RECURRENCE_THRESHOLD,
            monthly_capacity_limit: DEFAULT_MONTHLY_CAPACITY_LIMIT,
        }
    }
}
