// ==========================================
// 设备可靠性分析 - 设备领域模型
// ==========================================
// 职责: 设备主数据 (调用方提供的只读快照)
// ==========================================

use crate::domain::types::EquipmentCategory;
use serde::{Deserialize, Serialize};

// ==========================================
// Equipment - 设备
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,                  // 设备ID
    pub name: String,                // 设备名称
    pub is_critical: bool,           // 关键设备(A类), 不参与自动改期
    pub category: EquipmentCategory, // 设备类别
}

impl Equipment {
    pub fn new(id: &str, name: &str, is_critical: bool, category: EquipmentCategory) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            is_critical,
            category,
        }
    }

    /// 是否参与可靠性 KPI (非生产设施除外)
    pub fn is_reliability_tracked(&self) -> bool {
        !self.category.is_facility()
    }
}
