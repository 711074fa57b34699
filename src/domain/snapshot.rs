// ==========================================
// 设备可靠性分析 - 维修数据快照
// ==========================================
// 职责: 调用方一次性提供的设备 + 工单快照
// 红线: 每个请求使用自己的快照, 引擎不回写
// ==========================================

use crate::domain::equipment::Equipment;
use crate::domain::work_order::WorkOrder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceSnapshot {
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default)]
    pub work_orders: Vec<WorkOrder>,
}

impl MaintenanceSnapshot {
    pub fn new(equipment: Vec<Equipment>, work_orders: Vec<WorkOrder>) -> Self {
        Self {
            equipment,
            work_orders,
        }
    }

    /// 全部设备ID (保持顺序)
    pub fn equipment_ids(&self) -> Vec<String> {
        self.equipment.iter().map(|e| e.id.clone()).collect()
    }
}
