// ==========================================
// 设备可靠性分析 - 负荷均衡快照模型
// ==========================================
// 职责: 均衡模拟的输入单元 (设备 + 工单) 与提案输出
// 红线: 提案只是草稿, 调用方审批后才可落库
// ==========================================

use crate::domain::equipment::Equipment;
use crate::domain::types::LevelingStrategy;
use crate::domain::work_order::WorkOrder;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// EquipmentPlan - 单设备维修计划
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentPlan {
    pub equipment: Equipment,
    #[serde(default)]
    pub tasks: Vec<WorkOrder>,
}

// ==========================================
// TaskMove - 单个任务的改期记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskMove {
    pub task_id: String,
    pub equipment_id: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub offset_months: u32,
}

// ==========================================
// LevelingProposal - 均衡提案(未提交)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelingProposal {
    pub year: i32,
    pub strategy: LevelingStrategy,
    pub target_month_index: u32,
    pub capacity_limit: u32,
    pub load_before: [u32; 12],
    pub load_after: [u32; 12],
    pub moves: Vec<TaskMove>,
    pub plans: Vec<EquipmentPlan>,
}

impl LevelingProposal {
    /// 提案是否没有任何改动
    pub fn is_noop(&self) -> bool {
        self.moves.is_empty()
    }
}
