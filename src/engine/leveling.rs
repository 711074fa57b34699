// ==========================================
// 设备可靠性分析 - 预防性维修负荷均衡模拟
// ==========================================
// 职责: 月度负荷统计 + 过载月份任务顺延模拟
// 输入: 调用方提供的设备计划快照
// 输出: LevelingProposal (深拷贝 + 改动, 未提交)
// 红线: 永不修改调用方快照; 关键设备任务永不改期
// 范围: 仅处理固定目标月 (一月), 不做多月份再平衡
// ==========================================

use crate::config::engine_config::DEFAULT_MONTHLY_CAPACITY_LIMIT;
use crate::config::EngineConfig;
use crate::domain::equipment::Equipment;
use crate::domain::leveling::{EquipmentPlan, LevelingProposal, TaskMove};
use crate::domain::types::LevelingStrategy;
use crate::domain::work_order::WorkOrder;
use chrono::{Datelike, Months};
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::{info, instrument, warn};

/// 均衡目标月 (0 = 一月)
pub const TARGET_MONTH_INDEX: u32 = 0;

// ==========================================
// LevelingError - 均衡模拟错误
// ==========================================
// 提案可能成为新的主数据, 快照异常必须显式失败
#[derive(Error, Debug, PartialEq)]
pub enum LevelingError {
    #[error("快照结构异常: 任务 {task_id} 属于设备 {task_equipment_id}, 却出现在设备 {plan_equipment_id} 的计划中")]
    MisplacedTask {
        task_id: String,
        task_equipment_id: String,
        plan_equipment_id: String,
    },

    #[error("快照结构异常: 设备ID重复: {0}")]
    DuplicateEquipment(String),

    #[error("日期顺延越界: task_id={task_id}, offset_months={offset_months}")]
    DateOutOfRange { task_id: String, offset_months: u32 },

    #[error("提案提交被拒绝: {0}")]
    CommitRejected(String),
}

// ==========================================
// CommitGate - 提案提交授权
// ==========================================
// 管理员口令等审批流程由调用方实现
pub trait CommitGate {
    /// 授权提交; 拒绝时返回原因
    fn authorize(&self, proposal: &LevelingProposal) -> Result<(), String>;
}

impl LevelingProposal {
    /// 经授权后取出待落库的计划快照
    pub fn commit<G: CommitGate + ?Sized>(
        self,
        gate: &G,
    ) -> Result<Vec<EquipmentPlan>, LevelingError> {
        gate.authorize(&self)
            .map_err(LevelingError::CommitRejected)?;
        info!(
            year = self.year,
            strategy = %self.strategy,
            moves = self.moves.len(),
            "均衡提案已授权提交"
        );
        Ok(self.plans)
    }
}

// ==========================================
// LoadLevelingSimulator - 负荷均衡模拟器
// ==========================================
#[derive(Debug, Clone)]
pub struct LoadLevelingSimulator {
    capacity_limit: u32,
}

impl Default for LoadLevelingSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadLevelingSimulator {
    pub fn new() -> Self {
        Self {
            capacity_limit: DEFAULT_MONTHLY_CAPACITY_LIMIT,
        }
    }

    pub fn with_capacity_limit(capacity_limit: u32) -> Self {
        Self { capacity_limit }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_capacity_limit(config.monthly_capacity_limit)
    }

    pub fn capacity_limit(&self) -> u32 {
        self.capacity_limit
    }

    // ==========================================
    // 月度负荷
    // ==========================================

    /// 月度负荷: 指定年份各月 已排期 的 预防性/预测性 任务数
    pub fn monthly_load(&self, plans: &[EquipmentPlan], year: i32) -> [u32; 12] {
        let mut load = [0u32; 12];
        for task in plans.iter().flat_map(|p| p.tasks.iter()) {
            if !task.is_scheduled() || !task.order_type.counts_toward_load() {
                continue;
            }
            let day = task.scheduled_day();
            if day.year() == year {
                load[day.month0() as usize] += 1;
            }
        }
        load
    }

    // ==========================================
    // 均衡模拟
    // ==========================================

    /// 模拟顺延目标月的排期任务
    ///
    /// 规则:
    /// 1) 目标月负荷未超过容量上限 → 原样返回 (无改动)
    /// 2) 仅非关键设备参与
    /// 3) 计数器跨设备共享, 每台有目标月排期任务的设备 +1
    ///    offset = counter mod (3 × shift_factor) + 1
    /// 4) 该设备目标月内全部排期任务整体顺延 offset 个月
    #[instrument(skip(self, plans), fields(plans = plans.len(), capacity_limit = self.capacity_limit))]
    pub fn simulate(
        &self,
        plans: &[EquipmentPlan],
        year: i32,
        strategy: LevelingStrategy,
    ) -> Result<LevelingProposal, LevelingError> {
        validate_snapshot(plans)?;

        let load_before = self.monthly_load(plans, year);
        let mut proposed = plans.to_vec();
        let mut moves = Vec::new();

        let target_load = load_before[TARGET_MONTH_INDEX as usize];
        if target_load > self.capacity_limit {
            let modulus = 3 * strategy.shift_factor();
            let mut counter: u32 = 0;

            for plan in proposed.iter_mut().filter(|p| !p.equipment.is_critical) {
                let targets: Vec<usize> = plan
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| is_in_target_month(t, year))
                    .map(|(i, _)| i)
                    .collect();
                if targets.is_empty() {
                    continue;
                }

                let offset = counter % modulus + 1;
                counter += 1;

                for index in targets {
                    let task = &mut plan.tasks[index];
                    moves.push(shift_task(task, offset)?);
                }
            }
        } else {
            info!(target_load, "目标月未过载, 无需均衡");
        }

        let load_after = self.monthly_load(&proposed, year);
        info!(moves = moves.len(), ?load_before, ?load_after, "均衡模拟完成");

        Ok(LevelingProposal {
            year,
            strategy,
            target_month_index: TARGET_MONTH_INDEX,
            capacity_limit: self.capacity_limit,
            load_before,
            load_after,
            moves,
            plans: proposed,
        })
    }
}

/// 按设备归集工单, 构造均衡快照 (设备顺序保持不变)
///
/// 找不到设备的工单被丢弃并记录告警
pub fn group_into_plans(equipment: &[Equipment], work_orders: &[WorkOrder]) -> Vec<EquipmentPlan> {
    let mut tasks_by_equipment: HashMap<&str, Vec<WorkOrder>> = HashMap::new();
    for order in work_orders {
        tasks_by_equipment
            .entry(order.equipment_id.as_str())
            .or_default()
            .push(order.clone());
    }

    let plans: Vec<EquipmentPlan> = equipment
        .iter()
        .map(|e| EquipmentPlan {
            equipment: e.clone(),
            tasks: tasks_by_equipment.remove(e.id.as_str()).unwrap_or_default(),
        })
        .collect();

    let orphaned: usize = tasks_by_equipment.values().map(Vec::len).sum();
    if orphaned > 0 {
        warn!(orphaned, "部分工单找不到对应设备, 未纳入均衡快照");
    }
    plans
}

fn is_in_target_month(task: &WorkOrder, year: i32) -> bool {
    let day = task.scheduled_day();
    task.is_scheduled() && day.year() == year && day.month0() == TARGET_MONTH_INDEX
}

/// 任务整体顺延 offset 个月 (月末日期自动截断, 跨年进入下一年)
fn shift_task(task: &mut WorkOrder, offset: u32) -> Result<TaskMove, LevelingError> {
    let out_of_range = || LevelingError::DateOutOfRange {
        task_id: task.id.clone(),
        offset_months: offset,
    };

    let from = task.scheduled_date;
    let to = from
        .checked_add_months(Months::new(offset))
        .ok_or_else(out_of_range)?;
    let delta = to - from;

    let end_date = match task.end_date {
        Some(end) => Some(end.checked_add_signed(delta).ok_or_else(out_of_range)?),
        None => None,
    };

    task.scheduled_date = to;
    task.end_date = end_date;

    Ok(TaskMove {
        task_id: task.id.clone(),
        equipment_id: task.equipment_id.clone(),
        from_date: from.date_naive(),
        to_date: to.date_naive(),
        offset_months: offset,
    })
}

fn validate_snapshot(plans: &[EquipmentPlan]) -> Result<(), LevelingError> {
    let mut seen = HashSet::new();
    for plan in plans {
        if !seen.insert(plan.equipment.id.as_str()) {
            return Err(LevelingError::DuplicateEquipment(plan.equipment.id.clone()));
        }
        if let Some(task) = plan.tasks.iter().find(|t| t.equipment_id != plan.equipment.id) {
            return Err(LevelingError::MisplacedTask {
                task_id: task.id.clone(),
                task_equipment_id: task.equipment_id.clone(),
                plan_equipment_id: plan.equipment.id.clone(),
            });
        }
    }
    Ok(())
}
