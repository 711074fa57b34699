// ==========================================
// 设备可靠性分析 - 工单数据质量扫描
// ==========================================
// 职责: 暴露计算器容忍的数据质量问题, 不影响 KPI 计算
// 规则:
//   ERROR   - 工单找不到所属设备
//   WARNING - 已执行工单缺少结束时间 (按零停机计算)
//   WARNING - 结束时间早于排期时间 (按零停机计算)
//   INFO    - 已执行故障工单缺少故障分类 (无法参与重复故障检测)
// ==========================================

use crate::domain::data_quality::{DqLevel, DqReport, DqSummary, DqViolation};
use crate::domain::equipment::Equipment;
use crate::domain::work_order::WorkOrder;
use std::collections::HashSet;
use tracing::instrument;

#[derive(Debug, Clone, Default)]
pub struct DataQualityScanner;

impl DataQualityScanner {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip_all, fields(equipment = equipment.len(), orders = work_orders.len()))]
    pub fn scan(&self, equipment: &[Equipment], work_orders: &[WorkOrder]) -> DqReport {
        let known: HashSet<&str> = equipment.iter().map(|e| e.id.as_str()).collect();
        let mut violations = Vec::new();

        for order in work_orders {
            if !known.contains(order.equipment_id.as_str()) {
                violations.push(violation(
                    order,
                    DqLevel::Error,
                    "equipmentId",
                    format!("设备不存在: {}", order.equipment_id),
                ));
            }

            if !order.is_executed() {
                continue;
            }

            match order.end_date {
                None => violations.push(violation(
                    order,
                    DqLevel::Warning,
                    "endDate",
                    "已执行工单缺少结束时间, 按零停机计算".to_string(),
                )),
                Some(end) if end < order.scheduled_date => violations.push(violation(
                    order,
                    DqLevel::Warning,
                    "endDate",
                    format!("结束时间早于排期时间: {} < {}", end, order.scheduled_date),
                )),
                Some(_) => {}
            }

            if order.is_failure() && order.failure_category().is_none() {
                violations.push(violation(
                    order,
                    DqLevel::Info,
                    "correctiveCategory",
                    "故障工单缺少故障分类".to_string(),
                ));
            }
        }

        let count = |level: DqLevel| violations.iter().filter(|v| v.level == level).count();
        let summary = DqSummary {
            total_orders: work_orders.len(),
            error: count(DqLevel::Error),
            warning: count(DqLevel::Warning),
            info: count(DqLevel::Info),
        };

        DqReport {
            summary,
            violations,
        }
    }
}

fn violation(order: &WorkOrder, level: DqLevel, field: &str, message: String) -> DqViolation {
    DqViolation {
        work_order_id: order.id.clone(),
        equipment_id: order.equipment_id.clone(),
        level,
        field: field.to_string(),
        message,
    }
}
