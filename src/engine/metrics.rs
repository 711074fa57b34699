// ==========================================
// 设备可靠性分析 - 设备指标计算引擎
// ==========================================
// 职责: 单设备月度指标 (12 个月) + 查询区间汇总指标
// 输入: 设备 + 工单快照 + 查询区间
// 输出: EquipmentMetrics
// 红线: 零故障时 MTBF 为 None, MTTR 为 0; NaN/Infinity 不得外泄
// ==========================================

use crate::domain::equipment::Equipment;
use crate::domain::reliability::{
    EquipmentMetrics, MonthlyMetric, RangeTotals, COMPLIANCE_MTTR_THRESHOLD_H,
};
use crate::domain::types::{ComplianceFlag, ComplianceStatus, WorkOrderType};
use crate::domain::work_order::WorkOrder;
use crate::engine::calendar::OperationalCalendar;
use chrono::{Datelike, NaiveDate};
use tracing::{instrument, warn};

// ==========================================
// DowntimeBucket - 停机累加器
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct DowntimeBucket {
    failure_count: u32,
    corrective_hours: f64,
    planned_hours: f64,
    total_hours: f64,
}

impl DowntimeBucket {
    /// 累加一张已执行工单
    fn add(&mut self, order: &WorkOrder) {
        let hours = order.duration_hours();
        if order.order_type == WorkOrderType::Corrective {
            self.failure_count += 1;
            self.corrective_hours += hours;
        } else if order.order_type.is_planned() {
            self.planned_hours += hours;
        }
        self.total_hours += hours;
    }
}

// ==========================================
// EquipmentMetricsCalculator - 设备指标计算引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct EquipmentMetricsCalculator {
    calendar: OperationalCalendar,
}

impl EquipmentMetricsCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_calendar(calendar: OperationalCalendar) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &OperationalCalendar {
        &self.calendar
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算单设备指标
    ///
    /// - 月度历史: 报告年 (range_start 所在年) 的 12 个自然月, 与查询区间无关
    /// - 区间汇总: 排期日期落在 [range_start, range_end] 的已执行工单
    ///
    /// range_start > range_end 时区间汇总为零值 (可用率 100), 不报错
    #[instrument(skip_all, fields(
        equipment_id = %equipment.id,
        orders = work_orders.len(),
        %range_start,
        %range_end
    ))]
    pub fn compute_for_equipment(
        &self,
        equipment: &Equipment,
        work_orders: &[WorkOrder],
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> EquipmentMetrics {
        if range_start > range_end {
            warn!("查询区间起始晚于结束, 区间汇总按零值返回");
        }

        let executed: Vec<&WorkOrder> = work_orders
            .iter()
            .filter(|o| o.equipment_id == equipment.id && o.is_executed())
            .collect();

        let monthly_history = self.monthly_history(&executed, range_start.year());
        let totals = self.range_totals(&executed, range_start, range_end);

        EquipmentMetrics {
            monthly_history,
            totals,
        }
    }

    /// 报告年的 12 个月度指标
    fn monthly_history(&self, executed: &[&WorkOrder], year: i32) -> Vec<MonthlyMetric> {
        let mut buckets = [DowntimeBucket::default(); 12];
        for order in executed {
            let day = order.scheduled_day();
            if day.year() == year {
                buckets[day.month0() as usize].add(order);
            }
        }

        buckets
            .iter()
            .enumerate()
            .map(|(index, bucket)| {
                let month_index = index as u32;
                let gross_hours = self.calendar.productive_hours_in_month(year, month_index + 1);
                let mttr = mean_time_to_repair(bucket.corrective_hours, bucket.failure_count);

                MonthlyMetric {
                    month_index,
                    mtbf: mean_time_between_failures(
                        gross_hours,
                        bucket.corrective_hours,
                        bucket.failure_count,
                    ),
                    mttr,
                    availability: availability_pct(gross_hours, bucket.corrective_hours),
                    failure_count: bucket.failure_count,
                    corrective_hours: bucket.corrective_hours,
                    compliance_flag: compliance_flag(mttr),
                }
            })
            .collect()
    }

    /// 查询区间汇总
    fn range_totals(
        &self,
        executed: &[&WorkOrder],
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> RangeTotals {
        let mut bucket = DowntimeBucket::default();
        for order in executed
            .iter()
            .filter(|o| o.scheduled_within(range_start, range_end))
        {
            bucket.add(order);
        }

        let gross_hours = self.calendar.total_productive_hours(range_start, range_end);
        let mttr = mean_time_to_repair(bucket.corrective_hours, bucket.failure_count);

        RangeTotals {
            gross_hours,
            failure_count: bucket.failure_count,
            corrective_hours: bucket.corrective_hours,
            planned_hours: bucket.planned_hours,
            total_downtime_hours: bucket.total_hours,
            mttr,
            mtbf: mean_time_between_failures(
                gross_hours,
                bucket.corrective_hours,
                bucket.failure_count,
            ),
            availability: availability_pct(gross_hours, bucket.corrective_hours),
            global_availability: availability_pct(gross_hours, bucket.total_hours),
            compliance_status: compliance_status(mttr),
        }
    }
}

// ==========================================
// 指标公式 (零除保护)
// ==========================================

/// MTTR = 故障停机 / 故障次数; 无故障为 0
pub fn mean_time_to_repair(corrective_hours: f64, failure_count: u32) -> f64 {
    if failure_count == 0 {
        return 0.0;
    }
    finite_or(corrective_hours / failure_count as f64, 0.0)
}

/// MTBF = (毛时 - 故障停机) / 故障次数; 无故障为 None, 下限 0
pub fn mean_time_between_failures(
    gross_hours: f64,
    corrective_hours: f64,
    failure_count: u32,
) -> Option<f64> {
    if failure_count == 0 {
        return None;
    }
    let mtbf = (gross_hours - corrective_hours) / failure_count as f64;
    Some(finite_or(mtbf, 0.0).max(0.0))
}

/// 可用率 = (毛时 - 停机) / 毛时 × 100; 毛时为 0 时为 100, 结果截断到 [0, 100]
pub fn availability_pct(gross_hours: f64, downtime_hours: f64) -> f64 {
    if gross_hours <= 0.0 {
        return 100.0;
    }
    let pct = (gross_hours - downtime_hours) / gross_hours * 100.0;
    finite_or(pct, 100.0).clamp(0.0, 100.0)
}

/// 月度合规: MTTR ≤ 1.0h 为 OK
pub fn compliance_flag(mttr: f64) -> ComplianceFlag {
    if mttr <= COMPLIANCE_MTTR_THRESHOLD_H {
        ComplianceFlag::Ok
    } else {
        ComplianceFlag::Alert
    }
}

/// 区间合规: MTTR ≤ 1.0h 为 Approved
pub fn compliance_status(mttr: f64) -> ComplianceStatus {
    if mttr <= COMPLIANCE_MTTR_THRESHOLD_H {
        ComplianceStatus::Approved
    } else {
        ComplianceStatus::Rejected
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}
