// ==========================================
// EquipmentMetricsCalculator 引擎集成测试
// ==========================================
// 测试目标: 验证月度/区间可靠性指标
// 覆盖范围: 零故障哨兵值、MTTR 精确值、合规边界、可用率口径
// ==========================================

mod helpers;

use chrono::NaiveDate;
use helpers::test_data_builder::*;
use maintenance_reliability::domain::types::{
    ComplianceFlag, ComplianceStatus, WorkOrderStatus, WorkOrderType,
};
use maintenance_reliability::engine::EquipmentMetricsCalculator;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_zero_failures_gives_zero_mttr_and_null_mtbf() {
    let calc = EquipmentMetricsCalculator::new();
    let equipment = EquipmentBuilder::new("EQ-05").build();
    let metrics = calc.compute_for_equipment(&equipment, &sample_history(), d(2024, 1, 1), d(2024, 12, 31));

    assert_eq!(metrics.totals.failure_count, 0);
    assert_eq!(metrics.totals.mttr, 0.0);
    assert_eq!(metrics.totals.mtbf, None);
    assert_eq!(metrics.monthly_history.len(), 12);
    for (index, month) in metrics.monthly_history.iter().enumerate() {
        assert_eq!(month.month_index, index as u32);
        assert_eq!(month.mtbf, None);
        assert_eq!(month.availability, 100.0);
        assert_eq!(month.compliance_flag, ComplianceFlag::Ok);
    }
}

#[test]
fn test_two_failures_three_and_one_hour() {
    let calc = EquipmentMetricsCalculator::new();
    let equipment = EquipmentBuilder::new("EQ-01").critical().build();
    let metrics = calc.compute_for_equipment(&equipment, &sample_history(), d(2024, 1, 1), d(2024, 12, 31));

    let march = &metrics.monthly_history[2];
    assert_eq!(march.failure_count, 2);
    assert_eq!(march.corrective_hours, 4.0);
    assert_eq!(march.mttr, 2.0);
    assert_eq!(march.compliance_flag, ComplianceFlag::Alert);

    // 预防性 6h 不影响固有可用率, 但计入运行可用率
    let totals = &metrics.totals;
    assert_eq!(totals.planned_hours, 6.0);
    assert_eq!(totals.total_downtime_hours, 10.0);
    assert_eq!(totals.gross_hours, 2620.0);
    assert_eq!(totals.availability, (2620.0 - 4.0) / 2620.0 * 100.0);
    assert_eq!(totals.global_availability, (2620.0 - 10.0) / 2620.0 * 100.0);
    assert_eq!(totals.mtbf, Some((2620.0 - 4.0) / 2.0));
    assert_eq!(totals.compliance_status, ComplianceStatus::Rejected);
}

#[test]
fn test_compliance_boundary_exactly_one_hour_is_approved() {
    let calc = EquipmentMetricsCalculator::new();
    let equipment = EquipmentBuilder::new("EQ-X").build();
    let orders = vec![
        failure("A", "EQ-X", 2024, 6, 3, 1.5),
        failure("B", "EQ-X", 2024, 6, 4, 0.5),
    ];
    let totals = calc
        .compute_for_equipment(&equipment, &orders, d(2024, 6, 1), d(2024, 6, 30))
        .totals;
    assert_eq!(totals.mttr, 1.0);
    assert_eq!(totals.compliance_status, ComplianceStatus::Approved);
}

#[test]
fn test_compliance_just_above_one_hour_is_rejected() {
    let calc = EquipmentMetricsCalculator::new();
    let equipment = EquipmentBuilder::new("EQ-X").build();
    // 60.6 分钟 = 1.01h
    let mut order = failure("A", "EQ-X", 2024, 6, 3, 1.0);
    order.end_date = Some(order.scheduled_date + chrono::Duration::seconds(3636));
    let totals = calc
        .compute_for_equipment(&equipment, &[order], d(2024, 6, 1), d(2024, 6, 30))
        .totals;
    assert_eq!(totals.mttr, 1.01);
    assert_eq!(totals.compliance_status, ComplianceStatus::Rejected);
}

#[test]
fn test_inverted_range_defaults_availability_to_hundred() {
    let calc = EquipmentMetricsCalculator::new();
    let equipment = EquipmentBuilder::new("EQ-01").build();
    let totals = calc
        .compute_for_equipment(&equipment, &sample_history(), d(2024, 12, 31), d(2024, 1, 1))
        .totals;
    assert_eq!(totals.gross_hours, 0.0);
    assert_eq!(totals.availability, 100.0);
    assert_eq!(totals.global_availability, 100.0);
    assert_eq!(totals.mtbf, None);
}

#[test]
fn test_range_totals_independent_of_monthly_history() {
    let calc = EquipmentMetricsCalculator::new();
    let equipment = EquipmentBuilder::new("EQ-01").build();
    // 区间只覆盖三月第一周
    let metrics = calc.compute_for_equipment(&equipment, &sample_history(), d(2024, 3, 4), d(2024, 3, 5));
    assert_eq!(metrics.totals.failure_count, 1);
    assert_eq!(metrics.totals.gross_hours, 20.0);
    // 月度历史仍覆盖全年
    assert_eq!(metrics.monthly_history[2].failure_count, 2);
}

#[test]
fn test_downtime_exceeding_gross_is_clamped() {
    let calc = EquipmentMetricsCalculator::new();
    let equipment = EquipmentBuilder::new("EQ-X").build();
    let orders = vec![failure("A", "EQ-X", 2024, 6, 3, 48.0)];
    let totals = calc
        .compute_for_equipment(&equipment, &orders, d(2024, 6, 3), d(2024, 6, 3))
        .totals;
    assert_eq!(totals.availability, 0.0);
    assert_eq!(totals.mtbf, Some(0.0));
}

#[test]
fn test_orders_of_other_equipment_and_statuses_are_ignored() {
    let calc = EquipmentMetricsCalculator::new();
    let equipment = EquipmentBuilder::new("EQ-X").build();
    let orders = vec![
        failure("A", "EQ-Y", 2024, 6, 3, 2.0),
        WorkOrderBuilder::new("B", "EQ-X")
            .order_type(WorkOrderType::Corrective)
            .status(WorkOrderStatus::Cancelled)
            .scheduled(2024, 6, 4)
            .hours(2.0)
            .build(),
    ];
    let totals = calc
        .compute_for_equipment(&equipment, &orders, d(2024, 6, 1), d(2024, 6, 30))
        .totals;
    assert_eq!(totals.failure_count, 0);
    assert_eq!(totals.total_downtime_hours, 0.0);
}
