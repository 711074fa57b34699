// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::{DateTime, Duration, TimeZone, Utc};
use maintenance_reliability::domain::types::{
    EquipmentCategory, WorkOrderStatus, WorkOrderType,
};
use maintenance_reliability::domain::{Equipment, EquipmentPlan, WorkOrder};

// ==========================================
// Equipment 构建器
// ==========================================

pub struct EquipmentBuilder {
    id: String,
    name: Option<String>,
    is_critical: bool,
    category: EquipmentCategory,
}

impl EquipmentBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: None,
            is_critical: false,
            category: EquipmentCategory::Production,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn critical(mut self) -> Self {
        self.is_critical = true;
        self
    }

    pub fn category(mut self, category: EquipmentCategory) -> Self {
        self.category = category;
        self
    }

    pub fn build(self) -> Equipment {
        Equipment {
            name: self.name.unwrap_or_else(|| format!("Equipment {}", self.id)),
            id: self.id,
            is_critical: self.is_critical,
            category: self.category,
        }
    }
}

// ==========================================
// WorkOrder 构建器
// ==========================================

pub struct WorkOrderBuilder {
    id: String,
    equipment_id: String,
    order_type: WorkOrderType,
    status: WorkOrderStatus,
    scheduled_date: DateTime<Utc>,
    duration_minutes: Option<i64>,
    corrective_category: Option<String>,
}

impl WorkOrderBuilder {
    pub fn new(id: &str, equipment_id: &str) -> Self {
        Self {
            id: id.to_string(),
            equipment_id: equipment_id.to_string(),
            order_type: WorkOrderType::Preventive,
            status: WorkOrderStatus::Scheduled,
            scheduled_date: at(2025, 1, 6, 8),
            duration_minutes: None,
            corrective_category: None,
        }
    }

    pub fn order_type(mut self, order_type: WorkOrderType) -> Self {
        self.order_type = order_type;
        self
    }

    pub fn status(mut self, status: WorkOrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn scheduled(mut self, year: i32, month: u32, day: u32) -> Self {
        self.scheduled_date = at(year, month, day, 8);
        self
    }

    pub fn hours(mut self, hours: f64) -> Self {
        self.duration_minutes = Some((hours * 60.0).round() as i64);
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.corrective_category = Some(category.to_string());
        self
    }

    pub fn build(self) -> WorkOrder {
        WorkOrder {
            id: self.id,
            equipment_id: self.equipment_id,
            order_type: self.order_type,
            status: self.status,
            scheduled_date: self.scheduled_date,
            end_date: self
                .duration_minutes
                .map(|m| self.scheduled_date + Duration::minutes(m)),
            corrective_category: self.corrective_category,
        }
    }
}

// ==========================================
// 快捷构造
// ==========================================

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

/// 已执行故障工单
pub fn failure(id: &str, equipment_id: &str, y: i32, m: u32, d: u32, hours: f64) -> WorkOrder {
    WorkOrderBuilder::new(id, equipment_id)
        .order_type(WorkOrderType::Corrective)
        .status(WorkOrderStatus::Executed)
        .scheduled(y, m, d)
        .hours(hours)
        .build()
}

/// 已排期预防性任务
pub fn scheduled_preventive(id: &str, equipment_id: &str, y: i32, m: u32, d: u32) -> WorkOrder {
    WorkOrderBuilder::new(id, equipment_id).scheduled(y, m, d).build()
}

/// 标准设备群: 2 台关键、3 台非关键、1 台设施
pub fn sample_fleet() -> Vec<Equipment> {
    vec![
        EquipmentBuilder::new("EQ-01").name("Injection Press").critical().build(),
        EquipmentBuilder::new("EQ-02").name("Compressor").critical().build(),
        EquipmentBuilder::new("EQ-03").name("Conveyor").build(),
        EquipmentBuilder::new("EQ-04")
            .name("Cooling Tower")
            .category(EquipmentCategory::Utility)
            .build(),
        EquipmentBuilder::new("EQ-05").name("Packer").build(),
        EquipmentBuilder::new("FAC-01")
            .name("Warehouse Roof")
            .category(EquipmentCategory::Facility)
            .build(),
    ]
}

/// 标准工单历史 (2024 年)
pub fn sample_history() -> Vec<WorkOrder> {
    vec![
        failure("H-01", "EQ-01", 2024, 3, 4, 3.0),
        failure("H-02", "EQ-01", 2024, 3, 6, 1.0),
        WorkOrderBuilder::new("H-03", "EQ-01")
            .status(WorkOrderStatus::Executed)
            .scheduled(2024, 3, 11)
            .hours(6.0)
            .build(),
        failure("H-04", "EQ-03", 2024, 5, 6, 0.5),
        WorkOrderBuilder::new("H-05", "EQ-03")
            .order_type(WorkOrderType::Overhaul)
            .status(WorkOrderStatus::Executed)
            .scheduled(2024, 8, 5)
            .hours(40.0)
            .build(),
        failure("H-06", "FAC-01", 2024, 2, 5, 12.0),
        WorkOrderBuilder::new("H-07", "EQ-04")
            .order_type(WorkOrderType::Corrective)
            .status(WorkOrderStatus::Executed)
            .scheduled(2024, 9, 2)
            .build(),
    ]
}

/// 一月过载的均衡快照 (2025 年)
pub fn january_heavy_plans() -> Vec<EquipmentPlan> {
    let fleet = sample_fleet();
    let mut plans = Vec::new();
    for (index, equipment) in fleet.into_iter().enumerate() {
        let mut tasks = Vec::new();
        for n in 0..=index {
            tasks.push(scheduled_preventive(
                &format!("{}-T{}", equipment.id, n),
                &equipment.id,
                2025,
                1,
                (n as u32 % 28) + 1,
            ));
        }
        tasks.push(scheduled_preventive(
            &format!("{}-APR", equipment.id),
            &equipment.id,
            2025,
            4,
            15,
        ));
        plans.push(EquipmentPlan { equipment, tasks });
    }
    plans
}
