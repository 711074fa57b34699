// ==========================================
// 设备可靠性分析 - 工单领域模型
// ==========================================
// 职责: 维修工单快照 + 停机时长口径
// 红线: 计算器只读工单, 从不修改
// ==========================================

use crate::domain::types::{WorkOrderStatus, WorkOrderType};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// WorkOrder - 维修工单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    pub id: String,
    pub equipment_id: String,

    #[serde(rename = "type")]
    pub order_type: WorkOrderType,
    pub status: WorkOrderStatus,

    // ===== 时间 =====
    pub scheduled_date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,

    /// 故障分类(仅纠正性工单有意义)
    #[serde(default)]
    pub corrective_category: Option<String>,
}

impl WorkOrder {
    /// 停机时长(小时)
    ///
    /// 口径: max(0, end_date - scheduled_date); end_date 缺失记 0
    pub fn duration_hours(&self) -> f64 {
        match self.end_date {
            Some(end) => {
                let seconds = (end - self.scheduled_date).num_seconds();
                (seconds as f64 / 3600.0).max(0.0)
            }
            None => 0.0,
        }
    }

    pub fn is_executed(&self) -> bool {
        self.status == WorkOrderStatus::Executed
    }

    pub fn is_scheduled(&self) -> bool {
        self.status == WorkOrderStatus::Scheduled
    }

    /// 故障工单: 纠正性 + 已执行
    pub fn is_failure(&self) -> bool {
        self.order_type == WorkOrderType::Corrective && self.is_executed()
    }

    /// 排期日期(整日口径)
    pub fn scheduled_day(&self) -> NaiveDate {
        self.scheduled_date.date_naive()
    }

    /// 排期日期是否落在 [start, end] 闭区间
    pub fn scheduled_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        let day = self.scheduled_day();
        day >= start && day <= end
    }

    /// 规范化的故障分类(空白视为缺失)
    pub fn failure_category(&self) -> Option<&str> {
        self.corrective_category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
