// ==========================================
// 设备可靠性分析 - 快照加载器
// ==========================================
// 支持: JSON 快照 (单文件) / CSV 快照 (设备 + 工单两个文件)
// 红线: 只负责读入, 不做任何指标计算
// ==========================================

use crate::domain::equipment::Equipment;
use crate::domain::snapshot::MaintenanceSnapshot;
use crate::domain::types::{EquipmentCategory, WorkOrderStatus, WorkOrderType};
use crate::domain::work_order::WorkOrder;
use crate::importer::error::ImportError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

// ==========================================
// CSV 行结构
// ==========================================

#[derive(Debug, Deserialize)]
struct EquipmentRow {
    id: Option<String>,
    name: Option<String>,
    is_critical: Option<String>,
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WorkOrderRow {
    id: Option<String>,
    equipment_id: Option<String>,
    #[serde(rename = "type")]
    order_type: Option<String>,
    status: Option<String>,
    scheduled_date: Option<String>,
    end_date: Option<String>,
    corrective_category: Option<String>,
}

// ==========================================
// SnapshotLoader - 快照加载器
// ==========================================
pub struct SnapshotLoader;

impl SnapshotLoader {
    /// 加载 JSON 快照文件
    pub fn load_json(path: impl AsRef<Path>) -> Result<MaintenanceSnapshot, ImportError> {
        let path = path.as_ref();
        ensure_extension(path, "json")?;
        let raw = std::fs::read_to_string(path)?;
        let snapshot = Self::parse_json(&raw)?;
        info!(
            path = %path.display(),
            equipment = snapshot.equipment.len(),
            work_orders = snapshot.work_orders.len(),
            "JSON 快照已加载"
        );
        Ok(snapshot)
    }

    /// 解析 JSON 快照
    pub fn parse_json(raw: &str) -> Result<MaintenanceSnapshot, ImportError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// 加载 CSV 快照 (设备文件 + 工单文件)
    pub fn load_csv(
        equipment_path: impl AsRef<Path>,
        work_orders_path: impl AsRef<Path>,
    ) -> Result<MaintenanceSnapshot, ImportError> {
        let equipment_path = equipment_path.as_ref();
        let work_orders_path = work_orders_path.as_ref();
        ensure_extension(equipment_path, "csv")?;
        ensure_extension(work_orders_path, "csv")?;

        let equipment = Self::read_equipment_csv(File::open(equipment_path)?)?;
        let work_orders = Self::read_work_orders_csv(File::open(work_orders_path)?)?;
        info!(
            equipment = equipment.len(),
            work_orders = work_orders.len(),
            "CSV 快照已加载"
        );
        Ok(MaintenanceSnapshot::new(equipment, work_orders))
    }

    /// 读取设备 CSV (表头: id,name,is_critical,category)
    pub fn read_equipment_csv<R: Read>(reader: R) -> Result<Vec<Equipment>, ImportError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut equipment = Vec::new();
        for (index, result) in reader.deserialize::<EquipmentRow>().enumerate() {
            let row_number = index + 2;
            let row = result?;

            let id = required(row.id, row_number, "id")?;
            let name = row.name.unwrap_or_else(|| id.clone());
            let is_critical = match row.is_critical {
                Some(value) => parse_bool(&value).ok_or_else(|| ImportError::TypeConversionError {
                    row: row_number,
                    field: "is_critical".to_string(),
                    value,
                })?,
                None => false,
            };
            let category = row
                .category
                .as_deref()
                .map(EquipmentCategory::from_str)
                .unwrap_or(EquipmentCategory::Other);

            equipment.push(Equipment {
                id,
                name,
                is_critical,
                category,
            });
        }
        Ok(equipment)
    }

    /// 读取工单 CSV
    /// (表头: id,equipment_id,type,status,scheduled_date,end_date,corrective_category)
    pub fn read_work_orders_csv<R: Read>(reader: R) -> Result<Vec<WorkOrder>, ImportError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut orders = Vec::new();
        for (index, result) in reader.deserialize::<WorkOrderRow>().enumerate() {
            let row_number = index + 2;
            let row = result?;

            let scheduled_raw = required(row.scheduled_date, row_number, "scheduled_date")?;
            let scheduled_date = parse_datetime(&scheduled_raw)
                .ok_or_else(|| date_error(row_number, "scheduled_date", &scheduled_raw))?;
            let end_date = match row.end_date {
                Some(raw) => Some(
                    parse_datetime(&raw).ok_or_else(|| date_error(row_number, "end_date", &raw))?,
                ),
                None => None,
            };

            orders.push(WorkOrder {
                id: required(row.id, row_number, "id")?,
                equipment_id: required(row.equipment_id, row_number, "equipment_id")?,
                order_type: WorkOrderType::from_str(&required(row.order_type, row_number, "type")?),
                status: WorkOrderStatus::from_str(&required(row.status, row_number, "status")?),
                scheduled_date,
                end_date,
                corrective_category: row.corrective_category,
            });
        }
        Ok(orders)
    }
}

// ==========================================
// 辅助函数
// ==========================================

fn ensure_extension(path: &Path, expected: &str) -> Result<(), ImportError> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if ext != expected {
        return Err(ImportError::UnsupportedFormat(ext));
    }
    Ok(())
}

fn required(value: Option<String>, row: usize, field: &str) -> Result<String, ImportError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ImportError::MissingField {
            row,
            field: field.to_string(),
        })
}

fn date_error(row: usize, field: &str, value: &str) -> ImportError {
    ImportError::DateFormatError {
        row,
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Some(true),
        "false" | "0" | "no" | "n" => Some(false),
        _ => None,
    }
}

/// 解析日期时间; 无时区的值按 UTC 处理, 纯日期取当日 00:00
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
