// ==========================================
// 设备可靠性分析 - 快照导入层
// ==========================================
// 职责: 从文件读入设备/工单快照, 交给引擎层
// ==========================================

pub mod error;
pub mod snapshot_loader;

pub use error::ImportError;
pub use snapshot_loader::{parse_datetime, SnapshotLoader};
