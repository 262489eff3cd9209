// Domain models

mod aggregation;
mod batch;
mod battery;
mod device;
mod lookup;
mod report;
mod view;

pub use aggregation::{BatchStats, HistogramBin, StatusCounts, TrendPoint};
pub use batch::{BatchResult, max_observed_days_offline};
pub use battery::{BatteryInfo, BatteryReading, SelfCheckEntry};
pub use device::{DeviceRecord, DeviceStatus, DisplayBucket};
pub use lookup::{LookupDevice, LookupErrorBody, LookupRequest, LookupResponse};
pub use report::{ExportReport, ExportRow, ExportSheet, ReportBucket};
pub use view::{
    BatchView, DetailCategory, DetailField, DetailGroup, DeviceDetail, DeviceRow,
};
