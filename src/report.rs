// Export projection: every resolved device lands in exactly one report bucket,
// unresolved IMEIs only in "Não Encontrados".

use crate::classifier::SETTLING_DAYS;
use crate::models::{
    BatchResult, DeviceRecord, ExportReport, ExportRow, ExportSheet, ReportBucket,
};
use crate::timezone::{self, Zones};

/// Report bucket for a resolved device.
/// Precedence: Online, Em Observação (1-2 days), Movido para Observação (latch, or beyond the
/// threshold on a batch not yet reclassified), Offline.
pub fn report_bucket(device: &DeviceRecord, threshold: u32) -> ReportBucket {
    match device.days_offline {
        0 => ReportBucket::Online,
        d if d <= SETTLING_DAYS => ReportBucket::Observation,
        d if device.moved_to_observation() || d > threshold => ReportBucket::MovedToObservation,
        _ => ReportBucket::Offline,
    }
}

pub fn project_device(device: &DeviceRecord, threshold: u32, zones: &Zones) -> ExportRow {
    let bucket = report_bucket(device, threshold);
    ExportRow {
        imei: device.imei.clone(),
        original_time: device.last_seen.clone(),
        local_time: device
            .last_seen
            .as_deref()
            .map(|raw| timezone::format_in(zones.local, Some(raw))),
        days_offline: Some(device.days_offline),
        status: bucket.status_label(),
    }
}

pub fn project_not_found(imei: &str) -> ExportRow {
    ExportRow {
        imei: imei.to_string(),
        original_time: None,
        local_time: None,
        days_offline: None,
        status: ReportBucket::NotFound.status_label(),
    }
}

/// Builds the five export sheets from a reclassified batch.
pub fn project(batch: &BatchResult, threshold: u32, zones: &Zones) -> ExportReport {
    let mut sheets: Vec<ExportSheet> = ReportBucket::ALL
        .iter()
        .map(|&bucket| ExportSheet {
            name: bucket.sheet_name(),
            bucket,
            rows: Vec::new(),
        })
        .collect();

    for device in &batch.devices {
        let bucket = report_bucket(device, threshold);
        if let Some(sheet) = sheets.iter_mut().find(|s| s.bucket == bucket) {
            sheet.rows.push(project_device(device, threshold, zones));
        }
    }
    if let Some(sheet) = sheets.iter_mut().find(|s| s.bucket == ReportBucket::NotFound) {
        sheet
            .rows
            .extend(batch.unresolved.iter().map(|imei| project_not_found(imei)));
    }

    ExportReport { threshold, sheets }
}
