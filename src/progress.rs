// Cosmetic progress estimate for a batch lookup, derived from bytes transferred.
// Says nothing about which IMEIs have resolved.

/// Upload phase spans 5..20%, download phase 20..95%.
const UPLOAD_BASE: f64 = 5.0;
const UPLOAD_SPAN: f64 = 0.15;
const DOWNLOAD_BASE: f64 = 20.0;
const DOWNLOAD_SPAN: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DownloadProgress {
    pub percent: f64,
    /// Estimated IMEIs still pending, proportional to bytes left.
    pub remaining_imeis: usize,
}

fn percent_completed(loaded: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    let loaded = loaded.min(total);
    Some((loaded as f64 * 100.0 / total as f64).round())
}

pub fn upload_progress(loaded: u64, total: u64) -> Option<f64> {
    percent_completed(loaded, total).map(|pct| UPLOAD_BASE + pct * UPLOAD_SPAN)
}

pub fn download_progress(loaded: u64, total: u64, imei_count: usize) -> Option<DownloadProgress> {
    let pct = percent_completed(loaded, total)?;
    let processed = ((pct * imei_count as f64) / 100.0).round() as usize;
    Some(DownloadProgress {
        percent: DOWNLOAD_BASE + pct * DOWNLOAD_SPAN,
        remaining_imeis: imei_count.saturating_sub(processed),
    })
}
