// Export models: one sheet per mutually exclusive report bucket

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportBucket {
    Online,
    Observation,
    Offline,
    MovedToObservation,
    NotFound,
}

impl ReportBucket {
    /// Sheet order of the exported workbook.
    pub const ALL: [ReportBucket; 5] = [
        ReportBucket::Online,
        ReportBucket::Observation,
        ReportBucket::Offline,
        ReportBucket::MovedToObservation,
        ReportBucket::NotFound,
    ];

    pub fn sheet_name(self) -> &'static str {
        match self {
            ReportBucket::Online => "Online",
            ReportBucket::Observation => "Em Observação",
            ReportBucket::Offline => "Offline",
            ReportBucket::MovedToObservation => "Movido para Observação",
            ReportBucket::NotFound => "Não Encontrados",
        }
    }

    /// Value of the row's `Status` column.
    pub fn status_label(self) -> &'static str {
        match self {
            ReportBucket::NotFound => "Não encontrado",
            other => other.sheet_name(),
        }
    }
}

/// Flat export row. Unresolved IMEIs only carry `IMEI` and `Status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "IMEI")]
    pub imei: String,
    #[serde(rename = "Horário Original", skip_serializing_if = "Option::is_none")]
    pub original_time: Option<String>,
    #[serde(rename = "Horário Brasília", skip_serializing_if = "Option::is_none")]
    pub local_time: Option<String>,
    #[serde(rename = "Dias Offline", skip_serializing_if = "Option::is_none")]
    pub days_offline: Option<u32>,
    #[serde(rename = "Status")]
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportSheet {
    pub name: &'static str,
    pub bucket: ReportBucket,
    pub rows: Vec<ExportRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    pub threshold: u32,
    pub sheets: Vec<ExportSheet>,
}

impl ExportReport {
    pub fn sheet(&self, bucket: ReportBucket) -> Option<&ExportSheet> {
        self.sheets.iter().find(|s| s.bucket == bucket)
    }
}
