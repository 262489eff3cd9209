// Batch pipeline errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("no IMEI provided; enter at least one IMEI")]
    EmptyInput,

    #[error("invalid IMEIs: {}. An IMEI must contain exactly 15 digits", tokens.join(", "))]
    InvalidFormat { tokens: Vec<String> },

    #[error("batch of {size} IMEIs exceeds the limit of {max}")]
    BatchTooLarge { size: usize, max: usize },

    #[error("lookup failed: {0}")]
    LookupFailure(String),

    #[error("threshold {threshold} out of range 0..={max}")]
    ThresholdOutOfRange { threshold: u32, max: u32 },

    #[error("no batch has been submitted yet")]
    NoActiveBatch,

    #[error("no details found for IMEI {0}")]
    DetailNotFound(String),
}

impl BatchError {
    /// Offending tokens for `InvalidFormat`, empty otherwise.
    pub fn invalid_tokens(&self) -> &[String] {
        match self {
            BatchError::InvalidFormat { tokens } => tokens,
            _ => &[],
        }
    }
}

impl From<reqwest::Error> for BatchError {
    fn from(e: reqwest::Error) -> Self {
        BatchError::LookupFailure(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BatchError>;
