// Raw IMEI input parsing: newline/comma separated, 15 decimal digits each.

use crate::error::{BatchError, Result};

pub const IMEI_LEN: usize = 15;

pub fn is_valid_imei(token: &str) -> bool {
    token.len() == IMEI_LEN && token.bytes().all(|b| b.is_ascii_digit())
}

/// Splits on `\n` and `,`, trims, drops empty tokens. No validation; used for the live counter.
pub fn tokenize(input: &str) -> Vec<&str> {
    input
        .split(['\n', ','])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Validates a whole batch. Any bad token rejects the batch; every bad token is listed.
/// Duplicates are kept in submission order.
pub fn parse_imeis(input: &str) -> Result<Vec<String>> {
    let tokens = tokenize(input);
    if tokens.is_empty() {
        return Err(BatchError::EmptyInput);
    }

    let invalid: Vec<String> = tokens
        .iter()
        .filter(|t| !is_valid_imei(t))
        .map(|t| t.to_string())
        .collect();
    if !invalid.is_empty() {
        return Err(BatchError::InvalidFormat { tokens: invalid });
    }

    Ok(tokens.into_iter().map(str::to_string).collect())
}

/// Single-IMEI variant for the detail lookup.
pub fn parse_single(imei: &str) -> Result<String> {
    let imei = imei.trim();
    if imei.is_empty() {
        return Err(BatchError::EmptyInput);
    }
    if !is_valid_imei(imei) {
        return Err(BatchError::InvalidFormat {
            tokens: vec![imei.to_string()],
        });
    }
    Ok(imei.to_string())
}
