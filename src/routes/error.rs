// BatchError -> HTTP response

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::BatchError;

impl BatchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BatchError::EmptyInput
            | BatchError::InvalidFormat { .. }
            | BatchError::BatchTooLarge { .. }
            | BatchError::ThresholdOutOfRange { .. } => StatusCode::BAD_REQUEST,
            BatchError::NoActiveBatch | BatchError::DetailNotFound(_) => StatusCode::NOT_FOUND,
            BatchError::LookupFailure(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for BatchError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut body = json!({ "error": self.to_string() });
        if !self.invalid_tokens().is_empty() {
            body["invalidImeis"] = json!(self.invalid_tokens());
        }
        (status, Json(body)).into_response()
    }
}
