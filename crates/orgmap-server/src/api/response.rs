//! API response types

use axum::http::StatusCode;
use serde::Serialize;

/// Standard error response
///
/// ```json
/// { "error": { "code": "NOT_FOUND", "message": "Organisation not found", "status": 404 } }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub status: u16,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                status: status.as_u16(),
            },
        }
    }
}
