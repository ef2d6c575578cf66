//! Error types for orgmap

use thiserror::Error;

/// Result type alias for orgmap operations
pub type Result<T> = std::result::Result<T, OrgmapError>;

/// Main error type for orgmap
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrgmapError {
    #[error("Invalid bounding box '{value}': {reason}")]
    InvalidBoundingBox { value: String, reason: String },
}

impl OrgmapError {
    pub(crate) fn invalid_bounding_box(value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidBoundingBox {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
