//! orgmap Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, logging and error handling for the orgmap workspace.
//!
//! # Overview
//!
//! - **Types**: Wire shapes for organisations, locations and bounding boxes
//! - **Error Handling**: Common error and result types
//! - **Logging**: Centralised `tracing` subscriber setup
//!
//! # Example
//!
//! ```
//! use orgmap_common::types::BoundingBox;
//!
//! let bbox: BoundingBox = "0,5,0,5".parse().unwrap();
//! assert_eq!(bbox.max_latitude, 5.0);
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{OrgmapError, Result};
pub use types::{BoundingBox, CreateLocation, CreateOrganisation, Location, Organisation};
