//! Shared utilities for feature modules
//!
//! - **test_helpers**: Mock state and request helpers (test-only)

#[cfg(test)]
pub mod test_helpers;
