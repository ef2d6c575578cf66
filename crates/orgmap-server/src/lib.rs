//! orgmap Server Library
//!
//! HTTP API for organisations and their geo-tagged locations.
//!
//! # Overview
//!
//! - **API Endpoints**: create/list/get organisations, create/list locations
//! - **Database**: PostgreSQL through SQLx, accessed via repository traits
//! - **Configuration**: Environment-based configuration management
//! - **Middleware**: CORS, request tracing and compression
//!
//! # Architecture
//!
//! Each feature is a vertical slice split into **commands** (writes) and
//! **queries** (reads). A command or query is a plain input type plus a
//! `handle` function that receives the repository it needs explicitly, so
//! handlers hold no global state and can be exercised against mock
//! repositories.
//!
//! ## Framework Stack
//!
//! - **Axum**: web framework
//! - **SQLx**: async PostgreSQL driver and embedded migrations
//! - **Tower**: middleware and service abstractions
//!
//! # Example
//!
//! ```no_run
//! use orgmap_server::{api, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     api::serve(config).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod features;
pub mod middleware;
pub mod repository;

// Re-export commonly used types
pub use error::{AppError, AppResult};
