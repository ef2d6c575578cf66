//! Feature modules implementing the orgmap API
//!
//! Each feature is a vertical slice with its own commands, queries and
//! routes.
//!
//! # Features
//!
//! - **organisations**: create, list and fetch organisations
//! - **locations**: create locations and list an organisation's locations,
//!   optionally inside a bounding box
//!
//! # Architecture
//!
//! Each feature module follows the structure:
//! - `commands/` - Write operations
//! - `queries/` - Read operations
//! - `routes.rs` - HTTP route definitions
//!
//! Every command or query exposes an async `handle` function that takes the
//! repository it needs as an explicit argument.

pub mod locations;
pub mod organisations;
pub mod shared;

use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;

use crate::repository::{LocationRepository, OrganisationRepository, PgRepository};

/// Shared state for all feature routes
///
/// Holds the store handles passed into each handler.
#[derive(Clone)]
pub struct FeatureState {
    pub organisations: Arc<dyn OrganisationRepository>,
    pub locations: Arc<dyn LocationRepository>,
}

impl FeatureState {
    /// State backed by a single PostgreSQL repository.
    pub fn postgres(pool: PgPool) -> Self {
        let repository = Arc::new(PgRepository::new(pool));
        Self {
            organisations: repository.clone(),
            locations: repository,
        }
    }
}

/// Creates the router with all feature routes mounted
///
/// Routes:
/// - `POST /create` - Create an organisation
/// - `GET /` - List organisations
/// - `GET /:organisation_id` - Fetch an organisation
/// - `POST /create/locations` - Create a location
/// - `GET /:organisation_id/locations` - List an organisation's locations
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .merge(organisations::organisations_routes())
        .merge(locations::locations_routes())
        .with_state(state)
}
