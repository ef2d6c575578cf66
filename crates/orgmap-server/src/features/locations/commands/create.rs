//! Create location command
//!
//! The handler does not look the organisation up before inserting. An unknown
//! `organisation_id` is rejected by the `locations.organisation_id` foreign
//! key and surfaces untranslated as a store error.

use orgmap_common::types::{CreateLocation, Location};

use crate::db::DbError;
use crate::repository::LocationRepository;

/// Errors that can occur when creating a location
#[derive(Debug, thiserror::Error)]
pub enum CreateLocationError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

#[tracing::instrument(
    skip(repo, command),
    fields(
        organisation_id = command.organisation_id,
        location_name = %command.location_name,
        longitude = command.longitude,
        latitude = command.latitude
    )
)]
pub async fn handle(
    repo: &dyn LocationRepository,
    command: CreateLocation,
) -> Result<Location, CreateLocationError> {
    let location = repo.create_location(command).await?;

    tracing::info!(location_id = location.id, "Location created");

    Ok(location)
}
