use orgmap_common::types::{BoundingBox, Location};

use crate::db::DbError;
use crate::repository::{LocationRepository, OrganisationRepository};

#[derive(Debug, Clone, Copy)]
pub struct ListLocationsQuery {
    pub organisation_id: i64,
    pub bounding_box: Option<BoundingBox>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListLocationsError {
    #[error("Organisation does not exist")]
    OrganisationNotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

/// List an organisation's locations, optionally inside a bounding box.
///
/// The organisation must exist; an unknown id is reported as not found
/// whether or not a bounding box was supplied.
#[tracing::instrument(skip(organisations, locations))]
pub async fn handle(
    organisations: &dyn OrganisationRepository,
    locations: &dyn LocationRepository,
    query: ListLocationsQuery,
) -> Result<Vec<Location>, ListLocationsError> {
    if organisations
        .get_organisation(query.organisation_id)
        .await?
        .is_none()
    {
        return Err(ListLocationsError::OrganisationNotFound(query.organisation_id));
    }

    let items = locations
        .list_locations(query.organisation_id, query.bounding_box)
        .await?;

    tracing::debug!(count = items.len(), "Locations listed");

    Ok(items)
}
