//! Location API routes
//!
//! - `POST /create/locations` - Create a location for an organisation
//! - `GET /:organisation_id/locations` - List an organisation's locations,
//!   optionally filtered with `?bounding_box=min_lon,max_lon,min_lat,max_lat`
//!   or the key repeated once per coordinate

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::{Query, QueryRejection};
use orgmap_common::types::{BoundingBox, CreateLocation, Location};
use serde::Deserialize;

use super::{
    commands::CreateLocationError,
    queries::{ListLocationsError, ListLocationsQuery},
};
use crate::error::{AppError, AppResult};
use crate::features::FeatureState;

pub fn locations_routes() -> Router<FeatureState> {
    Router::new()
        .route("/create/locations", post(create_location))
        .route("/:organisation_id/locations", get(list_locations))
}

/// Raw query string for the listing endpoint
#[derive(Debug, Deserialize)]
struct ListLocationsParams {
    #[serde(default)]
    bounding_box: Vec<String>,
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// Create a location
///
/// # Request Body
///
/// ```json
/// {
///   "organisation_id": 1,
///   "location_name": "Depot",
///   "longitude": 10.0,
///   "latitude": 20.0
/// }
/// ```
///
/// # Response
///
/// - `200 OK` - The created location, including its id
/// - `400 Bad Request` - Missing or mistyped fields
/// - `500 Internal Server Error` - Store failure, including an unknown
///   `organisation_id` rejected by the foreign key
async fn create_location(
    State(state): State<FeatureState>,
    payload: Result<Json<CreateLocation>, JsonRejection>,
) -> AppResult<Json<Location>> {
    let Json(command) = payload?;

    let location = super::commands::create::handle(state.locations.as_ref(), command).await?;

    Ok(Json(location))
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

/// List an organisation's locations
///
/// # Query Parameters
///
/// - `bounding_box` - Optional `min_lon,max_lon,min_lat,max_lat`, either as one
///   comma-separated value or repeated four times; bounds are inclusive
///
/// # Response
///
/// - `200 OK` - Matching locations (possibly empty)
/// - `400 Bad Request` - Id is not an integer or the bounding box is malformed
/// - `404 Not Found` - The organisation does not exist
async fn list_locations(
    State(state): State<FeatureState>,
    organisation_id: Result<Path<i64>, PathRejection>,
    params: Result<Query<ListLocationsParams>, QueryRejection>,
) -> AppResult<Json<Vec<Location>>> {
    let Path(organisation_id) = organisation_id?;
    let Query(params) = params?;

    let bounding_box = BoundingBox::from_query_values(&params.bounding_box)?;

    let locations = super::queries::list::handle(
        state.organisations.as_ref(),
        state.locations.as_ref(),
        ListLocationsQuery {
            organisation_id,
            bounding_box,
        },
    )
    .await?;

    Ok(Json(locations))
}

// ============================================================================
// Error Handling
// ============================================================================

impl From<CreateLocationError> for AppError {
    fn from(err: CreateLocationError) -> Self {
        match err {
            CreateLocationError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<ListLocationsError> for AppError {
    fn from(err: ListLocationsError) -> Self {
        match err {
            ListLocationsError::OrganisationNotFound(_) => AppError::NotFound(err.to_string()),
            ListLocationsError::Database(e) => AppError::Database(e),
        }
    }
}
