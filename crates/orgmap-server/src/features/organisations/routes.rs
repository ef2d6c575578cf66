//! Organisation API routes
//!
//! - `POST /create` - Create a new organisation
//! - `GET /` - List all organisations
//! - `GET /:organisation_id` - Get a single organisation by id

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{get, post},
    Json, Router,
};
use orgmap_common::types::{CreateOrganisation, Organisation};

use super::{
    commands::CreateOrganisationError,
    queries::{
        GetOrganisationError, GetOrganisationQuery, ListOrganisationsError, ListOrganisationsQuery,
    },
};
use crate::error::{AppError, AppResult};
use crate::features::FeatureState;

pub fn organisations_routes() -> Router<FeatureState> {
    Router::new()
        .route("/", get(list_organisations))
        .route("/create", post(create_organisation))
        .route("/:organisation_id", get(get_organisation))
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// Create a new organisation
///
/// # Request Body
///
/// ```json
/// { "name": "Acme" }
/// ```
///
/// # Response
///
/// - `200 OK` - The created organisation, including its id
/// - `400 Bad Request` - Missing or mistyped fields
async fn create_organisation(
    State(state): State<FeatureState>,
    payload: Result<Json<CreateOrganisation>, JsonRejection>,
) -> AppResult<Json<Organisation>> {
    let Json(command) = payload?;

    let organisation =
        super::commands::create::handle(state.organisations.as_ref(), command).await?;

    Ok(Json(organisation))
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

async fn list_organisations(
    State(state): State<FeatureState>,
) -> AppResult<Json<Vec<Organisation>>> {
    let organisations =
        super::queries::list::handle(state.organisations.as_ref(), ListOrganisationsQuery).await?;

    Ok(Json(organisations))
}

/// Get a single organisation by id
///
/// # Response
///
/// - `200 OK` - Organisation found
/// - `400 Bad Request` - Id is not an integer
/// - `404 Not Found` - No organisation with that id
async fn get_organisation(
    State(state): State<FeatureState>,
    organisation_id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Organisation>> {
    let Path(organisation_id) = organisation_id?;

    let organisation = super::queries::get::handle(
        state.organisations.as_ref(),
        GetOrganisationQuery { organisation_id },
    )
    .await?;

    Ok(Json(organisation))
}

// ============================================================================
// Error Handling
// ============================================================================

impl From<CreateOrganisationError> for AppError {
    fn from(err: CreateOrganisationError) -> Self {
        match err {
            CreateOrganisationError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<ListOrganisationsError> for AppError {
    fn from(err: ListOrganisationsError) -> Self {
        match err {
            ListOrganisationsError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<GetOrganisationError> for AppError {
    fn from(err: GetOrganisationError) -> Self {
        match err {
            GetOrganisationError::NotFound(_) => AppError::NotFound(err.to_string()),
            GetOrganisationError::Database(e) => AppError::Database(e),
        }
    }
}
