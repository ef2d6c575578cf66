use orgmap_common::types::Organisation;

use crate::db::DbError;
use crate::repository::OrganisationRepository;

#[derive(Debug, Clone, Copy)]
pub struct GetOrganisationQuery {
    pub organisation_id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum GetOrganisationError {
    #[error("Organisation not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

#[tracing::instrument(skip(repo))]
pub async fn handle(
    repo: &dyn OrganisationRepository,
    query: GetOrganisationQuery,
) -> Result<Organisation, GetOrganisationError> {
    repo.get_organisation(query.organisation_id)
        .await?
        .ok_or(GetOrganisationError::NotFound(query.organisation_id))
}
