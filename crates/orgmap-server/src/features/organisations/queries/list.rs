use orgmap_common::types::Organisation;

use crate::db::DbError;
use crate::repository::OrganisationRepository;

/// Lists every organisation; there is no filtering or pagination.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOrganisationsQuery;

#[derive(Debug, thiserror::Error)]
pub enum ListOrganisationsError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

#[tracing::instrument(skip(repo))]
pub async fn handle(
    repo: &dyn OrganisationRepository,
    _query: ListOrganisationsQuery,
) -> Result<Vec<Organisation>, ListOrganisationsError> {
    let organisations = repo.list_organisations().await?;
    tracing::debug!(count = organisations.len(), "Organisations listed");
    Ok(organisations)
}
