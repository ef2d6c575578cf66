//! Create organisation command
//!
//! The command body is [`CreateOrganisation`]. Names are not unique, so two
//! organisations may share one.

use orgmap_common::types::{CreateOrganisation, Organisation};

use crate::db::DbError;
use crate::repository::OrganisationRepository;

/// Errors that can occur when creating an organisation
#[derive(Debug, thiserror::Error)]
pub enum CreateOrganisationError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

/// Insert the organisation and return it with its store-assigned id.
#[tracing::instrument(skip(repo, command), fields(name = %command.name))]
pub async fn handle(
    repo: &dyn OrganisationRepository,
    command: CreateOrganisation,
) -> Result<Organisation, CreateOrganisationError> {
    tracing::info!("Creating organisation");

    let organisation = repo.create_organisation(command).await?;

    tracing::info!(organisation_id = organisation.id, "Organisation created");

    Ok(organisation)
}
