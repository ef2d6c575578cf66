//! Store access seams
//!
//! Feature handlers depend on these traits rather than on a concrete pool, so
//! the store handle is passed explicitly into every operation. The production
//! implementation is [`PgRepository`].

use async_trait::async_trait;
use orgmap_common::types::{BoundingBox, CreateLocation, CreateOrganisation, Location, Organisation};

use crate::db::DbResult;

mod postgres;

pub use postgres::PgRepository;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrganisationRepository: Send + Sync {
    /// Insert a new organisation and return it with its assigned id.
    async fn create_organisation(&self, request: CreateOrganisation) -> DbResult<Organisation>;

    /// All organisations, in store order.
    async fn list_organisations(&self) -> DbResult<Vec<Organisation>>;

    async fn get_organisation(&self, id: i64) -> DbResult<Option<Organisation>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Insert a new location and return it with its assigned id.
    ///
    /// The referenced organisation is not checked here; the store's foreign
    /// key is the only guard.
    async fn create_location(&self, request: CreateLocation) -> DbResult<Location>;

    /// Locations owned by `organisation_id`, restricted to `bounding_box`
    /// (inclusive on every edge) when one is given.
    async fn list_locations(
        &self,
        organisation_id: i64,
        bounding_box: Option<BoundingBox>,
    ) -> DbResult<Vec<Location>>;
}
