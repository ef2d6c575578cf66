pub mod get;
pub mod list;

pub use get::{GetOrganisationError, GetOrganisationQuery};
pub use list::{ListOrganisationsError, ListOrganisationsQuery};
