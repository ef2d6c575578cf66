pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::CreateOrganisationError;
pub use queries::{
    GetOrganisationError, GetOrganisationQuery, ListOrganisationsError, ListOrganisationsQuery,
};
pub use routes::organisations_routes;
