pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::CreateLocationError;
pub use queries::{ListLocationsError, ListLocationsQuery};
pub use routes::locations_routes;
