pub mod list;

pub use list::{ListLocationsError, ListLocationsQuery};
