pub mod error;
pub mod model;
pub mod query;
pub mod registry;
pub mod verify;
