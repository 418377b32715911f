//! Users module — member CRUD, filtered search, area enrichment

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
