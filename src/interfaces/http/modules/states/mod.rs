//! States module — delegated state/country lookup

pub mod handlers;

pub use handlers::*;
