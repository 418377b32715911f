//! Area aggregates owned by the sibling services
//!
//! The users service never persists these; it references them by id and
//! fetches details over HTTP at read time.

pub mod client;
pub mod model;

pub use client::{FreeAreaClient, PrivateAreaClient};
pub use model::{FreeArea, PrincipalPhoto, PrivateArea, PublicContent};
