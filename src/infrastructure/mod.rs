//! External concerns: database, sibling-service HTTP clients, crypto.

pub mod crypto;
pub mod database;
pub mod http;

pub use database::{init_database, DatabaseConfig};
