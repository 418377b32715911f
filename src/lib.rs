//! # Amora Users Service
//!
//! CRUD microservice for platform members of the Amora dating platform.
//! Each user owns a free (public) and a private (gated) profile area; both
//! live in sibling microservices and are referenced by id, provisioned at
//! registration and fetched back at read time.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, DTOs and port traits
//! - **application**: Business logic and use-case orchestration
//! - **infrastructure**: External concerns (database, sibling-service HTTP
//!   clients, password hashing)
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Pagination and small helpers

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
