//! User management use-cases

pub mod service;

pub use service::{AgeLimits, UserForm, UserService};
