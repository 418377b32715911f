//! Business logic and use-case orchestration.

pub mod users;

pub use users::{AgeLimits, UserForm, UserService};
