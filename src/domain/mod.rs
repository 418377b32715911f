//! Core business entities, DTOs and port traits.

pub mod area;
pub mod error;
pub mod geo;
pub mod user;

pub use area::{
    FreeArea, FreeAreaClient, PrincipalPhoto, PrivateArea, PrivateAreaClient, PublicContent,
};
pub use error::{DomainError, DomainResult};
pub use geo::{GeoClient, State};
pub use user::{
    CreateUserDto, EnrichedUser, Preference, UpdateUserDto, User, UserFilter,
    UserRepositoryInterface,
};
