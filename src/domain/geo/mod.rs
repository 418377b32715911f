//! Geographic lookups delegated to the external geo service.

use async_trait::async_trait;

use crate::domain::DomainResult;

/// A state/province of a country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub id: i64,
    pub name: String,
    pub country: String,
}

/// Port to the geo sibling service.
#[async_trait]
pub trait GeoClient: Send + Sync {
    /// States belonging to the country with the given name.
    async fn states_by_country(&self, name: &str) -> DomainResult<Vec<State>>;
}
