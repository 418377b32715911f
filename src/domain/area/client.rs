use async_trait::async_trait;

use super::{FreeArea, PrivateArea};
use crate::domain::DomainResult;

/// Port to the free-area sibling service.
#[async_trait]
pub trait FreeAreaClient: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<FreeArea>>;
    async fn find_by_id(&self, id: i64) -> DomainResult<FreeArea>;
    /// Provision a new free area with the given enabled flag.
    async fn create(&self, is_enabled: bool) -> DomainResult<FreeArea>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
}

/// Port to the private-area sibling service.
#[async_trait]
pub trait PrivateAreaClient: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<PrivateArea>>;
    async fn find_by_id(&self, id: i64) -> DomainResult<PrivateArea>;
    /// Provision a new private area with the given enabled flag.
    async fn create(&self, is_enabled: bool) -> DomainResult<PrivateArea>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
}
