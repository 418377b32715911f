use async_trait::async_trait;

use super::{CreateUserDto, UpdateUserDto, User, UserFilter};
use crate::domain::DomainResult;
use crate::shared::PaginatedResult;

#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User>;

    async fn find_all(&self) -> DomainResult<Vec<User>>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;
    async fn filter_users(
        &self,
        filter: &UserFilter,
        page: u64,
        size: u64,
    ) -> DomainResult<PaginatedResult<User>>;

    async fn update_user(&self, id: i64, dto: UpdateUserDto) -> DomainResult<Option<User>>;
    async fn delete_user(&self, id: i64) -> DomainResult<()>;
}
