use crate::model::{
    id::UserId,
    user::{event::CreateUser, User},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Registers a user. A duplicate email surfaces as
    /// `AppError::DuplicateEntry`.
    async fn create(&self, event: CreateUser) -> AppResult<User>;
    async fn find_all(&self) -> AppResult<Vec<User>>;
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;
    /// Returns false when no user with the given id existed.
    async fn delete(&self, user_id: UserId) -> AppResult<bool>;
}
