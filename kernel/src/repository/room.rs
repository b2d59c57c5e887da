use crate::model::{
    id::RoomId,
    room::{
        event::{CreateRoom, RoomListOptions},
        Room,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Registers a room under its normalized name. A room whose
    /// normalized name already exists surfaces as
    /// `AppError::DuplicateEntry`.
    async fn create(&self, event: CreateRoom) -> AppResult<Room>;
    /// Lists rooms, optionally filtered by a case-insensitive
    /// substring match on the name.
    async fn find_all(&self, options: RoomListOptions) -> AppResult<Vec<Room>>;
    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>>;
    /// Returns false when no room with the given id existed.
    async fn delete(&self, room_id: RoomId) -> AppResult<bool>;
}
