use crate::model::room::{CreateRoomRequest, RoomListQuery, RoomResponse};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::RoomId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_room(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRoomRequest>,
) -> AppResult<(StatusCode, Json<RoomResponse>)> {
    req.validate()?;

    registry
        .room_repository()
        .create(req.into())
        .await
        .map(|room| (StatusCode::CREATED, Json(room.into())))
}

pub async fn show_room_list(
    Query(query): Query<RoomListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<RoomResponse>>> {
    registry
        .room_repository()
        .find_all(query.into())
        .await
        .map(|rooms| Json(rooms.into_iter().map(RoomResponse::from).collect()))
}

pub async fn show_room(
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomResponse>> {
    registry
        .room_repository()
        .find_by_id(room_id)
        .await
        .and_then(|room| match room {
            Some(room) => Ok(Json(room.into())),
            None => Err(AppError::EntityNotFound(format!("room {room_id} not found"))),
        })
}

pub async fn delete_room(
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let deleted = registry.room_repository().delete(room_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::EntityNotFound(format!("room {room_id} not found")))
    }
}
