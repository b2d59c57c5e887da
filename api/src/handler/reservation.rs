use crate::model::reservation::{
    CreateReservationRequest, PeriodQuery, ReservationListQuery, ReservationResponse,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::ReservationId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_reservation(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<ReservationResponse>)> {
    req.validate()?;

    registry
        .reservation_repository()
        .create(req.into())
        .await
        .map(|reservation| (StatusCode::CREATED, Json(reservation.into())))
}

pub async fn show_reservation_list(
    Query(query): Query<ReservationListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<ReservationResponse>>> {
    registry
        .reservation_repository()
        .find_all(query.into())
        .await
        .map(|items| Json(items.into_iter().map(ReservationResponse::from).collect()))
}

pub async fn show_reservations_in_period(
    Query(query): Query<PeriodQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<ReservationResponse>>> {
    registry
        .reservation_repository()
        .find_overlapping(query.data_inicio, query.data_final)
        .await
        .map(|items| Json(items.into_iter().map(ReservationResponse::from).collect()))
}

pub async fn show_reservation(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    registry
        .reservation_repository()
        .find_by_id(reservation_id)
        .await
        .and_then(|reservation| match reservation {
            Some(reservation) => Ok(Json(reservation.into())),
            None => Err(AppError::EntityNotFound(format!(
                "reservation {reservation_id} not found"
            ))),
        })
}

pub async fn delete_reservation(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let deleted = registry
        .reservation_repository()
        .delete(reservation_id)
        .await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::EntityNotFound(format!(
            "reservation {reservation_id} not found"
        )))
    }
}
