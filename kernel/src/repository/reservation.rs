use crate::model::{
    id::ReservationId,
    reservation::{
        event::{CreateReservation, ReservationListOptions},
        Reservation,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::error::AppResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Validates and persists a reservation in one transaction:
    /// the referenced room and user must exist, and the participant
    /// count must not exceed the room's capacity.
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation>;
    /// Lists reservations, optionally filtered by room and/or user.
    async fn find_all(&self, options: ReservationListOptions) -> AppResult<Vec<Reservation>>;
    /// Lists reservations whose `[start_time, end_time)` interval
    /// overlaps the given query interval.
    async fn find_overlapping(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Reservation>>;
    async fn find_by_id(&self, reservation_id: ReservationId)
        -> AppResult<Option<Reservation>>;
    /// Returns false when no reservation with the given id existed.
    async fn delete(&self, reservation_id: ReservationId) -> AppResult<bool>;
}
