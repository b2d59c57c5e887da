use kernel::model::{
    id::{ReservationId, RoomId, UserId},
    reservation::{Reservation, ReservationRoom, ReservationUser},
};
use sqlx::types::chrono::{DateTime, Utc};

/// Reservation joined with its room and user, as produced by the
/// listing queries.
#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub id: ReservationId,
    pub room_id: RoomId,
    pub user_id: UserId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub participants: i32,
    pub room_name: String,
    pub room_capacity: i32,
    pub room_location: String,
    pub user_name: String,
    pub user_email: String,
}

impl From<ReservationRow> for Reservation {
    fn from(value: ReservationRow) -> Self {
        let ReservationRow {
            id,
            room_id,
            user_id,
            start_time,
            end_time,
            participants,
            room_name,
            room_capacity,
            room_location,
            user_name,
            user_email,
        } = value;
        Reservation {
            id,
            room_id,
            user_id,
            start_time,
            end_time,
            participants,
            room: ReservationRoom {
                name: room_name,
                capacity: room_capacity,
                location: room_location,
            },
            user: ReservationUser {
                name: user_name,
                email: user_email,
            },
        }
    }
}
