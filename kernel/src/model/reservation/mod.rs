use crate::model::id::{ReservationId, RoomId, UserId};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone)]
pub struct Reservation {
    pub id: ReservationId,
    pub room_id: RoomId,
    pub user_id: UserId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub participants: i32,
    pub room: ReservationRoom,
    pub user: ReservationUser,
}

/// Room fields carried along with a reservation read.
#[derive(Debug, Clone)]
pub struct ReservationRoom {
    pub name: String,
    pub capacity: i32,
    pub location: String,
}

/// User fields carried along with a reservation read.
#[derive(Debug, Clone)]
pub struct ReservationUser {
    pub name: String,
    pub email: String,
}
