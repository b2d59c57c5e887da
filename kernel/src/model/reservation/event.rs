use crate::model::id::{RoomId, UserId};
use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateReservation {
    pub room_id: RoomId,
    pub user_id: UserId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub participants: i32,
}

#[derive(Debug, Default)]
pub struct ReservationListOptions {
    pub room_id: Option<RoomId>,
    pub user_id: Option<UserId>,
}
