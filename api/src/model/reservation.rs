use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{ReservationId, RoomId, UserId},
    reservation::{
        event::{CreateReservation, ReservationListOptions},
        Reservation, ReservationRoom, ReservationUser,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateReservationRequest {
    #[garde(skip)]
    pub id_sala: RoomId,
    #[garde(skip)]
    pub id_usuario: UserId,
    #[garde(skip)]
    pub data_inicio: DateTime<Utc>,
    #[garde(skip)]
    pub data_final: DateTime<Utc>,
    #[garde(range(min = 0))]
    #[serde(default)]
    pub participantes: i32,
}

impl From<CreateReservationRequest> for CreateReservation {
    fn from(value: CreateReservationRequest) -> Self {
        let CreateReservationRequest {
            id_sala,
            id_usuario,
            data_inicio,
            data_final,
            participantes,
        } = value;
        CreateReservation {
            room_id: id_sala,
            user_id: id_usuario,
            start_time: data_inicio,
            end_time: data_final,
            participants: participantes,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct ReservationListQuery {
    pub id_sala: Option<RoomId>,
    pub id_usuario: Option<UserId>,
}

impl From<ReservationListQuery> for ReservationListOptions {
    fn from(value: ReservationListQuery) -> Self {
        ReservationListOptions {
            room_id: value.id_sala,
            user_id: value.id_usuario,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    pub data_inicio: DateTime<Utc>,
    pub data_final: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    pub id: ReservationId,
    pub id_sala: RoomId,
    pub id_usuario: UserId,
    pub data_inicio: DateTime<Utc>,
    pub data_final: DateTime<Utc>,
    pub participantes: i32,
    pub sala: ReservationRoomResponse,
    pub usuario: ReservationUserResponse,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            id,
            room_id,
            user_id,
            start_time,
            end_time,
            participants,
            room,
            user,
        } = value;
        Self {
            id,
            id_sala: room_id,
            id_usuario: user_id,
            data_inicio: start_time,
            data_final: end_time,
            participantes: participants,
            sala: room.into(),
            usuario: user.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReservationRoomResponse {
    pub nome: String,
    pub capacidade: i32,
    pub localizacao: String,
}

impl From<ReservationRoom> for ReservationRoomResponse {
    fn from(value: ReservationRoom) -> Self {
        let ReservationRoom {
            name,
            capacity,
            location,
        } = value;
        Self {
            nome: name,
            capacidade: capacity,
            localizacao: location,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReservationUserResponse {
    pub nome: String,
    pub email: String,
}

impl From<ReservationUser> for ReservationUserResponse {
    fn from(value: ReservationUser) -> Self {
        let ReservationUser { name, email } = value;
        Self {
            nome: name,
            email,
        }
    }
}
