use garde::Validate;
use kernel::model::{
    id::RoomId,
    room::{
        event::{CreateRoom, RoomListOptions},
        Room,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoomRequest {
    #[garde(length(min = 1))]
    pub nome: String,
    #[garde(range(min = 1))]
    pub capacidade: i32,
    #[garde(skip)]
    pub localizacao: String,
}

impl From<CreateRoomRequest> for CreateRoom {
    fn from(value: CreateRoomRequest) -> Self {
        let CreateRoomRequest {
            nome,
            capacidade,
            localizacao,
        } = value;
        CreateRoom {
            name: nome,
            capacity: capacidade,
            location: localizacao,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RoomListQuery {
    pub nome: Option<String>,
}

impl From<RoomListQuery> for RoomListOptions {
    fn from(value: RoomListQuery) -> Self {
        RoomListOptions { name: value.nome }
    }
}

#[derive(Debug, Serialize)]
pub struct RoomResponse {
    pub id: RoomId,
    pub nome: String,
    pub capacidade: i32,
    pub localizacao: String,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            id,
            name,
            capacity,
            location,
        } = value;
        Self {
            id,
            nome: name,
            capacidade: capacity,
            localizacao: location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_fails_validation() {
        let req: CreateRoomRequest = serde_json::from_str(
            r#"{"nome": "Lab A", "capacidade": 0, "localizacao": "Bloco B"}"#,
        )
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn response_keeps_the_wire_field_names() {
        let room = Room {
            id: RoomId::new(1),
            name: "lab a".into(),
            capacity: 10,
            location: "Bloco B".into(),
        };
        let json = serde_json::to_value(RoomResponse::from(room)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "nome": "lab a",
                "capacidade": 10,
                "localizacao": "Bloco B"
            })
        );
    }
}
