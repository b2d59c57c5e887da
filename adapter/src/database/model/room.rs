use kernel::model::{id::RoomId, room::Room};

#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub location: String,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            id,
            name,
            capacity,
            location,
        } = value;
        Room {
            id,
            name,
            capacity,
            location,
        }
    }
}
