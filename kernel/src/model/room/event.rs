use derive_new::new;

#[derive(Debug, new)]
pub struct CreateRoom {
    pub name: String,
    pub capacity: i32,
    pub location: String,
}

impl CreateRoom {
    pub fn normalized_name(&self) -> String {
        super::normalize_name(&self.name)
    }
}

#[derive(Debug, Default)]
pub struct RoomListOptions {
    pub name: Option<String>,
}
