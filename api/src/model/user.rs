use garde::Validate;
use kernel::model::{
    id::UserId,
    user::{event::CreateUser, User},
};
use serde::{Deserialize, Serialize};

// Wire field names follow the public API contract (Portuguese);
// the domain layer uses the English names.

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[garde(length(min = 1))]
    pub nome: String,
    #[garde(email)]
    pub email: String,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest { nome, email } = value;
        CreateUser { name: nome, email }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub nome: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User { id, name, email } = value;
        Self {
            id,
            nome: name,
            email,
        }
    }
}
