use serde::{Deserialize, Serialize};

use crate::domain::{User, UserCreate};

/// Wire form of a stored user record.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Body of a `POST /users` request.
///
/// Fields default to empty strings so a missing field reaches the registry
/// as an empty value and fails presence validation there, instead of being
/// rejected by the decoder with a less specific message.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl From<CreateUserRequest> for UserCreate {
    fn from(request: CreateUserRequest) -> Self {
        UserCreate::new(request.name, request.email)
    }
}
