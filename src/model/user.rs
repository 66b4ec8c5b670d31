use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public projection of a user. Never carries the credential.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Body returned by a successful JSON login.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct LoginDto {
    pub message: String,
    pub user: UserDto,
}
