use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every JSON endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Confirmation body for updates, deletes and logout.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Confirmation body for successful creates.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreatedDto {
    pub message: String,
    pub id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct HealthDto {
    pub status: String,
}
