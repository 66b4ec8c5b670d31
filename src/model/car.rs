use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Car joined with its owner's display name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CarDto {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub plate: Option<String>,
}
