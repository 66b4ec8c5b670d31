use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ServiceRecordDto {
    pub id: i32,
    pub car_id: i32,
    pub service_type: String,
    pub service_date: String,
    pub mileage: i32,
    pub cost: f64,
}
