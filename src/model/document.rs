use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A regulatory document (registration, insurance, ...) attached to a car.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CarDocumentDto {
    pub id: i32,
    pub car_id: i32,
    pub document_type: String,
    pub folio: String,
    pub expiration_date: String,
    pub notes: Option<String>,
}

/// Document row for the global view, joined through its car and the car's owner.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DocumentOverviewDto {
    pub id: i32,
    pub car_id: i32,
    pub document_type: String,
    pub folio: String,
    pub expiration_date: String,
    pub notes: Option<String>,
    pub brand: String,
    pub model: String,
    pub plate: Option<String>,
    pub owner_name: String,
}
