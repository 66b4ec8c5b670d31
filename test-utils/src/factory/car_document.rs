//! Car document factory for creating test regulatory documents.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating documents attached to an existing car.
pub struct CarDocumentFactory<'a> {
    db: &'a DatabaseConnection,
    car_id: i32,
    document_type: String,
    folio: String,
    expiration_date: String,
    notes: Option<String>,
}

impl<'a> CarDocumentFactory<'a> {
    /// Creates a new CarDocumentFactory with default values.
    ///
    /// Defaults:
    /// - document_type: `"Insurance"`
    /// - folio: `"FOL-{id}"`
    /// - expiration_date: `"2025-12-31"`
    /// - notes: `None`
    pub fn new(db: &'a DatabaseConnection, car_id: i32) -> Self {
        Self {
            db,
            car_id,
            document_type: "Insurance".to_string(),
            folio: format!("FOL-{}", next_id()),
            expiration_date: "2025-12-31".to_string(),
            notes: None,
        }
    }

    pub fn document_type(mut self, document_type: impl Into<String>) -> Self {
        self.document_type = document_type.into();
        self
    }

    pub fn folio(mut self, folio: impl Into<String>) -> Self {
        self.folio = folio.into();
        self
    }

    pub fn expiration_date(mut self, expiration_date: impl Into<String>) -> Self {
        self.expiration_date = expiration_date.into();
        self
    }

    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Builds and inserts the document into the database.
    pub async fn build(self) -> Result<entity::car_document::Model, DbErr> {
        entity::car_document::ActiveModel {
            car_id: ActiveValue::Set(self.car_id),
            document_type: ActiveValue::Set(self.document_type),
            folio: ActiveValue::Set(self.folio),
            expiration_date: ActiveValue::Set(self.expiration_date),
            notes: ActiveValue::Set(self.notes),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a document with default values for `car_id`.
pub async fn create_car_document(
    db: &DatabaseConnection,
    car_id: i32,
) -> Result<entity::car_document::Model, DbErr> {
    CarDocumentFactory::new(db, car_id).build().await
}
