//! Car document business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{car::CarRepository, car_document::CarDocumentRepository},
    error::AppError,
    middleware::auth::AuthContext,
    model::document::{
        CarDocument, CreateCarDocumentParams, DocumentOverview, UpdateCarDocumentParams,
    },
};

const CAR_NOT_FOUND: &str = "Car not found";
const DOCUMENT_NOT_FOUND: &str = "Document not found";

pub struct CarDocumentService<'a> {
    db: &'a DatabaseConnection,
    actor: &'a AuthContext,
}

impl<'a> CarDocumentService<'a> {
    pub fn new(db: &'a DatabaseConnection, actor: &'a AuthContext) -> Self {
        Self { db, actor }
    }

    /// Attaches a document to a car.
    ///
    /// # Returns
    /// - `Ok(CarDocument)` - The created document
    /// - `Err(AppError::NotFound)` - The car does not exist
    pub async fn create(&self, params: CreateCarDocumentParams) -> Result<CarDocument, AppError> {
        let document = CarDocumentRepository::new(self.db)
            .create(params)
            .await?
            .ok_or_else(|| AppError::NotFound(CAR_NOT_FOUND.to_string()))?;

        tracing::info!(
            "User {} attached document {} to car {}",
            self.actor.user_id,
            document.id,
            document.car_id
        );

        Ok(document)
    }

    /// Gets every document with its car and owner, latest expiration first.
    pub async fn get_overview(&self) -> Result<Vec<DocumentOverview>, AppError> {
        Ok(CarDocumentRepository::new(self.db).get_overview().await?)
    }

    /// # Returns
    /// - `Ok(Vec<CarDocument>)` - The car's documents, latest expiration first
    /// - `Err(AppError::NotFound)` - The car does not exist
    pub async fn get_by_car(&self, car_id: i32) -> Result<Vec<CarDocument>, AppError> {
        if !CarRepository::new(self.db).exists(car_id).await? {
            return Err(AppError::NotFound(CAR_NOT_FOUND.to_string()));
        }

        Ok(CarDocumentRepository::new(self.db).get_by_car(car_id).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<CarDocument, AppError> {
        CarDocumentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(DOCUMENT_NOT_FOUND.to_string()))
    }

    pub async fn update(&self, params: UpdateCarDocumentParams) -> Result<CarDocument, AppError> {
        let document = CarDocumentRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(DOCUMENT_NOT_FOUND.to_string()))?;

        tracing::info!("User {} updated document {}", self.actor.user_id, document.id);

        Ok(document)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CarDocumentRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(DOCUMENT_NOT_FOUND.to_string()));
        }

        tracing::info!("User {} deleted document {}", self.actor.user_id, id);

        Ok(())
    }
}
