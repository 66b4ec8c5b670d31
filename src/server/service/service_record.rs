//! Service record business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{car::CarRepository, service_record::ServiceRecordRepository},
    error::AppError,
    middleware::auth::AuthContext,
    model::service_record::{
        CreateServiceRecordParams, ServiceRecord, UpdateServiceRecordParams,
    },
};

const CAR_NOT_FOUND: &str = "Car not found";
const RECORD_NOT_FOUND: &str = "Service record not found";

pub struct ServiceRecordService<'a> {
    db: &'a DatabaseConnection,
    actor: &'a AuthContext,
}

impl<'a> ServiceRecordService<'a> {
    pub fn new(db: &'a DatabaseConnection, actor: &'a AuthContext) -> Self {
        Self { db, actor }
    }

    /// Adds an entry to a car's service history.
    ///
    /// # Returns
    /// - `Ok(ServiceRecord)` - The created record
    /// - `Err(AppError::NotFound)` - The car does not exist
    pub async fn create(
        &self,
        params: CreateServiceRecordParams,
    ) -> Result<ServiceRecord, AppError> {
        let record = ServiceRecordRepository::new(self.db)
            .create(params)
            .await?
            .ok_or_else(|| AppError::NotFound(CAR_NOT_FOUND.to_string()))?;

        tracing::info!(
            "User {} added service record {} to car {}",
            self.actor.user_id,
            record.id,
            record.car_id
        );

        Ok(record)
    }

    pub async fn get_all(&self) -> Result<Vec<ServiceRecord>, AppError> {
        Ok(ServiceRecordRepository::new(self.db).get_all().await?)
    }

    /// Gets a car's service history.
    ///
    /// # Returns
    /// - `Ok(Vec<ServiceRecord>)` - Records by service date, newest first
    /// - `Err(AppError::NotFound)` - The car does not exist
    pub async fn get_by_car(&self, car_id: i32) -> Result<Vec<ServiceRecord>, AppError> {
        if !CarRepository::new(self.db).exists(car_id).await? {
            return Err(AppError::NotFound(CAR_NOT_FOUND.to_string()));
        }

        Ok(ServiceRecordRepository::new(self.db)
            .get_by_car(car_id)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ServiceRecord, AppError> {
        ServiceRecordRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(RECORD_NOT_FOUND.to_string()))
    }

    pub async fn update(
        &self,
        params: UpdateServiceRecordParams,
    ) -> Result<ServiceRecord, AppError> {
        let record = ServiceRecordRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(RECORD_NOT_FOUND.to_string()))?;

        tracing::info!(
            "User {} updated service record {}",
            self.actor.user_id,
            record.id
        );

        Ok(record)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ServiceRecordRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(RECORD_NOT_FOUND.to_string()));
        }

        tracing::info!("User {} deleted service record {}", self.actor.user_id, id);

        Ok(())
    }
}
