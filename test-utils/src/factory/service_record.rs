//! Service record factory for creating test maintenance entries.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating service records for an existing car.
pub struct ServiceRecordFactory<'a> {
    db: &'a DatabaseConnection,
    car_id: i32,
    service_type: String,
    service_date: String,
    mileage: i32,
    cost: f64,
}

impl<'a> ServiceRecordFactory<'a> {
    /// Creates a new ServiceRecordFactory with default values.
    ///
    /// Defaults:
    /// - service_type: `"Oil change"`
    /// - service_date: `"2024-01-15"`
    /// - mileage: `10000`
    /// - cost: `49.99`
    pub fn new(db: &'a DatabaseConnection, car_id: i32) -> Self {
        Self {
            db,
            car_id,
            service_type: "Oil change".to_string(),
            service_date: "2024-01-15".to_string(),
            mileage: 10000,
            cost: 49.99,
        }
    }

    pub fn service_type(mut self, service_type: impl Into<String>) -> Self {
        self.service_type = service_type.into();
        self
    }

    pub fn service_date(mut self, service_date: impl Into<String>) -> Self {
        self.service_date = service_date.into();
        self
    }

    pub fn mileage(mut self, mileage: i32) -> Self {
        self.mileage = mileage;
        self
    }

    pub fn cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    /// Builds and inserts the service record into the database.
    pub async fn build(self) -> Result<entity::service_record::Model, DbErr> {
        entity::service_record::ActiveModel {
            car_id: ActiveValue::Set(self.car_id),
            service_type: ActiveValue::Set(self.service_type),
            service_date: ActiveValue::Set(self.service_date),
            mileage: ActiveValue::Set(self.mileage),
            cost: ActiveValue::Set(self.cost),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a service record with default values for `car_id`.
pub async fn create_service_record(
    db: &DatabaseConnection,
    car_id: i32,
) -> Result<entity::service_record::Model, DbErr> {
    ServiceRecordFactory::new(db, car_id).build().await
}
