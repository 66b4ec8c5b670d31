//! Car factory for creating test car entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cars owned by an existing user.
///
/// # Example
///
/// ```rust,ignore
/// let car = CarFactory::new(&db, user.id)
///     .brand("Toyota")
///     .model("Yaris")
///     .year(2020)
///     .build()
///     .await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    brand: String,
    model: String,
    year: i32,
    plate: Option<String>,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - brand: `"Brand {id}"`
    /// - model: `"Model {id}"`
    /// - year: `2020`
    /// - plate: `Some("PLT-{id}")`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            brand: format!("Brand {}", id),
            model: format!("Model {}", id),
            year: 2020,
            plate: Some(format!("PLT-{}", id)),
        }
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn plate(mut self, plate: Option<String>) -> Self {
        self.plate = plate;
        self
    }

    /// Builds and inserts the car entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::car::Model)` - Created car entity
    /// - `Err(DbErr)` - Database error during insert (including a missing owner)
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            brand: ActiveValue::Set(self.brand),
            model: ActiveValue::Set(self.model),
            year: ActiveValue::Set(self.year),
            plate: ActiveValue::Set(self.plate),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a car with default values owned by `user_id`.
pub async fn create_car(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db, user_id).build().await
}
