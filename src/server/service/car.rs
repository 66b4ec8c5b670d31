//! Car service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{car::CarRepository, user::UserRepository},
    error::AppError,
    middleware::auth::AuthContext,
    model::car::{Car, CreateCarParams, UpdateCarParams},
};

const CAR_NOT_FOUND: &str = "Car not found";
const USER_NOT_FOUND: &str = "User not found";

pub struct CarService<'a> {
    db: &'a DatabaseConnection,
    actor: &'a AuthContext,
}

impl<'a> CarService<'a> {
    pub fn new(db: &'a DatabaseConnection, actor: &'a AuthContext) -> Self {
        Self { db, actor }
    }

    /// Creates a car for an existing user.
    ///
    /// # Returns
    /// - `Ok(Car)` - The created car joined with its owner
    /// - `Err(AppError::NotFound)` - The owning user does not exist
    pub async fn create(&self, params: CreateCarParams) -> Result<Car, AppError> {
        let user_id = params.user_id;

        let car = CarRepository::new(self.db)
            .create(params)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        tracing::info!(
            "User {} created car {} for user {}",
            self.actor.user_id,
            car.id,
            user_id
        );

        Ok(car)
    }

    pub async fn get_all(&self) -> Result<Vec<Car>, AppError> {
        Ok(CarRepository::new(self.db).get_all().await?)
    }

    /// Lists the cars of one user.
    ///
    /// # Returns
    /// - `Ok(Vec<Car>)` - The user's cars, possibly empty
    /// - `Err(AppError::NotFound)` - The user does not exist
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Car>, AppError> {
        if !UserRepository::new(self.db).exists(user_id).await? {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        Ok(CarRepository::new(self.db).get_by_user(user_id).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Car, AppError> {
        CarRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(CAR_NOT_FOUND.to_string()))
    }

    pub async fn update(&self, params: UpdateCarParams) -> Result<Car, AppError> {
        let car = CarRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(CAR_NOT_FOUND.to_string()))?;

        tracing::info!("User {} updated car {}", self.actor.user_id, car.id);

        Ok(car)
    }

    /// Deletes a car together with its service records and documents.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CarRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(CAR_NOT_FOUND.to_string()));
        }

        tracing::info!("User {} deleted car {}", self.actor.user_id, id);

        Ok(())
    }
}
