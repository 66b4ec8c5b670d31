//! Car data repository.
//!
//! Cars are always read together with their owner through `find_also_related`, so every
//! domain `Car` carries the owner's display name. Creating a car checks the owner inside
//! the same transaction as the insert.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::car::{Car, CreateCarParams, UpdateCarParams};

pub struct CarRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a car for an existing user.
    ///
    /// The owner lookup and the insert share one transaction. Returning early drops the
    /// transaction, which rolls it back.
    ///
    /// # Returns
    /// - `Ok(Some(Car))` - The created car joined with its owner
    /// - `Ok(None)` - The owning user does not exist; nothing was inserted
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn create(&self, params: CreateCarParams) -> Result<Option<Car>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(owner) = entity::prelude::User::find_by_id(params.user_id)
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        let car = entity::car::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            brand: ActiveValue::Set(params.brand),
            model: ActiveValue::Set(params.model),
            year: ActiveValue::Set(params.year),
            plate: ActiveValue::Set(params.plate),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Some(Car::from_entity(car, Some(owner))))
    }

    /// Gets all cars joined with their owner, newest first.
    pub async fn get_all(&self) -> Result<Vec<Car>, DbErr> {
        let cars = entity::prelude::Car::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::car::Column::Id)
            .all(self.db)
            .await?;

        Ok(cars
            .into_iter()
            .map(|(car, owner)| Car::from_entity(car, owner))
            .collect())
    }

    /// Gets the cars owned by one user, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Car>, DbErr> {
        let cars = entity::prelude::Car::find()
            .filter(entity::car::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::car::Column::Id)
            .all(self.db)
            .await?;

        Ok(cars
            .into_iter()
            .map(|(car, owner)| Car::from_entity(car, owner))
            .collect())
    }

    /// Gets a car by ID joined with its owner.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Car>, DbErr> {
        let car = entity::prelude::Car::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(car.map(|(car, owner)| Car::from_entity(car, owner)))
    }

    /// Updates brand, model, year and plate. The owner is never changed.
    ///
    /// # Returns
    /// - `Ok(Some(Car))` - The updated car joined with its owner
    /// - `Ok(None)` - No car with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateCarParams) -> Result<Option<Car>, DbErr> {
        let Some((car, owner)) = entity::prelude::Car::find_by_id(params.id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::car::ActiveModel = car.into();
        active.brand = ActiveValue::Set(params.brand);
        active.model = ActiveValue::Set(params.model);
        active.year = ActiveValue::Set(params.year);
        active.plate = ActiveValue::Set(params.plate);

        match active.update(self.db).await {
            Ok(updated) => Ok(Some(Car::from_entity(updated, owner))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Deletes a car along with its service records and documents.
    ///
    /// # Returns
    /// - `Ok(true)` - Car deleted
    /// - `Ok(false)` - No car with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Car::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Car::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }
}
