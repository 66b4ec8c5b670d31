//! Service record data repository.
//!
//! Service history is ordered by service date, newest first, with the id as a tiebreaker
//! for records sharing a date.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Select, TransactionTrait,
};

use crate::server::model::service_record::{
    CreateServiceRecordParams, ServiceRecord, UpdateServiceRecordParams,
};

pub struct ServiceRecordRepository<'a> {
    db: &'a DatabaseConnection,
}

/// Applies the history ordering: service date descending, then id descending.
fn history_order(
    select: Select<entity::service_record::Entity>,
) -> Select<entity::service_record::Entity> {
    select
        .order_by_desc(entity::service_record::Column::ServiceDate)
        .order_by_desc(entity::service_record::Column::Id)
}

impl<'a> ServiceRecordRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a service record for an existing car.
    ///
    /// # Returns
    /// - `Ok(Some(ServiceRecord))` - The created record
    /// - `Ok(None)` - The car does not exist; nothing was inserted
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn create(
        &self,
        params: CreateServiceRecordParams,
    ) -> Result<Option<ServiceRecord>, DbErr> {
        let txn = self.db.begin().await?;

        if entity::prelude::Car::find_by_id(params.car_id)
            .one(&txn)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let fields = params.fields;
        let record = entity::service_record::ActiveModel {
            car_id: ActiveValue::Set(params.car_id),
            service_type: ActiveValue::Set(fields.service_type),
            service_date: ActiveValue::Set(fields.service_date),
            mileage: ActiveValue::Set(fields.mileage),
            cost: ActiveValue::Set(fields.cost),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Some(ServiceRecord::from_entity(record)))
    }

    /// Gets every service record across all cars in history order.
    pub async fn get_all(&self) -> Result<Vec<ServiceRecord>, DbErr> {
        let records = history_order(entity::prelude::ServiceRecord::find())
            .all(self.db)
            .await?;

        Ok(records.into_iter().map(ServiceRecord::from_entity).collect())
    }

    /// Gets the service history of one car.
    pub async fn get_by_car(&self, car_id: i32) -> Result<Vec<ServiceRecord>, DbErr> {
        let records = history_order(
            entity::prelude::ServiceRecord::find()
                .filter(entity::service_record::Column::CarId.eq(car_id)),
        )
        .all(self.db)
        .await?;

        Ok(records.into_iter().map(ServiceRecord::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ServiceRecord>, DbErr> {
        let record = entity::prelude::ServiceRecord::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(record.map(ServiceRecord::from_entity))
    }

    /// Updates a record in place. The owning car is never changed.
    ///
    /// # Returns
    /// - `Ok(Some(ServiceRecord))` - The updated record
    /// - `Ok(None)` - No record with that ID
    pub async fn update(
        &self,
        params: UpdateServiceRecordParams,
    ) -> Result<Option<ServiceRecord>, DbErr> {
        let Some(record) = entity::prelude::ServiceRecord::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let fields = params.fields;
        let mut active: entity::service_record::ActiveModel = record.into();
        active.service_type = ActiveValue::Set(fields.service_type);
        active.service_date = ActiveValue::Set(fields.service_date);
        active.mileage = ActiveValue::Set(fields.mileage);
        active.cost = ActiveValue::Set(fields.cost);

        match active.update(self.db).await {
            Ok(updated) => Ok(Some(ServiceRecord::from_entity(updated))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// # Returns
    /// - `Ok(true)` - Record deleted
    /// - `Ok(false)` - No record with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ServiceRecord::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
