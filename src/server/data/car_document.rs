//! Car document data repository.
//!
//! Documents are ordered by expiration date, latest first, then by id. The global
//! overview joins every document through its car to the owning user.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Select, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::model::document::{
    CarDocument, CreateCarDocumentParams, DocumentOverview, UpdateCarDocumentParams,
};

pub struct CarDocumentRepository<'a> {
    db: &'a DatabaseConnection,
}

fn expiration_order(
    select: Select<entity::car_document::Entity>,
) -> Select<entity::car_document::Entity> {
    select
        .order_by_desc(entity::car_document::Column::ExpirationDate)
        .order_by_desc(entity::car_document::Column::Id)
}

impl<'a> CarDocumentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a document for an existing car.
    ///
    /// # Returns
    /// - `Ok(Some(CarDocument))` - The created document
    /// - `Ok(None)` - The car does not exist; nothing was inserted
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn create(
        &self,
        params: CreateCarDocumentParams,
    ) -> Result<Option<CarDocument>, DbErr> {
        let txn = self.db.begin().await?;

        if entity::prelude::Car::find_by_id(params.car_id)
            .one(&txn)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let fields = params.fields;
        let document = entity::car_document::ActiveModel {
            car_id: ActiveValue::Set(params.car_id),
            document_type: ActiveValue::Set(fields.document_type),
            folio: ActiveValue::Set(fields.folio),
            expiration_date: ActiveValue::Set(fields.expiration_date),
            notes: ActiveValue::Set(fields.notes),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Some(CarDocument::from_entity(document)))
    }

    /// Gets the documents of one car.
    pub async fn get_by_car(&self, car_id: i32) -> Result<Vec<CarDocument>, DbErr> {
        let documents = expiration_order(
            entity::prelude::CarDocument::find()
                .filter(entity::car_document::Column::CarId.eq(car_id)),
        )
        .all(self.db)
        .await?;

        Ok(documents.into_iter().map(CarDocument::from_entity).collect())
    }

    /// Gets every document joined with its car and the car's owner.
    pub async fn get_overview(&self) -> Result<Vec<DocumentOverview>, DbErr> {
        let documents = expiration_order(entity::prelude::CarDocument::find())
            .find_also_related(entity::prelude::Car)
            .all(self.db)
            .await?;

        // Fetch all owners in one query
        let user_ids: Vec<i32> = documents
            .iter()
            .filter_map(|(_, car)| car.as_ref().map(|c| c.user_id))
            .collect();
        let owners: HashMap<i32, String> = if !user_ids.is_empty() {
            entity::prelude::User::find()
                .filter(entity::user::Column::Id.is_in(user_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|u| (u.id, u.name))
                .collect()
        } else {
            HashMap::new()
        };

        Ok(documents
            .into_iter()
            .map(|(document, car)| {
                let (brand, model, plate, owner_name) = match car {
                    Some(car) => {
                        let owner_name = owners.get(&car.user_id).cloned().unwrap_or_default();
                        (car.brand, car.model, car.plate, owner_name)
                    }
                    None => (String::new(), String::new(), None, String::new()),
                };

                DocumentOverview {
                    document: CarDocument::from_entity(document),
                    brand,
                    model,
                    plate,
                    owner_name,
                }
            })
            .collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<CarDocument>, DbErr> {
        let document = entity::prelude::CarDocument::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(document.map(CarDocument::from_entity))
    }

    /// Updates a document in place. The owning car is never changed.
    ///
    /// # Returns
    /// - `Ok(Some(CarDocument))` - The updated document
    /// - `Ok(None)` - No document with that ID
    pub async fn update(
        &self,
        params: UpdateCarDocumentParams,
    ) -> Result<Option<CarDocument>, DbErr> {
        let Some(document) = entity::prelude::CarDocument::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let fields = params.fields;
        let mut active: entity::car_document::ActiveModel = document.into();
        active.document_type = ActiveValue::Set(fields.document_type);
        active.folio = ActiveValue::Set(fields.folio);
        active.expiration_date = ActiveValue::Set(fields.expiration_date);
        active.notes = ActiveValue::Set(fields.notes);

        match active.update(self.db).await {
            Ok(updated) => Ok(Some(CarDocument::from_entity(updated))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CarDocument::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
