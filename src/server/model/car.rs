//! Car domain models and parameters.
//!
//! Cars are always presented joined with their owner's display name. The owner is fixed
//! at creation: update parameters carry no `user_id`.

use crate::{
    model::car::CarDto,
    server::{error::AppError, util::input::Payload},
};

pub(crate) const USER_ID: &[&str] = &["user_id", "owner_id"];
const BRAND: &[&str] = &["brand"];
const MODEL: &[&str] = &["model"];
const YEAR: &[&str] = &["year"];
const PLATE: &[&str] = &["plate"];

/// Car joined with its owner's name.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: i32,
    pub user_id: i32,
    /// Display name of the owning user.
    pub user_name: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub plate: Option<String>,
}

impl Car {
    pub fn into_dto(self) -> CarDto {
        CarDto {
            id: self.id,
            user_id: self.user_id,
            user_name: self.user_name,
            brand: self.brand,
            model: self.model,
            year: self.year,
            plate: self.plate,
        }
    }

    /// Converts a car entity and its related owner into a domain model.
    ///
    /// # Arguments
    /// - `entity` - The car entity model
    /// - `owner` - The related user, as returned by `find_also_related`
    pub fn from_entity(entity: entity::car::Model, owner: Option<entity::user::Model>) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            user_name: owner.map(|user| user.name).unwrap_or_default(),
            brand: entity.brand,
            model: entity.model,
            year: entity.year,
            plate: entity.plate,
        }
    }
}

/// Parameters for creating a car.
#[derive(Debug, Clone)]
pub struct CreateCarParams {
    /// Owner; must reference an existing user.
    pub user_id: i32,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub plate: Option<String>,
}

impl CreateCarParams {
    /// Reads the parameters from a JSON or form payload.
    ///
    /// # Returns
    /// - `Ok(CreateCarParams)` - Every required field present and well-formed
    /// - `Err(AppError::Validation)` - Missing field, or a non-integer `user_id`/`year`
    pub fn from_payload(payload: &Payload) -> Result<Self, AppError> {
        payload.check_required(&[USER_ID, BRAND, MODEL, YEAR])?;

        Ok(Self {
            user_id: payload.required_integer(USER_ID)?,
            brand: payload.required_text(BRAND)?,
            model: payload.required_text(MODEL)?,
            year: payload.required_integer(YEAR)?,
            plate: payload.text(PLATE),
        })
    }
}

/// Parameters for updating a car in place.
#[derive(Debug, Clone)]
pub struct UpdateCarParams {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub plate: Option<String>,
}

impl UpdateCarParams {
    pub fn from_payload(id: i32, payload: &Payload) -> Result<Self, AppError> {
        payload.check_required(&[BRAND, MODEL, YEAR])?;

        Ok(Self {
            id,
            brand: payload.required_text(BRAND)?,
            model: payload.required_text(MODEL)?,
            year: payload.required_integer(YEAR)?,
            plate: payload.text(PLATE),
        })
    }
}
