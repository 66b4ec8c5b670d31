//! Service record domain models and parameters.

use crate::{
    model::service_record::ServiceRecordDto,
    server::{error::AppError, util::input::Payload},
};

pub(crate) const CAR_ID: &[&str] = &["car_id", "car"];
const SERVICE_TYPE: &[&str] = &["service_type", "type", "service", "tipo"];
const SERVICE_DATE: &[&str] = &["service_date", "date", "fecha"];
const MILEAGE: &[&str] = &["mileage", "km", "kilometraje"];
const COST: &[&str] = &["cost", "price", "costo"];

/// Maintenance entry in a car's service history.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRecord {
    pub id: i32,
    pub car_id: i32,
    pub service_type: String,
    /// ISO-like date string, compared lexically when ordering.
    pub service_date: String,
    pub mileage: i32,
    pub cost: f64,
}

impl ServiceRecord {
    pub fn into_dto(self) -> ServiceRecordDto {
        ServiceRecordDto {
            id: self.id,
            car_id: self.car_id,
            service_type: self.service_type,
            service_date: self.service_date,
            mileage: self.mileage,
            cost: self.cost,
        }
    }

    pub fn from_entity(entity: entity::service_record::Model) -> Self {
        Self {
            id: entity.id,
            car_id: entity.car_id,
            service_type: entity.service_type,
            service_date: entity.service_date,
            mileage: entity.mileage,
            cost: entity.cost,
        }
    }
}

/// Fields shared by create and update.
#[derive(Debug, Clone)]
pub struct ServiceRecordFields {
    pub service_type: String,
    pub service_date: String,
    pub mileage: i32,
    pub cost: f64,
}

impl ServiceRecordFields {
    fn from_payload(payload: &Payload) -> Result<Self, AppError> {
        payload.check_required(&[SERVICE_TYPE, SERVICE_DATE, MILEAGE, COST])?;

        Ok(Self {
            service_type: payload.required_text(SERVICE_TYPE)?,
            service_date: payload.required_text(SERVICE_DATE)?,
            mileage: payload.required_integer(MILEAGE)?,
            cost: payload.required_number(COST)?,
        })
    }
}

/// Parameters for creating a service record.
#[derive(Debug, Clone)]
pub struct CreateServiceRecordParams {
    /// Must reference an existing car.
    pub car_id: i32,
    pub fields: ServiceRecordFields,
}

impl CreateServiceRecordParams {
    /// Reads the parameters from a payload.
    ///
    /// # Arguments
    /// - `car_id` - Car id taken from the path, if the route carries one; otherwise the
    ///   body's `car_id` (or `car`) field is required
    /// - `payload` - JSON or form payload
    pub fn from_payload(car_id: Option<i32>, payload: &Payload) -> Result<Self, AppError> {
        let car_id = match car_id {
            Some(id) => id,
            None => {
                payload.check_required(&[CAR_ID])?;
                payload.required_integer(CAR_ID)?
            }
        };

        Ok(Self {
            car_id,
            fields: ServiceRecordFields::from_payload(payload)?,
        })
    }
}

/// Parameters for updating a service record. The owning car cannot change.
#[derive(Debug, Clone)]
pub struct UpdateServiceRecordParams {
    pub id: i32,
    pub fields: ServiceRecordFields,
}

impl UpdateServiceRecordParams {
    pub fn from_payload(id: i32, payload: &Payload) -> Result<Self, AppError> {
        Ok(Self {
            id,
            fields: ServiceRecordFields::from_payload(payload)?,
        })
    }
}
