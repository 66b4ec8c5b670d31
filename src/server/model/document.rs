//! Car document domain models and parameters.
//!
//! Documents are regulatory papers (registration, insurance, inspection) attached to a
//! car. The global overview joins each document through its car to the car's owner.

use crate::{
    model::document::{CarDocumentDto, DocumentOverviewDto},
    server::{error::AppError, model::service_record::CAR_ID, util::input::Payload},
};

const DOCUMENT_TYPE: &[&str] = &["document_type", "doc_type", "type", "tipo"];
const FOLIO: &[&str] = &["folio", "number", "document_number"];
const EXPIRATION_DATE: &[&str] = &["expiration_date", "expires_at", "expiry_date", "vencimiento"];
const NOTES: &[&str] = &["notes", "note", "comments", "notas"];

#[derive(Debug, Clone, PartialEq)]
pub struct CarDocument {
    pub id: i32,
    pub car_id: i32,
    pub document_type: String,
    /// Identifier printed on the document.
    pub folio: String,
    pub expiration_date: String,
    pub notes: Option<String>,
}

impl CarDocument {
    pub fn into_dto(self) -> CarDocumentDto {
        CarDocumentDto {
            id: self.id,
            car_id: self.car_id,
            document_type: self.document_type,
            folio: self.folio,
            expiration_date: self.expiration_date,
            notes: self.notes,
        }
    }

    pub fn from_entity(entity: entity::car_document::Model) -> Self {
        Self {
            id: entity.id,
            car_id: entity.car_id,
            document_type: entity.document_type,
            folio: entity.folio,
            expiration_date: entity.expiration_date,
            notes: entity.notes,
        }
    }
}

/// Document joined with its car and the car's owner.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentOverview {
    pub document: CarDocument,
    pub brand: String,
    pub model: String,
    pub plate: Option<String>,
    pub owner_name: String,
}

impl DocumentOverview {
    pub fn into_dto(self) -> DocumentOverviewDto {
        DocumentOverviewDto {
            id: self.document.id,
            car_id: self.document.car_id,
            document_type: self.document.document_type,
            folio: self.document.folio,
            expiration_date: self.document.expiration_date,
            notes: self.document.notes,
            brand: self.brand,
            model: self.model,
            plate: self.plate,
            owner_name: self.owner_name,
        }
    }
}

/// Fields shared by create and update.
#[derive(Debug, Clone)]
pub struct CarDocumentFields {
    pub document_type: String,
    pub folio: String,
    pub expiration_date: String,
    pub notes: Option<String>,
}

impl CarDocumentFields {
    fn from_payload(payload: &Payload) -> Result<Self, AppError> {
        payload.check_required(&[DOCUMENT_TYPE, FOLIO, EXPIRATION_DATE])?;

        Ok(Self {
            document_type: payload.required_text(DOCUMENT_TYPE)?,
            folio: payload.required_text(FOLIO)?,
            expiration_date: payload.required_text(EXPIRATION_DATE)?,
            notes: payload.text(NOTES),
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateCarDocumentParams {
    /// Must reference an existing car.
    pub car_id: i32,
    pub fields: CarDocumentFields,
}

impl CreateCarDocumentParams {
    /// Reads the parameters from a payload, taking the car id from the path when the
    /// route carries one and from the body otherwise.
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
            fields: CarDocumentFields::from_payload(payload)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCarDocumentParams {
    pub id: i32,
    pub fields: CarDocumentFields,
}

impl UpdateCarDocumentParams {
    pub fn from_payload(id: i32, payload: &Payload) -> Result<Self, AppError> {
        Ok(Self {
            id,
            fields: CarDocumentFields::from_payload(payload)?,
        })
    }
}
