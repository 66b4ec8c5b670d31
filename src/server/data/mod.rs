//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! entity of the ownership hierarchy. Repositories use SeaORM entity models internally and
//! return domain models to keep the data layer separate from business logic. Missing rows
//! are reported as `None`/`false`; turning them into errors is the service layer's job.

pub mod car;
pub mod car_document;
pub mod service_record;
pub mod user;

#[cfg(test)]
mod test;
