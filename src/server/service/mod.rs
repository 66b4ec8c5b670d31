//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Rules**: Parent existence, credential checks and migration
//! - **Error Mapping**: Turning missing rows into `NotFound` and unique violations into `Conflict`
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Audit Logging**: Recording which authenticated user performed each change

pub mod auth;
pub mod car;
pub mod document;
pub mod service_record;
pub mod user;

#[cfg(test)]
mod test;
