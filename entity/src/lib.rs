//! SeaORM entities for the carledger schema.

pub mod prelude;

pub mod car;
pub mod car_document;
pub mod service_record;
pub mod user;
