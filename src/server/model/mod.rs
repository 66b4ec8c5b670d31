//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are read from a
//! request `Payload`, which is where required-field and numeric validation happens.

pub mod car;
pub mod document;
pub mod service_record;
pub mod user;
