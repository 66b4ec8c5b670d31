//! Request and response shapes shared by the JSON API and page contexts.

pub mod api;
pub mod car;
pub mod document;
pub mod service_record;
pub mod user;
