pub use super::car::Entity as Car;
pub use super::car_document::Entity as CarDocument;
pub use super::service_record::Entity as ServiceRecord;
pub use super::user::Entity as User;
