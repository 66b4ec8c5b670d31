//! Factory methods for creating test data.
//!
//! Factories create entities with sensible defaults and handle the parent rows each
//! entity needs, keeping tests concise.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let car = factory::car::create_car(&db, user.id).await?;
//!
//! // Or with every parent created on the fly
//! let (user, car) = factory::helpers::create_car_with_owner(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("ana@x.com")
//!     .password("legacy-plaintext")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `car` - Create car entities owned by a user
//! - `service_record` - Create service records for a car
//! - `car_document` - Create documents for a car
//! - `helpers` - Unique id counter and multi-entity helpers

pub mod car;
pub mod car_document;
pub mod helpers;
pub mod service_record;
pub mod user;

pub use car::create_car;
pub use car_document::create_car_document;
pub use helpers::create_car_with_owner;
pub use service_record::create_service_record;
pub use user::create_user;
