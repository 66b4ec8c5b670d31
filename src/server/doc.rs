//! OpenAPI document for the JSON API, served through Swagger UI at `/docs`.
//!
//! Browsing pages and the plain-text utility endpoint are left out; they are not part
//! of the machine-facing surface.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::model::{
    api::{CreatedDto, ErrorDto, HealthDto, MessageDto},
    car::CarDto,
    document::{CarDocumentDto, DocumentOverviewDto},
    service_record::ServiceRecordDto,
    user::{LoginDto, UserDto},
};

/// Registers the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "id",
                "Session cookie issued by POST /login.",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Carledger API",
        description = "Users, their cars, service history and regulatory documents."
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::server::controller::auth::register,
        crate::server::controller::auth::login,
        crate::server::controller::auth::logout,
        crate::server::controller::auth::me,
        crate::server::controller::user::create_user,
        crate::server::controller::user::get_users,
        crate::server::controller::user::get_user,
        crate::server::controller::user::update_user,
        crate::server::controller::user::delete_user,
        crate::server::controller::user::get_user_cars,
        crate::server::controller::car::create_car,
        crate::server::controller::car::get_cars,
        crate::server::controller::car::get_car,
        crate::server::controller::car::update_car,
        crate::server::controller::car::delete_car,
        crate::server::controller::service_record::create_service_record,
        crate::server::controller::service_record::create_car_service_record,
        crate::server::controller::service_record::get_service_records,
        crate::server::controller::service_record::get_car_service_records,
        crate::server::controller::service_record::get_service_record,
        crate::server::controller::service_record::update_service_record,
        crate::server::controller::service_record::delete_service_record,
        crate::server::controller::document::create_document,
        crate::server::controller::document::create_car_document,
        crate::server::controller::document::get_documents,
        crate::server::controller::document::get_car_documents,
        crate::server::controller::document::get_document,
        crate::server::controller::document::update_document,
        crate::server::controller::document::delete_document,
        crate::server::controller::system::health,
        crate::server::controller::system::init_db,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        CreatedDto,
        HealthDto,
        UserDto,
        LoginDto,
        CarDto,
        ServiceRecordDto,
        CarDocumentDto,
        DocumentOverviewDto
    )),
    tags(
        (name = "auth", description = "Registration, login and the current session"),
        (name = "user", description = "User accounts"),
        (name = "car", description = "Cars and their owners"),
        (name = "service_record", description = "Maintenance history"),
        (name = "document", description = "Regulatory documents and expirations"),
        (name = "system", description = "Health and maintenance")
    )
)]
pub struct ApiDoc;
