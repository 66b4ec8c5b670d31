use axum::{
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{login, login_page, logout, logout_page, me, register, register_page},
        car::{create_car, delete_car, get_car, get_cars, update_car},
        document::{
            create_car_document, create_document, delete_document, get_car_documents,
            get_document, get_documents, update_document,
        },
        service_record::{
            create_car_service_record, create_service_record, delete_service_record,
            get_car_service_records, get_service_record, get_service_records,
            update_service_record,
        },
        system::{health, init_db, not_found},
        user::{create_user, delete_user, get_user, get_user_cars, get_users, update_user},
        view::{
            car_detail_page, cars_page, documents_page, home, CARS_PAGE, DOCUMENTS_PAGE,
            HOME_PAGE,
        },
    },
    doc::ApiDoc,
    middleware::auth::authorize,
    state::AppState,
};

/// Builds the application router.
///
/// Every route is wrapped by the access gate. Static files, the API docs and the 404
/// fallback are added after the gate and are never checked. The caller supplies the
/// session layer, which the gate and the auth handlers depend on.
pub fn router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        // Pages
        .route(HOME_PAGE, get(home))
        .route(CARS_PAGE, get(cars_page))
        .route("/view/cars/{id}", get(car_detail_page))
        .route(DOCUMENTS_PAGE, get(documents_page))
        // Auth
        .route("/register", get(register_page).post(register))
        .route("/login", get(login_page).post(login))
        .route("/logout", get(logout_page).post(logout))
        .route("/api/auth/me", get(me))
        // Users
        .route("/users", get(get_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/users/{id}/cars", get(get_user_cars))
        // Cars
        .route("/cars", get(get_cars).post(create_car))
        .route("/cars/{id}", get(get_car).put(update_car).delete(delete_car))
        .route(
            "/cars/{id}/services",
            get(get_car_service_records).post(create_car_service_record),
        )
        .route(
            "/cars/{id}/documents",
            get(get_car_documents).post(create_car_document),
        )
        // Service records
        .route(
            "/services",
            get(get_service_records).post(create_service_record),
        )
        .route(
            "/services/{id}",
            get(get_service_record)
                .put(update_service_record)
                .delete(delete_service_record),
        )
        // Documents
        .route("/documents", get(get_documents).post(create_document))
        .route(
            "/documents/{id}",
            get(get_document)
                .put(update_document)
                .delete(delete_document),
        )
        // Utility
        .route("/health", get(health))
        .route("/init-db", get(init_db))
        .route_layer(from_fn_with_state(state.clone(), authorize))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .with_state(state)
}
