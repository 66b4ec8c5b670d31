//! Browsing pages.
//!
//! Pages are rendered through the state's `PageRenderer`. Each page context carries the
//! signed-in user under `user` so layouts can show who is logged in.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Extension,
};
use serde_json::json;

use crate::server::{
    error::AppError,
    middleware::auth::AuthContext,
    service::{
        car::CarService, document::CarDocumentService, service_record::ServiceRecordService,
        user::UserService,
    },
    state::AppState,
    view::Page,
};

pub const HOME_PAGE: &str = "/";
pub const CARS_PAGE: &str = "/view/cars";
pub const DOCUMENTS_PAGE: &str = "/view/documents";

pub fn car_page(id: i32) -> String {
    format!("{}/{}", CARS_PAGE, id)
}

/// Renders a page with the given status.
///
/// A renderer failure is logged and reported as a plain 500.
pub fn render(state: &AppState, status: StatusCode, page: Page) -> Response {
    match state.renderer.render(&page) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => AppError::from(e).into_plain_response(),
    }
}

/// Renders the `error` page for a failed operation, keeping the error's status code.
pub fn render_error(state: &AppState, err: AppError) -> Response {
    let status = err.status_code();
    let message = err.public_message();

    render(
        state,
        status,
        Page::new("error", "Error", json!({ "error": message })),
    )
}

pub async fn home(State(state): State<AppState>, Extension(auth): Extension<AuthContext>) -> Response {
    render(
        &state,
        StatusCode::OK,
        Page::new("home", "Home", json!({ "user": auth.into_dto() })),
    )
}

/// Car list with the owners available for the new-car form.
pub async fn cars_page(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Response {
    let result: Result<Page, AppError> = async {
        let cars = CarService::new(&state.db, &auth).get_all().await?;
        let users = UserService::new(&state.db, &auth).get_all().await?;

        Ok(Page::new(
            "cars/cars",
            "Cars",
            json!({
                "user": auth.clone().into_dto(),
                "cars": cars.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>(),
                "users": users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>(),
            }),
        ))
    }
    .await;

    match result {
        Ok(page) => render(&state, StatusCode::OK, page),
        Err(err) => render_error(&state, err),
    }
}

/// One car with its service history and documents.
pub async fn car_detail_page(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i32>,
) -> Response {
    let result: Result<Page, AppError> = async {
        let car = CarService::new(&state.db, &auth).get_by_id(id).await?;
        let services = ServiceRecordService::new(&state.db, &auth)
            .get_by_car(id)
            .await?;
        let documents = CarDocumentService::new(&state.db, &auth)
            .get_by_car(id)
            .await?;

        let title = format!("{} {}", car.brand, car.model);

        Ok(Page::new(
            "cars/detail",
            title,
            json!({
                "user": auth.clone().into_dto(),
                "car": car.into_dto(),
                "services": services.into_iter().map(|s| s.into_dto()).collect::<Vec<_>>(),
                "documents": documents.into_iter().map(|d| d.into_dto()).collect::<Vec<_>>(),
            }),
        ))
    }
    .await;

    match result {
        Ok(page) => render(&state, StatusCode::OK, page),
        Err(err) => render_error(&state, err),
    }
}

/// Every document across all cars.
pub async fn documents_page(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Response {
    let result = CarDocumentService::new(&state.db, &auth)
        .get_overview()
        .await;

    match result {
        Ok(documents) => render(
            &state,
            StatusCode::OK,
            Page::new(
                "documents/list",
                "Documents",
                json!({
                    "user": auth.into_dto(),
                    "documents": documents.into_iter().map(|d| d.into_dto()).collect::<Vec<_>>(),
                }),
            ),
        ),
        Err(err) => render_error(&state, err),
    }
}
