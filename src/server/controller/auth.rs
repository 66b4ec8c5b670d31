use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Extension, Json,
};
use serde_json::json;
use tower_sessions::Session;

use crate::{
    model::{
        api::{CreatedDto, ErrorDto, MessageDto},
        user::{LoginDto, UserDto},
    },
    server::{
        controller::view::{render, CARS_PAGE},
        error::AppError,
        middleware::{
            auth::{AuthContext, LOGIN_PATH},
            session::AuthSession,
        },
        model::user::{CreateUserParams, LoginParams, User},
        service::auth::AuthService,
        state::AppState,
        util::input::{InputMode, Payload},
        view::Page,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

pub async fn login_page(State(state): State<AppState>) -> Response {
    render(&state, StatusCode::OK, Page::new("login", "Log in", json!({})))
}

pub async fn register_page(State(state): State<AppState>) -> Response {
    render(
        &state,
        StatusCode::OK,
        Page::new("register", "Register", json!({})),
    )
}

/// Register a new account.
///
/// Accepts `name`, `email` and `password` as a JSON object or form fields. The email
/// is trimmed and lowercased. Registering does not log the caller in.
///
/// # Returns
/// - `201 Created` - JSON callers; form callers are redirected to the login page
/// - `400 Bad Request` - Missing field
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/register",
    tag = AUTH_TAG,
    responses(
        (status = 201, description = "Account created", body = CreatedDto),
        (status = 303, description = "Form submission accepted, redirect to /login"),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(State(state): State<AppState>, payload: Payload) -> Response {
    let mode = payload.mode();

    let result: Result<User, AppError> = async {
        let params = CreateUserParams::from_payload(&payload)?;
        AuthService::new(&state.db).register(params).await
    }
    .await;

    match result {
        Ok(user) => mode.created("User registered", user.id, LOGIN_PATH),
        Err(err) => mode.error(err),
    }
}

/// Log in with email and password.
///
/// On success the session is reset, its id cycled and bound to the user.
///
/// # Returns
/// - `200 OK` - JSON callers get the user; form callers are redirected to the car list
/// - `400 Bad Request` - Missing field
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged in", body = LoginDto),
        (status = 303, description = "Form submission accepted, redirect to /view/cars"),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(State(state): State<AppState>, session: Session, payload: Payload) -> Response {
    let mode = payload.mode();

    let result: Result<User, AppError> = async {
        let params = LoginParams::from_payload(&payload)?;
        let user = AuthService::new(&state.db).login(params).await?;

        AuthSession::new(&session).establish(&user).await?;

        Ok(user)
    }
    .await;

    match (result, mode) {
        (Ok(user), InputMode::Json) => (
            StatusCode::OK,
            Json(LoginDto {
                message: "Login successful".to_string(),
                user: user.into_dto(),
            }),
        )
            .into_response(),
        (Ok(_), InputMode::Form) => Redirect::to(CARS_PAGE).into_response(),
        (Err(err), mode) => mode.error(err),
    }
}

/// Logs out from a browser link and returns to the login page.
pub async fn logout_page(session: Session) -> Response {
    AuthSession::new(&session).clear().await;

    Redirect::to(LOGIN_PATH).into_response()
}

/// Log out.
///
/// Always succeeds, including for sessions that were never logged in.
#[utoipa::path(
    post,
    path = "/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto)
    ),
)]
pub async fn logout(session: Session) -> Response {
    AuthSession::new(&session).clear().await;

    (
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    )
        .into_response()
}

/// Get the logged-in user.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn me(Extension(auth): Extension<AuthContext>) -> impl IntoResponse {
    Json(auth.into_dto())
}
