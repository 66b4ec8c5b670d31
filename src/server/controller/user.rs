use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto, MessageDto},
        car::CarDto,
        user::UserDto,
    },
    server::{
        controller::view::CARS_PAGE,
        error::AppError,
        middleware::auth::AuthContext,
        model::user::{CreateUserParams, UpdateUserParams, User},
        service::{car::CarService, user::UserService},
        state::AppState,
        util::input::Payload,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Create a user.
///
/// Same rules as registration, performed by an authenticated user. Accepts JSON or
/// form fields `name`, `email` and `password`.
///
/// # Returns
/// - `201 Created` - User created
/// - `400 Bad Request` - Missing field
/// - `401 Unauthorized` - Not logged in
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 201, description = "User created", body = CreatedDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    payload: Payload,
) -> Response {
    let mode = payload.mode();

    let result: Result<User, AppError> = async {
        let params = CreateUserParams::from_payload(&payload)?;
        UserService::new(&state.db, &auth).create(params).await
    }
    .await;

    match result {
        Ok(user) => mode.created("User created", user.id, CARS_PAGE),
        Err(err) => mode.error(err),
    }
}

/// List all users, newest first.
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = [UserDto]),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db, &auth).get_all().await?;

    let users: Vec<UserDto> = users.into_iter().map(User::into_dto).collect();

    Ok((StatusCode::OK, Json(users)))
}

/// Get one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db, &auth).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update a user's name and email.
///
/// # Returns
/// - `200 OK` - User updated
/// - `400 Bad Request` - Missing field
/// - `404 Not Found` - No user with that ID
/// - `409 Conflict` - Email taken by another user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User updated", body = MessageDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i32>,
    payload: Payload,
) -> Response {
    let mode = payload.mode();

    let result: Result<User, AppError> = async {
        let params = UpdateUserParams::from_payload(id, &payload)?;
        UserService::new(&state.db, &auth).update(params).await
    }
    .await;

    match result {
        Ok(_) => mode.done("User updated", CARS_PAGE),
        Err(err) => mode.error(err),
    }
}

/// Delete a user along with their cars, service records and documents.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db, &auth).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "User deleted".to_string(),
        }),
    ))
}

/// List the cars owned by a user, newest first.
#[utoipa::path(
    get,
    path = "/users/{id}/cars",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user's cars", body = [CarDto]),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user_cars(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let cars = CarService::new(&state.db, &auth).get_by_user(id).await?;

    let cars: Vec<CarDto> = cars.into_iter().map(|car| car.into_dto()).collect();

    Ok((StatusCode::OK, Json(cars)))
}
