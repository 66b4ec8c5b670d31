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
    },
    server::{
        controller::view::{car_page, CARS_PAGE},
        error::AppError,
        middleware::auth::AuthContext,
        model::car::{Car, CreateCarParams, UpdateCarParams},
        service::car::CarService,
        state::AppState,
        util::input::Payload,
    },
};

/// Tag for grouping car endpoints in OpenAPI documentation
pub static CAR_TAG: &str = "car";

/// Create a car.
///
/// Accepts `user_id` (alias `owner_id`), `brand`, `model`, `year` and an optional
/// `plate`, as JSON or form fields. Numeric fields may be numbers or numeric strings.
///
/// # Returns
/// - `201 Created` - Car created; form callers are redirected to the car list
/// - `400 Bad Request` - Missing field or non-integer `user_id`/`year`
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - The owning user does not exist
#[utoipa::path(
    post,
    path = "/cars",
    tag = CAR_TAG,
    responses(
        (status = 201, description = "Car created", body = CreatedDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_car(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    payload: Payload,
) -> Response {
    let mode = payload.mode();

    let result: Result<Car, AppError> = async {
        let params = CreateCarParams::from_payload(&payload)?;
        CarService::new(&state.db, &auth).create(params).await
    }
    .await;

    match result {
        Ok(car) => mode.created("Car created", car.id, CARS_PAGE),
        Err(err) => mode.error(err),
    }
}

/// List all cars with their owner's name, newest first.
#[utoipa::path(
    get,
    path = "/cars",
    tag = CAR_TAG,
    responses(
        (status = 200, description = "All cars", body = [CarDto]),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cars(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<impl IntoResponse, AppError> {
    let cars = CarService::new(&state.db, &auth).get_all().await?;

    let cars: Vec<CarDto> = cars.into_iter().map(Car::into_dto).collect();

    Ok((StatusCode::OK, Json(cars)))
}

/// Get one car with its owner's name.
#[utoipa::path(
    get,
    path = "/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "The car", body = CarDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto)
    ),
)]
pub async fn get_car(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let car = CarService::new(&state.db, &auth).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(car.into_dto())))
}

/// Update a car's brand, model, year and plate. The owner cannot be changed.
#[utoipa::path(
    put,
    path = "/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Car updated", body = MessageDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto)
    ),
)]
pub async fn update_car(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i32>,
    payload: Payload,
) -> Response {
    let mode = payload.mode();

    let result: Result<Car, AppError> = async {
        let params = UpdateCarParams::from_payload(id, &payload)?;
        CarService::new(&state.db, &auth).update(params).await
    }
    .await;

    match result {
        Ok(car) => mode.done("Car updated", &car_page(car.id)),
        Err(err) => mode.error(err),
    }
}

/// Delete a car along with its service records and documents.
#[utoipa::path(
    delete,
    path = "/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Car deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto)
    ),
)]
pub async fn delete_car(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    CarService::new(&state.db, &auth).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Car deleted".to_string(),
        }),
    ))
}
