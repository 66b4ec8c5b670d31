use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto, MessageDto},
        service_record::ServiceRecordDto,
    },
    server::{
        controller::view::car_page,
        error::AppError,
        middleware::auth::AuthContext,
        model::service_record::{
            CreateServiceRecordParams, ServiceRecord, UpdateServiceRecordParams,
        },
        service::service_record::ServiceRecordService,
        state::AppState,
        util::input::Payload,
    },
};

/// Tag for grouping service record endpoints in OpenAPI documentation
pub static SERVICE_RECORD_TAG: &str = "service_record";

async fn create(
    state: &AppState,
    auth: &AuthContext,
    car_id: Option<i32>,
    payload: Payload,
) -> Response {
    let mode = payload.mode();

    let result: Result<ServiceRecord, AppError> = async {
        let params = CreateServiceRecordParams::from_payload(car_id, &payload)?;
        ServiceRecordService::new(&state.db, auth).create(params).await
    }
    .await;

    match result {
        Ok(record) => mode.created("Service record created", record.id, &car_page(record.car_id)),
        Err(err) => mode.error(err),
    }
}

/// Add a service record, naming the car in the body.
///
/// Accepts `car_id`, `service_type`, `service_date`, `mileage` and `cost`, as JSON or
/// form fields. `mileage` must be an integer and `cost` a number.
///
/// # Returns
/// - `201 Created` - Record created; form callers are redirected to the car's page
/// - `400 Bad Request` - Missing or malformed field
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - The car does not exist
#[utoipa::path(
    post,
    path = "/services",
    tag = SERVICE_RECORD_TAG,
    responses(
        (status = 201, description = "Service record created", body = CreatedDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_service_record(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    payload: Payload,
) -> Response {
    create(&state, &auth, None, payload).await
}

/// Add a service record to the car named in the path.
///
/// The path's car ID takes precedence over any `car_id` in the body.
#[utoipa::path(
    post,
    path = "/cars/{id}/services",
    tag = SERVICE_RECORD_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 201, description = "Service record created", body = CreatedDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto)
    ),
)]
pub async fn create_car_service_record(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(car_id): Path<i32>,
    payload: Payload,
) -> Response {
    create(&state, &auth, Some(car_id), payload).await
}

/// List every service record, newest service date first.
#[utoipa::path(
    get,
    path = "/services",
    tag = SERVICE_RECORD_TAG,
    responses(
        (status = 200, description = "All service records", body = [ServiceRecordDto]),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_service_records(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<impl IntoResponse, AppError> {
    let records = ServiceRecordService::new(&state.db, &auth).get_all().await?;

    let records: Vec<ServiceRecordDto> =
        records.into_iter().map(ServiceRecord::into_dto).collect();

    Ok((StatusCode::OK, Json(records)))
}

/// Get a car's service history, newest service date first.
#[utoipa::path(
    get,
    path = "/cars/{id}/services",
    tag = SERVICE_RECORD_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "The car's service history", body = [ServiceRecordDto]),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto)
    ),
)]
pub async fn get_car_service_records(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(car_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let records = ServiceRecordService::new(&state.db, &auth)
        .get_by_car(car_id)
        .await?;

    let records: Vec<ServiceRecordDto> =
        records.into_iter().map(ServiceRecord::into_dto).collect();

    Ok((StatusCode::OK, Json(records)))
}

#[utoipa::path(
    get,
    path = "/services/{id}",
    tag = SERVICE_RECORD_TAG,
    params(
        ("id" = i32, Path, description = "Service record ID")
    ),
    responses(
        (status = 200, description = "The service record", body = ServiceRecordDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Service record not found", body = ErrorDto)
    ),
)]
pub async fn get_service_record(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let record = ServiceRecordService::new(&state.db, &auth)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}

/// Update a service record. The record stays attached to its car.
#[utoipa::path(
    put,
    path = "/services/{id}",
    tag = SERVICE_RECORD_TAG,
    params(
        ("id" = i32, Path, description = "Service record ID")
    ),
    responses(
        (status = 200, description = "Service record updated", body = MessageDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Service record not found", body = ErrorDto)
    ),
)]
pub async fn update_service_record(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i32>,
    payload: Payload,
) -> Response {
    let mode = payload.mode();

    let result: Result<ServiceRecord, AppError> = async {
        let params = UpdateServiceRecordParams::from_payload(id, &payload)?;
        ServiceRecordService::new(&state.db, &auth)
            .update(params)
            .await
    }
    .await;

    match result {
        Ok(record) => mode.done("Service record updated", &car_page(record.car_id)),
        Err(err) => mode.error(err),
    }
}

#[utoipa::path(
    delete,
    path = "/services/{id}",
    tag = SERVICE_RECORD_TAG,
    params(
        ("id" = i32, Path, description = "Service record ID")
    ),
    responses(
        (status = 200, description = "Service record deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Service record not found", body = ErrorDto)
    ),
)]
pub async fn delete_service_record(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ServiceRecordService::new(&state.db, &auth)
        .delete(id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Service record deleted".to_string(),
        }),
    ))
}
