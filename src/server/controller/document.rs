use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto, MessageDto},
        document::{CarDocumentDto, DocumentOverviewDto},
    },
    server::{
        controller::view::car_page,
        error::AppError,
        middleware::auth::AuthContext,
        model::document::{
            CarDocument, CreateCarDocumentParams, DocumentOverview, UpdateCarDocumentParams,
        },
        service::document::CarDocumentService,
        state::AppState,
        util::input::Payload,
    },
};

/// Tag for grouping car document endpoints in OpenAPI documentation
pub static DOCUMENT_TAG: &str = "document";

async fn create(
    state: &AppState,
    auth: &AuthContext,
    car_id: Option<i32>,
    payload: Payload,
) -> Response {
    let mode = payload.mode();

    let result: Result<CarDocument, AppError> = async {
        let params = CreateCarDocumentParams::from_payload(car_id, &payload)?;
        CarDocumentService::new(&state.db, auth).create(params).await
    }
    .await;

    match result {
        Ok(document) => mode.created("Document created", document.id, &car_page(document.car_id)),
        Err(err) => mode.error(err),
    }
}

/// Attach a document to a car, naming the car in the body.
///
/// Accepts `car_id`, `document_type`, `folio`, `expiration_date` and optional `notes`,
/// as JSON or form fields.
///
/// # Returns
/// - `201 Created` - Document created; form callers are redirected to the car's page
/// - `400 Bad Request` - Missing or malformed field
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - The car does not exist
#[utoipa::path(
    post,
    path = "/documents",
    tag = DOCUMENT_TAG,
    responses(
        (status = 201, description = "Document created", body = CreatedDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_document(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    payload: Payload,
) -> Response {
    create(&state, &auth, None, payload).await
}

/// Attach a document to the car named in the path.
#[utoipa::path(
    post,
    path = "/cars/{id}/documents",
    tag = DOCUMENT_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 201, description = "Document created", body = CreatedDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto)
    ),
)]
pub async fn create_car_document(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(car_id): Path<i32>,
    payload: Payload,
) -> Response {
    create(&state, &auth, Some(car_id), payload).await
}

/// List every document with its car and owner, latest expiration first.
#[utoipa::path(
    get,
    path = "/documents",
    tag = DOCUMENT_TAG,
    responses(
        (status = 200, description = "Document overview", body = [DocumentOverviewDto]),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_documents(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<impl IntoResponse, AppError> {
    let overview = CarDocumentService::new(&state.db, &auth)
        .get_overview()
        .await?;

    let overview: Vec<DocumentOverviewDto> =
        overview.into_iter().map(DocumentOverview::into_dto).collect();

    Ok((StatusCode::OK, Json(overview)))
}

/// List a car's documents, latest expiration first.
#[utoipa::path(
    get,
    path = "/cars/{id}/documents",
    tag = DOCUMENT_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "The car's documents", body = [CarDocumentDto]),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto)
    ),
)]
pub async fn get_car_documents(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(car_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let documents = CarDocumentService::new(&state.db, &auth)
        .get_by_car(car_id)
        .await?;

    let documents: Vec<CarDocumentDto> =
        documents.into_iter().map(CarDocument::into_dto).collect();

    Ok((StatusCode::OK, Json(documents)))
}

#[utoipa::path(
    get,
    path = "/documents/{id}",
    tag = DOCUMENT_TAG,
    params(
        ("id" = i32, Path, description = "Document ID")
    ),
    responses(
        (status = 200, description = "The document", body = CarDocumentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto)
    ),
)]
pub async fn get_document(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let document = CarDocumentService::new(&state.db, &auth)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(document.into_dto())))
}

/// Update a document. The document stays attached to its car.
#[utoipa::path(
    put,
    path = "/documents/{id}",
    tag = DOCUMENT_TAG,
    params(
        ("id" = i32, Path, description = "Document ID")
    ),
    responses(
        (status = 200, description = "Document updated", body = MessageDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto)
    ),
)]
pub async fn update_document(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i32>,
    payload: Payload,
) -> Response {
    let mode = payload.mode();

    let result: Result<CarDocument, AppError> = async {
        let params = UpdateCarDocumentParams::from_payload(id, &payload)?;
        CarDocumentService::new(&state.db, &auth)
            .update(params)
            .await
    }
    .await;

    match result {
        Ok(document) => mode.done("Document updated", &car_page(document.car_id)),
        Err(err) => mode.error(err),
    }
}

#[utoipa::path(
    delete,
    path = "/documents/{id}",
    tag = DOCUMENT_TAG,
    params(
        ("id" = i32, Path, description = "Document ID")
    ),
    responses(
        (status = 200, description = "Document deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto)
    ),
)]
pub async fn delete_document(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    CarDocumentService::new(&state.db, &auth)
        .delete(id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Document deleted".to_string(),
        }),
    ))
}
