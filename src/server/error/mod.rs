//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the top-level error type.
//! The four caller-correctable outcomes map to stable status codes:
//!
//! - `Validation` → 400 Bad Request
//! - `AuthErr` → 401 Unauthorized
//! - `NotFound` → 404 Not Found
//! - `Conflict` → 409 Conflict
//!
//! Everything else is an unexpected failure rendered as a generic 500.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error: bad credentials or missing session.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// SQLx driver error, raised while preparing the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unexpected internal failure (hashing, rendering).
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Missing or malformed input.
    ///
    /// # Fields
    /// - Message describing which field was missing or malformed
    #[error("{0}")]
    Validation(String),

    /// Referenced entity, or the parent of a new entity, does not exist.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness constraint was violated.
    ///
    /// # Fields
    /// - Message describing the conflicting value
    #[error("{0}")]
    Conflict(String),
}

impl AppError {
    /// Maps a database error raised by an insert or update to `Conflict` when it is a
    /// uniqueness violation, keeping any other failure as a plain database error.
    ///
    /// # Arguments
    /// - `err` - The error returned by the store
    /// - `message` - Client-facing message used for the conflict
    pub fn conflict_on_unique(err: DbErr, message: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Conflict(message.to_string()),
            _ => Self::DbErr(err),
        }
    }

    /// HTTP status code this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::AuthErr(err) => err.status_code(),
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the client.
    ///
    /// Unexpected failures are logged here and replaced by a generic message so no
    /// internal detail leaks.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::NotFound(msg) | Self::Conflict(msg) => msg.clone(),
            Self::AuthErr(err) => err.to_string(),
            err => {
                tracing::error!("{}", err);
                INTERNAL_SERVER_ERROR_MESSAGE.to_string()
            }
        }
    }

    /// Renders the error as a short plain-text response for form callers.
    pub fn into_plain_response(self) -> Response {
        (self.status_code(), self.public_message()).into_response()
    }
}

/// Converts application errors into JSON HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation`
/// - 401 Unauthorized - For `AuthErr`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - 500 Internal Server Error - For all other error types, with a generic body
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(_) | Self::NotFound(_) | Self::Conflict(_) => {
                let status = self.status_code();
                (
                    status,
                    Json(ErrorDto {
                        error: self.public_message(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
            }),
        )
            .into_response()
    }
}
