use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Login failed.
    ///
    /// Covers both an unknown email and a wrong password so callers cannot discover
    /// which accounts exist. Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The request targets a protected endpoint without an authenticated session.
    ///
    /// Results in a 401 Unauthorized response for API callers. Browsing callers are
    /// redirected to the login page by the access gate before this is rendered.
    #[error("Authentication required")]
    NotAuthenticated,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant maps to 401 Unauthorized with the variant's message as the body.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
