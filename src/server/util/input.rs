//! Dual-mode request input.
//!
//! Every create, update, register and login endpoint accepts either a JSON object or
//! urlencoded form fields. The `Payload` extractor decides which one a request carries
//! exactly once, and the resulting `InputMode` also decides how the outcome is rendered:
//!
//! - `Json` - JSON body with the operation's status code
//! - `Form` - `303 See Other` redirect on success, plain-text message on failure
//!
//! Field lookups take a list of keys: the canonical name first, followed by the
//! historical aliases older clients still send.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde_json::{Map, Value};

use crate::{
    model::api::{CreatedDto, MessageDto},
    server::{
        error::AppError,
        util::parse::{parse_f64, parse_i32},
    },
};

/// How the caller submitted its input, and therefore how it expects the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Json,
    Form,
}

#[derive(Debug)]
enum Fields {
    Json(Map<String, Value>),
    Form(HashMap<String, String>),
}

/// Request body parsed as either a JSON object or urlencoded form fields.
#[derive(Debug)]
pub struct Payload {
    mode: InputMode,
    fields: Fields,
}

impl Payload {
    /// Parses a request body.
    ///
    /// A declared JSON content type, or a body that parses as a JSON object, selects
    /// `InputMode::Json`. Anything else is read as urlencoded form fields.
    ///
    /// # Arguments
    /// - `declared_json` - Whether the request's content type names JSON
    /// - `body` - Raw request body
    ///
    /// # Returns
    /// - `Ok(Payload)` - Parsed payload
    /// - `Err(AppError::Validation)` - Declared JSON body that is not a JSON object
    pub fn parse(declared_json: bool, body: &[u8]) -> Result<Self, AppError> {
        if declared_json {
            if body.iter().all(u8::is_ascii_whitespace) {
                return Ok(Self::json(Map::new()));
            }

            return match serde_json::from_slice::<Value>(body) {
                Ok(Value::Object(map)) => Ok(Self::json(map)),
                _ => Err(AppError::Validation(
                    "Request body must be a JSON object".to_string(),
                )),
            };
        }

        if let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) {
            return Ok(Self::json(map));
        }

        let fields = url::form_urlencoded::parse(body).into_owned().collect();

        Ok(Self {
            mode: InputMode::Form,
            fields: Fields::Form(fields),
        })
    }

    fn json(map: Map<String, Value>) -> Self {
        Self {
            mode: InputMode::Json,
            fields: Fields::Json(map),
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Raw value of a single key, trimmed. Blank values count as missing.
    fn raw(&self, key: &str) -> Option<String> {
        let value = match &self.fields {
            Fields::Json(map) => match map.get(key)? {
                Value::Null => return None,
                Value::String(s) => s.trim().to_string(),
                Value::Number(n) => number_text(n),
                other => other.to_string(),
            },
            Fields::Form(map) => map.get(key)?.trim().to_string(),
        };

        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    /// Looks up a text field by its canonical name and aliases.
    ///
    /// # Arguments
    /// - `keys` - Canonical name followed by accepted aliases, in priority order
    ///
    /// # Returns
    /// - `Some(value)` - First non-blank value found, trimmed
    /// - `None` - No key carries a non-blank value
    pub fn text(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.raw(key))
    }

    /// Fails with a single validation error naming every missing field.
    ///
    /// # Arguments
    /// - `fields` - Key lists of the required fields; the first key of each names it
    pub fn check_required(&self, fields: &[&[&str]]) -> Result<(), AppError> {
        let missing: Vec<&str> = fields
            .iter()
            .filter(|keys| self.text(keys).is_none())
            .filter_map(|keys| keys.first().copied())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )))
        }
    }

    pub fn required_text(&self, keys: &[&str]) -> Result<String, AppError> {
        self.text(keys).ok_or_else(|| missing(keys))
    }

    /// Looks up an optional integer field.
    ///
    /// # Returns
    /// - `Ok(Some(value))` - Field present and integral
    /// - `Ok(None)` - Field missing or blank
    /// - `Err(AppError::Validation)` - Field present but not an integer
    pub fn integer(&self, keys: &[&str]) -> Result<Option<i32>, AppError> {
        self.text(keys)
            .map(|value| parse_i32(canonical(keys), &value))
            .transpose()
    }

    pub fn required_integer(&self, keys: &[&str]) -> Result<i32, AppError> {
        self.integer(keys)?.ok_or_else(|| missing(keys))
    }

    /// Looks up an optional decimal field.
    ///
    /// # Returns
    /// - `Ok(Some(value))` - Field present and numeric
    /// - `Ok(None)` - Field missing or blank
    /// - `Err(AppError::Validation)` - Field present but not a number
    pub fn number(&self, keys: &[&str]) -> Result<Option<f64>, AppError> {
        self.text(keys)
            .map(|value| parse_f64(canonical(keys), &value))
            .transpose()
    }

    pub fn required_number(&self, keys: &[&str]) -> Result<f64, AppError> {
        self.number(keys)?.ok_or_else(|| missing(keys))
    }
}

/// Integral floats such as `2020.0` render without the fraction so they coerce to
/// integers like `2020` does.
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= i64::MAX as f64 => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}

fn canonical<'a>(keys: &[&'a str]) -> &'a str {
    keys.first().copied().unwrap_or("field")
}

fn missing(keys: &[&str]) -> AppError {
    AppError::Validation(format!("Missing required field: {}", canonical(keys)))
}

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    /// Unreadable bodies are answered in the caller's mode: JSON for a declared JSON
    /// content type, plain text otherwise.
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let declared_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| {
                let value = value.to_ascii_lowercase();
                value.starts_with("application/json") || value.contains("+json")
            })
            .unwrap_or(false);

        let mode = if declared_json {
            InputMode::Json
        } else {
            InputMode::Form
        };

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| mode.error(AppError::Validation(e.body_text())))?;

        Self::parse(declared_json, &body).map_err(|e| mode.error(e))
    }
}

impl InputMode {
    /// Renders a successful create.
    ///
    /// # Returns
    /// - `201 Created` with `{"message", "id"}` - JSON mode
    /// - `303 See Other` to `redirect` - Form mode
    pub fn created(self, message: &str, id: i32, redirect: &str) -> Response {
        match self {
            Self::Json => (
                StatusCode::CREATED,
                Json(CreatedDto {
                    message: message.to_string(),
                    id,
                }),
            )
                .into_response(),
            Self::Form => Redirect::to(redirect).into_response(),
        }
    }

    /// Renders a successful update, delete or session change.
    ///
    /// # Returns
    /// - `200 OK` with `{"message"}` - JSON mode
    /// - `303 See Other` to `redirect` - Form mode
    pub fn done(self, message: &str, redirect: &str) -> Response {
        match self {
            Self::Json => (
                StatusCode::OK,
                Json(MessageDto {
                    message: message.to_string(),
                }),
            )
                .into_response(),
            Self::Form => Redirect::to(redirect).into_response(),
        }
    }

    /// Renders a failure: a JSON error body, or a short plain-text message for forms.
    pub fn error(self, err: AppError) -> Response {
        match self {
            Self::Json => err.into_response(),
            Self::Form => err.into_plain_response(),
        }
    }
}
