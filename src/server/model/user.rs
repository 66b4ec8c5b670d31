//! User domain models and parameters.
//!
//! Provides the user domain model as seen by the rest of the server, along with the
//! parameter types for registration, profile updates and login. Emails are normalized
//! (trimmed and lowercased) when parameters are read so lookups and the unique index
//! agree on case.

use crate::{
    model::user::UserDto,
    server::{error::AppError, util::input::Payload},
};

const NAME: &[&str] = &["name"];
const EMAIL: &[&str] = &["email"];
const PASSWORD: &[&str] = &["password"];

/// Application user without the stored credential.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Normalized login email.
    pub email: String,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The credential column is dropped here; it only leaves the data layer through
    /// `UserRepository::find_credentials_by_email`.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
        }
    }
}

/// User together with the stored credential, used only by the login flow.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    /// Argon2 PHC string, or a legacy plaintext password awaiting migration.
    pub password: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password = entity.password.clone();

        Self {
            user: User::from_entity(entity),
            password,
        }
    }
}

/// Trims and lowercases an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Parameters for creating a user, via registration or `POST /users`.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    /// Normalized email.
    pub email: String,
    /// Plaintext password as presented; hashed by the service before storage.
    pub password: String,
}

impl CreateUserParams {
    /// Reads the parameters from a JSON or form payload.
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - Every field present
    /// - `Err(AppError::Validation)` - Lists every blank or missing field
    pub fn from_payload(payload: &Payload) -> Result<Self, AppError> {
        payload.check_required(&[NAME, EMAIL, PASSWORD])?;

        Ok(Self {
            name: payload.required_text(NAME)?,
            email: normalize_email(&payload.required_text(EMAIL)?),
            password: payload.required_text(PASSWORD)?,
        })
    }
}

/// Parameters for updating a user's name and email.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: i32,
    pub name: String,
    /// Normalized email.
    pub email: String,
}

impl UpdateUserParams {
    pub fn from_payload(id: i32, payload: &Payload) -> Result<Self, AppError> {
        payload.check_required(&[NAME, EMAIL])?;

        Ok(Self {
            id,
            name: payload.required_text(NAME)?,
            email: normalize_email(&payload.required_text(EMAIL)?),
        })
    }
}

/// Credentials presented at login.
#[derive(Debug, Clone)]
pub struct LoginParams {
    /// Normalized email.
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_payload(payload: &Payload) -> Result<Self, AppError> {
        payload.check_required(&[EMAIL, PASSWORD])?;

        Ok(Self {
            email: normalize_email(&payload.required_text(EMAIL)?),
            password: payload.required_text(PASSWORD)?,
        })
    }
}
