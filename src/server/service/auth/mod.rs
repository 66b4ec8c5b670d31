//! Registration and login.
//!
//! Login accepts both argon2 credentials and legacy plaintext ones. A legacy credential
//! that matches is replaced with a fresh argon2 hash of the presented password, so the
//! migration happens at most once per account and is invisible to the user.

pub mod password;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, LoginParams, User},
    service::{
        auth::password::{hash_password, StoredCredential},
        user::insert_user,
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account. The caller is not logged in by this.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::InternalErr)` - Password hashing failed
    pub async fn register(&self, params: CreateUserParams) -> Result<User, AppError> {
        let user = insert_user(self.db, params).await?;

        tracing::info!("Registered user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Checks credentials, migrating a legacy plaintext credential on success.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup or migration
    pub async fn login(&self, params: LoginParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(credentials) = user_repo.find_credentials_by_email(&params.email).await? else {
            tracing::info!("Login attempt for unknown email");
            return Err(AuthError::InvalidCredentials.into());
        };

        let stored = StoredCredential::classify(&credentials.password);
        if !stored.matches(&params.password) {
            tracing::info!("Failed login for user {}", credentials.user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        if stored.is_legacy() {
            let hash = hash_password(&params.password)?;
            user_repo.update_password(credentials.user.id, hash).await?;

            tracing::info!(
                "Migrated legacy credential of user {} to argon2",
                credentials.user.id
            );
        }

        Ok(credentials.user)
    }
}
