//! User service for business logic.
//!
//! This module provides the `UserService` for user administration. Passwords are hashed
//! before they reach the repository and uniqueness violations on `email` are reported as
//! conflicts.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    middleware::auth::AuthContext,
    model::user::{CreateUserParams, UpdateUserParams, User},
    service::auth::password::hash_password,
};

const EMAIL_TAKEN: &str = "Email is already registered";
const USER_NOT_FOUND: &str = "User not found";

/// Hashes the password and inserts the user, mapping a duplicate email to a conflict.
///
/// Shared by registration and user administration.
pub(crate) async fn insert_user(
    db: &DatabaseConnection,
    params: CreateUserParams,
) -> Result<User, AppError> {
    let password = hash_password(&params.password)?;

    UserRepository::new(db)
        .create(CreateUserParams { password, ..params })
        .await
        .map_err(|e| AppError::conflict_on_unique(e, EMAIL_TAKEN))
}

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    actor: &'a AuthContext,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `actor` - Authenticated user performing the operations
    pub fn new(db: &'a DatabaseConnection, actor: &'a AuthContext) -> Self {
        Self { db, actor }
    }

    /// Creates a user on behalf of an authenticated user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let user = insert_user(self.db, params).await?;

        tracing::info!("User {} created user {}", self.actor.user_id, user.id);

        Ok(user)
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// Updates a user's name and email.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::Conflict)` - Email taken by another user
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, AppError> {
        let id = params.id;

        let user = UserRepository::new(self.db)
            .update(params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, EMAIL_TAKEN))?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        tracing::info!("User {} updated user {}", self.actor.user_id, id);

        Ok(user)
    }

    /// Deletes a user together with their cars, service records and documents.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        tracing::info!("User {} deleted user {}", self.actor.user_id, id);

        Ok(())
    }
}
