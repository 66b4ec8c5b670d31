//! Type-safe session management wrapper.
//!
//! `AuthSession` owns the `auth:user` key, which binds a session to exactly one user
//! together with the display name and email shown on rendered pages. Going through the
//! wrapper keeps the key and the stored shape in one place.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::{error::AppError, model::user::User};

const SESSION_AUTH_USER: &str = "auth:user";

/// User identity stored in an authenticated session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Authentication session management.
///
/// Handles binding a session to a user on login, reading the binding back, and
/// dropping it on logout.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Binds the session to a freshly authenticated user.
    ///
    /// Any previous session data is cleared and the session id is cycled before the
    /// user is stored, so an id planted before login cannot be reused afterwards.
    ///
    /// # Returns
    /// - `Ok(())` - Session bound to the user
    /// - `Err(AppError::SessionErr(_))` - Failed to cycle the id or store the user
    pub async fn establish(&self, user: &User) -> Result<(), AppError> {
        self.session.clear().await;
        self.session.cycle_id().await?;
        self.session
            .insert(
                SESSION_AUTH_USER,
                SessionUser {
                    id: user.id,
                    name: user.name.clone(),
                    email: user.email.clone(),
                },
            )
            .await?;

        Ok(())
    }

    /// Retrieves the user bound to the session.
    ///
    /// # Returns
    /// - `Ok(Some(SessionUser))` - Session is authenticated
    /// - `Ok(None)` - Anonymous session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user(&self) -> Result<Option<SessionUser>, AppError> {
        Ok(self.session.get::<SessionUser>(SESSION_AUTH_USER).await?)
    }

    /// Drops all session data and deletes the session from the store.
    ///
    /// Never fails: if the store cannot be reached the in-memory data is still cleared,
    /// which leaves the client with an anonymous session.
    pub async fn clear(&self) {
        if let Err(e) = self.session.flush().await {
            tracing::warn!("Failed to delete session from store: {}", e);
            self.session.clear().await;
        }
    }
}
