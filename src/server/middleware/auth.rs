//! The access gate.
//!
//! Every routed request passes through [`authorize`] before its handler runs. Public
//! endpoints pass straight through. Everything else needs a session bound to a user
//! that still exists; the fresh user row becomes the request's [`AuthContext`].
//! Unauthenticated browsing requests are redirected to the login page, API requests
//! get a 401.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        state::AppState,
    },
};

pub const LOGIN_PATH: &str = "/login";

/// Exact paths reachable without a session.
const PUBLIC_PATHS: &[&str] = &["/register", "/login", "/logout", "/init-db", "/health"];

/// Path prefixes reachable without a session.
const PUBLIC_PREFIXES: &[&str] = &["/static", "/docs", "/api-docs"];

/// Identity of the authenticated caller, read fresh from the store on every request.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthContext {
    pub user_id: i32,
    pub name: String,
    pub email: String,
}

impl AuthContext {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.user_id,
            name: self.name,
            email: self.email,
        }
    }
}

/// How the gate treats a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Reachable anonymously.
    Public,
    /// Browsing page; anonymous callers are redirected to the login page.
    Page,
    /// API endpoint; anonymous callers get 401.
    Api,
}

fn has_prefix(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Classifies a request path.
pub fn classify(path: &str) -> Access {
    if PUBLIC_PATHS.contains(&path) || PUBLIC_PREFIXES.iter().any(|p| has_prefix(path, p)) {
        Access::Public
    } else if path == "/" || has_prefix(path, "/view") {
        Access::Page
    } else {
        Access::Api
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the caller's identity.
    ///
    /// A session bound to a user that has since been deleted is flushed and the caller
    /// is treated as anonymous.
    ///
    /// # Returns
    /// - `Ok(Some(AuthContext))` - Authenticated caller
    /// - `Ok(None)` - Anonymous caller
    /// - `Err(AppError)` - Session store or database failure
    pub async fn resolve(&self) -> Result<Option<AuthContext>, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(session_user) = auth_session.get_user().await? else {
            return Ok(None);
        };

        let Some(user) = UserRepository::new(self.db)
            .find_by_id(session_user.id)
            .await?
        else {
            tracing::info!(
                "Session bound to deleted user {}, clearing",
                session_user.id
            );
            auth_session.clear().await;
            return Ok(None);
        };

        Ok(Some(AuthContext {
            user_id: user.id,
            name: user.name,
            email: user.email,
        }))
    }
}

/// Gate middleware, installed with `route_layer` so unmatched paths reach the 404
/// fallback without a session check.
pub async fn authorize(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Response {
    let access = classify(request.uri().path());

    if access == Access::Public {
        return next.run(request).await;
    }

    match AuthGuard::new(&state.db, &session).resolve().await {
        Ok(Some(auth)) => {
            tracing::debug!(
                "Authorized user {} for {}",
                auth.user_id,
                request.uri().path()
            );
            request.extensions_mut().insert(auth);
            next.run(request).await
        }
        Ok(None) => {
            tracing::debug!("Rejected anonymous request for {}", request.uri().path());
            match access {
                Access::Page => Redirect::to(LOGIN_PATH).into_response(),
                _ => AppError::from(AuthError::NotAuthenticated).into_response(),
            }
        }
        Err(err) => err.into_response(),
    }
}
