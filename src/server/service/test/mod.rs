use crate::server::middleware::auth::AuthContext;

mod document;

/// Authenticated caller used by service tests.
fn actor() -> AuthContext {
    AuthContext {
        user_id: 1,
        name: "Admin".to_string(),
        email: "admin@x.com".to_string(),
    }
}
