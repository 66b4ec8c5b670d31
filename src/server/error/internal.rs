use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs.
///
/// Every variant results in a 500 Internal Server Error with a generic message
/// returned to the client; the details only reach the server log.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to hash a password with argon2.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// Failure to render a page.
    #[error("Failed to render page '{template}': {reason}")]
    Render {
        /// Template the page was rendered for
        template: String,
        /// The underlying rendering failure
        reason: String,
    },
}
