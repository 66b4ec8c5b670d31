//! Request processing ahead of the controllers.
//!
//! - `auth` - The access gate and the `AuthContext` it produces
//! - `session` - Typed wrapper over the authentication session data

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
