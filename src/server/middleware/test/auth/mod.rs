use crate::server::{
    error::AppError,
    middleware::{auth::AuthGuard, session::AuthSession},
    model::user::User,
};
use test_utils::{builder::TestBuilder, factory};

mod resolve;
