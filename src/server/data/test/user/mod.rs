use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateUserParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_credentials_by_email;
mod update;
