use crate::server::{
    data::car::CarRepository,
    model::car::{CreateCarParams, UpdateCarParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get;
mod update;
