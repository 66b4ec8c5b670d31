use crate::server::{
    data::car_document::CarDocumentRepository,
    model::document::{CarDocumentFields, CreateCarDocumentParams, UpdateCarDocumentParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_overview;
mod update;
