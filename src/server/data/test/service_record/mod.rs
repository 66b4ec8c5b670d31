use crate::server::{
    data::service_record::ServiceRecordRepository,
    model::service_record::{
        CreateServiceRecordParams, ServiceRecordFields, UpdateServiceRecordParams,
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_car;
mod update;

fn fields(service_date: &str) -> ServiceRecordFields {
    ServiceRecordFields {
        service_type: "Brake pads".to_string(),
        service_date: service_date.to_string(),
        mileage: 42000,
        cost: 180.0,
    }
}
