use crate::server::{
    data::driver::DriverRepository,
    error::{driver::DriverError, AppError},
    model::driver::{CreateDriverParams, ListDriversParams, UpdateDriverParams},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::driver::DriverFactory};

mod exists_by_license;
mod get_registered_between;
mod list_all;

fn create_params(license: &str) -> CreateDriverParams {
    CreateDriverParams {
        first_name: "Ana".to_string(),
        last_name: "Gomez".to_string(),
        license: license.to_string(),
        phone: "5551234".to_string(),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
