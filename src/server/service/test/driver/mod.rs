use crate::server::{
    error::{driver::DriverError, AppError},
    model::driver::{DriverCandidate, DriverPatch, ListDriversParams},
    service::driver::DriverService,
};
use chrono::{Days, NaiveDate, Utc};
use test_utils::{builder::TestBuilder, factory::driver::DriverFactory};

mod get;
mod list;
mod register;

fn candidate(first: &str, last: &str, license: &str, phone: &str) -> DriverCandidate {
    DriverCandidate {
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        license: Some(license.to_string()),
        phone: Some(phone.to_string()),
    }
}
