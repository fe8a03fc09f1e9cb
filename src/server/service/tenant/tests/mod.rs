mod list_tenants;

use chrono::NaiveDate;
use tenancy_test_utils::prelude::*;

use crate::model::tenant::CreateTenantDto;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn create_dto(name: &str, email: &str) -> CreateTenantDto {
    CreateTenantDto {
        name: name.to_string(),
        contact: "123".to_string(),
        email: email.to_string(),
    }
}
