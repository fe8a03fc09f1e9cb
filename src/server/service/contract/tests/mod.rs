
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tenancy_test_utils::prelude::*;

use crate::model::contract::CreateContractDto;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Contract request on `part` for calendar year 2025 with the provided roster
fn create_dto(part: PartRef, tenant_ids: Option<Vec<i32>>) -> CreateContractDto {
    CreateContractDto {
        organization_id: part.organization_id,
        organization_name: part.organization_name(),
        property_id: part.property_id,
        property_name: part.property_name(),
        property_part_id: part.property_part_id,
        property_part_name: part.property_part_name(),
        rent_amount: Decimal::new(1500, 0),
        start_date: date(2025, 1, 1),
        end_date: date(2025, 12, 31),
        tds_applicable: false,
        tenant_ids,
    }
}
