//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments, verifying status codes, response
//! bodies and error mapping for every endpoint.

mod contract;
mod property_part;
mod tenant;

use chrono::NaiveDate;
use tenancy_test_utils::prelude::*;

use crate::util::{body_json, TestContextExt};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
