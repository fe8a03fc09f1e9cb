//! Date calculation utilities for contract filtering.

use chrono::{Months, NaiveDate};

use crate::server::error::Error;

/// Lower bound applied when a contract date filter omits `startDate`.
pub const DEFAULT_RANGE_START: (i32, u32, u32) = (2001, 1, 1);

/// Months after "today" used as the upper bound when `endDate` is omitted.
pub const DEFAULT_RANGE_MONTHS_AHEAD: u32 = 12;

/// Resolves the inclusive `start_date` window of a contract filter.
///
/// Returns `Ok(None)` when neither bound is present, meaning no date filter applies. When
/// only one bound is given the other falls back to 2001-01-01 for the start and one year
/// after `today` for the end.
///
/// # Arguments
/// - `start` - Requested lower bound
/// - `end` - Requested upper bound
/// - `today` - Current UTC date, evaluated by the caller at query time
///
/// # Returns
/// - `Ok(Some((from, to)))` - Window to apply with an inclusive `BETWEEN`
/// - `Ok(None)` - No date filter requested
/// - `Err(Error::InternalError)` - Default upper bound overflowed the calendar
///
/// # Example
/// ```ignore
/// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let range = contract_date_range(Some(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()), None, today)?;
/// // range == Some((2025-01-01, 2026-06-01))
/// ```
pub fn contract_date_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<Option<(NaiveDate, NaiveDate)>, Error> {
    if start.is_none() && end.is_none() {
        return Ok(None);
    }

    let from = match start {
        Some(start) => start,
        None => default_range_start()?,
    };
    let to = match end {
        Some(end) => end,
        None => default_range_end(today)?,
    };

    Ok(Some((from, to)))
}

fn default_range_start() -> Result<NaiveDate, Error> {
    let (year, month, day) = DEFAULT_RANGE_START;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        Error::InternalError("Failed to construct default contract range start".to_string())
    })
}

fn default_range_end(today: NaiveDate) -> Result<NaiveDate, Error> {
    today
        .checked_add_months(Months::new(DEFAULT_RANGE_MONTHS_AHEAD))
        .ok_or_else(|| {
            Error::InternalError(format!(
                "Failed to calculate default contract range end from {}",
                today
            ))
        })
}
