//! Contract term rules that span more than one field.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::server::error::validation::ValidationError;

/// Validates the term and rent of a contract.
///
/// A contract may start and end on the same day.
pub fn contract_terms(
    start_date: NaiveDate,
    end_date: NaiveDate,
    rent_amount: Decimal,
) -> Result<(), ValidationError> {
    if start_date > end_date {
        return Err(ValidationError::InvalidDateRange {
            start_date,
            end_date,
        });
    }
    if rent_amount.is_sign_negative() && !rent_amount.is_zero() {
        return Err(ValidationError::NegativeRent(rent_amount));
    }

    Ok(())
}
