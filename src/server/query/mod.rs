//! Query and filter engine.
//!
//! Filters arrive as query-string DTOs whose malformed values were already coerced to
//! `None`. The builders here fold the present values into SeaORM [`sea_orm::Condition`]s;
//! absent values add nothing. Row-to-DTO projection lives in [`projection`].

pub mod contract;
pub mod projection;
pub mod scope;
pub mod tenant;
