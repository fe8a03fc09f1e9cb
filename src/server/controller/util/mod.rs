//! Helpers shared by the controllers.
//!
//! Currently the JSON body extractor whose rejections render like every other API error.

pub mod json;
