//! Shared domain types for the life expectancy pipeline.
//!
//! The crate holds the closed set of valid region codes ([`Country`]) and the
//! canonical long-format schema every cleaner produces.

pub mod country;
pub mod error;
pub mod schema;

pub use country::{COUNTRY_CODES, Country, DEFAULT_REGION, list_of_countries};
pub use error::{ModelError, Result};
pub use schema::{
    AGE, CLEAN_COLUMNS, CleanRow, NESTED_DROPPED_FIELDS, NESTED_VALUE_FIELD, REGION, SEX, UNIT,
    VALUE, WIDE_DIMENSION_COUNT, WIDE_REGION_HEADER, YEAR,
};
