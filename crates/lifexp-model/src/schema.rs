//! Canonical long-format schema shared by every cleaner.

use serde::{Deserialize, Serialize};

pub const UNIT: &str = "unit";
pub const SEX: &str = "sex";
pub const AGE: &str = "age";
pub const REGION: &str = "region";
pub const YEAR: &str = "year";
pub const VALUE: &str = "value";

/// Output columns in canonical order.
pub const CLEAN_COLUMNS: [&str; 6] = [UNIT, SEX, AGE, REGION, YEAR, VALUE];

/// Leading identity columns of the wide export; the rest are year columns.
pub const WIDE_DIMENSION_COUNT: usize = 4;

/// Composite region/time header of the wide export, renamed to [`REGION`].
pub const WIDE_REGION_HEADER: &str = "geo\\time";

/// Observation field of the nested export, renamed to [`VALUE`].
pub const NESTED_VALUE_FIELD: &str = "life_expectancy";

/// Annotation fields of the nested export that never reach the clean table.
pub const NESTED_DROPPED_FIELDS: [&str; 2] = ["flag", "flag_detail"];

/// One observation of the clean table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRow {
    pub unit: String,
    pub sex: String,
    pub age: String,
    pub region: String,
    pub year: i64,
    pub value: f64,
}
