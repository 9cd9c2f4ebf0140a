//! Wide-to-long reshape of the delimited export.
//!
//! The export carries four dimension columns (`unit`, `sex`, `age`,
//! `geo\time`) followed by one column per year. Each (dimension row, year
//! column) pair becomes one observation.

use polars::prelude::DataFrame;
use tracing::{debug, trace};

use lifexp_ingest::{any_to_string_non_empty, parse_f64};
use lifexp_model::{CleanRow, WIDE_DIMENSION_COUNT, WIDE_REGION_HEADER};

use crate::error::{Result, TransformError};
use crate::frame::{rows_to_frame, string_cells};
use crate::numeric::extract_decimal;

/// Parses every year header, failing on the first one that is not an integer.
///
/// Headers are trimmed first since exports pad them (`"2019 "`).
pub fn parse_year_headers(headers: &[String]) -> Result<Vec<i64>> {
    headers
        .iter()
        .map(|header| {
            header
                .trim()
                .parse::<i64>()
                .map_err(|_| TransformError::TypeConversion {
                    column: header.clone(),
                    value: header.clone(),
                })
        })
        .collect()
}

/// Melts the wide export into the canonical long table.
///
/// Year labels are validated before any row is produced, so a bad label
/// fails the whole table. A cell without a `digits.digits` value, or a row
/// with a missing dimension, is dropped.
pub fn clean_wide(df: &DataFrame) -> Result<DataFrame> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    if names.len() < WIDE_DIMENSION_COUNT {
        return Err(TransformError::TooFewColumns {
            expected: WIDE_DIMENSION_COUNT,
            found: names.len(),
        });
    }
    if names[WIDE_DIMENSION_COUNT - 1] != WIDE_REGION_HEADER {
        return Err(TransformError::MissingColumn {
            column: WIDE_REGION_HEADER.to_string(),
        });
    }

    let (dimension_names, year_names) = names.split_at(WIDE_DIMENSION_COUNT);
    let years = parse_year_headers(year_names)?;

    // unit, sex, age, region by position
    let units = string_cells(df, &dimension_names[0])?;
    let sexes = string_cells(df, &dimension_names[1])?;
    let ages = string_cells(df, &dimension_names[2])?;
    let regions = string_cells(df, &dimension_names[3])?;

    let mut rows = Vec::with_capacity(df.height() * years.len());
    let mut dropped = 0usize;
    for (year, year_name) in years.iter().zip(year_names) {
        let column = df.column(year_name)?;
        for idx in 0..df.height() {
            let raw = any_to_string_non_empty(column.get(idx)?);
            let value = raw.as_deref().and_then(extract_decimal).and_then(parse_f64);
            match (&units[idx], &sexes[idx], &ages[idx], &regions[idx], value) {
                (Some(unit), Some(sex), Some(age), Some(region), Some(value)) => {
                    rows.push(CleanRow {
                        unit: unit.clone(),
                        sex: sex.clone(),
                        age: age.clone(),
                        region: region.clone(),
                        year: *year,
                        value,
                    });
                }
                _ => {
                    trace!(row = idx, year = *year, raw = ?raw, "dropping observation");
                    dropped += 1;
                }
            }
        }
    }

    debug!(
        source_rows = df.height(),
        year_columns = years.len(),
        kept = rows.len(),
        dropped,
        "wide table melted"
    );
    rows_to_frame(&rows)
}
