//! Field renaming and pruning for the zipped JSON export.
//!
//! Records are already one observation each, so no reshape is needed. The
//! observation field is renamed to `value` and annotation flags are dropped.

use polars::prelude::{AnyValue, DataFrame};
use tracing::debug;

use lifexp_ingest::{any_to_f64, any_to_i64, any_to_string};
use lifexp_model::{
    AGE, CLEAN_COLUMNS, CleanRow, NESTED_DROPPED_FIELDS, NESTED_VALUE_FIELD, REGION, SEX, UNIT,
    VALUE, YEAR,
};

use crate::error::{Result, TransformError};
use crate::frame::{require_column, rows_to_frame, string_cells};

/// Cleans the nested export into the canonical long table.
///
/// A null `year` or `value` drops the row. A present `year` that is not an
/// integer fails the table, matching the wide export's year policy. Fields
/// outside the canonical schema are discarded.
pub fn clean_nested(df: &DataFrame) -> Result<DataFrame> {
    let mut df = df.clone();
    if df.get_column_index(NESTED_VALUE_FIELD).is_none() {
        return Err(TransformError::MissingColumn {
            column: NESTED_VALUE_FIELD.to_string(),
        });
    }
    df.rename(NESTED_VALUE_FIELD, VALUE.into())?;
    for field in NESTED_DROPPED_FIELDS {
        if df.get_column_index(field).is_some() {
            df = df.drop(field)?;
        }
    }
    for column in CLEAN_COLUMNS {
        require_column(&df, column)?;
    }

    let units = string_cells(&df, UNIT)?;
    let sexes = string_cells(&df, SEX)?;
    let ages = string_cells(&df, AGE)?;
    let regions = string_cells(&df, REGION)?;
    let year_column = df.column(YEAR)?;
    let value_column = df.column(VALUE)?;

    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let year = match year_column.get(idx)? {
            AnyValue::Null => None,
            other => match any_to_i64(other.clone()) {
                Some(year) => Some(year),
                None => {
                    return Err(TransformError::TypeConversion {
                        column: YEAR.to_string(),
                        value: any_to_string(other),
                    });
                }
            },
        };
        let value = any_to_f64(value_column.get(idx)?);
        if let (Some(unit), Some(sex), Some(age), Some(region), Some(year), Some(value)) = (
            &units[idx],
            &sexes[idx],
            &ages[idx],
            &regions[idx],
            year,
            value,
        ) {
            rows.push(CleanRow {
                unit: unit.clone(),
                sex: sex.clone(),
                age: age.clone(),
                region: region.clone(),
                year,
                value,
            });
        }
    }

    debug!(
        source_rows = df.height(),
        kept = rows.len(),
        dropped = df.height() - rows.len(),
        "nested records cleaned"
    );
    rows_to_frame(&rows)
}
