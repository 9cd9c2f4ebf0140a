//! Conversion between canonical DataFrames and typed rows.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

use lifexp_ingest::{any_to_f64, any_to_i64, any_to_string_non_empty};
use lifexp_model::{AGE, CleanRow, REGION, SEX, UNIT, VALUE, YEAR};

use crate::error::{Result, TransformError};

/// Builds the canonical clean table from typed rows.
pub fn rows_to_frame(rows: &[CleanRow]) -> Result<DataFrame> {
    let mut units = Vec::with_capacity(rows.len());
    let mut sexes = Vec::with_capacity(rows.len());
    let mut ages = Vec::with_capacity(rows.len());
    let mut regions = Vec::with_capacity(rows.len());
    let mut years = Vec::with_capacity(rows.len());
    let mut values = Vec::with_capacity(rows.len());
    for row in rows {
        units.push(row.unit.clone());
        sexes.push(row.sex.clone());
        ages.push(row.age.clone());
        regions.push(row.region.clone());
        years.push(row.year);
        values.push(row.value);
    }

    let df = DataFrame::new(vec![
        Series::new(UNIT.into(), units).into_column(),
        Series::new(SEX.into(), sexes).into_column(),
        Series::new(AGE.into(), ages).into_column(),
        Series::new(REGION.into(), regions).into_column(),
        Series::new(YEAR.into(), years).into_column(),
        Series::new(VALUE.into(), values).into_column(),
    ])?;
    Ok(df)
}

/// Reads a canonical table back into typed rows, skipping incomplete rows.
pub fn frame_to_rows(df: &DataFrame) -> Result<Vec<CleanRow>> {
    let units = string_cells(df, UNIT)?;
    let sexes = string_cells(df, SEX)?;
    let ages = string_cells(df, AGE)?;
    let regions = string_cells(df, REGION)?;
    let years = require_column(df, YEAR)?;
    let values = require_column(df, VALUE)?;

    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let year = any_to_i64(years.get(idx)?);
        let value = any_to_f64(values.get(idx)?);
        if let (Some(unit), Some(sex), Some(age), Some(region), Some(year), Some(value)) = (
            units[idx].clone(),
            sexes[idx].clone(),
            ages[idx].clone(),
            regions[idx].clone(),
            year,
            value,
        ) {
            rows.push(CleanRow {
                unit,
                sex,
                age,
                region,
                year,
                value,
            });
        }
    }
    Ok(rows)
}

pub(crate) fn require_column<'a>(
    df: &'a DataFrame,
    name: &str,
) -> Result<&'a polars::prelude::Column> {
    df.column(name).map_err(|_| TransformError::MissingColumn {
        column: name.to_string(),
    })
}

/// Text view of a column; nulls and blank cells are `None`.
pub(crate) fn string_cells(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = require_column(df, name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = column.get(idx)?;
        values.push(any_to_string_non_empty(value));
    }
    Ok(values)
}
