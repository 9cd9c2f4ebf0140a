//! Conversion of flat JSON records into a DataFrame.

use std::collections::HashSet;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use serde_json::{Map, Value};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Int,
    Float,
    Bool,
    Text,
}

fn infer_kind(values: &[Option<&Value>]) -> ColumnKind {
    let mut present = values.iter().flatten().peekable();
    if present.peek().is_none() {
        return ColumnKind::Text;
    }
    let present: Vec<&Value> = present.copied().collect();
    if present.iter().all(|value| value.as_i64().is_some()) {
        ColumnKind::Int
    } else if present.iter().all(|value| value.is_number()) {
        ColumnKind::Float
    } else if present.iter().all(|value| value.is_boolean()) {
        ColumnKind::Bool
    } else {
        ColumnKind::Text
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn build_column(name: &str, values: &[Option<&Value>]) -> Column {
    match infer_kind(values) {
        ColumnKind::Int => {
            let data: Vec<Option<i64>> = values.iter().map(|v| v.and_then(Value::as_i64)).collect();
            Series::new(name.into(), data).into_column()
        }
        ColumnKind::Float => {
            let data: Vec<Option<f64>> = values.iter().map(|v| v.and_then(Value::as_f64)).collect();
            Series::new(name.into(), data).into_column()
        }
        ColumnKind::Bool => {
            let data: Vec<Option<bool>> =
                values.iter().map(|v| v.and_then(Value::as_bool)).collect();
            Series::new(name.into(), data).into_column()
        }
        ColumnKind::Text => {
            let data: Vec<Option<String>> = values.iter().map(|v| v.map(value_to_text)).collect();
            Series::new(name.into(), data).into_column()
        }
    }
}

/// Builds a DataFrame with one row per record and one column per key.
///
/// Columns follow first-seen key order. A key missing from a record, or an
/// explicit JSON `null`, becomes a null cell. Each column takes the narrowest
/// dtype that holds all of its present values, falling back to String.
pub fn records_to_frame(records: &[Map<String, Value>]) -> Result<DataFrame> {
    let mut names: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for record in records {
        for key in record.keys() {
            if seen.insert(key.as_str()) {
                names.push(key.as_str());
            }
        }
    }

    let columns: Vec<Column> = names
        .iter()
        .map(|name| {
            let values: Vec<Option<&Value>> = records
                .iter()
                .map(|record| record.get(*name).filter(|value| !value.is_null()))
                .collect();
            build_column(name, &values)
        })
        .collect();

    Ok(DataFrame::new(columns)?)
}
