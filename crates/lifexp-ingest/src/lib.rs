//! Source readers for the life expectancy pipeline.
//!
//! Each reader turns one on-disk export into a raw Polars [`DataFrame`]
//! without normalizing it. Column names and dtypes are whatever the source
//! provides; cleaning happens in `lifexp-transform`.
//!
//! # Formats
//!
//! - **Delimited**: wide text export, fields split on tab or comma
//! - **ArchiveJson**: zip archive holding a JSON array of flat records
//!
//! [`DataFrame`]: polars::prelude::DataFrame

mod archive;
mod delimited;
mod error;
mod json_table;
mod polars_utils;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Readers ===
pub use archive::read_archive_json;
pub use delimited::read_delimited_table;
pub use json_table::records_to_frame;
pub use reader::ReaderKind;

// === AnyValue Helpers ===
pub use polars_utils::{
    any_to_f64, any_to_i64, any_to_string, any_to_string_non_empty, parse_f64, parse_i64,
};
