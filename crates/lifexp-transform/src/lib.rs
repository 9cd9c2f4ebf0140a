//! Cleaning stage of the life expectancy pipeline.
//!
//! A cleaner takes the raw table produced by a reader and returns the
//! canonical long-format table (`unit`, `sex`, `age`, `region`, `year`,
//! `value`). Structural problems abort the run; rows with unusable content
//! are dropped.

pub mod cleaner;
pub mod error;
pub mod frame;
pub mod nested;
pub mod numeric;
pub mod wide;

pub use cleaner::CleanerKind;
pub use error::{Result, TransformError};
pub use frame::{frame_to_rows, rows_to_frame};
pub use nested::clean_nested;
pub use numeric::extract_decimal;
pub use wide::{clean_wide, parse_year_headers};
