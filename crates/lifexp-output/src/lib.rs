//! Output stage: restrict the clean table to one region and persist it.

mod error;
mod sink;

pub use error::{OutputError, Result};
pub use sink::{RegionFilterSink, filter_region, write_csv};
