//! Lenient extraction of observation values.
//!
//! Upstream cells carry footnote flags and special-value markers (`80.1 b`,
//! `: `, `79.9 e`). Only the first `digits.digits` run is kept; a cell without
//! one has no value.

use std::sync::LazyLock;

use regex::Regex;

/// ASCII digits on both sides of a literal point.
static DECIMAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9]+").expect("Invalid decimal regex"));

/// Returns the first decimal substring of `raw`, if any.
pub fn extract_decimal(raw: &str) -> Option<&str> {
    DECIMAL_REGEX.find(raw).map(|found| found.as_str())
}
