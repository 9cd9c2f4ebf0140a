//! Closed registry of region codes accepted by the pipeline.
//!
//! Codes follow the Eurostat convention (`EL` for Greece, `UK` for the United
//! Kingdom, `FX` for metropolitan France). Matching is exact and case-sensitive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ModelError, Result};

/// Every valid region code, in registry order.
pub const COUNTRY_CODES: [&str; 47] = [
    "AT", "BE", "BG", "CH", "CY", "CZ", "DK", "EE", "EL", "ES", "FI", "FR", "HR", "HU", "IS", "IT",
    "LI", "LT", "LU", "LV", "MT", "NL", "NO", "PL", "PT", "RO", "SE", "SI", "SK", "DE", "AL", "IE",
    "ME", "MK", "RS", "AM", "AZ", "GE", "TR", "UA", "BY", "UK", "XK", "FX", "MD", "SM", "RU",
];

/// Region used when the caller does not name one.
pub const DEFAULT_REGION: &str = "PT";

/// Returns the registry codes in their fixed order.
pub fn list_of_countries() -> &'static [&'static str] {
    &COUNTRY_CODES
}

/// A validated region code.
///
/// Construction is the only place region correctness is checked; everything
/// downstream can rely on the code being a registry member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Country(&'static str);

impl Country {
    pub fn new(code: &str) -> Result<Self> {
        list_of_countries()
            .iter()
            .find(|candidate| **candidate == code)
            .map(|candidate| Self(*candidate))
            .ok_or_else(|| ModelError::InvalidCountryCode {
                code: code.to_string(),
            })
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Iterates over every country in registry order.
    pub fn all() -> impl Iterator<Item = Country> {
        list_of_countries().iter().map(|code| Country(*code))
    }
}

impl Default for Country {
    fn default() -> Self {
        Self(DEFAULT_REGION)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl FromStr for Country {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Serialize for Country {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for Country {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::new(&code).map_err(serde::de::Error::custom)
    }
}
