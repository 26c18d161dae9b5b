// Equity value object: fixed-point decimal string in [0, 1]

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of fractional digits every equity value carries ("0.010").
pub const EQUITY_SCALE: usize = 3;

/// Fractional ownership attached to a job, kept as its decimal text so no
/// floating-point rounding ever touches it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Equity(String);

impl Equity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Equity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            AppError::Validation(format!(
                "equity must be a decimal in [0, 1] with {} fractional digits, got {:?}",
                EQUITY_SCALE, s
            ))
        };

        let (whole, frac) = s.split_once('.').ok_or_else(invalid)?;
        if frac.len() != EQUITY_SCALE || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        match whole {
            "0" => Ok(Self(s.to_string())),
            "1" if frac.bytes().all(|b| b == b'0') => Ok(Self(s.to_string())),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Equity {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Equity> for String {
    fn from(value: Equity) -> Self {
        value.0
    }
}

impl fmt::Display for Equity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
