//! # Validated RUT Newtype
//!
//! [`Rut`] can only be constructed from an identifier whose check character
//! is correct. Free functions such as [`crate::validate`] answer "is this
//! string valid?"; `Rut` carries the answer in the type so downstream code
//! never re-checks.
//!
//! ## Canonical storage
//!
//! - Body digits without separators or leading zeros (`"0"` for an all-zero
//!   body).
//! - Check character upper-cased.
//!
//! Serialization uses the dash-only shape (`18622178-8`). `Display` uses the
//! grouped shape (`18.622.178-8`).

use serde::{Deserialize, Serialize, Serializer};

use crate::check_digit::{check_digit_for, parse};
use crate::error::RutError;
use crate::normalize::{format, FormatMode, CHECK_DIGIT_SEPARATOR};

/// A Chilean RUT with a verified check character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rut {
    body: String,
    check_digit: char,
}

impl Rut {
    /// Parse and verify a RUT in any accepted shape.
    ///
    /// # Errors
    ///
    /// - [`RutError::EmptyInput`] / [`RutError::InvalidInput`] as for
    ///   [`crate::validate`].
    /// - [`RutError::CheckDigitMismatch`] if the check character is wrong.
    pub fn new(value: impl AsRef<str>) -> Result<Self, RutError> {
        let parsed = parse(value.as_ref())?;
        if parsed.supplied != parsed.expected {
            return Err(RutError::CheckDigitMismatch {
                expected: parsed.expected,
                found: parsed.supplied,
            });
        }

        let trimmed = parsed.body.trim_start_matches('0');
        let body = if trimmed.is_empty() { "0" } else { trimmed };
        Ok(Self {
            body: body.to_string(),
            check_digit: parsed.expected,
        })
    }

    /// Build a RUT from an integer body, computing its check character.
    pub fn from_body(body: u64) -> Self {
        Self {
            body: body.to_string(),
            check_digit: check_digit_for(body),
        }
    }

    /// Body digits, no separators.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Check character (`0`-`9` or `K`).
    pub fn check_digit(&self) -> char {
        self.check_digit
    }

    /// Render in the requested shape.
    pub fn formatted(&self, mode: FormatMode) -> String {
        format(&self.to_dashed(), mode)
    }

    fn to_dashed(&self) -> String {
        format!("{}{CHECK_DIGIT_SEPARATOR}{}", self.body, self.check_digit)
    }
}

impl std::fmt::Display for Rut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted(FormatMode::WithGroupAndDash))
    }
}

impl std::str::FromStr for Rut {
    type Err = RutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Rut {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_dashed())
    }
}

impl<'de> Deserialize<'de> for Rut {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}
