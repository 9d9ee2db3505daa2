//! # Random Generation of Valid RUTs
//!
//! Draws a body uniformly from an inclusive range and appends its check
//! character, producing `"<body>-<check>"`.
//!
//! [`generate`] and [`generate_default`] use the thread-local generator from
//! `rand`, so concurrent callers never contend on a shared generator.
//! [`generate_with_rng`] takes any [`Rng`] for reproducible output.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::check_digit::check_digit_for;
use crate::error::RutError;
use crate::normalize::CHECK_DIGIT_SEPARATOR;

/// Default lower bound for generated bodies.
pub const DEFAULT_MIN: u64 = 4_000_000;

/// Default upper bound for generated bodies.
pub const DEFAULT_MAX: u64 = 99_999_999;

/// Inclusive range of bodies to draw from.
///
/// Deserialization goes through [`GenerationRange::new`], so a range with
/// `min > max` is rejected when loaded from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GenerationRange {
    min: u64,
    max: u64,
}

impl GenerationRange {
    /// Create an inclusive range.
    ///
    /// # Errors
    ///
    /// Returns [`RutError::InvalidRange`] if `min > max`.
    pub fn new(min: u64, max: u64) -> Result<Self, RutError> {
        if min > max {
            return Err(RutError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Create a range from two bounds given in either order.
    pub fn spanning(a: u64, b: u64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> u64 {
        self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> u64 {
        self.max
    }

    /// Whether `body` falls within the range.
    pub fn contains(&self, body: u64) -> bool {
        (self.min..=self.max).contains(&body)
    }
}

impl Default for GenerationRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl<'de> Deserialize<'de> for GenerationRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            min: u64,
            max: u64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.min, raw.max).map_err(serde::de::Error::custom)
    }
}

/// Generate a random valid RUT over `range` using `rng`.
pub fn generate_with_rng<R: Rng + ?Sized>(rng: &mut R, range: GenerationRange) -> String {
    let body = rng.gen_range(range.min..=range.max);
    let check = check_digit_for(body);
    tracing::debug!(
        body,
        check_digit = %check,
        min = range.min,
        max = range.max,
        "generated rut"
    );
    format!("{body}{CHECK_DIGIT_SEPARATOR}{check}")
}

/// Generate a random valid RUT whose body lies in `[min, max]`.
///
/// Bounds given in reverse order are swapped.
pub fn generate(min: u64, max: u64) -> String {
    generate_with_rng(&mut rand::thread_rng(), GenerationRange::spanning(min, max))
}

/// Generate a random valid RUT with a body in `[4_000_000, 99_999_999]`.
pub fn generate_default() -> String {
    generate_with_rng(&mut rand::thread_rng(), GenerationRange::default())
}
