//! # Check-Digit Engine — Modulo 11 Checksum
//!
//! The check character of a RUT is derived from its body:
//!
//! 1. Walk the body digits from the least-significant end.
//! 2. Multiply digit `i` by `WEIGHTS[i % 9]`.
//! 3. Sum the products and take `11 - (sum mod 11)`.
//! 4. Map 11 to `'0'`, 10 to `'K'`, anything else to its decimal digit.
//!
//! The sum is reduced modulo 11 as it accumulates, so arbitrarily long
//! bodies never overflow and the remainder is never negative.

use crate::error::RutError;
use crate::normalize::{reverse, split_check, strip_all_separators, strip_group_separators};

/// Positional weights, applied cyclically from the least-significant digit.
pub const WEIGHTS: [u64; 9] = [2, 3, 4, 5, 6, 7, 2, 3, 4];

/// Check character used when the remainder is 10.
pub const CHECK_K: char = 'K';

/// Map a digit sequence, least-significant first, to its check character.
fn check_char(digits_lsd_first: impl Iterator<Item = u64>) -> char {
    let sum = digits_lsd_first
        .enumerate()
        .fold(0u64, |acc, (i, d)| (acc + d * WEIGHTS[i % WEIGHTS.len()]) % 11);

    match 11 - sum {
        11 => '0',
        10 => CHECK_K,
        r => char::from(b'0' + r as u8),
    }
}

/// Compute the check character of a RUT body.
///
/// Group separators are stripped first, so `"18.622.178"` and `"18622178"`
/// are equivalent. The check-digit separator is *not* accepted here; pass
/// the body only.
///
/// # Errors
///
/// - [`RutError::EmptyInput`] if nothing remains after stripping.
/// - [`RutError::InvalidInput`] carrying the stripped body if it contains
///   anything other than ASCII digits.
///
/// ```
/// assert_eq!(rut_core::compute_check_digit("18622178").unwrap(), '8');
/// assert_eq!(rut_core::compute_check_digit("15.304.340").unwrap(), 'K');
/// ```
pub fn compute_check_digit(body: &str) -> Result<char, RutError> {
    let stripped = strip_group_separators(body);
    if stripped.is_empty() {
        return Err(RutError::EmptyInput);
    }
    if !stripped.chars().all(|c| c.is_ascii_digit()) {
        return Err(RutError::InvalidInput(stripped));
    }

    let reversed = reverse(&stripped);
    Ok(check_char(reversed.bytes().map(|b| u64::from(b - b'0'))))
}

/// Check character of an integer body. Infallible: every integer renders
/// as a non-empty run of digits.
pub fn check_digit_for(body: u64) -> char {
    let digits = std::iter::successors(Some(body), |n| (*n >= 10).then(|| n / 10));
    check_char(digits.map(|n| n % 10))
}

/// A full identifier split into its body and check characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedRut {
    /// Body digits, separators removed.
    pub body: String,
    /// Check character as supplied, upper-cased.
    pub supplied: char,
    /// Check character computed from `body`.
    pub expected: char,
}

/// Trim, upper-case, strip separators, split off the check character, and
/// compute the expected one.
pub(crate) fn parse(full: &str) -> Result<ParsedRut, RutError> {
    let trimmed = full.trim();
    if trimmed.chars().count() <= 1 {
        return Err(RutError::EmptyInput);
    }

    let bare = strip_all_separators(&trimmed.to_uppercase());
    let (body, supplied) = split_check(&bare).ok_or(RutError::EmptyInput)?;
    let expected = compute_check_digit(body)?;

    Ok(ParsedRut {
        body: body.to_string(),
        supplied,
        expected,
    })
}

/// Validate a full identifier in any accepted shape (`18.622.178-8`,
/// `18622178-8`, `186221788`). The check character is case-insensitive.
///
/// A wrong check character is `Ok(false)`, not an error.
///
/// # Errors
///
/// - [`RutError::EmptyInput`] if the trimmed input is at most one character,
///   or has no body once separators are removed.
/// - [`RutError::InvalidInput`] if the body contains non-digits.
pub fn validate(full: &str) -> Result<bool, RutError> {
    let parsed = parse(full)?;
    Ok(parsed.supplied == parsed.expected)
}
