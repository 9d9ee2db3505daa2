//! # Normalizer — Separator Stripping and Canonical Shapes
//!
//! A RUT reaches us in one of several textual shapes, sometimes mixed in a
//! single string:
//!
//! - `18.622.178-8` — group separators and a check-digit separator
//! - `18622178-8` — check-digit separator only
//! - `186221788` — bare digits, the last character is the check character
//!
//! This module strips those separators and renders any of the shapes back
//! out through [`format`]. It never validates digits or check characters;
//! that is the job of [`crate::check_digit`].

use serde::{Deserialize, Serialize};

use crate::error::RutError;

/// Separator placed between groups of three body digits.
pub const GROUP_SEPARATOR: char = '.';

/// Separator placed before the check character.
pub const CHECK_DIGIT_SEPARATOR: char = '-';

/// Canonical output shapes for [`format`].
///
/// Callers that still select a shape by number go through
/// [`FormatMode::from_code`] or [`format_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatMode {
    /// `18.622.178-8`
    WithGroupAndDash,
    /// `18622178-8`
    DashOnly,
    /// `186221788`
    #[serde(alias = "none")]
    Bare,
}

impl FormatMode {
    /// All modes, ordered by selector code.
    pub fn all() -> &'static [FormatMode] {
        &[Self::WithGroupAndDash, Self::DashOnly, Self::Bare]
    }

    /// Resolve a numeric selector (`1`, `2`, `3`).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::WithGroupAndDash),
            2 => Some(Self::DashOnly),
            3 => Some(Self::Bare),
            _ => None,
        }
    }

    /// The numeric selector for this mode.
    pub fn code(self) -> u8 {
        match self {
            Self::WithGroupAndDash => 1,
            Self::DashOnly => 2,
            Self::Bare => 3,
        }
    }
}

impl std::fmt::Display for FormatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::WithGroupAndDash => "with_group_and_dash",
            Self::DashOnly => "dash_only",
            Self::Bare => "bare",
        };
        f.write_str(name)
    }
}

/// Remove every group separator. The check-digit separator is left alone.
pub fn strip_group_separators(input: &str) -> String {
    input.chars().filter(|c| *c != GROUP_SEPARATOR).collect()
}

/// Remove group and check-digit separators, leaving the body digits and the
/// trailing check character if one is present.
pub fn strip_all_separators(input: &str) -> String {
    input
        .chars()
        .filter(|c| *c != GROUP_SEPARATOR && *c != CHECK_DIGIT_SEPARATOR)
        .collect()
}

/// Reverse the character sequence of `input`.
pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

/// Split a bare string into its body and trailing check character.
///
/// Returns `None` for an empty string. The body may be empty.
pub(crate) fn split_check(bare: &str) -> Option<(&str, char)> {
    let (idx, check) = bare.char_indices().next_back()?;
    Some((&bare[..idx], check))
}

/// Insert a group separator after every third digit, counted from the
/// least-significant end.
fn group_body(body: &str) -> String {
    let reversed = reverse(body);
    let mut grouped = String::with_capacity(reversed.len() + reversed.len() / 3);
    for (i, c) in reversed.chars().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    reverse(&grouped)
}

/// Render `input` in the requested canonical shape.
///
/// Surrounding whitespace is trimmed and the check character is
/// upper-cased. Input whose bare form has no body (zero or one character)
/// comes back bare, since there is nothing to separate.
///
/// ```
/// use rut_core::{format, FormatMode};
///
/// assert_eq!(format("18622178-8", FormatMode::WithGroupAndDash), "18.622.178-8");
/// assert_eq!(format("18.622.178-8", FormatMode::Bare), "186221788");
/// ```
pub fn format(input: &str, mode: FormatMode) -> String {
    let bare = strip_all_separators(input.trim());
    let Some((body, check)) = split_check(&bare) else {
        return bare;
    };
    let check = check.to_ascii_uppercase();
    if body.is_empty() {
        return check.to_string();
    }

    match mode {
        FormatMode::WithGroupAndDash => {
            format!("{}{CHECK_DIGIT_SEPARATOR}{check}", group_body(body))
        }
        FormatMode::DashOnly => format!("{body}{CHECK_DIGIT_SEPARATOR}{check}"),
        FormatMode::Bare => format!("{body}{check}"),
    }
}

/// [`format`] driven by a numeric selector.
///
/// # Errors
///
/// Returns [`RutError::InvalidOption`] carrying the trimmed input when
/// `code` is not a recognised selector.
pub fn format_code(input: &str, code: u8) -> Result<String, RutError> {
    match FormatMode::from_code(code) {
        Some(mode) => Ok(format(input, mode)),
        None => Err(RutError::InvalidOption {
            code,
            input: input.trim().to_string(),
        }),
    }
}
