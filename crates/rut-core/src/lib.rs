//! # rut-core — Chilean RUT Primitives
//!
//! Check-digit computation, validation, canonical formatting, and random
//! generation for Chilean national identification numbers (RUT/RUN): a
//! numeric body followed by a single check character, `0`-`9` or `K`.
//!
//! ## Components
//!
//! - [`normalize`] strips group (`.`) and check-digit (`-`) separators and
//!   renders the canonical shapes `18.622.178-8`, `18622178-8`, `186221788`.
//! - [`check_digit`] computes the modulo 11 check character and validates
//!   full identifiers.
//! - [`generate`](mod@generate) draws random valid identifiers from a range.
//! - [`rut`] provides [`Rut`], a newtype that only holds verified values.
//!
//! ## Crate Policy
//!
//! - Pure computation: no I/O, no global mutable state.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Errors are returned, never logged.

pub mod check_digit;
pub mod error;
pub mod generate;
pub mod normalize;
pub mod rut;

// Re-export primary types for ergonomic imports.
pub use check_digit::{check_digit_for, compute_check_digit, validate};
pub use error::RutError;
pub use generate::{generate, generate_default, generate_with_rng, GenerationRange};
pub use normalize::{
    format, format_code, reverse, strip_all_separators, strip_group_separators, FormatMode,
};
pub use rut::Rut;
