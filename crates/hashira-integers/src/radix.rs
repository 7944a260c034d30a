//! Signed integer literals in bases 2 through 36.
//!
//! Digits are `0-9` followed by `a-z`, with `A-Z` accepted as the same
//! values. A literal is parsed by left-to-right positional accumulation
//! (`acc = acc * base + digit`) in unbounded precision, and the optional
//! leading `-` is applied once at the end.

use num_traits::Zero;
use thiserror::Error;

use crate::Integer;

/// Smallest supported base.
pub const MIN_RADIX: u32 = 2;

/// Largest supported base (`0-9` plus `a-z`).
pub const MAX_RADIX: u32 = 36;

/// Errors that can occur while reading or writing a literal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RadixError {
    /// The base is outside `2..=36`.
    #[error("base {base} is out of range (expected {MIN_RADIX}..={MAX_RADIX})")]
    InvalidBase {
        /// The rejected base.
        base: u32,
    },

    /// A character is not a digit of the base, or there are no digits.
    ///
    /// `digit` is `None` when the literal is empty, either outright or
    /// after stripping the sign.
    #[error("invalid digit {} for base {base}", describe_digit(.digit))]
    InvalidDigit {
        /// The offending character, if any.
        digit: Option<char>,
        /// The base the literal was read in.
        base: u32,
    },
}

fn describe_digit(digit: &Option<char>) -> String {
    match digit {
        Some(c) => format!("'{c}'"),
        None => "(empty digit string)".to_string(),
    }
}

/// Checks that `base` is in `2..=36`.
///
/// # Errors
///
/// Returns [`RadixError::InvalidBase`] otherwise.
pub fn check_base(base: u32) -> Result<(), RadixError> {
    if (MIN_RADIX..=MAX_RADIX).contains(&base) {
        Ok(())
    } else {
        Err(RadixError::InvalidBase { base })
    }
}

/// Returns the value of `c` as a digit in `base`, if it is one.
#[must_use]
pub fn digit_value(c: char, base: u32) -> Option<u32> {
    // to_digit(36) maps 0-9, a-z and A-Z to 0..36 and nothing else
    c.to_digit(MAX_RADIX).filter(|&v| v < base)
}

/// Decodes a signed literal written in `base`.
///
/// # Errors
///
/// - [`RadixError::InvalidBase`] if `base` is outside `2..=36`.
/// - [`RadixError::InvalidDigit`] if a character is not a digit of
///   `base`, or if no digits remain after trimming and removing the sign.
///
/// # Examples
///
/// ```
/// use hashira_integers::{decode, Integer};
///
/// assert_eq!(decode("1010", 2).unwrap(), Integer::new(10));
/// assert_eq!(decode("-ff", 16).unwrap(), Integer::new(-255));
/// assert_eq!(decode("Z", 36).unwrap(), Integer::new(35));
/// ```
pub fn decode(digits: &str, base: u32) -> Result<Integer, RadixError> {
    check_base(base)?;

    let literal = digits.trim();
    let (negative, body) = match literal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, literal),
    };

    if body.is_empty() {
        return Err(RadixError::InvalidDigit { digit: None, base });
    }

    let radix = Integer::from(base);
    let mut acc = Integer::zero();
    for c in body.chars() {
        let value = digit_value(c, base).ok_or(RadixError::InvalidDigit {
            digit: Some(c),
            base,
        })?;
        acc = acc * &radix + Integer::from(value);
    }

    Ok(if negative { -acc } else { acc })
}

/// Encodes `value` in `base` with lowercase digits and a leading `-` for
/// negative values. Inverse of [`decode`].
///
/// # Errors
///
/// Returns [`RadixError::InvalidBase`] if `base` is outside `2..=36`.
pub fn encode(value: &Integer, base: u32) -> Result<String, RadixError> {
    check_base(base)?;
    Ok(value.as_inner().in_radix(base).to_string())
}
