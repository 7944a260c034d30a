//! Arbitrary precision integers.
//!
//! This module provides a wrapper around `dashu::IBig` with the
//! handful of operations root decoding and polynomial expansion need.

use dashu::base::Signed as DashuSigned;
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::radix::{self, RadixError};

/// An arbitrary precision integer.
///
/// This type wraps `dashu::IBig`. Values are never truncated or reduced.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Parses a signed literal in the given base.
    ///
    /// Accepts the same syntax as [`radix::decode`]: surrounding
    /// whitespace, an optional leading `-`, and case-insensitive digits.
    ///
    /// # Errors
    ///
    /// Returns [`RadixError`] if the base is outside `2..=36` or the
    /// string contains a digit that is not valid in that base.
    pub fn from_str_radix(s: &str, base: u32) -> Result<Self, RadixError> {
        radix::decode(s, base)
    }

    /// Renders the integer in the given base, lowercase, `-` for negatives.
    ///
    /// # Errors
    ///
    /// Returns [`RadixError::InvalidBase`] if the base is outside `2..=36`.
    pub fn to_str_radix(&self, base: u32) -> Result<String, RadixError> {
        radix::encode(self, base)
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl FromStr for Integer {
    type Err = RadixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        radix::decode(s, 10)
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        Integer(&self.0 + &rhs.0)
    }
}

impl AddAssign<&Integer> for Integer {
    fn add_assign(&mut self, rhs: &Integer) {
        self.0 += &rhs.0;
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Integer> for Integer {
    type Output = Self;

    fn sub(self, rhs: &Integer) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        Integer(&self.0 - &rhs.0)
    }
}

impl SubAssign<&Integer> for Integer {
    fn sub_assign(&mut self, rhs: &Integer) {
        self.0 -= &rhs.0;
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(self, rhs: &Integer) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer(&self.0 * &rhs.0)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<u32> for Integer {
    fn from(value: u32) -> Self {
        Self(IBig::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<i128> for Integer {
    fn from(value: i128) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}
