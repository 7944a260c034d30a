//! Monic univariate polynomials.
//!
//! A [`MonicPoly`] only ever comes into existence as `1` or as the
//! product of `1` with monic linear factors, so its leading coefficient
//! is always exactly one.

use std::fmt;

use hashira_integers::Integer;
use num_traits::{One, Zero};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur while expanding a product of linear factors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Fewer roots were supplied than factors were requested.
    #[error(
        "not enough roots to build a degree {required} polynomial \
         (required={required}, available={available})"
    )]
    InsufficientRoots {
        /// Number of roots the degree needs.
        required: usize,
        /// Number of roots supplied.
        available: usize,
    },
}

/// A monic polynomial with integer coefficients.
///
/// Coefficients are stored in ascending degree order, so `coeffs()[0]` is
/// the constant term and the last entry is the leading `1`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MonicPoly {
    /// Coefficients in ascending degree order.
    coeffs: Vec<Integer>,
}

impl MonicPoly {
    /// Creates the constant polynomial 1 (the empty product).
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![Integer::one()],
        }
    }

    /// Creates the linear polynomial `x - root`.
    #[must_use]
    pub fn linear(root: &Integer) -> Self {
        Self::one().mul_linear(root)
    }

    /// Expands `(x - roots[0]) ... (x - roots[m-1])`.
    ///
    /// Only the first `m` roots are used, in order; any further roots are
    /// ignored. `m == 0` yields the polynomial `1`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InsufficientRoots`] if `roots` has fewer than
    /// `m` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashira_integers::Integer;
    /// use hashira_poly::MonicPoly;
    ///
    /// let roots = [Integer::new(2), Integer::new(3)];
    /// let p = MonicPoly::from_roots(&roots, 2).unwrap();
    /// assert_eq!(p.to_string(), "1 -5 6");
    /// ```
    pub fn from_roots(roots: &[Integer], m: usize) -> Result<Self, BuildError> {
        if roots.len() < m {
            return Err(BuildError::InsufficientRoots {
                required: m,
                available: roots.len(),
            });
        }

        let mut poly = Self::one();
        poly.coeffs.reserve(m);
        for root in &roots[..m] {
            poly.mul_linear_in_place(root);
            debug!(root = %root, coeffs = %poly.to_ascending_string(), "multiplied by linear factor");
        }

        Ok(poly)
    }

    /// Returns `(x - root) * self`.
    #[must_use]
    pub fn mul_linear(&self, root: &Integer) -> Self {
        let mut result = self.clone();
        result.mul_linear_in_place(root);
        result
    }

    /// Replaces `self` with `(x - root) * self`.
    pub fn mul_linear_in_place(&mut self, root: &Integer) {
        // x * P: shift every coefficient up one degree
        self.coeffs.insert(0, Integer::zero());

        // -r * P: coeffs[i + 1] still holds the old a[i] when i is visited
        let d = self.coeffs.len() - 1;
        for i in 0..d {
            if self.coeffs[i + 1].is_zero() {
                continue;
            }
            let term = root * &self.coeffs[i + 1];
            self.coeffs[i] -= &term;
        }

        trace!(degree = self.degree(), "linear factor applied");
    }

    /// Returns the degree of the polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns the leading coefficient, which is always one.
    #[must_use]
    pub fn leading_coeff(&self) -> &Integer {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> Integer {
        self.coeffs.get(i).cloned().unwrap_or_else(Integer::zero)
    }

    /// Returns all coefficients, constant term first.
    #[must_use]
    pub fn coeffs(&self) -> &[Integer] {
        &self.coeffs
    }

    /// Consumes the polynomial and returns its coefficients, constant term first.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<Integer> {
        self.coeffs
    }

    /// Space separated coefficients, constant term first.
    #[must_use]
    pub fn to_ascending_string(&self) -> String {
        join(self.coeffs.iter())
    }

    /// Space separated coefficients, leading term first.
    #[must_use]
    pub fn to_descending_string(&self) -> String {
        join(self.coeffs.iter().rev())
    }
}

impl Default for MonicPoly {
    fn default() -> Self {
        Self::one()
    }
}

fn join<'a>(coeffs: impl Iterator<Item = &'a Integer>) -> String {
    coeffs
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prints the coefficients highest degree first, separated by spaces.
impl fmt::Display for MonicPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.coeffs.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
