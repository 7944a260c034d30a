//! Property-based tests for root expansion.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::monic::{BuildError, MonicPoly};
    use hashira_integers::Integer;

    // Strategy for generating small integer roots
    fn small_root() -> impl Strategy<Value = Integer> {
        (-1000i64..1000i64).prop_map(Integer::new)
    }

    // Strategy for generating roots that do not fit in a machine word
    fn wide_root() -> impl Strategy<Value = Integer> {
        any::<i128>().prop_map(|n| Integer::from(n) * Integer::from(n))
    }

    fn roots() -> impl Strategy<Value = Vec<Integer>> {
        proptest::collection::vec(prop_oneof![small_root(), wide_root()], 0..=8)
    }

    proptest! {
        #[test]
        fn length_is_m_plus_one(roots in roots(), extra in 0usize..3) {
            let m = roots.len().saturating_sub(extra);
            let p = MonicPoly::from_roots(&roots, m).unwrap();
            prop_assert_eq!(p.coeffs().len(), m + 1);
            prop_assert_eq!(p.degree(), m);
        }

        #[test]
        fn leading_coefficient_is_one(roots in roots()) {
            let p = MonicPoly::from_roots(&roots, roots.len()).unwrap();
            prop_assert!(p.leading_coeff().is_one());
        }

        #[test]
        fn zero_factors_is_one(roots in roots()) {
            prop_assert_eq!(MonicPoly::from_roots(&roots, 0).unwrap(), MonicPoly::one());
        }

        #[test]
        fn too_few_roots_rejected(roots in roots(), missing in 1usize..4) {
            let m = roots.len() + missing;
            prop_assert_eq!(
                MonicPoly::from_roots(&roots, m),
                Err(BuildError::InsufficientRoots { required: m, available: roots.len() })
            );
        }

        #[test]
        fn order_does_not_matter(roots in roots()) {
            let mut reversed = roots.clone();
            reversed.reverse();
            prop_assert_eq!(
                MonicPoly::from_roots(&roots, roots.len()).unwrap(),
                MonicPoly::from_roots(&reversed, reversed.len()).unwrap()
            );
        }

        #[test]
        fn vieta_outer_coefficients(roots in proptest::collection::vec(small_root(), 1..=8)) {
            // constant term = (-1)^m * prod(r), x^(m-1) term = -sum(r)
            let m = roots.len();
            let p = MonicPoly::from_roots(&roots, m).unwrap();

            let product = roots.iter().fold(Integer::one(), |acc, r| acc * r);
            let expected_constant = if m % 2 == 0 { product } else { -product };
            prop_assert_eq!(p.coeff(0), expected_constant);

            let sum = roots.iter().fold(Integer::zero(), |acc, r| acc + r);
            prop_assert_eq!(p.coeff(m - 1), -sum);
        }

        #[test]
        fn matches_schoolbook_product(roots in proptest::collection::vec(small_root(), 0..=6)) {
            let expected = roots.iter().fold(vec![Integer::one()], |acc, r| {
                schoolbook_mul(&acc, &[-r, Integer::one()])
            });
            let p = MonicPoly::from_roots(&roots, roots.len()).unwrap();
            prop_assert_eq!(p.coeffs(), expected.as_slice());
        }
    }

    // Reference convolution of two ascending coefficient vectors
    fn schoolbook_mul(a: &[Integer], b: &[Integer]) -> Vec<Integer> {
        let mut result = vec![Integer::zero(); a.len() + b.len() - 1];
        for (i, ai) in a.iter().enumerate() {
            for (j, bj) in b.iter().enumerate() {
                result[i + j] = result[i + j].clone() + ai * bj;
            }
        }
        result
    }
}
