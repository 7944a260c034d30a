//! Property-based tests for base 2-36 literals.

#[cfg(test)]
mod tests {
    use dashu::integer::IBig;
    use proptest::prelude::*;

    use crate::radix::{decode, digit_value, encode, RadixError};
    use crate::Integer;

    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    fn any_base() -> impl Strategy<Value = u32> {
        2u32..=36
    }

    // A base together with a non-empty digit string valid in it
    fn literal() -> impl Strategy<Value = (u32, String)> {
        any_base().prop_flat_map(|base| {
            let digit = (0..base).prop_map(|d| ALPHABET[d as usize] as char);
            (Just(base), proptest::collection::vec(digit, 1..60))
                .prop_map(|(base, chars)| (base, chars.into_iter().collect()))
        })
    }

    proptest! {
        #[test]
        fn round_trip_i128(n in any::<i128>(), base in any_base()) {
            let n = Integer::from(n);
            let text = encode(&n, base).unwrap();
            prop_assert_eq!(decode(&text, base).unwrap(), n);
        }

        #[test]
        fn round_trip_wide((base, digits) in literal(), negative in any::<bool>()) {
            let text = if negative { format!("-{digits}") } else { digits };
            let n = decode(&text, base).unwrap();
            let again = decode(&encode(&n, base).unwrap(), base).unwrap();
            prop_assert_eq!(again, n);
        }

        #[test]
        fn matches_dashu_parser((base, digits) in literal()) {
            let expected = IBig::from_str_radix(&digits, base).unwrap();
            prop_assert_eq!(decode(&digits, base).unwrap(), Integer::from(expected));
        }

        #[test]
        fn uppercase_is_same_value((base, digits) in literal()) {
            prop_assert_eq!(
                decode(&digits.to_uppercase(), base).unwrap(),
                decode(&digits, base).unwrap()
            );
        }

        #[test]
        fn sign_negates((base, digits) in literal()) {
            let positive = decode(&digits, base).unwrap();
            let negative = decode(&format!("-{digits}"), base).unwrap();
            prop_assert_eq!(negative, -positive);
        }

        #[test]
        fn digit_at_or_above_base_rejected(base in 2u32..36, prefix in "[01]{0,8}") {
            let bad = ALPHABET[base as usize] as char;
            let text = format!("{prefix}{bad}");
            prop_assert_eq!(
                decode(&text, base),
                Err(RadixError::InvalidDigit { digit: Some(bad), base })
            );
        }

        #[test]
        fn digit_value_agrees_with_alphabet(base in any_base(), d in 0u32..36) {
            let c = ALPHABET[d as usize] as char;
            let expected = if d < base { Some(d) } else { None };
            prop_assert_eq!(digit_value(c, base), expected);
            prop_assert_eq!(digit_value(c.to_ascii_uppercase(), base), expected);
        }

        #[test]
        fn out_of_range_base_rejected(base in prop_oneof![0u32..2, 37u32..1000]) {
            prop_assert_eq!(decode("1", base), Err(RadixError::InvalidBase { base }));
        }
    }
}
