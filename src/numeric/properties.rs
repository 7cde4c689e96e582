// ============================================================================
// Property Tests
// Normalisation, ordering and text round-trip laws
// ============================================================================

use super::{DecimalError, ReadOnlyDecimalFloat, MAX_MANTISSA};
use proptest::prelude::*;
use quickcheck::quickcheck;
use std::cmp::Ordering;

type RO = ReadOnlyDecimalFloat;

fn mantissa_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        -1_000_i64..=1_000,
        -MAX_MANTISSA..=MAX_MANTISSA,
        Just(MAX_MANTISSA),
        Just(-MAX_MANTISSA),
    ]
}

fn decimal_strategy() -> impl Strategy<Value = RO> {
    (mantissa_strategy(), 0_i32..=40)
        .prop_map(|(value, scale)| RO::new(value, scale).expect("in range by construction"))
}

proptest! {
    #[test]
    fn prop_normalise_is_idempotent(value in decimal_strategy()) {
        let again = RO::new(value.value(), value.scale()).unwrap();
        prop_assert_eq!(again, value);
        prop_assert_eq!(again.value(), value.value());
        prop_assert_eq!(again.scale(), value.scale());
    }

    #[test]
    fn prop_equality_ignores_scale_padding(
        value in -999_999_999_i64..=999_999_999,
        scale in -5_i32..=20,
        k in 0_u32..=9,
    ) {
        let base = RO::new(value, scale);
        let padded = RO::new(value * 10_i64.pow(k), scale + k as i32);
        prop_assert_eq!(base, padded);
    }

    #[test]
    fn prop_zero_is_unique(scale in any::<i32>()) {
        prop_assert_eq!(RO::new(0, scale), Ok(RO::ZERO));
    }

    #[test]
    fn prop_order_is_total_and_antisymmetric(a in decimal_strategy(), b in decimal_strategy()) {
        let forward = a.cmp(&b);
        prop_assert_eq!(forward, b.cmp(&a).reverse());
        prop_assert_eq!(forward == Ordering::Equal, a == b);
    }

    #[test]
    fn prop_order_matches_rust_decimal(a in decimal_strategy(), b in decimal_strategy()) {
        // rust_decimal is exact up to 28 fractional digits
        prop_assume!(a.scale() <= 28 && b.scale() <= 28);
        let (da, db) = (a.to_decimal().unwrap(), b.to_decimal().unwrap());
        prop_assert_eq!(a.cmp(&b), da.cmp(&db));
    }

    #[test]
    fn prop_negation_reverses_order(a in decimal_strategy(), b in decimal_strategy()) {
        prop_assume!(a < b);
        prop_assert!(-b < -a);
    }

    #[test]
    fn prop_order_is_transitive(
        a in decimal_strategy(),
        b in decimal_strategy(),
        c in decimal_strategy(),
    ) {
        let mut sorted = [a, b, c];
        sorted.sort();
        prop_assert!(sorted[0] <= sorted[1]);
        prop_assert!(sorted[1] <= sorted[2]);
        prop_assert!(sorted[0] <= sorted[2]);
    }

    #[test]
    fn prop_text_round_trip(value in decimal_strategy()) {
        let mut buffer = [0u8; 64];
        let written = value.encode(&mut buffer, 0).unwrap();
        let reparsed = RO::parse_ascii(&buffer[..written]).unwrap();
        prop_assert_eq!(reparsed, value);
    }

    #[test]
    fn prop_reencoding_canonical_text_is_stable(
        integer in 0_u32..100_000,
        fraction in 0_u32..10_000,
        zeros in 0_usize..6,
    ) {
        let text = format!("{}.{:04}{}", integer, fraction, "0".repeat(zeros));
        let parsed: RO = text.parse().unwrap();
        let canonical = parsed.to_string();
        prop_assert_eq!(canonical.parse::<RO>().unwrap(), parsed);
        prop_assert_eq!(canonical.parse::<RO>().unwrap().to_string(), canonical);
    }

    #[test]
    fn prop_parse_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..40)) {
        match RO::parse_ascii(&bytes) {
            Ok(value) => prop_assert!(value.unsigned_value() <= MAX_MANTISSA as u64),
            Err(error) => prop_assert!(matches!(
                error,
                DecimalError::InvalidFormat | DecimalError::RangeOverflow
            )),
        }
    }
}

#[test]
fn quickcheck_negation_is_an_involution() {
    fn prop(value: i64, scale: u8) -> bool {
        let decimal = RO::new(value % (MAX_MANTISSA + 1), i32::from(scale)).unwrap();
        -(-decimal) == decimal
    }
    quickcheck(prop as fn(i64, u8) -> bool);
}

#[test]
fn quickcheck_integers_parse_like_std() {
    fn prop(value: i64) -> bool {
        let value = value % (MAX_MANTISSA + 1);
        let parsed: RO = value.to_string().parse().unwrap();
        parsed == RO::from_long(value).unwrap()
    }
    quickcheck(prop as fn(i64) -> bool);
}
