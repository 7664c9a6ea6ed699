//! Property tests for the decomposition engines and the normalizer.

use num_bigint::BigUint;
use proptest::prelude::*;

use lexnum_core::cards::{CardsEngine, WordPair};
use lexnum_core::convert::IntegerWords;
use lexnum_core::normalize::Decimal;

// English-shaped card structure with throwaway words; the properties here
// are about values, not vocabulary.
const CARDS: &[(u128, &str)] = &[
    (1_000_000_000_000_000_000_000_000_000_000_000, "w33"),
    (1_000_000_000_000_000_000_000_000_000_000, "w30"),
    (1_000_000_000_000_000_000_000_000_000, "w27"),
    (1_000_000_000_000_000_000_000_000, "w24"),
    (1_000_000_000_000_000_000_000, "w21"),
    (1_000_000_000_000_000_000, "w18"),
    (1_000_000_000_000_000, "w15"),
    (1_000_000_000_000, "w12"),
    (1_000_000_000, "w9"),
    (1_000_000, "w6"),
    (1000, "w3"),
    (100, "hundred"),
    (90, "ninety"),
    (80, "eighty"),
    (70, "seventy"),
    (60, "sixty"),
    (50, "fifty"),
    (40, "forty"),
    (30, "thirty"),
    (20, "twenty"),
    (19, "nineteen"),
    (18, "eighteen"),
    (17, "seventeen"),
    (16, "sixteen"),
    (15, "fifteen"),
    (14, "fourteen"),
    (13, "thirteen"),
    (12, "twelve"),
    (11, "eleven"),
    (10, "ten"),
    (9, "nine"),
    (8, "eight"),
    (7, "seven"),
    (6, "six"),
    (5, "five"),
    (4, "four"),
    (3, "three"),
    (2, "two"),
    (1, "one"),
    (0, "zero"),
];

fn merge(left: &WordPair, right: &WordPair) -> String {
    if left.value == BigUint::from(1u32) && right.below(100) {
        right.text.clone()
    } else {
        format!("{} {}", left.text, right.text)
    }
}

fn engine() -> CardsEngine {
    CardsEngine::new("test", CARDS, merge)
}

proptest! {
    // ────────────────────────────────────────────────────────────────
    // 1. Tree reduction preserves the value
    // ────────────────────────────────────────────────────────────────

    #[test]
    fn reduction_value_equals_input(value in any::<u128>()) {
        let engine = engine();
        let v = BigUint::from(value);
        let tree = engine.decompose(&v).unwrap();
        prop_assert_eq!(engine.reduce(tree).value, v);
    }

    // ────────────────────────────────────────────────────────────────
    // 2. Conversion is total and deterministic over the covered range
    // ────────────────────────────────────────────────────────────────

    #[test]
    fn conversion_never_fails_and_is_stable(value in any::<u64>()) {
        let engine = engine();
        let v = BigUint::from(value);
        let first = engine.to_words(&v).unwrap();
        let second = engine.to_words(&v).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert!(!first.is_empty());
    }

    #[test]
    fn zero_word_appears_only_for_zero(value in 1u64..) {
        let engine = engine();
        let words = engine.to_words(&BigUint::from(value)).unwrap();
        prop_assert!(!words.split(' ').any(|w| w == "zero"));
    }

    // ────────────────────────────────────────────────────────────────
    // 3. Normalizer round-trips
    // ────────────────────────────────────────────────────────────────

    #[test]
    fn integer_strings_round_trip(value in any::<u128>()) {
        let parsed = Decimal::parse(&value.to_string()).unwrap();
        prop_assert_eq!(parsed.integer.to_string(), value.to_string());
        prop_assert!(!parsed.negative);
        prop_assert_eq!(parsed.fraction, None);
    }

    #[test]
    fn negative_sign_only_flips_the_flag(value in any::<i128>()) {
        let decimal = Decimal::from_int(value);
        prop_assert_eq!(decimal.negative, value < 0);
        prop_assert_eq!(decimal.integer.to_string(), value.unsigned_abs().to_string());
    }

    #[test]
    fn fraction_digits_survive_verbatim(int_part in any::<u64>(), frac in "[0-9]{1,12}") {
        let parsed = Decimal::parse(&format!("{int_part}.{frac}")).unwrap();
        prop_assert_eq!(parsed.fraction.as_deref(), Some(frac.as_str()));
    }

    #[test]
    fn finite_floats_always_normalize(value in any::<f64>()) {
        if value.is_finite() {
            prop_assert!(Decimal::from_f64(value).is_ok());
        } else {
            prop_assert!(Decimal::from_f64(value).is_err());
        }
    }
}
