//! South Asian grouping: three digits, then twos.
//!
//! The Indian numbering system names a new scale every two orders of
//! magnitude past the thousands: hazār (10^3), lākh (10^5), crore (10^7),
//! arab (10^9), and so on. The engine takes the last three digits as the
//! base group, then walks leftward two digits at a time, attaching the
//! positional scale word to every non-zero group.
//!
//! # Invariants
//!
//! 1. A scale word appears at most once in the output.
//! 2. Zero groups are skipped entirely, scale word included.
//! 3. Groups past the last table entry are a [`Error::MissingVocabulary`].

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::convert::IntegerWords;
use crate::error::Error;

/// Vocabulary for a 3-then-2 grouping locale.
pub struct SouthAsianTables {
    pub zero: &'static str,
    /// 1..=99; index 0 unused.
    pub below_hundred: [&'static str; 100],
    pub hundred: &'static str,
    /// Scale words per group position, index 0 unused:
    /// `["", हज़ार, लाख, करोड़, ...]`.
    pub scales: &'static [&'static str],
}

pub struct SouthAsianEngine {
    lang: &'static str,
    tables: &'static SouthAsianTables,
}

impl SouthAsianEngine {
    #[must_use]
    pub fn new(lang: &'static str, tables: &'static SouthAsianTables) -> Self {
        Self { lang, tables }
    }

    /// Split into the base 3-digit group followed by 2-digit groups,
    /// lowest first.
    fn split_groups(value: &BigUint) -> Vec<u16> {
        let thousand = BigUint::from(1000u32);
        let hundred = BigUint::from(100u32);
        let (mut rest, base) = value.div_rem(&thousand);
        let mut groups = vec![base.to_u16().unwrap_or(0)];
        while !rest.is_zero() {
            let (quotient, group) = rest.div_rem(&hundred);
            groups.push(group.to_u16().unwrap_or(0));
            rest = quotient;
        }
        groups
    }

    /// Words for the 0..=999 base group.
    fn base_group_words(&self, group: u16, parts: &mut Vec<&'static str>) {
        let hundreds = group / 100;
        if hundreds > 0 {
            parts.push(self.tables.below_hundred[usize::from(hundreds)]);
            parts.push(self.tables.hundred);
        }
        let rest = group % 100;
        if rest > 0 {
            parts.push(self.tables.below_hundred[usize::from(rest)]);
        }
    }
}

impl IntegerWords for SouthAsianEngine {
    fn lang(&self) -> &'static str {
        self.lang
    }

    fn to_words(&self, value: &BigUint) -> Result<String, Error> {
        if value.is_zero() {
            return Ok(self.tables.zero.to_string());
        }
        let groups = Self::split_groups(value);
        if groups.len() > self.tables.scales.len() {
            return Err(Error::MissingVocabulary {
                lang: self.lang,
                item: format!("scale word for {value}"),
            });
        }

        let mut parts: Vec<&'static str> = Vec::new();
        for (position, &group) in groups.iter().enumerate().rev() {
            if group == 0 {
                continue;
            }
            if position == 0 {
                self.base_group_words(group, &mut parts);
            } else {
                parts.push(self.tables.below_hundred[usize::from(group)]);
                parts.push(self.tables.scales[position]);
            }
        }
        Ok(parts.join(" "))
    }

    fn digit_word(&self, digit: u8) -> Result<&'static str, Error> {
        if digit == 0 {
            Ok(self.tables.zero)
        } else {
            Ok(self.tables.below_hundred[usize::from(digit)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Romanized toy vocabulary; the real Devanagari tables live with the
    // locale.
    static TOY: SouthAsianTables = SouthAsianTables {
        zero: "shunya",
        below_hundred: {
            let mut t = [""; 100];
            t[1] = "ek";
            t[2] = "do";
            t[5] = "paanch";
            t[12] = "barah";
            t[21] = "ikkis";
            t[45] = "paintalis";
            t[99] = "ninyanve";
            t
        },
        hundred: "sau",
        scales: &["", "hazar", "lakh", "crore"],
    };

    fn words(value: u64) -> String {
        SouthAsianEngine::new("hi", &TOY)
            .to_words(&BigUint::from(value))
            .unwrap()
    }

    #[test]
    fn base_group_is_three_digits() {
        assert_eq!(words(0), "shunya");
        assert_eq!(words(21), "ikkis");
        assert_eq!(words(512), "paanch sau barah");
    }

    #[test]
    fn upper_groups_are_two_digits() {
        assert_eq!(words(1_000), "ek hazar");
        assert_eq!(words(100_000), "ek lakh");
        assert_eq!(words(2_100_000), "ikkis lakh");
        assert_eq!(words(10_000_000), "ek crore");
        assert_eq!(words(45_12_21_512), "paintalis crore barah lakh ikkis hazar paanch sau barah");
    }

    #[test]
    fn zero_groups_emit_nothing() {
        assert_eq!(words(100_005), "ek lakh paanch");
        assert_eq!(words(1_00_00_000 + 21), "ek crore ikkis");
    }

    #[test]
    fn scale_word_appears_once() {
        let text = words(2_100_000);
        assert_eq!(text.matches("lakh").count(), 1);
    }

    #[test]
    fn beyond_table_is_loud() {
        let engine = SouthAsianEngine::new("hi", &TOY);
        let err = engine.to_words(&BigUint::from(10u64.pow(10))).unwrap_err();
        assert!(matches!(err, Error::MissingVocabulary { lang: "hi", .. }));
    }
}
