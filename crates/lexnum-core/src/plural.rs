//! Numeral agreement: grammatical gender and three-form pluralization.
//!
//! Scale words in the Slavic family agree with the count in front of them,
//! collapsing to exactly three forms. Each [`PluralRule`] maps a segment
//! count to a [`PluralIndex`]; [`ScaleForms`] holds the three words.
//!
//! # Invariants
//!
//! 1. Every rule maps any count to exactly one `PluralIndex`.
//! 2. Rules are pure functions: same count always yields same index.

use core::fmt;

/// Grammatical gender of a counted noun, as far as numerals care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Masculine,
    Feminine,
}

/// Index into a three-form scale-word set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralIndex {
    Singular,
    Few,
    Many,
}

impl fmt::Display for PluralIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Singular => write!(f, "singular"),
            Self::Few => write!(f, "few"),
            Self::Many => write!(f, "many"),
        }
    }
}

/// The three agreement forms of one scale word.
#[derive(Debug, Clone, Copy)]
pub struct ScaleForms {
    pub singular: &'static str,
    pub few: &'static str,
    pub many: &'static str,
}

impl ScaleForms {
    /// Pick the form for the given index.
    #[must_use]
    pub fn select(&self, index: PluralIndex) -> &'static str {
        match index {
            PluralIndex::Singular => self.singular,
            PluralIndex::Few => self.few,
            PluralIndex::Many => self.many,
        }
    }
}

/// A rule mapping a count to its agreement form.
#[derive(Clone, Copy)]
pub enum PluralRule {
    /// East-Slavic digit rule (ru, uk, pl): `many` when the count ends in
    /// 11-19, else `singular` for a final 1, `few` for a final 2-4,
    /// `many` otherwise.
    Slavic,
    /// Czech-style rule keyed on the bare count, not its last digits:
    /// `singular` for 1, `few` for 2-4, `many` for everything else
    /// (including 21, 22, ...).
    BareValue,
    /// Custom rule function.
    Custom(fn(u32) -> PluralIndex),
}

impl PluralRule {
    /// Determine the agreement form for the given count.
    #[must_use]
    pub fn index(&self, count: u32) -> PluralIndex {
        match self {
            Self::Slavic => slavic_rule(count),
            Self::BareValue => bare_value_rule(count),
            Self::Custom(f) => f(count),
        }
    }
}

impl fmt::Debug for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slavic => write!(f, "PluralRule::Slavic"),
            Self::BareValue => write!(f, "PluralRule::BareValue"),
            Self::Custom(_) => write!(f, "PluralRule::Custom(...)"),
        }
    }
}

// ── Rule implementations ────────────────────────────────────────────

fn slavic_rule(n: u32) -> PluralIndex {
    let mod10 = n % 10;
    let mod100 = n % 100;

    if (11..=19).contains(&mod100) {
        PluralIndex::Many
    } else if mod10 == 1 {
        PluralIndex::Singular
    } else if (2..=4).contains(&mod10) {
        PluralIndex::Few
    } else {
        PluralIndex::Many
    }
}

fn bare_value_rule(n: u32) -> PluralIndex {
    match n {
        1 => PluralIndex::Singular,
        2..=4 => PluralIndex::Few,
        _ => PluralIndex::Many,
    }
}
