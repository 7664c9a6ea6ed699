//! The conversion contract: how a locale assembles its output string.
//!
//! A [`Language`] owns one integer engine plus the handful of words and
//! rules needed around it: the negative word, the zero word, the decimal
//! separator, and the token joiner. [`Language::convert`] walks a
//! [`Decimal`] through that configuration.
//!
//! # Invariants
//!
//! 1. The negative word is emitted first and exactly once for negative
//!    input.
//! 2. Fractional digits are verbalized per [`DecimalMode`]: digit by digit,
//!    or leading zeros individually followed by the remaining block as one
//!    integer.
//! 3. Joining is uniform: every emitted token is separated by the same
//!    joiner (empty for scripts written solid).
//!
//! # Failure Modes
//!
//! - Engine errors propagate unchanged; the assembler adds none of its own
//!   beyond what the engine reports.

use num_bigint::BigUint;
use tracing::trace;

use crate::error::Error;
use crate::normalize::Decimal;

/// How fractional digits are verbalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecimalMode {
    /// Leading zeros one by one, then the rest as a single integer:
    /// `3.05` → "three point zero five".
    #[default]
    Grouped,
    /// Every digit individually: `3.14` → 三点一四.
    PerDigit,
}

/// Selects the decimal-separator word, possibly from the whole part
/// (Czech celá/celé/celých agrees with the integer in front of it).
#[derive(Clone, Copy)]
pub enum SeparatorRule {
    Fixed(&'static str),
    ByWholeValue(fn(&BigUint) -> &'static str),
}

impl core::fmt::Debug for SeparatorRule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fixed(word) => write!(f, "SeparatorRule::Fixed({word:?})"),
            Self::ByWholeValue(_) => write!(f, "SeparatorRule::ByWholeValue(...)"),
        }
    }
}

/// Integer-to-words capability implemented by each engine family.
pub trait IntegerWords: Send + Sync {
    /// Locale code, used in error reporting.
    fn lang(&self) -> &'static str;

    /// Words for a non-negative integer.
    fn to_words(&self, value: &BigUint) -> Result<String, Error>;

    /// Words for the significant fractional block in [`DecimalMode::Grouped`].
    /// Locales that force a fixed grammatical agreement onto fractions
    /// override this.
    fn fraction_to_words(&self, value: &BigUint) -> Result<String, Error> {
        self.to_words(value)
    }

    /// Word for one digit, consulted only in [`DecimalMode::PerDigit`].
    fn digit_word(&self, digit: u8) -> Result<&'static str, Error> {
        let _ = digit;
        Err(Error::MissingVocabulary {
            lang: self.lang(),
            item: "single-digit words".to_string(),
        })
    }
}

/// A fully configured locale: one engine plus its assembly words.
pub struct Language {
    pub negative_word: &'static str,
    pub zero_word: &'static str,
    pub separator: SeparatorRule,
    pub decimal_mode: DecimalMode,
    /// Token joiner; `" "` for most scripts, `""` for CJK.
    pub joiner: String,
    pub engine: Box<dyn IntegerWords>,
}

impl core::fmt::Debug for Language {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Language")
            .field("lang", &self.engine.lang())
            .field("negative_word", &self.negative_word)
            .field("zero_word", &self.zero_word)
            .field("separator", &self.separator)
            .field("decimal_mode", &self.decimal_mode)
            .field("joiner", &self.joiner)
            .finish_non_exhaustive()
    }
}

impl Language {
    /// Convert a normalized number into its word sequence.
    pub fn convert(&self, number: &Decimal) -> Result<String, Error> {
        trace!(lang = self.engine.lang(), "converting number to words");
        let mut words: Vec<String> = Vec::new();

        if number.negative {
            words.push(self.negative_word.to_string());
        }
        words.push(self.engine.to_words(&number.integer)?);

        if let Some(fraction) = &number.fraction {
            let separator = match self.separator {
                SeparatorRule::Fixed(word) => word,
                SeparatorRule::ByWholeValue(rule) => rule(&number.integer),
            };
            words.push(separator.to_string());

            match self.decimal_mode {
                DecimalMode::PerDigit => {
                    for byte in fraction.bytes() {
                        words.push(self.engine.digit_word(byte - b'0')?.to_string());
                    }
                }
                DecimalMode::Grouped => {
                    let significant = fraction.trim_start_matches('0');
                    for _ in 0..fraction.len() - significant.len() {
                        words.push(self.zero_word.to_string());
                    }
                    if !significant.is_empty() {
                        let block = significant
                            .parse::<BigUint>()
                            .map_err(|_| Error::InvalidFormat(fraction.clone()))?;
                        words.push(self.engine.fraction_to_words(&block)?);
                    }
                }
            }
        }

        Ok(words.join(&self.joiner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    /// Toy engine: spells values as decimal digits prefixed with "n".
    struct Numbered;

    impl IntegerWords for Numbered {
        fn lang(&self) -> &'static str {
            "test"
        }

        fn to_words(&self, value: &BigUint) -> Result<String, Error> {
            Ok(format!("n{value}"))
        }

        fn digit_word(&self, digit: u8) -> Result<&'static str, Error> {
            const DIGITS: [&str; 10] = ["d0", "d1", "d2", "d3", "d4", "d5", "d6", "d7", "d8", "d9"];
            Ok(DIGITS[usize::from(digit)])
        }
    }

    fn language(mode: DecimalMode) -> Language {
        Language {
            negative_word: "neg",
            zero_word: "nil",
            separator: SeparatorRule::Fixed("dot"),
            decimal_mode: mode,
            joiner: " ".to_string(),
            engine: Box::new(Numbered),
        }
    }

    fn dec(input: &str) -> Decimal {
        Decimal::parse(input).unwrap()
    }

    #[test]
    fn language_debug_skips_the_engine_body() {
        let text = format!("{:?}", language(DecimalMode::Grouped));
        assert!(text.contains("\"test\""));
        assert!(text.contains("neg"));
        assert!(text.ends_with(".. }"));
    }

    #[test]
    fn negative_word_prefixes_once() {
        let lang = language(DecimalMode::Grouped);
        assert_eq!(lang.convert(&dec("-42")).unwrap(), "neg n42");
        assert_eq!(lang.convert(&dec("42")).unwrap(), "n42");
    }

    #[test]
    fn grouped_mode_spells_leading_zeros_individually() {
        let lang = language(DecimalMode::Grouped);
        assert_eq!(lang.convert(&dec("3.05")).unwrap(), "n3 dot nil n5");
        assert_eq!(lang.convert(&dec("3.005")).unwrap(), "n3 dot nil nil n5");
        assert_eq!(lang.convert(&dec("3.50")).unwrap(), "n3 dot n50");
    }

    #[test]
    fn grouped_mode_all_zero_fraction() {
        let lang = language(DecimalMode::Grouped);
        assert_eq!(lang.convert(&dec("3.0")).unwrap(), "n3 dot nil");
        assert_eq!(lang.convert(&dec("3.00")).unwrap(), "n3 dot nil nil");
    }

    #[test]
    fn per_digit_mode_spells_every_digit() {
        let lang = language(DecimalMode::PerDigit);
        assert_eq!(lang.convert(&dec("3.14")).unwrap(), "n3 dot d1 d4");
        assert_eq!(lang.convert(&dec("0.09")).unwrap(), "n0 dot d0 d9");
    }

    #[test]
    fn separator_rule_can_depend_on_whole_part() {
        let mut lang = language(DecimalMode::Grouped);
        lang.separator = SeparatorRule::ByWholeValue(|whole| {
            if whole.is_zero() { "zero-sep" } else { "other-sep" }
        });
        assert_eq!(lang.convert(&dec("0.5")).unwrap(), "n0 zero-sep n5");
        assert_eq!(lang.convert(&dec("2.5")).unwrap(), "n2 other-sep n5");
    }

    #[test]
    fn empty_joiner_runs_tokens_together() {
        let mut lang = language(DecimalMode::PerDigit);
        lang.joiner = String::new();
        assert_eq!(lang.convert(&dec("-3.14")).unwrap(), "negn3dotd1d4");
    }
}
