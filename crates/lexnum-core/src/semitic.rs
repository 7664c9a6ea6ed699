//! Semitic morphology engine: duals, construct state, and conjunctions.
//!
//! Hebrew and Arabic numerals carry morphology the other families never
//! need: a dedicated dual for a count of exactly two (אלפיים, ألفان),
//! construct-state counting for 3..=10 of a scale word (שלושת אלפים,
//! ثلاثة آلاف), an appended/tanwīn scale form for 11..=99 (ألفاً), and a
//! conjunction that attaches to components rather than separating them.
//!
//! The engine owns the segment walk and conjunction placement; everything
//! morphological comes in as per-locale table data.
//!
//! # Invariants
//!
//! 1. The dual form fires only when a whole tier segment is exactly 2.
//! 2. Construct-state counting applies to tier segments 3..=10 when the
//!    tier provides construct words; larger counts fall back to regular
//!    segment words plus the singular or appended scale form.
//! 3. Conjunction placement is a locale rule: before the final component
//!    only (Hebrew) or between all components (Arabic).

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::convert::IntegerWords;
use crate::error::Error;
use crate::plural::Gender;

/// Scale-word morphology for one tier.
pub struct SemiticScale {
    pub singular: &'static str,
    /// Count of exactly two: אלפיים / ألفان.
    pub dual: &'static str,
    /// Counted plural used with 3..=10: אלפים / آلاف.
    pub plural: &'static str,
    /// Accusative/tanwīn form after 11..=99: ألفاً. Equal to `singular`
    /// where the language has no such form.
    pub appended: &'static str,
    /// Construct-state counting words for 3..=10, lowest first.
    pub construct_ones: Option<&'static [&'static str; 8]>,
}

/// Vocabulary for a Semitic locale.
pub struct SemiticTables {
    pub zero: &'static str,
    /// Masculine 1..=9; index 0 unused.
    pub ones: [&'static str; 10],
    /// Feminine 1..=9; index 0 unused.
    pub ones_feminine: [&'static str; 10],
    /// Masculine 10..=19.
    pub teens: [&'static str; 10],
    /// Feminine 10..=19.
    pub teens_feminine: [&'static str; 10],
    /// Tens 20..=90; indexes 0 and 1 unused.
    pub tens: [&'static str; 10],
    /// Hundreds 100..=900 as full words; index 0 unused.
    pub hundreds: [&'static str; 10],
    /// Tiers starting at thousands.
    pub scales: &'static [SemiticScale],
}

/// Order of tens and ones inside a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitsOrder {
    /// Hebrew: עשרים ושלוש (tens, then ones).
    TensFirst,
    /// Arabic: خمسة وعشرون (ones, then tens).
    OnesFirst,
}

/// Where the conjunction goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConjunctionStyle {
    /// Before the final component only (Hebrew ו).
    BeforeLast,
    /// Between every pair of components (Arabic و).
    BetweenAll,
}

/// Locale-level rules for the Semitic engine.
pub struct SemiticRules {
    pub units_order: UnitsOrder,
    /// The conjunction, attached as a prefix to the word it precedes.
    pub conjunction: &'static str,
    pub conjunction_style: ConjunctionStyle,
}

pub struct SemiticEngine {
    lang: &'static str,
    tables: &'static SemiticTables,
    rules: SemiticRules,
    gender: Gender,
}

impl SemiticEngine {
    #[must_use]
    pub fn new(
        lang: &'static str,
        tables: &'static SemiticTables,
        rules: SemiticRules,
        gender: Gender,
    ) -> Self {
        Self {
            lang,
            tables,
            rules,
            gender,
        }
    }

    /// Parts for one 1..=999 segment; the caller owns conjunction joining.
    fn segment_parts(&self, segment: u16, gender: Gender, parts: &mut Vec<String>) {
        let (ones_table, teens_table) = match gender {
            Gender::Masculine => (&self.tables.ones, &self.tables.teens),
            Gender::Feminine => (&self.tables.ones_feminine, &self.tables.teens_feminine),
        };

        let hundreds = segment / 100;
        if hundreds > 0 {
            parts.push(self.tables.hundreds[usize::from(hundreds)].to_string());
        }
        let rest = segment % 100;
        if (10..=19).contains(&rest) {
            parts.push(teens_table[usize::from(rest - 10)].to_string());
            return;
        }
        let tens = rest / 10;
        let ones = rest % 10;
        let tens_word = (tens >= 2).then(|| self.tables.tens[usize::from(tens)].to_string());
        let ones_word = (ones > 0).then(|| ones_table[usize::from(ones)].to_string());
        match self.rules.units_order {
            UnitsOrder::TensFirst => {
                parts.extend(tens_word);
                parts.extend(ones_word);
            }
            UnitsOrder::OnesFirst => {
                parts.extend(ones_word);
                parts.extend(tens_word);
            }
        }
    }

    /// Join a segment's parts with the locale conjunction.
    fn join_parts(&self, parts: Vec<String>) -> String {
        match self.rules.conjunction_style {
            ConjunctionStyle::BetweenAll => parts.join(&format!(" {}", self.rules.conjunction)),
            ConjunctionStyle::BeforeLast => {
                if parts.len() < 2 {
                    return parts.join(" ");
                }
                let (last, head) = match parts.split_last() {
                    Some(split) => split,
                    None => return String::new(),
                };
                format!("{} {}{}", head.join(" "), self.rules.conjunction, last)
            }
        }
    }

    /// One tier segment with its scale word, fully joined.
    fn scale_component(&self, segment: u16, scale: &SemiticScale) -> String {
        match segment {
            1 => scale.singular.to_string(),
            2 => scale.dual.to_string(),
            3..=10 => {
                if let Some(construct) = scale.construct_ones {
                    return format!("{} {}", construct[usize::from(segment - 3)], scale.plural);
                }
                let mut parts = Vec::new();
                self.segment_parts(segment, Gender::Masculine, &mut parts);
                format!("{} {}", self.join_parts(parts), scale.plural)
            }
            _ => {
                let mut parts = Vec::new();
                self.segment_parts(segment, Gender::Masculine, &mut parts);
                let form = if (11..=99).contains(&(segment % 100)) {
                    scale.appended
                } else {
                    scale.singular
                };
                format!("{} {}", self.join_parts(parts), form)
            }
        }
    }
}

impl IntegerWords for SemiticEngine {
    fn lang(&self) -> &'static str {
        self.lang
    }

    fn to_words(&self, value: &BigUint) -> Result<String, Error> {
        if value.is_zero() {
            return Ok(self.tables.zero.to_string());
        }
        let thousand = BigUint::from(1000u32);
        let mut segments: Vec<u16> = Vec::new();
        let mut rest = value.clone();
        while !rest.is_zero() {
            let (quotient, segment) = rest.div_rem(&thousand);
            segments.push(segment.to_u16().unwrap_or(0));
            rest = quotient;
        }
        if segments.len() - 1 > self.tables.scales.len() {
            return Err(Error::MissingVocabulary {
                lang: self.lang,
                item: format!("scale word for {value}"),
            });
        }

        // Higher tiers collapse to one component each; the final bare
        // segment contributes its parts individually so the conjunction
        // can land inside it.
        let mut components: Vec<String> = Vec::new();
        for (tier, &segment) in segments.iter().enumerate().rev() {
            if segment == 0 {
                continue;
            }
            if tier == 0 {
                self.segment_parts(segment, self.gender, &mut components);
            } else {
                components.push(self.scale_component(segment, &self.tables.scales[tier - 1]));
            }
        }
        Ok(self.join_parts(components))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Romanized toy vocabulary; the real Hebrew/Arabic tables live with
    // the locales.
    static TOY: SemiticTables = SemiticTables {
        zero: "efes",
        ones: ["", "echad", "shnayim", "shlosha", "arbaa", "chamisha", "shisha", "shiva", "shmona", "tisha"],
        ones_feminine: ["", "achat", "shtayim", "shalosh", "arba", "chamesh", "shesh", "sheva", "shmone", "tesha"],
        teens: [
            "asara",
            "achad asar",
            "shneim asar",
            "shlosha asar",
            "arbaa asar",
            "chamisha asar",
            "shisha asar",
            "shiva asar",
            "shmona asar",
            "tisha asar",
        ],
        teens_feminine: [
            "eser",
            "achat esre",
            "shteim esre",
            "shlosh esre",
            "arba esre",
            "chamesh esre",
            "shesh esre",
            "shva esre",
            "shmone esre",
            "tsha esre",
        ],
        tens: [
            "", "", "esrim", "shloshim", "arbaim", "chamishim", "shishim", "shivim", "shmonim",
            "tishim",
        ],
        hundreds: [
            "", "mea", "matayim", "shlosh meot", "arba meot", "chamesh meot", "shesh meot",
            "shva meot", "shmone meot", "tsha meot",
        ],
        scales: &[SemiticScale {
            singular: "elef",
            dual: "alpayim",
            plural: "alafim",
            appended: "elef",
            construct_ones: Some(&[
                "shloshet", "arbaat", "chameshet", "sheshet", "shivat", "shmonat", "tishat",
                "aseret",
            ]),
        }],
    };

    fn engine() -> SemiticEngine {
        SemiticEngine::new(
            "he",
            &TOY,
            SemiticRules {
                units_order: UnitsOrder::TensFirst,
                conjunction: "ve",
                conjunction_style: ConjunctionStyle::BeforeLast,
            },
            Gender::Feminine,
        )
    }

    fn words(value: u64) -> String {
        engine().to_words(&BigUint::from(value)).unwrap()
    }

    #[test]
    fn conjunction_lands_before_the_final_component() {
        assert_eq!(words(23), "esrim veshalosh");
        assert_eq!(words(123), "mea esrim veshalosh");
        assert_eq!(words(120), "mea veesrim");
        assert_eq!(words(100), "mea");
    }

    #[test]
    fn dual_fires_on_exactly_two() {
        assert_eq!(words(2000), "alpayim");
        assert_eq!(words(1000), "elef");
        assert_eq!(words(200), "matayim");
    }

    #[test]
    fn construct_state_counts_three_to_ten() {
        assert_eq!(words(3000), "shloshet alafim");
        assert_eq!(words(10_000), "aseret alafim");
    }

    #[test]
    fn large_counts_fall_back_to_segment_words() {
        assert_eq!(words(11_000), "achad asar elef");
        assert_eq!(words(23_000), "esrim veshlosha elef");
    }

    #[test]
    fn scale_and_final_segment_share_one_conjunction_frame() {
        assert_eq!(words(2500), "alpayim vechamesh meot");
        assert_eq!(words(1001), "elef veachat");
    }

    #[test]
    fn between_all_style_joins_every_component() {
        let arabic_style = SemiticEngine::new(
            "he",
            &TOY,
            SemiticRules {
                units_order: UnitsOrder::OnesFirst,
                conjunction: "wa",
                conjunction_style: ConjunctionStyle::BetweenAll,
            },
            Gender::Masculine,
        );
        assert_eq!(
            arabic_style.to_words(&BigUint::from(125u32)).unwrap(),
            "mea wachamisha waesrim"
        );
    }

    #[test]
    fn beyond_table_is_loud() {
        let err = engine().to_words(&BigUint::from(10u64.pow(6))).unwrap_err();
        assert!(matches!(err, Error::MissingVocabulary { lang: "he", .. }));
    }
}
