//! Slavic three-form engine: gendered ones and scale-word agreement.
//!
//! Russian, Ukrainian, Polish, and Czech share the shape: 3-digit segments,
//! hundreds/tens/teens/ones tables, and scale words that agree with the
//! count in front of them through a three-form [`PluralRule`]. Each scale
//! tier carries its own grammatical gender (тысяча counts with feminine
//! одна/две, миллион with masculine один/два); the caller's gender choice
//! applies only to the final bare segment.
//!
//! # Invariants
//!
//! 1. The agreement form is selected per segment count, never per whole
//!    value.
//! 2. Tier gender comes from the scale table; option gender touches the
//!    last segment only.
//! 3. Fraction blocks may force a fixed gender regardless of the option
//!    (Russian reads decimals in the feminine).

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::convert::IntegerWords;
use crate::error::Error;
use crate::plural::{Gender, PluralRule, ScaleForms};

/// One scale tier: its three agreement forms and counting gender.
pub struct ScaleTier {
    pub forms: ScaleForms,
    pub gender: Gender,
}

/// Vocabulary for a Slavic locale.
pub struct SlavicTables {
    pub zero: &'static str,
    /// Masculine 1..=9; index 0 unused.
    pub ones: [&'static str; 10],
    /// Feminine 1..=9; index 0 unused.
    pub ones_feminine: [&'static str; 10],
    /// 10..=19.
    pub teens: [&'static str; 10],
    /// Tens 20..=90; indexes 0 and 1 unused.
    pub tens: [&'static str; 10],
    /// Hundreds 100..=900; index 0 unused.
    pub hundreds: [&'static str; 10],
    /// Tiers starting at thousands.
    pub scales: &'static [ScaleTier],
}

/// Locale-level rules for the Slavic engine.
pub struct SlavicRules {
    pub rule: PluralRule,
    /// Leave a count of one unspoken before a scale word ("tysiąc", not
    /// "jeden tysiąc"). Russian keeps it ("одна тысяча").
    pub omit_one_before_scale: bool,
    /// Gender forced onto fraction blocks, if any.
    pub fraction_gender: Option<Gender>,
}

pub struct SlavicEngine {
    lang: &'static str,
    tables: &'static SlavicTables,
    rules: SlavicRules,
    gender: Gender,
}

impl SlavicEngine {
    #[must_use]
    pub fn new(
        lang: &'static str,
        tables: &'static SlavicTables,
        rules: SlavicRules,
        gender: Gender,
    ) -> Self {
        Self {
            lang,
            tables,
            rules,
            gender,
        }
    }

    /// Words for one 1..=999 segment in the given gender.
    fn segment_words(&self, segment: u16, gender: Gender, parts: &mut Vec<&'static str>) {
        let hundreds = segment / 100;
        if hundreds > 0 {
            parts.push(self.tables.hundreds[usize::from(hundreds)]);
        }
        let rest = segment % 100;
        if (10..=19).contains(&rest) {
            parts.push(self.tables.teens[usize::from(rest - 10)]);
            return;
        }
        let tens = rest / 10;
        if tens >= 2 {
            parts.push(self.tables.tens[usize::from(tens)]);
        }
        let ones = rest % 10;
        if ones > 0 {
            let table = match gender {
                Gender::Masculine => &self.tables.ones,
                Gender::Feminine => &self.tables.ones_feminine,
            };
            parts.push(table[usize::from(ones)]);
        }
    }

    fn to_words_gendered(&self, value: &BigUint, gender: Gender) -> Result<String, Error> {
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

        let mut parts: Vec<&'static str> = Vec::new();
        for (tier, &segment) in segments.iter().enumerate().rev() {
            if segment == 0 {
                continue;
            }
            if tier == 0 {
                self.segment_words(segment, gender, &mut parts);
            } else {
                let scale = &self.tables.scales[tier - 1];
                if !(segment == 1 && self.rules.omit_one_before_scale) {
                    self.segment_words(segment, scale.gender, &mut parts);
                }
                parts.push(scale.forms.select(self.rules.rule.index(u32::from(segment))));
            }
        }
        Ok(parts.join(" "))
    }
}

impl IntegerWords for SlavicEngine {
    fn lang(&self) -> &'static str {
        self.lang
    }

    fn to_words(&self, value: &BigUint) -> Result<String, Error> {
        self.to_words_gendered(value, self.gender)
    }

    fn fraction_to_words(&self, value: &BigUint) -> Result<String, Error> {
        let gender = self.rules.fraction_gender.unwrap_or(self.gender);
        self.to_words_gendered(value, gender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plural::PluralIndex;

    // Romanized toy vocabulary; the real Cyrillic tables live with the
    // locales.
    static TOY: SlavicTables = SlavicTables {
        zero: "nol",
        ones: ["", "odin", "dva", "tri", "chetyre", "pyat", "shest", "sem", "vosem", "devyat"],
        ones_feminine: ["", "odna", "dve", "tri", "chetyre", "pyat", "shest", "sem", "vosem", "devyat"],
        teens: [
            "desyat",
            "odinnadtsat",
            "dvenadtsat",
            "trinadtsat",
            "chetyrnadtsat",
            "pyatnadtsat",
            "shestnadtsat",
            "semnadtsat",
            "vosemnadtsat",
            "devyatnadtsat",
        ],
        tens: [
            "", "", "dvadtsat", "tridtsat", "sorok", "pyatdesyat", "shestdesyat", "semdesyat",
            "vosemdesyat", "devyanosto",
        ],
        hundreds: [
            "", "sto", "dvesti", "trista", "chetyresta", "pyatsot", "shestsot", "semsot",
            "vosemsot", "devyatsot",
        ],
        scales: &[
            ScaleTier {
                forms: ScaleForms {
                    singular: "tysyacha",
                    few: "tysyachi",
                    many: "tysyach",
                },
                gender: Gender::Feminine,
            },
            ScaleTier {
                forms: ScaleForms {
                    singular: "million",
                    few: "milliona",
                    many: "millionov",
                },
                gender: Gender::Masculine,
            },
        ],
    };

    fn engine(gender: Gender) -> SlavicEngine {
        SlavicEngine::new(
            "ru",
            &TOY,
            SlavicRules {
                rule: PluralRule::Slavic,
                omit_one_before_scale: false,
                fraction_gender: Some(Gender::Feminine),
            },
            gender,
        )
    }

    fn words(value: u64) -> String {
        engine(Gender::Masculine)
            .to_words(&BigUint::from(value))
            .unwrap()
    }

    #[test]
    fn thousand_tier_counts_feminine() {
        assert_eq!(words(1000), "odna tysyacha");
        assert_eq!(words(2000), "dve tysyachi");
        assert_eq!(words(5000), "pyat tysyach");
        assert_eq!(words(21_000), "dvadtsat odna tysyacha");
    }

    #[test]
    fn million_tier_counts_masculine() {
        assert_eq!(words(1_000_000), "odin million");
        assert_eq!(words(2_000_000), "dva milliona");
        assert_eq!(words(5_000_000), "pyat millionov");
    }

    #[test]
    fn option_gender_touches_final_segment_only() {
        let feminine = engine(Gender::Feminine);
        assert_eq!(
            feminine.to_words(&BigUint::from(21u32)).unwrap(),
            "dvadtsat odna"
        );
        // The thousands tier stays feminine regardless.
        assert_eq!(
            feminine.to_words(&BigUint::from(1002u32)).unwrap(),
            "odna tysyacha dve"
        );
    }

    #[test]
    fn teens_take_the_many_form() {
        assert_eq!(words(11_000), "odinnadtsat tysyach");
        assert_eq!(words(12_000), "dvenadtsat tysyach");
    }

    #[test]
    fn omit_one_suppresses_the_count() {
        let polish_style = SlavicEngine::new(
            "ru",
            &TOY,
            SlavicRules {
                rule: PluralRule::Slavic,
                omit_one_before_scale: true,
                fraction_gender: None,
            },
            Gender::Masculine,
        );
        assert_eq!(
            polish_style.to_words(&BigUint::from(1000u32)).unwrap(),
            "tysyacha"
        );
        // 21 ends in 1 but is not a bare one; the count stays, in the
        // tier's own gender.
        assert_eq!(
            polish_style.to_words(&BigUint::from(21_000u32)).unwrap(),
            "dvadtsat odna tysyacha"
        );
    }

    #[test]
    fn fractions_force_the_configured_gender() {
        let masculine = engine(Gender::Masculine);
        assert_eq!(
            masculine.fraction_to_words(&BigUint::from(1u32)).unwrap(),
            "odna"
        );
    }

    #[test]
    fn segment_rendering_covers_all_blocks() {
        assert_eq!(words(987), "devyatsot vosemdesyat sem");
        assert_eq!(words(115), "sto pyatnadtsat");
        assert_eq!(words(0), "nol");
    }

    #[test]
    fn beyond_table_is_loud() {
        let err = engine(Gender::Masculine)
            .to_words(&BigUint::from(10u64.pow(9)))
            .unwrap_err();
        assert!(matches!(err, Error::MissingVocabulary { lang: "ru", .. }));
    }

    #[test]
    fn rule_and_forms_cooperate() {
        let forms = &TOY.scales[0].forms;
        assert_eq!(forms.select(PluralRule::Slavic.index(101)), "tysyacha");
        assert_eq!(forms.select(PluralIndex::Many), "tysyach");
    }
}
