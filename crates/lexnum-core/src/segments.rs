//! Fixed-width segmentation engines.
//!
//! Two engines live here, both slicing the number into fixed-width segments
//! and naming each segment's position with a scale word:
//!
//! - [`MyriadEngine`]: 4-digit segments for Chinese, Japanese, and Korean
//!   (万/億/만…), with interior-zero insertion and 一-elision as per-locale
//!   rules.
//! - [`TriadEngine`]: 3-digit segments for Portuguese, with singular and
//!   plural scale words and the "e" connective.
//!
//! # Invariants
//!
//! 1. Segment order in the output is highest scale first.
//! 2. Zero segments emit no scale word; at most one zero word marks an
//!    interior zero run where the locale asks for it.
//! 3. A value needing more segments than the scale table names is a
//!    [`Error::MissingVocabulary`], never an invented compound.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::convert::IntegerWords;
use crate::error::Error;

/// Split into fixed-width segments, lowest first.
fn split_segments(value: &BigUint, width_divisor: u32) -> Vec<u16> {
    let divisor = BigUint::from(width_divisor);
    let mut rest = value.clone();
    let mut segments = Vec::new();
    while !rest.is_zero() {
        let (quotient, remainder) = rest.div_rem(&divisor);
        segments.push(remainder.to_u16().unwrap_or(0));
        rest = quotient;
    }
    if segments.is_empty() {
        segments.push(0);
    }
    segments
}

// ── Myriad (4-digit) engine ─────────────────────────────────────────

/// Vocabulary for a myriad-grouping locale.
pub struct MyriadTables {
    pub digits: [&'static str; 10],
    /// Within-segment units: ten, hundred, thousand.
    pub small_units: [&'static str; 3],
    /// Per-segment scale words, index 0 unused: `["", 万, 亿, 兆, 京]`.
    pub scale_units: &'static [&'static str],
    pub zero: &'static str,
}

/// Locale-level rendering rules for the myriad engine.
pub struct MyriadRules {
    /// Mark interior zero runs with the zero word (Chinese 零).
    pub interior_zero: bool,
    /// Drop a leading 一 before 十 at the head of the number (十五, not
    /// 一十五).
    pub elide_leading_one_ten: bool,
    /// Drop 一 before every small unit (Japanese and Korean 百, 千).
    pub elide_one_before_small_units: bool,
    /// Joiner between tokens; `""` for native scripts, `" "` for pinyin.
    pub joiner: &'static str,
}

/// The 4-digit SegmentScale engine.
pub struct MyriadEngine {
    lang: &'static str,
    tables: &'static MyriadTables,
    rules: MyriadRules,
}

impl MyriadEngine {
    #[must_use]
    pub fn new(lang: &'static str, tables: &'static MyriadTables, rules: MyriadRules) -> Self {
        Self {
            lang,
            tables,
            rules,
        }
    }

    /// Tokens for one 0..=9999 segment, thousands first.
    fn segment_tokens(&self, segment: u16, tokens: &mut Vec<&'static str>) {
        let digits = [
            segment / 1000,
            segment / 100 % 10,
            segment / 10 % 10,
            segment % 10,
        ];
        let mut emitted = false;
        let mut zero_run = false;
        for (position, &digit) in digits.iter().enumerate() {
            if digit == 0 {
                zero_run = emitted;
                continue;
            }
            if zero_run && self.rules.interior_zero {
                tokens.push(self.tables.zero);
            }
            zero_run = false;
            emitted = true;
            let unit = match position {
                0 => Some(self.tables.small_units[2]),
                1 => Some(self.tables.small_units[1]),
                2 => Some(self.tables.small_units[0]),
                _ => None,
            };
            let elide_one =
                digit == 1 && unit.is_some() && self.rules.elide_one_before_small_units;
            if !elide_one {
                tokens.push(self.tables.digits[usize::from(digit)]);
            }
            if let Some(unit) = unit {
                tokens.push(unit);
            }
        }
    }
}

impl IntegerWords for MyriadEngine {
    fn lang(&self) -> &'static str {
        self.lang
    }

    fn to_words(&self, value: &BigUint) -> Result<String, Error> {
        if value.is_zero() {
            return Ok(self.tables.zero.to_string());
        }
        let segments = split_segments(value, 10_000);
        if segments.len() > self.tables.scale_units.len() {
            return Err(Error::MissingVocabulary {
                lang: self.lang,
                item: format!("scale word for {value}"),
            });
        }

        let mut tokens: Vec<&'static str> = Vec::new();
        let mut pending_zero = false;
        for (index, &segment) in segments.iter().enumerate().rev() {
            if segment == 0 {
                pending_zero = !tokens.is_empty();
                continue;
            }
            // A short segment after a higher one implies skipped places.
            let gap = pending_zero || segment < 1000;
            if !tokens.is_empty() && gap && self.rules.interior_zero {
                tokens.push(self.tables.zero);
            }
            pending_zero = false;
            self.segment_tokens(segment, &mut tokens);
            if index > 0 {
                tokens.push(self.tables.scale_units[index]);
            }
        }

        if self.rules.elide_leading_one_ten
            && tokens.len() >= 2
            && tokens[0] == self.tables.digits[1]
            && tokens[1] == self.tables.small_units[0]
        {
            tokens.remove(0);
        }

        Ok(tokens.join(self.rules.joiner))
    }

    fn digit_word(&self, digit: u8) -> Result<&'static str, Error> {
        Ok(self.tables.digits[usize::from(digit)])
    }
}

// ── Triad (3-digit) engine ──────────────────────────────────────────

/// Vocabulary for a triad-grouping locale.
pub struct TriadTables {
    pub zero: &'static str,
    /// 1..=19; index 0 unused.
    pub under_twenty: [&'static str; 20],
    /// Tens 20..=90; indexes 0 and 1 unused.
    pub tens: [&'static str; 10],
    /// Hundreds 100..=900 as full words; index 0 unused.
    pub hundreds: [&'static str; 10],
    /// The bare-hundred word used when the segment is exactly 100.
    pub hundred_exact: &'static str,
    /// `(singular, plural)` per tier starting at thousands.
    pub scales: &'static [(&'static str, &'static str)],
}

/// Locale-level rendering rules for the triad engine.
pub struct TriadRules {
    /// Tiers whose count of one goes unspoken ("mil", not "um mil").
    pub omit_one_tiers: &'static [usize],
    /// Connective within a segment ("e").
    pub connective: &'static str,
    /// Use the connective before the final segment when it is below 100 or
    /// a round hundred.
    pub connective_before_final: bool,
}

/// The 3-digit SegmentScale engine.
pub struct TriadEngine {
    lang: &'static str,
    tables: &'static TriadTables,
    rules: TriadRules,
}

impl TriadEngine {
    #[must_use]
    pub fn new(lang: &'static str, tables: &'static TriadTables, rules: TriadRules) -> Self {
        Self {
            lang,
            tables,
            rules,
        }
    }

    /// Words for one 1..=999 segment.
    fn segment_words(&self, segment: u16) -> String {
        if segment == 100 {
            return self.tables.hundred_exact.to_string();
        }
        let mut parts: Vec<&'static str> = Vec::new();
        let hundreds = segment / 100;
        if hundreds > 0 {
            parts.push(self.tables.hundreds[usize::from(hundreds)]);
        }
        let rest = segment % 100;
        if (1..20).contains(&rest) {
            parts.push(self.tables.under_twenty[usize::from(rest)]);
        } else if rest >= 20 {
            parts.push(self.tables.tens[usize::from(rest / 10)]);
            let ones = rest % 10;
            if ones > 0 {
                parts.push(self.tables.under_twenty[usize::from(ones)]);
            }
        }
        parts.join(&format!(" {} ", self.rules.connective))
    }
}

impl IntegerWords for TriadEngine {
    fn lang(&self) -> &'static str {
        self.lang
    }

    fn to_words(&self, value: &BigUint) -> Result<String, Error> {
        if value.is_zero() {
            return Ok(self.tables.zero.to_string());
        }
        let segments = split_segments(value, 1000);
        if segments.len() > self.tables.scales.len() + 1 {
            return Err(Error::MissingVocabulary {
                lang: self.lang,
                item: format!("scale word for {value}"),
            });
        }

        let mut rendered: Vec<(u16, String)> = Vec::new();
        for (tier, &segment) in segments.iter().enumerate().rev() {
            if segment == 0 {
                continue;
            }
            let mut words = String::new();
            if tier == 0 {
                words.push_str(&self.segment_words(segment));
            } else {
                let (singular, plural) = self.tables.scales[tier - 1];
                let omit_one = segment == 1 && self.rules.omit_one_tiers.contains(&tier);
                if !omit_one {
                    words.push_str(&self.segment_words(segment));
                    words.push(' ');
                }
                words.push_str(if segment == 1 { singular } else { plural });
            }
            rendered.push((segment, words));
        }

        let mut out = String::new();
        let last = rendered.len() - 1;
        for (position, (segment, words)) in rendered.iter().enumerate() {
            if position > 0 {
                let final_and = self.rules.connective_before_final
                    && position == last
                    && (*segment < 100 || segment % 100 == 0);
                if final_and {
                    out.push_str(&format!(" {} ", self.rules.connective));
                } else {
                    out.push(' ');
                }
            }
            out.push_str(words);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ZH_TEST: MyriadTables = MyriadTables {
        digits: ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"],
        small_units: ["十", "百", "千"],
        scale_units: &["", "万", "亿"],
        zero: "零",
    };

    fn zh_engine() -> MyriadEngine {
        MyriadEngine::new(
            "zh",
            &ZH_TEST,
            MyriadRules {
                interior_zero: true,
                elide_leading_one_ten: true,
                elide_one_before_small_units: false,
                joiner: "",
            },
        )
    }

    fn zh(value: u64) -> String {
        zh_engine().to_words(&BigUint::from(value)).unwrap()
    }

    #[test]
    fn myriad_within_one_segment() {
        assert_eq!(zh(0), "零");
        assert_eq!(zh(7), "七");
        assert_eq!(zh(15), "十五");
        assert_eq!(zh(315), "三百一十五");
        assert_eq!(zh(1005), "一千零五");
        assert_eq!(zh(1050), "一千零五十");
    }

    #[test]
    fn myriad_interior_zero_across_segments() {
        assert_eq!(zh(10_000), "一万");
        assert_eq!(zh(10_500), "一万零五百");
        assert_eq!(zh(100_000_005), "一亿零五");
    }

    #[test]
    fn myriad_scale_ceiling_is_loud() {
        let engine = zh_engine();
        // 10^8 is the last scale in the test table; 10^12 is out of reach.
        let err = engine
            .to_words(&BigUint::from(10u64.pow(12)))
            .unwrap_err();
        assert!(matches!(err, Error::MissingVocabulary { lang: "zh", .. }));
    }

    #[test]
    fn myriad_one_elision_before_small_units() {
        let engine = MyriadEngine::new(
            "ja",
            &ZH_TEST,
            MyriadRules {
                interior_zero: false,
                elide_leading_one_ten: false,
                elide_one_before_small_units: true,
                joiner: "",
            },
        );
        assert_eq!(engine.to_words(&BigUint::from(111u32)).unwrap(), "百十一");
        assert_eq!(
            engine.to_words(&BigUint::from(10_000u32)).unwrap(),
            "一万"
        );
    }

    static PT_TEST: TriadTables = TriadTables {
        zero: "zero",
        under_twenty: [
            "", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove", "dez",
            "onze", "doze", "treze", "catorze", "quinze", "dezesseis", "dezessete", "dezoito",
            "dezenove",
        ],
        tens: [
            "", "", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta",
            "noventa",
        ],
        hundreds: [
            "", "cento", "duzentos", "trezentos", "quatrocentos", "quinhentos", "seiscentos",
            "setecentos", "oitocentos", "novecentos",
        ],
        hundred_exact: "cem",
        scales: &[("mil", "mil"), ("milhão", "milhões")],
    };

    fn pt(value: u64) -> String {
        TriadEngine::new(
            "pt",
            &PT_TEST,
            TriadRules {
                omit_one_tiers: &[1],
                connective: "e",
                connective_before_final: true,
            },
        )
        .to_words(&BigUint::from(value))
        .unwrap()
    }

    #[test]
    fn triad_segment_connectives() {
        assert_eq!(pt(21), "vinte e um");
        assert_eq!(pt(100), "cem");
        assert_eq!(pt(123), "cento e vinte e três");
    }

    #[test]
    fn triad_scale_words_pluralize() {
        assert_eq!(pt(1000), "mil");
        assert_eq!(pt(2000), "dois mil");
        assert_eq!(pt(1_000_000), "um milhão");
        assert_eq!(pt(2_000_000), "dois milhões");
    }

    #[test]
    fn triad_connective_before_small_final_segment() {
        assert_eq!(pt(1001), "mil e um");
        assert_eq!(pt(1100), "mil e cem");
        assert_eq!(pt(1234), "mil duzentos e trinta e quatro");
    }
}
