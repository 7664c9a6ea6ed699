//! Italian.

use lexnum_core::cards::{CardsEngine, WordPair};
use lexnum_core::convert::{DecimalMode, Language, SeparatorRule};
use lexnum_core::Error;

use crate::options::ConversionOptions;

const CARDS: &[(u128, &str)] = &[
    (1_000_000_000_000_000_000, "trilione"),
    (1_000_000_000_000_000, "biliardo"),
    (1_000_000_000_000, "bilione"),
    (1_000_000_000, "miliardo"),
    (1_000_000, "milione"),
    (1000, "mille"),
    (100, "cento"),
    (90, "novanta"),
    (80, "ottanta"),
    (70, "settanta"),
    (60, "sessanta"),
    (50, "cinquanta"),
    (40, "quaranta"),
    (30, "trenta"),
    (20, "venti"),
    (19, "diciannove"),
    (18, "diciotto"),
    (17, "diciassette"),
    (16, "sedici"),
    (15, "quindici"),
    (14, "quattordici"),
    (13, "tredici"),
    (12, "dodici"),
    (11, "undici"),
    (10, "dieci"),
    (9, "nove"),
    (8, "otto"),
    (7, "sette"),
    (6, "sei"),
    (5, "cinque"),
    (4, "quattro"),
    (3, "tre"),
    (2, "due"),
    (1, "uno"),
    (0, "zero"),
];

fn pluralize_scale(word: &str) -> String {
    // milione → milioni, miliardo → miliardi.
    let mut stem: String = word.chars().collect();
    stem.pop();
    format!("{stem}i")
}

fn ends_with_vowel(text: &str) -> bool {
    matches!(
        text.as_bytes().last(),
        Some(b'a' | b'e' | b'i' | b'o' | b'u')
    )
}

/// Compounds concatenate; tens elide their final vowel before uno/otto
/// (ventuno, ventotto); tre takes an accent at the end of a compound
/// (ventitré); mille pluralizes to -mila.
fn merge(left: &WordPair, right: &WordPair) -> String {
    if left.value == 1u32.into() {
        if right.at_least(1_000_000) {
            return format!("un {}", right.text);
        }
        return right.text.clone();
    }
    if right.value > left.value {
        if right.is(1000) {
            return format!("{}mila", left.text);
        }
        if right.at_least(1_000_000) {
            return format!("{} {}", left.text, pluralize_scale(&right.text));
        }
        return format!("{}{}", left.text, right.text);
    }
    if left.below(100) {
        let mut left_text = left.text.clone();
        if matches!(right.text.as_bytes().first(), Some(b'u' | b'o')) && ends_with_vowel(&left_text)
        {
            left_text.pop();
        }
        if right.is(3) {
            return format!("{left_text}tré");
        }
        return format!("{left_text}{}", right.text);
    }
    if left.at_least(1_000_000) {
        format!("{} {}", left.text, right.text)
    } else {
        format!("{}{}", left.text, right.text)
    }
}

pub(crate) fn language(options: &ConversionOptions) -> Result<Language, Error> {
    Ok(Language {
        negative_word: "meno",
        zero_word: "zero",
        separator: SeparatorRule::Fixed("virgola"),
        decimal_mode: DecimalMode::Grouped,
        joiner: options.joiner_or(" "),
        engine: Box::new(CardsEngine::new("it", CARDS, merge)),
    })
}
