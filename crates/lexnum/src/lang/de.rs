//! German.

use lexnum_core::cards::{CardsEngine, WordPair};
use lexnum_core::convert::{DecimalMode, Language, SeparatorRule};
use lexnum_core::Error;

use crate::options::ConversionOptions;

const CARDS: &[(u128, &str)] = &[
    (1_000_000_000_000_000_000_000_000_000_000_000, "Quintilliarde"),
    (1_000_000_000_000_000_000_000_000_000_000, "Quintillion"),
    (1_000_000_000_000_000_000_000_000_000, "Quadrilliarde"),
    (1_000_000_000_000_000_000_000_000, "Quadrillion"),
    (1_000_000_000_000_000_000_000, "Trilliarde"),
    (1_000_000_000_000_000_000, "Trillion"),
    (1_000_000_000_000_000, "Billiarde"),
    (1_000_000_000_000, "Billion"),
    (1_000_000_000, "Milliarde"),
    (1_000_000, "Million"),
    (1000, "tausend"),
    (100, "hundert"),
    (90, "neunzig"),
    (80, "achtzig"),
    (70, "siebzig"),
    (60, "sechzig"),
    (50, "fünfzig"),
    (40, "vierzig"),
    (30, "dreißig"),
    (20, "zwanzig"),
    (19, "neunzehn"),
    (18, "achtzehn"),
    (17, "siebzehn"),
    (16, "sechzehn"),
    (15, "fünfzehn"),
    (14, "vierzehn"),
    (13, "dreizehn"),
    (12, "zwölf"),
    (11, "elf"),
    (10, "zehn"),
    (9, "neun"),
    (8, "acht"),
    (7, "sieben"),
    (6, "sechs"),
    (5, "fünf"),
    (4, "vier"),
    (3, "drei"),
    (2, "zwei"),
    (1, "eins"),
    (0, "null"),
];

fn pluralize_scale(word: &str) -> String {
    // Million → Millionen, Milliarde → Milliarden.
    if word.ends_with('e') {
        format!("{word}n")
    } else {
        format!("{word}en")
    }
}

/// Compounds run together below a million; units swap in front of tens
/// with "und"; "eins" becomes "ein" inside compounds.
fn merge(left: &WordPair, right: &WordPair) -> String {
    if left.value == 1u32.into() {
        if right.is(100) || right.is(1000) {
            return format!("ein{}", right.text);
        }
        if right.below(1_000_000) {
            return right.text.clone();
        }
        return format!("eine {}", right.text);
    }
    if right.value > left.value {
        if right.below(1_000_000) {
            return format!("{}{}", left.text, right.text);
        }
        return format!("{} {}", left.text, pluralize_scale(&right.text));
    }
    if right.below(10) && left.below(100) {
        let unit = if right.text == "eins" { "ein" } else { &right.text };
        return format!("{unit}und{}", left.text);
    }
    if left.at_least(1_000_000) {
        format!("{} {}", left.text, right.text)
    } else {
        format!("{}{}", left.text, right.text)
    }
}

pub(crate) fn language(options: &ConversionOptions) -> Result<Language, Error> {
    Ok(Language {
        negative_word: "minus",
        zero_word: "null",
        separator: SeparatorRule::Fixed("Komma"),
        decimal_mode: DecimalMode::Grouped,
        joiner: options.joiner_or(" "),
        engine: Box::new(CardsEngine::new("de", CARDS, merge)),
    })
}
