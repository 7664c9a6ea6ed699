//! French.

use lexnum_core::cards::{CardsEngine, WordPair};
use lexnum_core::convert::{DecimalMode, Language, SeparatorRule};
use lexnum_core::Error;

use crate::options::ConversionOptions;

const CARDS: &[(u128, &str)] = &[
    (1_000_000_000_000_000_000_000_000_000_000_000, "quintilliard"),
    (1_000_000_000_000_000_000_000_000_000_000, "quintillion"),
    (1_000_000_000_000_000_000_000_000_000, "quadrilliard"),
    (1_000_000_000_000_000_000_000_000, "quadrillion"),
    (1_000_000_000_000_000_000_000, "trilliard"),
    (1_000_000_000_000_000_000, "trillion"),
    (1_000_000_000_000_000, "billiard"),
    (1_000_000_000_000, "billion"),
    (1_000_000_000, "milliard"),
    (1_000_000, "million"),
    (1000, "mille"),
    (100, "cent"),
    (80, "quatre-vingts"),
    (60, "soixante"),
    (50, "cinquante"),
    (40, "quarante"),
    (30, "trente"),
    (20, "vingt"),
    (19, "dix-neuf"),
    (18, "dix-huit"),
    (17, "dix-sept"),
    (16, "seize"),
    (15, "quinze"),
    (14, "quatorze"),
    (13, "treize"),
    (12, "douze"),
    (11, "onze"),
    (10, "dix"),
    (9, "neuf"),
    (8, "huit"),
    (7, "sept"),
    (6, "six"),
    (5, "cinq"),
    (4, "quatre"),
    (3, "trois"),
    (2, "deux"),
    (1, "un"),
    (0, "zéro"),
];

fn strip_plural_s(text: &str) -> String {
    match text.strip_suffix("ts") {
        Some(stem) => format!("{stem}t"),
        None => text.to_string(),
    }
}

/// No 70 or 90 card: 71 rides on soixante + onze, 92 on quatre-vingts +
/// douze. "et" joins 21..=71 with un/onze; "vingts"/"cents" drop their
/// plural s in front of a remainder.
fn merge(left: &WordPair, right: &WordPair) -> String {
    if left.value == 1u32.into() {
        if right.below(1_000_000) {
            return right.text.clone();
        }
        return format!("un {}", right.text);
    }
    if right.value > left.value {
        let scale = if right.is(100) {
            "cents".to_string()
        } else if right.at_least(1_000_000) {
            format!("{}s", right.text)
        } else {
            right.text.clone()
        };
        // The plural s drops before the numeral "mille" but stays before
        // the nouns million and up: quatre-vingt mille, quatre-vingts
        // millions.
        let left_text = if right.is(1000) {
            strip_plural_s(&left.text)
        } else {
            left.text.clone()
        };
        return format!("{left_text} {scale}");
    }

    // Additive: strip the plural s, pick et / hyphen / space.
    let left_text = strip_plural_s(&left.text);
    let takes_et = (right.value == 1u32.into() && left.at_least(20) && left.below(80))
        || (right.is(11) && left.is(60));
    if takes_et {
        format!("{left_text} et {}", right.text)
    } else if left.below(100) {
        format!("{left_text}-{}", right.text)
    } else {
        format!("{left_text} {}", right.text)
    }
}

pub(crate) fn language(options: &ConversionOptions) -> Result<Language, Error> {
    Ok(Language {
        negative_word: "moins",
        zero_word: "zéro",
        separator: SeparatorRule::Fixed("virgule"),
        decimal_mode: DecimalMode::Grouped,
        joiner: options.joiner_or(" "),
        engine: Box::new(CardsEngine::new("fr", CARDS, merge)),
    })
}
