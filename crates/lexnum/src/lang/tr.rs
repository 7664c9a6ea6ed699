//! Turkish.

use lexnum_core::cards::{CardsEngine, WordPair};
use lexnum_core::convert::{DecimalMode, Language, SeparatorRule};
use lexnum_core::Error;

use crate::options::ConversionOptions;

// No teen cards: 11 composes as on + bir.
const CARDS: &[(u128, &str)] = &[
    (1_000_000_000_000_000_000, "kentilyon"),
    (1_000_000_000_000_000, "katrilyon"),
    (1_000_000_000_000, "trilyon"),
    (1_000_000_000, "milyar"),
    (1_000_000, "milyon"),
    (1000, "bin"),
    (100, "yüz"),
    (90, "doksan"),
    (80, "seksen"),
    (70, "yetmiş"),
    (60, "altmış"),
    (50, "elli"),
    (40, "kırk"),
    (30, "otuz"),
    (20, "yirmi"),
    (10, "on"),
    (9, "dokuz"),
    (8, "sekiz"),
    (7, "yedi"),
    (6, "altı"),
    (5, "beş"),
    (4, "dört"),
    (3, "üç"),
    (2, "iki"),
    (1, "bir"),
    (0, "sıfır"),
];

/// "bir" vanishes before yüz and bin but not before milyon; everything
/// joins with a space.
fn merge(left: &WordPair, right: &WordPair) -> String {
    if left.value == 1u32.into() {
        if right.below(1_000_000) {
            return right.text.clone();
        }
        return format!("bir {}", right.text);
    }
    format!("{} {}", left.text, right.text)
}

pub(crate) fn language(options: &ConversionOptions) -> Result<Language, Error> {
    Ok(Language {
        negative_word: "eksi",
        zero_word: "sıfır",
        separator: SeparatorRule::Fixed("virgül"),
        decimal_mode: DecimalMode::Grouped,
        joiner: options.joiner_or(" "),
        engine: Box::new(CardsEngine::new("tr", CARDS, merge)),
    })
}
