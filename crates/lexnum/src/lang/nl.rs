//! Dutch.

use lexnum_core::cards::{CardsEngine, WordPair};
use lexnum_core::convert::{DecimalMode, Language, SeparatorRule};
use lexnum_core::Error;

use crate::options::ConversionOptions;

const CARDS: &[(u128, &str)] = &[
    (1_000_000_000_000_000_000, "triljoen"),
    (1_000_000_000_000_000, "biljard"),
    (1_000_000_000_000, "biljoen"),
    (1_000_000_000, "miljard"),
    (1_000_000, "miljoen"),
    (1000, "duizend"),
    (100, "honderd"),
    (90, "negentig"),
    (80, "tachtig"),
    (70, "zeventig"),
    (60, "zestig"),
    (50, "vijftig"),
    (40, "veertig"),
    (30, "dertig"),
    (20, "twintig"),
    (19, "negentien"),
    (18, "achttien"),
    (17, "zeventien"),
    (16, "zestien"),
    (15, "vijftien"),
    (14, "veertien"),
    (13, "dertien"),
    (12, "twaalf"),
    (11, "elf"),
    (10, "tien"),
    (9, "negen"),
    (8, "acht"),
    (7, "zeven"),
    (6, "zes"),
    (5, "vijf"),
    (4, "vier"),
    (3, "drie"),
    (2, "twee"),
    (1, "een"),
    (0, "nul"),
];

/// Units swap in front of tens with "en" (diaeresized after a vowel:
/// tweeëntwintig); compounds run together below a million with a space
/// after duizend; big scales never pluralize.
fn merge(left: &WordPair, right: &WordPair) -> String {
    if left.value == 1u32.into() {
        if right.below(1_000_000) {
            return right.text.clone();
        }
        return format!("een {}", right.text);
    }
    if right.value > left.value {
        if right.at_least(1_000_000) {
            return format!("{} {}", left.text, right.text);
        }
        return format!("{}{}", left.text, right.text);
    }
    if right.below(10) && left.below(100) {
        let connective = if right.text.ends_with('e') { "ën" } else { "en" };
        return format!("{}{connective}{}", right.text, left.text);
    }
    if left.at_least(1000) {
        format!("{} {}", left.text, right.text)
    } else {
        format!("{}{}", left.text, right.text)
    }
}

pub(crate) fn language(options: &ConversionOptions) -> Result<Language, Error> {
    Ok(Language {
        negative_word: "min",
        zero_word: "nul",
        separator: SeparatorRule::Fixed("komma"),
        decimal_mode: DecimalMode::Grouped,
        joiner: options.joiner_or(" "),
        engine: Box::new(CardsEngine::new("nl", CARDS, merge)),
    })
}
