//! Spanish.

use lexnum_core::cards::{CardsEngine, WordPair};
use lexnum_core::convert::{DecimalMode, Language, SeparatorRule};
use lexnum_core::Error;

use crate::options::ConversionOptions;

// Long scale: 10^9 is "mil millones", composed, so it has no card.
const CARDS: &[(u128, &str)] = &[
    (1_000_000_000_000_000_000_000_000, "cuatrillón"),
    (1_000_000_000_000_000_000, "trillón"),
    (1_000_000_000_000, "billón"),
    (1_000_000, "millón"),
    (1000, "mil"),
    (900, "novecientos"),
    (800, "ochocientos"),
    (700, "setecientos"),
    (600, "seiscientos"),
    (500, "quinientos"),
    (400, "cuatrocientos"),
    (300, "trescientos"),
    (200, "doscientos"),
    (100, "cien"),
    (90, "noventa"),
    (80, "ochenta"),
    (70, "setenta"),
    (60, "sesenta"),
    (50, "cincuenta"),
    (40, "cuarenta"),
    (30, "treinta"),
    (29, "veintinueve"),
    (28, "veintiocho"),
    (27, "veintisiete"),
    (26, "veintiséis"),
    (25, "veinticinco"),
    (24, "veinticuatro"),
    (23, "veintitrés"),
    (22, "veintidós"),
    (21, "veintiuno"),
    (20, "veinte"),
    (19, "diecinueve"),
    (18, "dieciocho"),
    (17, "diecisiete"),
    (16, "dieciséis"),
    (15, "quince"),
    (14, "catorce"),
    (13, "trece"),
    (12, "doce"),
    (11, "once"),
    (10, "diez"),
    (9, "nueve"),
    (8, "ocho"),
    (7, "siete"),
    (6, "seis"),
    (5, "cinco"),
    (4, "cuatro"),
    (3, "tres"),
    (2, "dos"),
    (1, "uno"),
    (0, "cero"),
];

fn pluralize_scale(word: &str) -> String {
    // millón → millones, billón → billones.
    match word.strip_suffix("ón") {
        Some(stem) => format!("{stem}ones"),
        None => word.to_string(),
    }
}

/// uno apocopates in front of a noun: veintiuno mil → veintiún mil,
/// treinta y uno mil → treinta y un mil.
fn apocope(text: &str) -> String {
    match text.strip_suffix("veintiuno") {
        Some(stem) => format!("{stem}veintiún"),
        None => match text.strip_suffix("uno") {
            Some(stem) => format!("{stem}un"),
            None => text.to_string(),
        },
    }
}

/// Hundreds are their own cards; "cien" becomes "ciento" in front of a
/// remainder; 30..=90 join ones with "y".
fn merge(left: &WordPair, right: &WordPair) -> String {
    if left.value == 1u32.into() {
        if right.at_least(1_000_000) {
            return format!("un {}", right.text);
        }
        return right.text.clone();
    }
    if right.value > left.value {
        if right.at_least(1_000_000) {
            return format!("{} {}", apocope(&left.text), pluralize_scale(&right.text));
        }
        return format!("{} {}", apocope(&left.text), right.text);
    }
    if left.is(100) {
        return format!("ciento {}", right.text);
    }
    if left.below(100) {
        return format!("{} y {}", left.text, right.text);
    }
    format!("{} {}", left.text, right.text)
}

pub(crate) fn language(options: &ConversionOptions) -> Result<Language, Error> {
    Ok(Language {
        negative_word: "menos",
        zero_word: "cero",
        separator: SeparatorRule::Fixed("coma"),
        decimal_mode: DecimalMode::Grouped,
        joiner: options.joiner_or(" "),
        engine: Box::new(CardsEngine::new("es", CARDS, merge)),
    })
}

#[cfg(test)]
mod tests {
    use crate::to_words;

    fn es(value: i64) -> String {
        to_words(value, "es").unwrap()
    }

    #[test]
    fn the_twenties_are_single_words() {
        assert_eq!(es(21), "veintiuno");
        assert_eq!(es(26), "veintiséis");
    }

    #[test]
    fn y_joins_tens_and_ones() {
        assert_eq!(es(31), "treinta y uno");
        assert_eq!(es(99), "noventa y nueve");
    }

    #[test]
    fn cien_becomes_ciento_with_a_remainder() {
        assert_eq!(es(100), "cien");
        assert_eq!(es(101), "ciento uno");
        assert_eq!(es(150), "ciento cincuenta");
        assert_eq!(es(500), "quinientos");
        assert_eq!(es(999), "novecientos noventa y nueve");
    }

    #[test]
    fn scales_and_the_composed_milliard() {
        assert_eq!(es(1000), "mil");
        assert_eq!(es(2000), "dos mil");
        assert_eq!(es(1_000_000), "un millón");
        assert_eq!(es(2_000_000), "dos millones");
        // Long scale: 10^9 has no word of its own.
        assert_eq!(es(1_000_000_000), "mil millones");
        assert_eq!(es(1_000_000_000_000), "un billón");
    }

    #[test]
    fn uno_apocopates_before_scale_words() {
        assert_eq!(es(21_000), "veintiún mil");
        assert_eq!(es(31_000), "treinta y un mil");
        assert_eq!(es(21_000_000), "veintiún millones");
        assert_eq!(es(101_000), "ciento un mil");
    }

    #[test]
    fn decimals_use_coma() {
        assert_eq!(to_words("1.5", "es").unwrap(), "uno coma cinco");
    }
}
