//! Indonesian.

use lexnum_core::cards::{CardsEngine, WordPair};
use lexnum_core::convert::{DecimalMode, Language, SeparatorRule};
use lexnum_core::Error;

use crate::options::ConversionOptions;

const CARDS: &[(u128, &str)] = &[
    (1_000_000_000_000, "triliun"),
    (1_000_000_000, "miliar"),
    (1_000_000, "juta"),
    (1000, "seribu"),
    (100, "seratus"),
    (90, "sembilan puluh"),
    (80, "delapan puluh"),
    (70, "tujuh puluh"),
    (60, "enam puluh"),
    (50, "lima puluh"),
    (40, "empat puluh"),
    (30, "tiga puluh"),
    (20, "dua puluh"),
    (19, "sembilan belas"),
    (18, "delapan belas"),
    (17, "tujuh belas"),
    (16, "enam belas"),
    (15, "lima belas"),
    (14, "empat belas"),
    (13, "tiga belas"),
    (12, "dua belas"),
    (11, "sebelas"),
    (10, "sepuluh"),
    (9, "sembilan"),
    (8, "delapan"),
    (7, "tujuh"),
    (6, "enam"),
    (5, "lima"),
    (4, "empat"),
    (3, "tiga"),
    (2, "dua"),
    (1, "satu"),
    (0, "nol"),
];

/// The se- prefix is the count of one; a larger count strips it back to
/// the bare unit: sepuluh → dua puluh, seratus → dua ratus.
fn bare_unit(word: &str) -> &str {
    match word {
        "sepuluh" => "puluh",
        "seratus" => "ratus",
        "seribu" => "ribu",
        other => other,
    }
}

fn merge(left: &WordPair, right: &WordPair) -> String {
    if left.value == 1u32.into() {
        if right.at_least(1_000_000) {
            return format!("satu {}", right.text);
        }
        return right.text.clone();
    }
    if right.value > left.value {
        return format!("{} {}", left.text, bare_unit(&right.text));
    }
    format!("{} {}", left.text, right.text)
}

pub(crate) fn language(options: &ConversionOptions) -> Result<Language, Error> {
    Ok(Language {
        negative_word: "minus",
        zero_word: "nol",
        separator: SeparatorRule::Fixed("koma"),
        decimal_mode: DecimalMode::Grouped,
        joiner: options.joiner_or(" "),
        engine: Box::new(CardsEngine::new("id", CARDS, merge)),
    })
}

#[cfg(test)]
mod tests {
    use crate::to_words;

    fn id(value: i64) -> String {
        to_words(value, "id").unwrap()
    }

    #[test]
    fn the_se_prefix_marks_one() {
        assert_eq!(id(10), "sepuluh");
        assert_eq!(id(11), "sebelas");
        assert_eq!(id(100), "seratus");
        assert_eq!(id(1000), "seribu");
    }

    #[test]
    fn larger_counts_use_the_bare_unit() {
        assert_eq!(id(20), "dua puluh");
        assert_eq!(id(21), "dua puluh satu");
        assert_eq!(id(200), "dua ratus");
        assert_eq!(id(2000), "dua ribu");
    }

    #[test]
    fn big_scales_keep_satu() {
        assert_eq!(id(1_000_000), "satu juta");
        assert_eq!(id(2_000_000), "dua juta");
    }

    #[test]
    fn composed_numbers() {
        assert_eq!(id(12), "dua belas");
        assert_eq!(id(345), "tiga ratus empat puluh lima");
        assert_eq!(to_words("1.5", "id").unwrap(), "satu koma lima");
    }
}
