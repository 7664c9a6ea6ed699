//! Korean (Sino-Korean numerals).

use lexnum_core::convert::{DecimalMode, Language, SeparatorRule};
use lexnum_core::segments::{MyriadEngine, MyriadRules, MyriadTables};
use lexnum_core::Error;

use crate::lang::native_script_only;
use crate::options::ConversionOptions;

static HANGUL: MyriadTables = MyriadTables {
    digits: ["영", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구"],
    small_units: ["십", "백", "천"],
    scale_units: &["", "만", "억", "조", "경"],
    zero: "영",
};

pub(crate) fn language(options: &ConversionOptions) -> Result<Language, Error> {
    native_script_only("ko", options)?;
    Ok(Language {
        negative_word: "마이너스",
        zero_word: "영",
        separator: SeparatorRule::Fixed("점"),
        decimal_mode: DecimalMode::PerDigit,
        joiner: options.joiner_or(""),
        engine: Box::new(MyriadEngine::new(
            "ko",
            &HANGUL,
            MyriadRules {
                interior_zero: false,
                elide_leading_one_ten: false,
                elide_one_before_small_units: true,
                joiner: "",
            },
        )),
    })
}

#[cfg(test)]
mod tests {
    use crate::to_words;

    fn ko(value: i64) -> String {
        to_words(value, "ko").unwrap()
    }

    #[test]
    fn il_elides_before_small_units() {
        assert_eq!(ko(10), "십");
        assert_eq!(ko(111), "백십일");
        assert_eq!(ko(1000), "천");
    }

    #[test]
    fn myriad_scales() {
        assert_eq!(ko(10_000), "일만");
        assert_eq!(ko(123_456), "십이만삼천사백오십육");
    }

    #[test]
    fn decimals_spell_every_digit() {
        assert_eq!(to_words("3.14", "ko").unwrap(), "삼점일사");
        assert_eq!(to_words(-5, "ko").unwrap(), "마이너스오");
    }
}
