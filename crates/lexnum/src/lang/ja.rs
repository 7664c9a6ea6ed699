//! Japanese.

use lexnum_core::convert::{DecimalMode, Language, SeparatorRule};
use lexnum_core::segments::{MyriadEngine, MyriadRules, MyriadTables};
use lexnum_core::Error;

use crate::lang::native_script_only;
use crate::options::ConversionOptions;

static KANJI: MyriadTables = MyriadTables {
    digits: ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"],
    small_units: ["十", "百", "千"],
    scale_units: &["", "万", "億", "兆", "京"],
    zero: "零",
};

pub(crate) fn language(options: &ConversionOptions) -> Result<Language, Error> {
    native_script_only("ja", options)?;
    Ok(Language {
        negative_word: "マイナス",
        zero_word: "零",
        separator: SeparatorRule::Fixed("点"),
        decimal_mode: DecimalMode::PerDigit,
        joiner: options.joiner_or(""),
        engine: Box::new(MyriadEngine::new(
            "ja",
            &KANJI,
            MyriadRules {
                interior_zero: false,
                elide_leading_one_ten: false,
                elide_one_before_small_units: true,
                joiner: "",
            },
        )),
    })
}
