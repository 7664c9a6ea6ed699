//! Chinese (Simplified), native hanzi or pinyin.

use lexnum_core::convert::{DecimalMode, Language, SeparatorRule};
use lexnum_core::segments::{MyriadEngine, MyriadRules, MyriadTables};
use lexnum_core::Error;

use crate::options::{ConversionOptions, Script};

static HANZI: MyriadTables = MyriadTables {
    digits: ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"],
    small_units: ["十", "百", "千"],
    scale_units: &["", "万", "亿", "兆", "京"],
    zero: "零",
};

static PINYIN: MyriadTables = MyriadTables {
    digits: [
        "líng", "yī", "èr", "sān", "sì", "wǔ", "liù", "qī", "bā", "jiǔ",
    ],
    small_units: ["shí", "bǎi", "qiān"],
    scale_units: &["", "wàn", "yì", "zhào", "jīng"],
    zero: "líng",
};

fn rules(joiner: &'static str) -> MyriadRules {
    MyriadRules {
        interior_zero: true,
        elide_leading_one_ten: true,
        elide_one_before_small_units: false,
        joiner,
    }
}

pub(crate) fn language(options: &ConversionOptions) -> Result<Language, Error> {
    let (tables, negative, zero, separator, default_joiner) = match options.script {
        Script::Native => (&HANZI, "负", "零", "点", ""),
        Script::Latin => (&PINYIN, "fù", "líng", "diǎn", " "),
    };
    Ok(Language {
        negative_word: negative,
        zero_word: zero,
        separator: SeparatorRule::Fixed(separator),
        decimal_mode: DecimalMode::PerDigit,
        joiner: options.joiner_or(default_joiner),
        engine: Box::new(MyriadEngine::new("zh", tables, rules(default_joiner))),
    })
}

#[cfg(test)]
mod tests {
    use crate::options::{ConversionOptions, Script};
    use crate::{convert, to_words};

    fn zh(value: i64) -> String {
        to_words(value, "zh").unwrap()
    }

    #[test]
    fn leading_one_ten_elides() {
        assert_eq!(zh(10), "十");
        assert_eq!(zh(15), "十五");
        // Interior 一十 stays.
        assert_eq!(zh(315), "三百一十五");
    }

    #[test]
    fn interior_zeros_collapse_to_one_ling() {
        assert_eq!(zh(1005), "一千零五");
        assert_eq!(zh(10_500), "一万零五百");
        assert_eq!(zh(100_000_005), "一亿零五");
    }

    #[test]
    fn myriad_scales() {
        assert_eq!(zh(10_000), "一万");
        assert_eq!(zh(100_000_000), "一亿");
        assert_eq!(zh(123_456), "十二万三千四百五十六");
    }

    #[test]
    fn decimals_spell_every_digit() {
        assert_eq!(to_words("3.14", "zh").unwrap(), "三点一四");
        assert_eq!(to_words("-0.5", "zh").unwrap(), "负零点五");
    }

    #[test]
    fn pinyin_script() {
        let options = ConversionOptions::new("zh").script(Script::Latin);
        assert_eq!(convert(15, &options).unwrap(), "shí wǔ");
        assert_eq!(convert("3.14", &options).unwrap(), "sān diǎn yī sì");
    }
}
