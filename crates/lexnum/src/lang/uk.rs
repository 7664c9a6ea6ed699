//! Ukrainian.

use lexnum_core::convert::{DecimalMode, Language, SeparatorRule};
use lexnum_core::plural::{Gender, PluralRule, ScaleForms};
use lexnum_core::slavic::{ScaleTier, SlavicEngine, SlavicRules, SlavicTables};
use lexnum_core::Error;

use crate::lang::native_script_only;
use crate::options::ConversionOptions;

const fn tier(singular: &'static str, few: &'static str, many: &'static str, gender: Gender) -> ScaleTier {
    ScaleTier {
        forms: ScaleForms {
            singular,
            few,
            many,
        },
        gender,
    }
}

static TABLES: SlavicTables = SlavicTables {
    zero: "нуль",
    ones: [
        "", "один", "два", "три", "чотири", "п'ять", "шість", "сім", "вісім", "дев'ять",
    ],
    ones_feminine: [
        "", "одна", "дві", "три", "чотири", "п'ять", "шість", "сім", "вісім", "дев'ять",
    ],
    teens: [
        "десять",
        "одинадцять",
        "дванадцять",
        "тринадцять",
        "чотирнадцять",
        "п'ятнадцять",
        "шістнадцять",
        "сімнадцять",
        "вісімнадцять",
        "дев'ятнадцять",
    ],
    tens: [
        "",
        "",
        "двадцять",
        "тридцять",
        "сорок",
        "п'ятдесят",
        "шістдесят",
        "сімдесят",
        "вісімдесят",
        "дев'яносто",
    ],
    hundreds: [
        "",
        "сто",
        "двісті",
        "триста",
        "чотириста",
        "п'ятсот",
        "шістсот",
        "сімсот",
        "вісімсот",
        "дев'ятсот",
    ],
    scales: &[
        tier("тисяча", "тисячі", "тисяч", Gender::Feminine),
        tier("мільйон", "мільйони", "мільйонів", Gender::Masculine),
        tier("мільярд", "мільярди", "мільярдів", Gender::Masculine),
        tier("трильйон", "трильйони", "трильйонів", Gender::Masculine),
        tier("квадрильйон", "квадрильйони", "квадрильйонів", Gender::Masculine),
    ],
};

pub(crate) fn language(options: &ConversionOptions) -> Result<Language, Error> {
    native_script_only("uk", options)?;
    let gender = options.gender.unwrap_or(Gender::Masculine);
    Ok(Language {
        negative_word: "мінус",
        zero_word: "нуль",
        separator: SeparatorRule::Fixed("кома"),
        decimal_mode: DecimalMode::Grouped,
        joiner: options.joiner_or(" "),
        engine: Box::new(SlavicEngine::new(
            "uk",
            &TABLES,
            SlavicRules {
                rule: PluralRule::Slavic,
                omit_one_before_scale: false,
                fraction_gender: Some(Gender::Feminine),
            },
            gender,
        )),
    })
}
