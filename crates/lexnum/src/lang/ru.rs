//! Russian.

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
    zero: "ноль",
    ones: [
        "", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
    ],
    ones_feminine: [
        "", "одна", "две", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
    ],
    teens: [
        "десять",
        "одиннадцать",
        "двенадцать",
        "тринадцать",
        "четырнадцать",
        "пятнадцать",
        "шестнадцать",
        "семнадцать",
        "восемнадцать",
        "девятнадцать",
    ],
    tens: [
        "",
        "",
        "двадцать",
        "тридцать",
        "сорок",
        "пятьдесят",
        "шестьдесят",
        "семьдесят",
        "восемьдесят",
        "девяносто",
    ],
    hundreds: [
        "",
        "сто",
        "двести",
        "триста",
        "четыреста",
        "пятьсот",
        "шестьсот",
        "семьсот",
        "восемьсот",
        "девятьсот",
    ],
    scales: &[
        tier("тысяча", "тысячи", "тысяч", Gender::Feminine),
        tier("миллион", "миллиона", "миллионов", Gender::Masculine),
        tier("миллиард", "миллиарда", "миллиардов", Gender::Masculine),
        tier("триллион", "триллиона", "триллионов", Gender::Masculine),
        tier("квадриллион", "квадриллиона", "квадриллионов", Gender::Masculine),
        tier("квинтиллион", "квинтиллиона", "квинтиллионов", Gender::Masculine),
        tier("секстиллион", "секстиллиона", "секстиллионов", Gender::Masculine),
        tier("септиллион", "септиллиона", "септиллионов", Gender::Masculine),
        tier("октиллион", "октиллиона", "октиллионов", Gender::Masculine),
        tier("нониллион", "нониллиона", "нониллионов", Gender::Masculine),
        tier("дециллион", "дециллиона", "дециллионов", Gender::Masculine),
    ],
};

pub(crate) fn language(options: &ConversionOptions) -> Result<Language, Error> {
    native_script_only("ru", options)?;
    let gender = options.gender.unwrap_or(Gender::Masculine);
    Ok(Language {
        negative_word: "минус",
        zero_word: "ноль",
        separator: SeparatorRule::Fixed("запятая"),
        decimal_mode: DecimalMode::Grouped,
        joiner: options.joiner_or(" "),
        engine: Box::new(SlavicEngine::new(
            "ru",
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
