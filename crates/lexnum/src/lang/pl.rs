//! Polish.

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
    zero: "zero",
    ones: [
        "", "jeden", "dwa", "trzy", "cztery", "pięć", "sześć", "siedem", "osiem", "dziewięć",
    ],
    ones_feminine: [
        "", "jedna", "dwie", "trzy", "cztery", "pięć", "sześć", "siedem", "osiem", "dziewięć",
    ],
    teens: [
        "dziesięć",
        "jedenaście",
        "dwanaście",
        "trzynaście",
        "czternaście",
        "piętnaście",
        "szesnaście",
        "siedemnaście",
        "osiemnaście",
        "dziewiętnaście",
    ],
    tens: [
        "",
        "",
        "dwadzieścia",
        "trzydzieści",
        "czterdzieści",
        "pięćdziesiąt",
        "sześćdziesiąt",
        "siedemdziesiąt",
        "osiemdziesiąt",
        "dziewięćdziesiąt",
    ],
    hundreds: [
        "",
        "sto",
        "dwieście",
        "trzysta",
        "czterysta",
        "pięćset",
        "sześćset",
        "siedemset",
        "osiemset",
        "dziewięćset",
    ],
    scales: &[
        tier("tysiąc", "tysiące", "tysięcy", Gender::Masculine),
        tier("milion", "miliony", "milionów", Gender::Masculine),
        tier("miliard", "miliardy", "miliardów", Gender::Masculine),
        tier("bilion", "biliony", "bilionów", Gender::Masculine),
        tier("biliard", "biliardy", "biliardów", Gender::Masculine),
    ],
};

pub(crate) fn language(options: &ConversionOptions) -> Result<Language, Error> {
    native_script_only("pl", options)?;
    let gender = options.gender.unwrap_or(Gender::Masculine);
    Ok(Language {
        negative_word: "minus",
        zero_word: "zero",
        separator: SeparatorRule::Fixed("przecinek"),
        decimal_mode: DecimalMode::Grouped,
        joiner: options.joiner_or(" "),
        engine: Box::new(SlavicEngine::new(
            "pl",
            &TABLES,
            SlavicRules {
                rule: PluralRule::Slavic,
                omit_one_before_scale: true,
                fraction_gender: None,
            },
            gender,
        )),
    })
}
