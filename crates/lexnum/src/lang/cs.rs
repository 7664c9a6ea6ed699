//! Czech.

use num_bigint::BigUint;
use num_traits::ToPrimitive;

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
    zero: "nula",
    ones: [
        "", "jeden", "dva", "tři", "čtyři", "pět", "šest", "sedm", "osm", "devět",
    ],
    ones_feminine: [
        "", "jedna", "dvě", "tři", "čtyři", "pět", "šest", "sedm", "osm", "devět",
    ],
    teens: [
        "deset",
        "jedenáct",
        "dvanáct",
        "třináct",
        "čtrnáct",
        "patnáct",
        "šestnáct",
        "sedmnáct",
        "osmnáct",
        "devatenáct",
    ],
    tens: [
        "",
        "",
        "dvacet",
        "třicet",
        "čtyřicet",
        "padesát",
        "šedesát",
        "sedmdesát",
        "osmdesát",
        "devadesát",
    ],
    hundreds: [
        "",
        "sto",
        "dvě stě",
        "tři sta",
        "čtyři sta",
        "pět set",
        "šest set",
        "sedm set",
        "osm set",
        "devět set",
    ],
    scales: &[
        tier("tisíc", "tisíce", "tisíc", Gender::Masculine),
        tier("milion", "miliony", "milionů", Gender::Masculine),
        tier("miliarda", "miliardy", "miliard", Gender::Feminine),
        tier("bilion", "biliony", "bilionů", Gender::Masculine),
    ],
};

/// The separator agrees with the integer part it follows: jedna celá,
/// dvě celé, pět celých.
fn whole_word(whole: &BigUint) -> &'static str {
    let tail = (whole % BigUint::from(100u32)).to_u32().unwrap_or(0);
    match tail {
        1 => "celá",
        2..=4 => "celé",
        _ => "celých",
    }
}

pub(crate) fn language(options: &ConversionOptions) -> Result<Language, Error> {
    native_script_only("cs", options)?;
    // Abstract counting defaults to the feminine row (jedna, dvě).
    let gender = options.gender.unwrap_or(Gender::Feminine);
    Ok(Language {
        negative_word: "mínus",
        zero_word: "nula",
        separator: SeparatorRule::ByWholeValue(whole_word),
        decimal_mode: DecimalMode::Grouped,
        joiner: options.joiner_or(" "),
        engine: Box::new(SlavicEngine::new(
            "cs",
            &TABLES,
            SlavicRules {
                rule: PluralRule::BareValue,
                omit_one_before_scale: true,
                fraction_gender: None,
            },
            gender,
        )),
    })
}
