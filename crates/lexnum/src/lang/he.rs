//! Hebrew.

use lexnum_core::convert::{DecimalMode, Language, SeparatorRule};
use lexnum_core::plural::Gender;
use lexnum_core::semitic::{
    ConjunctionStyle, SemiticEngine, SemiticRules, SemiticScale, SemiticTables, UnitsOrder,
};
use lexnum_core::Error;

use crate::lang::native_script_only;
use crate::options::ConversionOptions;

static TABLES: SemiticTables = SemiticTables {
    zero: "אפס",
    ones: [
        "", "אחד", "שניים", "שלושה", "ארבעה", "חמישה", "שישה", "שבעה", "שמונה", "תשעה",
    ],
    ones_feminine: [
        "", "אחת", "שתיים", "שלוש", "ארבע", "חמש", "שש", "שבע", "שמונה", "תשע",
    ],
    teens: [
        "עשרה",
        "אחד עשר",
        "שנים עשר",
        "שלושה עשר",
        "ארבעה עשר",
        "חמישה עשר",
        "שישה עשר",
        "שבעה עשר",
        "שמונה עשר",
        "תשעה עשר",
    ],
    teens_feminine: [
        "עשר",
        "אחת עשרה",
        "שתים עשרה",
        "שלוש עשרה",
        "ארבע עשרה",
        "חמש עשרה",
        "שש עשרה",
        "שבע עשרה",
        "שמונה עשרה",
        "תשע עשרה",
    ],
    tens: [
        "", "", "עשרים", "שלושים", "ארבעים", "חמישים", "שישים", "שבעים", "שמונים", "תשעים",
    ],
    hundreds: [
        "",
        "מאה",
        "מאתיים",
        "שלוש מאות",
        "ארבע מאות",
        "חמש מאות",
        "שש מאות",
        "שבע מאות",
        "שמונה מאות",
        "תשע מאות",
    ],
    scales: &[
        SemiticScale {
            singular: "אלף",
            dual: "אלפיים",
            plural: "אלפים",
            appended: "אלף",
            construct_ones: Some(&[
                "שלושת", "ארבעת", "חמשת", "ששת", "שבעת", "שמונת", "תשעת", "עשרת",
            ]),
        },
        SemiticScale {
            singular: "מיליון",
            dual: "שני מיליון",
            plural: "מיליון",
            appended: "מיליון",
            construct_ones: Some(&[
                "שלושה", "ארבעה", "חמישה", "שישה", "שבעה", "שמונה", "תשעה", "עשרה",
            ]),
        },
        SemiticScale {
            singular: "מיליארד",
            dual: "שני מיליארד",
            plural: "מיליארד",
            appended: "מיליארד",
            construct_ones: Some(&[
                "שלושה", "ארבעה", "חמישה", "שישה", "שבעה", "שמונה", "תשעה", "עשרה",
            ]),
        },
    ],
};

pub(crate) fn language(options: &ConversionOptions) -> Result<Language, Error> {
    native_script_only("he", options)?;
    // Abstract counting uses the feminine row (אחת, שתיים).
    let gender = options.gender.unwrap_or(Gender::Feminine);
    Ok(Language {
        negative_word: "מינוס",
        zero_word: "אפס",
        separator: SeparatorRule::Fixed("נקודה"),
        decimal_mode: DecimalMode::Grouped,
        joiner: options.joiner_or(" "),
        engine: Box::new(SemiticEngine::new(
            "he",
            &TABLES,
            SemiticRules {
                units_order: UnitsOrder::TensFirst,
                conjunction: "ו",
                conjunction_style: ConjunctionStyle::BeforeLast,
            },
            gender,
        )),
    })
}
