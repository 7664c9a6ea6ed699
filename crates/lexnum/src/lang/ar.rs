//! Arabic (Modern Standard).

use lexnum_core::convert::{DecimalMode, Language, SeparatorRule};
use lexnum_core::plural::Gender;
use lexnum_core::semitic::{
    ConjunctionStyle, SemiticEngine, SemiticRules, SemiticScale, SemiticTables, UnitsOrder,
};
use lexnum_core::Error;

use crate::lang::native_script_only;
use crate::options::ConversionOptions;

static TABLES: SemiticTables = SemiticTables {
    zero: "صفر",
    ones: [
        "", "واحد", "اثنان", "ثلاثة", "أربعة", "خمسة", "ستة", "سبعة", "ثمانية", "تسعة",
    ],
    ones_feminine: [
        "", "واحدة", "اثنتان", "ثلاث", "أربع", "خمس", "ست", "سبع", "ثمان", "تسع",
    ],
    teens: [
        "عشرة",
        "أحد عشر",
        "اثنا عشر",
        "ثلاثة عشر",
        "أربعة عشر",
        "خمسة عشر",
        "ستة عشر",
        "سبعة عشر",
        "ثمانية عشر",
        "تسعة عشر",
    ],
    teens_feminine: [
        "عشر",
        "إحدى عشرة",
        "اثنتا عشرة",
        "ثلاث عشرة",
        "أربع عشرة",
        "خمس عشرة",
        "ست عشرة",
        "سبع عشرة",
        "ثمان عشرة",
        "تسع عشرة",
    ],
    tens: [
        "", "", "عشرون", "ثلاثون", "أربعون", "خمسون", "ستون", "سبعون", "ثمانون", "تسعون",
    ],
    hundreds: [
        "",
        "مئة",
        "مئتان",
        "ثلاثمئة",
        "أربعمئة",
        "خمسمئة",
        "ستمئة",
        "سبعمئة",
        "ثمانمئة",
        "تسعمئة",
    ],
    scales: &[
        SemiticScale {
            singular: "ألف",
            dual: "ألفان",
            plural: "آلاف",
            appended: "ألفاً",
            construct_ones: Some(&[
                "ثلاثة", "أربعة", "خمسة", "ستة", "سبعة", "ثمانية", "تسعة", "عشرة",
            ]),
        },
        SemiticScale {
            singular: "مليون",
            dual: "مليونان",
            plural: "ملايين",
            appended: "مليوناً",
            construct_ones: Some(&[
                "ثلاثة", "أربعة", "خمسة", "ستة", "سبعة", "ثمانية", "تسعة", "عشرة",
            ]),
        },
        SemiticScale {
            singular: "مليار",
            dual: "ملياران",
            plural: "مليارات",
            appended: "ملياراً",
            construct_ones: Some(&[
                "ثلاثة", "أربعة", "خمسة", "ستة", "سبعة", "ثمانية", "تسعة", "عشرة",
            ]),
        },
    ],
};

pub(crate) fn language(options: &ConversionOptions) -> Result<Language, Error> {
    native_script_only("ar", options)?;
    let gender = options.gender.unwrap_or(Gender::Masculine);
    Ok(Language {
        negative_word: "سالب",
        zero_word: "صفر",
        separator: SeparatorRule::Fixed("فاصلة"),
        decimal_mode: DecimalMode::Grouped,
        joiner: options.joiner_or(" "),
        engine: Box::new(SemiticEngine::new(
            "ar",
            &TABLES,
            SemiticRules {
                units_order: UnitsOrder::OnesFirst,
                conjunction: "و",
                conjunction_style: ConjunctionStyle::BetweenAll,
            },
            gender,
        )),
    })
}
