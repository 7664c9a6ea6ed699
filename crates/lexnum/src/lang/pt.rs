//! Portuguese (Brazilian short scale).

use lexnum_core::convert::{DecimalMode, Language, SeparatorRule};
use lexnum_core::segments::{TriadEngine, TriadRules, TriadTables};
use lexnum_core::Error;

use crate::options::ConversionOptions;

static TABLES: TriadTables = TriadTables {
    zero: "zero",
    under_twenty: [
        "",
        "um",
        "dois",
        "três",
        "quatro",
        "cinco",
        "seis",
        "sete",
        "oito",
        "nove",
        "dez",
        "onze",
        "doze",
        "treze",
        "catorze",
        "quinze",
        "dezesseis",
        "dezessete",
        "dezoito",
        "dezenove",
    ],
    tens: [
        "",
        "",
        "vinte",
        "trinta",
        "quarenta",
        "cinquenta",
        "sessenta",
        "setenta",
        "oitenta",
        "noventa",
    ],
    hundreds: [
        "",
        "cento",
        "duzentos",
        "trezentos",
        "quatrocentos",
        "quinhentos",
        "seiscentos",
        "setecentos",
        "oitocentos",
        "novecentos",
    ],
    hundred_exact: "cem",
    scales: &[
        ("mil", "mil"),
        ("milhão", "milhões"),
        ("bilhão", "bilhões"),
        ("trilhão", "trilhões"),
        ("quatrilhão", "quatrilhões"),
    ],
};

pub(crate) fn language(options: &ConversionOptions) -> Result<Language, Error> {
    Ok(Language {
        negative_word: "menos",
        zero_word: "zero",
        separator: SeparatorRule::Fixed("vírgula"),
        decimal_mode: DecimalMode::Grouped,
        joiner: options.joiner_or(" "),
        engine: Box::new(TriadEngine::new(
            "pt",
            &TABLES,
            TriadRules {
                omit_one_tiers: &[1],
                connective: "e",
                connective_before_final: true,
            },
        )),
    })
}

#[cfg(test)]
mod tests {
    use crate::to_words;

    fn pt(value: i64) -> String {
        to_words(value, "pt").unwrap()
    }

    #[test]
    fn e_joins_within_a_segment() {
        assert_eq!(pt(21), "vinte e um");
        assert_eq!(pt(123), "cento e vinte e três");
        assert_eq!(pt(999), "novecentos e noventa e nove");
    }

    #[test]
    fn cem_versus_cento() {
        assert_eq!(pt(100), "cem");
        assert_eq!(pt(101), "cento e um");
    }

    #[test]
    fn mil_omits_um() {
        assert_eq!(pt(1000), "mil");
        assert_eq!(pt(2000), "dois mil");
        assert_eq!(pt(1001), "mil e um");
    }

    #[test]
    fn milhao_pluralizes_and_keeps_um() {
        assert_eq!(pt(1_000_000), "um milhão");
        assert_eq!(pt(2_000_000), "dois milhões");
        assert_eq!(pt(1_000_100), "um milhão e cem");
    }

    #[test]
    fn long_compounds() {
        assert_eq!(
            pt(1_234_567),
            "um milhão duzentos e trinta e quatro mil quinhentos e sessenta e sete"
        );
    }

    #[test]
    fn decimals_use_virgula() {
        assert_eq!(to_words("-3.05", "pt").unwrap(), "menos três vírgula zero cinco");
    }
}
