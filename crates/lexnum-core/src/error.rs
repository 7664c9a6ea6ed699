//! Error taxonomy for numeral conversion.
//!
//! Every fallible operation in the workspace reports one of these variants.
//! Parsing problems are split in two: [`Error::InvalidFormat`] for strings
//! that are not numerals, [`Error::NotANumber`] for floats that carry no
//! finite value. Missing vocabulary is always reported, never papered over
//! with a placeholder word.

use core::fmt;

/// Unified error type for the conversion pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input string could not be parsed as a numeral.
    InvalidFormat(String),
    /// The input float was NaN or infinite.
    NotANumber,
    /// No language is registered under the requested code.
    UnsupportedLanguage {
        requested: String,
        supported: Vec<&'static str>,
    },
    /// The resolved language cannot honor a requested option.
    UnsupportedOption {
        lang: &'static str,
        option: &'static str,
    },
    /// An engine needed a vocabulary entry its tables do not provide.
    MissingVocabulary { lang: &'static str, item: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(input) => {
                write!(f, "cannot interpret {input:?} as a number")
            }
            Self::NotANumber => write!(f, "input is not a finite number"),
            Self::UnsupportedLanguage {
                requested,
                supported,
            } => {
                write!(
                    f,
                    "unsupported language {requested:?}; supported codes: {}",
                    supported.join(", ")
                )
            }
            Self::UnsupportedOption { lang, option } => {
                write!(f, "language {lang:?} does not support option {option:?}")
            }
            Self::MissingVocabulary { lang, item } => {
                write!(f, "language {lang:?} has no vocabulary for {item}")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_input() {
        let err = Error::InvalidFormat("1..2".to_string());
        assert!(err.to_string().contains("1..2"));
    }

    #[test]
    fn display_lists_supported_codes() {
        let err = Error::UnsupportedLanguage {
            requested: "xx".to_string(),
            supported: vec!["en", "ru"],
        };
        let text = err.to_string();
        assert!(text.contains("en, ru"));
        assert!(text.contains("xx"));
    }

    #[test]
    fn display_names_lang_and_option() {
        let err = Error::UnsupportedOption {
            lang: "en",
            option: "ordinal",
        };
        assert!(err.to_string().contains("ordinal"));
    }
}
