//! Locale definitions.
//!
//! One module per language: its vocabulary tables, its strategy functions
//! (merge rules, plural rules, separator rules), and a `language()`
//! constructor assembling a [`lexnum_core::Language`] from one of the core
//! engines. Tables are data, strategies are named functions; the engines
//! never know which locale they serve.

pub mod ar;
pub mod cs;
pub mod de;
pub mod en;
pub mod es;
pub mod fr;
pub mod he;
pub mod hi;
pub mod id;
pub mod it;
pub mod ja;
pub mod ko;
pub mod nl;
pub mod pl;
pub mod pt;
pub mod ru;
pub mod tr;
pub mod uk;
pub mod zh;

use lexnum_core::Error;

use crate::options::{ConversionOptions, Script};

/// Reject `Script::Latin` for a locale with no romanized vocabulary.
pub(crate) fn native_script_only(
    lang: &'static str,
    options: &ConversionOptions,
) -> Result<(), Error> {
    if options.script == Script::Latin {
        return Err(Error::UnsupportedOption {
            lang,
            option: "script",
        });
    }
    Ok(())
}
