//! Language dispatch.
//!
//! A static code→builder table maps ISO 639-1 codes to locale constructors.
//! Lookup tries the full tag first, then the primary subtag (`"en-GB"`
//! resolves to `"en"`). Unknown codes report every supported code in the
//! error.

use std::sync::LazyLock;

use lexnum_core::{Error, Language};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::lang;
use crate::options::ConversionOptions;

type Builder = fn(&ConversionOptions) -> Result<Language, Error>;

/// Sorted by code.
static BUILDERS: &[(&str, Builder)] = &[
    ("ar", lang::ar::language),
    ("cs", lang::cs::language),
    ("de", lang::de::language),
    ("en", lang::en::language),
    ("es", lang::es::language),
    ("fr", lang::fr::language),
    ("he", lang::he::language),
    ("hi", lang::hi::language),
    ("id", lang::id::language),
    ("it", lang::it::language),
    ("ja", lang::ja::language),
    ("ko", lang::ko::language),
    ("nl", lang::nl::language),
    ("pl", lang::pl::language),
    ("pt", lang::pt::language),
    ("ru", lang::ru::language),
    ("tr", lang::tr::language),
    ("uk", lang::uk::language),
    ("zh", lang::zh::language),
];

static INDEX: LazyLock<FxHashMap<&'static str, (&'static str, Builder)>> = LazyLock::new(|| {
    BUILDERS
        .iter()
        .map(|&(code, builder)| (code, (code, builder)))
        .collect()
});

/// Every registered language code, sorted.
#[must_use]
pub fn supported_languages() -> Vec<&'static str> {
    BUILDERS.iter().map(|&(code, _)| code).collect()
}

fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}

/// Resolve the options to a fully built [`Language`].
pub fn resolve(options: &ConversionOptions) -> Result<Language, Error> {
    let mut requested = options.lang.to_ascii_lowercase();
    if let Some(region) = &options.region {
        requested = format!("{requested}-{}", region.to_ascii_lowercase());
    }

    let entry = INDEX
        .get(requested.as_str())
        .or_else(|| INDEX.get(primary_subtag(&requested)))
        .ok_or_else(|| Error::UnsupportedLanguage {
            requested: options.lang.clone(),
            supported: supported_languages(),
        })?;
    let (code, builder) = *entry;

    if options.ordinal {
        return Err(Error::UnsupportedOption {
            lang: code,
            option: "ordinal",
        });
    }

    debug!(lang = code, "resolved language");
    builder(options)
}
