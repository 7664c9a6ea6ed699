//! Conversion options.
//!
//! [`ConversionOptions`] is a consuming builder: start from
//! [`ConversionOptions::new`] with a language code, chain what you need.
//! Options are a superset across locales; a locale that cannot honor a
//! requested option reports [`lexnum_core::Error::UnsupportedOption`]
//! instead of silently ignoring it where the result would differ.

use lexnum_core::plural::Gender;

/// Writing system to emit, for locales that support more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Script {
    /// The locale's own script.
    #[default]
    Native,
    /// Romanization (currently pinyin for `zh`).
    Latin,
}

/// Options controlling one conversion.
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    pub lang: String,
    /// Grammatical gender for the counted noun; `None` takes the locale
    /// default.
    pub gender: Option<Gender>,
    pub script: Script,
    /// Region subtag, joined onto `lang` during lookup (`"pt"` + `"BR"`
    /// resolves like `"pt-BR"`).
    pub region: Option<String>,
    /// Ordinal words. No shipped locale implements these; requesting them
    /// is an error rather than a silent cardinal.
    pub ordinal: bool,
    /// Join tokens with nothing instead of the locale joiner.
    pub drop_spaces: bool,
    /// Replace the locale joiner with a custom one.
    pub space_separator: Option<String>,
}

impl ConversionOptions {
    #[must_use]
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            gender: None,
            script: Script::default(),
            region: None,
            ordinal: false,
            drop_spaces: false,
            space_separator: None,
        }
    }

    #[must_use]
    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    #[must_use]
    pub fn script(mut self, script: Script) -> Self {
        self.script = script;
        self
    }

    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    #[must_use]
    pub fn ordinal(mut self, ordinal: bool) -> Self {
        self.ordinal = ordinal;
        self
    }

    #[must_use]
    pub fn drop_spaces(mut self, drop_spaces: bool) -> Self {
        self.drop_spaces = drop_spaces;
        self
    }

    #[must_use]
    pub fn space_separator(mut self, separator: impl Into<String>) -> Self {
        self.space_separator = Some(separator.into());
        self
    }

    /// The joiner a locale should use, given its own default.
    #[must_use]
    pub(crate) fn joiner_or(&self, default: &str) -> String {
        if self.drop_spaces {
            return String::new();
        }
        match &self.space_separator {
            Some(separator) => separator.clone(),
            None => default.to_string(),
        }
    }
}
