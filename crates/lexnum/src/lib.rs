#![forbid(unsafe_code)]

//! Numbers to cardinal words across many languages.
//!
//! ```
//! use lexnum::{convert, to_words, ConversionOptions};
//!
//! assert_eq!(to_words(21, "en").unwrap(), "twenty-one");
//! assert_eq!(to_words(-3.05, "en").unwrap(), "minus three point zero five");
//! assert_eq!(to_words(1000, "ru").unwrap(), "одна тысяча");
//!
//! let options = ConversionOptions::new("zh");
//! assert_eq!(convert(10500, &options).unwrap(), "一万零五百");
//! ```
//!
//! Input can be any machine integer, a float, a [`num_bigint::BigInt`], or
//! a numeral string; strings are the lossless path for decimals. Each
//! locale lives in [`lang`] as immutable tables plus strategy functions
//! over one of the `lexnum-core` engines.

pub mod input;
pub mod lang;
pub mod options;
pub mod registry;

pub use input::Numeric;
pub use lexnum_core::plural::Gender;
pub use lexnum_core::{Decimal, Error};
pub use options::{ConversionOptions, Script};
pub use registry::supported_languages;

/// Convert a number into words under the given options.
pub fn convert(value: impl Into<Numeric>, options: &ConversionOptions) -> Result<String, Error> {
    let number = value.into().normalize()?;
    let language = registry::resolve(options)?;
    language.convert(&number)
}

/// Convert with the locale's default options.
pub fn to_words(value: impl Into<Numeric>, lang: &str) -> Result<String, Error> {
    convert(value, &ConversionOptions::new(lang))
}
