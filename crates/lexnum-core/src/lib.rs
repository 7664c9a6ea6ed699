#![forbid(unsafe_code)]

//! Core machinery for turning numbers into cardinal words.
//!
//! This crate carries no vocabulary of its own. It provides the pieces a
//! locale is assembled from:
//!
//! - [`normalize::Decimal`]: validated, sign-split input.
//! - [`convert::Language`]: assembly of negative word, integer words,
//!   decimal separator, and fraction words into one output string.
//! - Six engines in five families behind the [`convert::IntegerWords`] trait:
//!   [`cards::CardsEngine`], [`segments::MyriadEngine`],
//!   [`segments::TriadEngine`], [`southasian::SouthAsianEngine`],
//!   [`slavic::SlavicEngine`], and [`semitic::SemiticEngine`].
//!
//! Locale crates supply immutable tables and strategy functions; the engines
//! supply the decomposition arithmetic.

pub mod cards;
pub mod convert;
pub mod error;
pub mod normalize;
pub mod plural;
pub mod segments;
pub mod semitic;
pub mod slavic;
pub mod southasian;

pub use convert::{DecimalMode, IntegerWords, Language, SeparatorRule};
pub use error::Error;
pub use normalize::Decimal;
pub use plural::{Gender, PluralIndex, PluralRule, ScaleForms};
