//! Input validation and canonicalization.
//!
//! All accepted input kinds funnel into [`Decimal`]: a sign flag, an
//! arbitrary-precision integer part, and the fractional digits kept as the
//! literal digit string (leading zeros are significant when verbalizing,
//! `3.05` is not `3.5`).
//!
//! # Invariants
//!
//! 1. `integer` is non-negative; the sign lives only in `negative`.
//! 2. `fraction` is `Some` exactly when the input carried a decimal point
//!    with at least one digit after it, and contains ASCII digits only.
//! 3. Strings are validated strictly: optional leading `-`, digits, at most
//!    one `.`. No exponents, no grouping separators, no whitespace inside.
//!
//! # Failure Modes
//!
//! - [`Error::InvalidFormat`] for malformed strings (`""`, `"-"`, `"1..2"`,
//!   `"1e5"`, `"5."`).
//! - [`Error::NotANumber`] for NaN and infinite floats.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::error::Error;

/// A validated, sign-split number ready for conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal {
    pub negative: bool,
    pub integer: BigUint,
    /// Fractional digits as written, e.g. `"05"` for `3.05`.
    pub fraction: Option<String>,
}

impl Decimal {
    /// Canonicalize a machine integer.
    #[must_use]
    pub fn from_int(value: i128) -> Self {
        Self {
            negative: value < 0,
            integer: BigUint::from(value.unsigned_abs()),
            fraction: None,
        }
    }

    /// Canonicalize an arbitrary-precision integer.
    #[must_use]
    pub fn from_bigint(value: &BigInt) -> Self {
        Self {
            negative: value.sign() == Sign::Minus,
            integer: value.magnitude().clone(),
            fraction: None,
        }
    }

    /// Canonicalize a float by round-tripping through its shortest decimal
    /// representation. `Display` for `f64` never produces an exponent, so
    /// the result is always parseable here.
    pub fn from_f64(value: f64) -> Result<Self, Error> {
        if !value.is_finite() {
            return Err(Error::NotANumber);
        }
        Self::parse(&format!("{value}"))
    }

    /// Parse a numeral string: optional `-`, digits, at most one `.`.
    ///
    /// A leading `.` implies an integer part of zero; a trailing `.` with no
    /// fractional digits is rejected.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidFormat(input.to_string());
        let trimmed = input.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        if body.is_empty() {
            return Err(invalid());
        }

        let (int_digits, frac_digits) = match body.split_once('.') {
            Some((int_part, frac_part)) => {
                if frac_part.is_empty() {
                    return Err(invalid());
                }
                (int_part, Some(frac_part))
            }
            None => (body, None),
        };

        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !int_digits.is_empty() && !all_digits(int_digits) {
            return Err(invalid());
        }
        if int_digits.is_empty() && frac_digits.is_none() {
            return Err(invalid());
        }
        if let Some(frac) = frac_digits
            && !all_digits(frac)
        {
            return Err(invalid());
        }

        let integer = if int_digits.is_empty() {
            BigUint::zero()
        } else {
            int_digits.parse::<BigUint>().map_err(|_| invalid())?
        };

        Ok(Self {
            negative,
            integer,
            fraction: frac_digits.map(str::to_string),
        })
    }
}
