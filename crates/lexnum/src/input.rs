//! Accepted input kinds.
//!
//! [`Numeric`] closes the input domain at the type level: machine integers,
//! floats, arbitrary-precision integers, and numeral strings. Everything
//! funnels into [`lexnum_core::Decimal`] through one normalization step.

use lexnum_core::{Decimal, Error};
use num_bigint::BigInt;

/// A number in any accepted input form.
#[derive(Debug, Clone, PartialEq)]
pub enum Numeric {
    Int(i128),
    Float(f64),
    Big(BigInt),
    Text(String),
}

impl Numeric {
    /// Validate and canonicalize into a [`Decimal`].
    pub fn normalize(&self) -> Result<Decimal, Error> {
        match self {
            Self::Int(value) => Ok(Decimal::from_int(*value)),
            Self::Float(value) => Decimal::from_f64(*value),
            Self::Big(value) => Ok(Decimal::from_bigint(value)),
            Self::Text(value) => Decimal::parse(value),
        }
    }
}

macro_rules! numeric_from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Numeric {
            fn from(value: $ty) -> Self {
                Self::Int(i128::from(value))
            }
        })*
    };
}

numeric_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<f32> for Numeric {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<BigInt> for Numeric {
    fn from(value: BigInt) -> Self {
        Self::Big(value)
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Numeric {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
