/*
    Parsing and printing decimals
*/

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use thiserror::Error;

use super::Decimal;

/// Error for a string that does not encode a decimal number.
///
/// Accepted literals are an optional `+` or `-` sign, decimal digits,
/// and at most one decimal point, with digits on at least one side of
/// the point. No whitespace, no exponent notation, no infinity or NaN
/// spellings.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidDecimalLiteral {
    /// The literal was the empty string.
    #[error("empty decimal literal")]
    Empty,
    /// The literal contains no digits at all.
    #[error("decimal literal has no digits")]
    NoDigits,
    /// The literal contains a character outside the grammar.
    #[error("unexpected character {0:?} in decimal literal")]
    UnexpectedChar(char),
    /// The literal contains more than one decimal point.
    #[error("more than one decimal point in literal")]
    MultiplePoints,
}

impl FromStr for Decimal {
    type Err = InvalidDecimalLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidDecimalLiteral::Empty);
        }

        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        // Single pass: accumulate digits into the coefficient and
        // count the digits after the point.
        let mut unscaled = BigInt::zero();
        let mut digits = 0_usize;
        let mut frac: Option<usize> = None;
        for ch in rest.chars() {
            match ch {
                '0'..='9' => {
                    unscaled = unscaled * 10 + (ch as u32 - '0' as u32);
                    digits += 1;
                    if let Some(count) = frac.as_mut() {
                        *count += 1;
                    }
                }
                '.' if frac.is_none() => frac = Some(0),
                '.' => return Err(InvalidDecimalLiteral::MultiplePoints),
                _ => return Err(InvalidDecimalLiteral::UnexpectedChar(ch)),
            }
        }
        if digits == 0 {
            return Err(InvalidDecimalLiteral::NoDigits);
        }

        if negative {
            unscaled = -unscaled;
        }
        Ok(Decimal::new(unscaled, frac.unwrap_or(0)))
    }
}

// Canonical plain-decimal text: no exponent form, no trailing
// fractional zeros. Round-trips through `FromStr`.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.unscaled);
        }

        let sign = if self.unscaled.is_negative() { "-" } else { "" };
        let digits = self.unscaled.magnitude().to_string();
        if digits.len() > self.scale {
            let (int, frac) = digits.split_at(digits.len() - self.scale);
            write!(f, "{}{}.{}", sign, int, frac)
        } else {
            let zeros = self.scale - digits.len();
            write!(f, "{}0.{}{}", sign, "0".repeat(zeros), digits)
        }
    }
}
