/*
    Exact decimal numbers
*/

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::Number;

mod arith;
mod parse;

pub use parse::InvalidDecimalLiteral;

/// An exact base-10 number.
///
/// The encoded value is `unscaled * 10^-scale`. Values are kept in a
/// canonical form: zero is `(0, 0)`, and otherwise the trailing decimal
/// digit of `unscaled` is non-zero whenever `scale` is positive. Under
/// this form, structural equality is value equality.
///
/// Unlike the binary side of this library, a `Decimal` carries no
/// negative zero: the sign lives in `unscaled` and zero has none.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decimal {
    unscaled: BigInt,
    scale: usize,
}

// Constructors and getters
impl Decimal {
    /// Creates the decimal `unscaled * 10^-scale`,
    /// reduced to canonical form.
    pub fn new(unscaled: BigInt, scale: usize) -> Self {
        Self { unscaled, scale }.canonicalize()
    }

    /// Returns a zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns true if this `Decimal` encodes a zero.
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// Returns the sign of this `Decimal`.
    /// Zero is never negative.
    pub fn sign(&self) -> bool {
        self.unscaled.is_negative()
    }

    /// Returns the coefficient of this `Decimal`.
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Returns the number of fractional digits of this `Decimal`.
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Returns the absolute value of this `Decimal`.
    /// Exact, like every operation on `Decimal`.
    pub fn abs(&self) -> Self {
        Self {
            unscaled: self.unscaled.abs(),
            scale: self.scale,
        }
    }

    // Strips factors of 10 shared between the coefficient and the scale.
    fn canonicalize(mut self) -> Self {
        if self.unscaled.is_zero() {
            self.scale = 0;
            return self;
        }
        let ten = BigInt::from(10);
        while self.scale > 0 {
            let (q, r) = self.unscaled.div_rem(&ten);
            if !r.is_zero() {
                break;
            }
            self.unscaled = q;
            self.scale -= 1;
        }
        self
    }
}

impl Number for Decimal {
    fn radix() -> usize {
        10
    }

    fn sign(&self) -> bool {
        Self::sign(self)
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(self)
    }

    fn is_finite(&self) -> bool {
        true
    }

    fn is_infinity(&self) -> bool {
        false
    }

    fn is_nan(&self) -> bool {
        false
    }

    fn to_decimal(&self) -> Option<Decimal> {
        Some(self.clone())
    }
}
