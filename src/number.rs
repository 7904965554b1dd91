/*
    Defines a number
*/

use crate::decimal::Decimal;

/// The number type.
///
/// The central type of this library.
/// A `Number` encodes a value in some positional numeral system,
/// say a binary float from IEEE 754 or an exact decimal.
/// This is just a bare-bones classification surface.
pub trait Number: Clone + Default {
    /// Returns the radix of this `Number`.
    fn radix() -> usize;

    /// Returns the sign of this `Number`.
    fn sign(&self) -> bool;

    /// Returns true if this `Number` encodes a zero.
    fn is_zero(&self) -> bool;

    /// Returns true if this `Number` encodes a finite number.
    fn is_finite(&self) -> bool;

    /// Returns true if this `Number` encodes an infinity.
    fn is_infinity(&self) -> bool;

    /// Returns true if this `Number` does not encode a number.
    fn is_nan(&self) -> bool;

    /// Returns the exact decimal value of this `Number`.
    ///
    /// Every finite value here is a rational with a terminating decimal
    /// expansion, so the result is `None` exactly for infinities and NaN.
    fn to_decimal(&self) -> Option<Decimal>;
}
