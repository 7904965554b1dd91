/*
    Traits relevant to rounding
*/

/// Rounding modes from the IEEE 754 standard.
///
/// For any computer number system, most mathematical operators
/// can be decomposed into two operations:
///  - a real number operation: `R^n -> R`, and
///  - a rounding operation: `R -> R`.
/// A `RoundingMode` selects the second operation, the "fit-to-representation"
/// applied to an exact real number output.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round to the nearest representable value,
    /// breaking ties towards the value with an even mantissa.
    #[default]
    NearestEven,
    /// Round to the nearest representable value,
    /// breaking ties away from zero.
    NearestAway,
    /// Round towards positive infinity.
    ToPositive,
    /// Round towards negative infinity.
    ToNegative,
    /// Round towards zero.
    ToZero,
    /// Round away from zero.
    AwayZero,
}

/// Sign-resolved rounding behavior.
///
/// Directed modes depend on the sign of the value being rounded;
/// a `RoundingDirection` is what remains once the sign is known.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundingDirection {
    /// Round towards zero (truncate).
    ToZero,
    /// Round away from zero.
    AwayZero,
    /// Round to the value with an even mantissa.
    ToEven,
}

impl RoundingMode {
    /// Translates a `RoundingMode` and sign bit to a `RoundingDirection`
    /// and a boolean indicating if the direction only specifies
    /// tie-breaking behavior.
    pub fn direction(&self, sign: bool) -> (bool, RoundingDirection) {
        match (self, sign) {
            (RoundingMode::NearestEven, _) => (true, RoundingDirection::ToEven),
            (RoundingMode::NearestAway, _) => (true, RoundingDirection::AwayZero),
            (RoundingMode::ToPositive, false) => (false, RoundingDirection::AwayZero),
            (RoundingMode::ToPositive, true) => (false, RoundingDirection::ToZero),
            (RoundingMode::ToNegative, false) => (false, RoundingDirection::ToZero),
            (RoundingMode::ToNegative, true) => (false, RoundingDirection::AwayZero),
            (RoundingMode::ToZero, _) => (false, RoundingDirection::ToZero),
            (RoundingMode::AwayZero, _) => (false, RoundingDirection::AwayZero),
        }
    }
}

/// Result of a rounding operation that tracks exactness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundResult<T> {
    /// The result encodes the input exactly.
    Exact(T),
    /// Rounding changed the value.
    Inexact(T),
}

impl<T> RoundResult<T> {
    /// Extracts the rounded value.
    pub fn value(self) -> T {
        match self {
            RoundResult::Exact(v) => v,
            RoundResult::Inexact(v) => v,
        }
    }

    /// Returns true if the result encodes the input exactly.
    pub fn is_exact(&self) -> bool {
        matches!(self, RoundResult::Exact(_))
    }
}

/// A rounding operation into the representation `T`.
/// The output type may differ from the input type.
pub trait Round<T> {
    /// Performs a rounding operation returning the result.
    fn round(&self, rm: RoundingMode) -> T;

    /// Performs a rounding operation, recording whether the
    /// result still encodes the input exactly.
    fn round_exact(&self, rm: RoundingMode) -> RoundResult<T>;
}
