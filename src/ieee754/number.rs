/*
    Constructors and accessors for `Float<E, N>`
*/

use num_bigint::BigUint;

use crate::decimal::Decimal;
use crate::Number;

use super::*;

macro_rules! assert_valid_format {
    ($E:expr, $N:expr) => {
        assert!(
            (2 <= $E) && ($E <= 60),
            "invalid exponent width, must be 2 <= E <= 60: {}",
            $E
        );
        assert!(
            (2 <= ($N - $E)),
            "invalid total width, must be 2 + E <= N: {}",
            $N
        );
    };
}

// Format parameters
impl<const E: usize, const N: usize> Float<E, N> {
    /// Total bitwidth of the encoding.
    pub const N: usize = N;

    /// Bitwidth of the exponent field.
    pub const E: usize = E;

    /// Radix, in this case, 2.
    pub const B: usize = 2;

    /// Precision: the number of binary digits in the significand
    /// when it is expressed as an integer, counting the implicit bit.
    pub const PREC: usize = N - E;

    /// Bitwidth of the mantissa field.
    /// This is just `Self::PREC - 1`.
    pub const M: usize = Self::PREC - 1;

    /// Largest exponent of any finite value in this format,
    /// for values written `(-1)^s b^e m` with `m` a fraction
    /// between 1 and 2.
    pub const EMAX: i64 = i64::pow(2, (E - 1) as u32) - 1;

    /// Exponent of the smallest normal value in this format,
    /// for values written `(-1)^s b^e m` with `m` a fraction
    /// between 1 and 2. This is just `1 - Self::EMAX`.
    pub const EMIN: i64 = 1 - Self::EMAX;

    /// Largest exponent of any finite value in this format,
    /// for values written `(-1)^s b^e c` with `c` an integer.
    /// This is just `Self::EMAX - Self::M`.
    pub const EXPMAX: i64 = Self::EMAX - Self::M as i64;

    /// Exponent of the smallest normal value in this format,
    /// for values written `(-1)^s b^e c` with `c` an integer.
    /// This is just `Self::EMIN - Self::M`.
    pub const EXPMIN: i64 = Self::EMIN - Self::M as i64;

    /// Bitwidth of the NaN payload.
    /// This is just `Self::M - 1`.
    pub const NAN_PAYLOAD_SIZE: usize = Self::M - 1;

    /// The exponent field bias.
    /// This is just `Self::EMAX`.
    pub const BIAS: i64 = Self::EMAX;
}

// Constructors and getters
impl<const E: usize, const N: usize> Float<E, N> {
    /// Creates a new `Float` with `E` exponent bits and `N` total bits.
    /// Initializes the `Float` to +0.
    pub fn new() -> Self {
        assert_valid_format!(E, N);
        Self {
            num: FloatNum::Zero(false),
            flags: Exceptions::default(),
        }
    }

    /// Returns a zero with a particular sign
    /// using the same width parameters as this `Float`.
    pub fn zero(sign: bool) -> Self {
        Self {
            num: FloatNum::Zero(sign),
            flags: Exceptions::default(),
        }
    }

    /// Returns an infinity with a particular sign
    /// using the same width parameters as this `Float`.
    pub fn infinity(sign: bool) -> Self {
        Self {
            num: FloatNum::Infinity(sign),
            flags: Exceptions::default(),
        }
    }

    /// Returns a NaN value based on the specified sign, signaling status
    /// and payload using the same width parameters as this `Float`.
    pub fn nan(sign: bool, signaling: bool, payload: impl Into<BitVec>) -> Self {
        let bv = payload.into();
        assert_eq!(
            bv.len(),
            Self::NAN_PAYLOAD_SIZE,
            "expected a payload size of {}, received {}",
            Self::NAN_PAYLOAD_SIZE,
            bv.len()
        );
        Self {
            num: FloatNum::Nan(sign, signaling, bv),
            flags: Exceptions::default(),
        }
    }

    /// Returns the sign of this `Float`.
    pub fn sign(&self) -> bool {
        match self.num {
            FloatNum::Zero(s) => s,
            FloatNum::Subnormal(s, _) => s,
            FloatNum::Normal(s, _, _) => s,
            FloatNum::Infinity(s) => s,
            FloatNum::Nan(s, _, _) => s,
        }
    }

    /// Returns the exponent of this `Float` when the significand
    /// is viewed as an integer. The result is wrapped in an option
    /// since only non-zero finite numbers have a meaningful exponent.
    pub fn exponent(&self) -> Option<i64> {
        match self.num {
            FloatNum::Subnormal(_, _) => Some(Self::EXPMIN),
            FloatNum::Normal(_, exp, _) => Some(exp),
            _ => None,
        }
    }

    /// Returns the (integer) significand of this `Float` as a `BitVec`.
    /// The result is wrapped in an option since only non-zero finite
    /// numbers have a meaningful significand.
    pub fn significand(&self) -> Option<BitVec> {
        match &self.num {
            FloatNum::Subnormal(_, c) => Some(c.clone()),
            FloatNum::Normal(_, _, c) => Some(c.clone()),
            _ => None,
        }
    }

    /// Returns true if this `Float` encodes a zero.
    pub fn is_zero(&self) -> bool {
        matches!(self.num, FloatNum::Zero(_))
    }

    /// Returns true if this `Float` encodes a subnormal number.
    pub fn is_subnormal(&self) -> bool {
        matches!(self.num, FloatNum::Subnormal(_, _))
    }

    /// Returns true if this `Float` encodes a normal number.
    pub fn is_normal(&self) -> bool {
        matches!(self.num, FloatNum::Normal(_, _, _))
    }

    /// Returns true if this `Float` encodes a finite number.
    pub fn is_finite(&self) -> bool {
        matches!(
            self.num,
            FloatNum::Zero(_) | FloatNum::Subnormal(_, _) | FloatNum::Normal(_, _, _)
        )
    }

    /// Returns true if this `Float` encodes an infinity.
    pub fn is_infinity(&self) -> bool {
        matches!(self.num, FloatNum::Infinity(_))
    }

    /// Returns true if this `Float` encodes a NaN.
    pub fn is_nan(&self) -> bool {
        matches!(self.num, FloatNum::Nan(_, _, _))
    }

    /// Returns true if this `Float` encodes a signaling NaN.
    /// The result is wrapped in an option since only NaNs can be signaling.
    pub fn is_signaling_nan(&self) -> Option<bool> {
        match self.num {
            FloatNum::Nan(_, signal, _) => Some(signal),
            _ => None,
        }
    }

    /// Returns the NaN payload of this `Float` as a `BitVec`.
    /// The result is wrapped in an option since only a NaN has a payload.
    pub fn nan_payload(&self) -> Option<BitVec> {
        match &self.num {
            FloatNum::Nan(_, _, payload) => Some(payload.clone()),
            _ => None,
        }
    }

    // Splits a finite float into its sign, integer-significand exponent,
    // and significand value. Zero is `0 * 2^0`.
    // Panics on infinities and NaN.
    pub(crate) fn finite_parts(&self) -> (bool, i64, BigUint) {
        match &self.num {
            FloatNum::Zero(s) => (*s, 0, BigUint::default()),
            FloatNum::Subnormal(s, c) => (*s, Self::EXPMIN, bitvec_to_biguint(c)),
            FloatNum::Normal(s, exp, c) => (*s, *exp, bitvec_to_biguint(c)),
            _ => panic!("called on a non-finite float"),
        }
    }

    /// Returns the state of all flags raised by the
    /// operation that produced this `Float`.
    pub fn flags(&self) -> Exceptions {
        self.flags
    }

    /// Returns true if the `invalid` flag was raised by the
    /// operation that produced this `Float`.
    pub fn invalid_flag(&self) -> bool {
        self.flags.invalid
    }

    /// Returns true if the `overflow` flag was raised by the
    /// operation that produced this `Float`.
    pub fn overflow_flag(&self) -> bool {
        self.flags.overflow
    }

    /// Returns true if the `underflow` flag was raised by the
    /// operation that produced this `Float`.
    pub fn underflow_flag(&self) -> bool {
        self.flags.underflow
    }

    /// Returns true if the `inexact` flag was raised by the
    /// operation that produced this `Float`.
    pub fn inexact_flag(&self) -> bool {
        self.flags.inexact
    }

    /// Returns true if the `carry` flag was raised by the
    /// operation that produced this `Float`.
    pub fn carry_flag(&self) -> bool {
        self.flags.carry
    }
}

// Implementing `Default` for `Float`
impl<const E: usize, const N: usize> Default for Float<E, N> {
    fn default() -> Self {
        Self::new()
    }
}

// Implementing `Number` for `Float`
impl<const E: usize, const N: usize> Number for Float<E, N> {
    fn radix() -> usize {
        Self::B
    }

    fn sign(&self) -> bool {
        Self::sign(self)
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(self)
    }

    fn is_finite(&self) -> bool {
        Self::is_finite(self)
    }

    fn is_infinity(&self) -> bool {
        Self::is_infinity(self)
    }

    fn is_nan(&self) -> bool {
        Self::is_nan(self)
    }

    fn to_decimal(&self) -> Option<Decimal> {
        Self::to_decimal(self)
    }
}
