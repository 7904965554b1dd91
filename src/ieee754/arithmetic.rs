/*
    Arithmetic
*/

use num_bigint::{BigInt, Sign};
use num_traits::Zero;

use crate::{Round, RoundingMode};

use super::*;

macro_rules! bitvec {
    [ $($t:tt)* ] => {
        {
            bitvec::bitvec![u32, Lsb0; $($t)*]
        }
    };
}

impl<const E: usize, const N: usize> Float<E, N> {
    /// Adds this number to another floating-point number, possibly of
    /// a different format, rounding into a third format. The sum is
    /// computed exactly and rounded exactly once with the mode `rm`.
    pub fn add<const E2: usize, const N2: usize, const E3: usize, const N3: usize>(
        &self,
        other: &Float<E2, N2>,
        rm: RoundingMode,
    ) -> Float<E3, N3> {
        // NaN propagation: the result is a quiet NaN carrying the
        // payload of the first NaN operand; a signaling operand
        // raises `invalid`
        if self.is_nan() || other.is_nan() {
            let signaling = self.is_signaling_nan().unwrap_or(false)
                || other.is_signaling_nan().unwrap_or(false);
            let mut result: Float<E3, N3> = if self.is_nan() {
                self.round(rm)
            } else {
                other.round(rm)
            };
            if let FloatNum::Nan(_, signal, _) = &mut result.num {
                *signal = false;
            }
            result.flags = Exceptions::default().with_invalid(signaling);
            return result;
        }

        // infinities: like signs propagate, opposite signs have no
        // useful sum
        if self.is_infinity() && other.is_infinity() {
            if self.sign() != other.sign() {
                let payload = bitvec![0; Float::<E3, N3>::NAN_PAYLOAD_SIZE];
                let mut result = Float::<E3, N3>::nan(true, false, payload);
                result.flags = Exceptions::default().with_invalid(true);
                return result;
            }
            return Float::<E3, N3>::infinity(self.sign());
        }
        if self.is_infinity() {
            return Float::<E3, N3>::infinity(self.sign());
        }
        if other.is_infinity() {
            return Float::<E3, N3>::infinity(other.sign());
        }

        // both operands are finite:
        // align the integer significands at the smaller exponent,
        // sum exactly, then round once
        let (s1, exp1, c1) = self.finite_parts();
        let (s2, exp2, c2) = other.finite_parts();
        let exp = exp1.min(exp2);
        let c1 = c1 << (exp1 - exp) as usize;
        let c2 = c2 << (exp2 - exp) as usize;
        let m1 = BigInt::from_biguint(if s1 { Sign::Minus } else { Sign::Plus }, c1);
        let m2 = BigInt::from_biguint(if s2 { Sign::Minus } else { Sign::Plus }, c2);
        let sum = m1 + m2;

        if sum.is_zero() {
            // exact cancellation: the sign depends on the rounding mode,
            // except when both operands share a sign
            let s = if s1 == s2 {
                s1
            } else {
                rm == RoundingMode::ToNegative
            };
            return Float::<E3, N3>::zero(s);
        }

        let s = sum.sign() == Sign::Minus;
        let c = sum.magnitude();
        let width = c.bits() as usize;
        Float::<E3, N3>::round_finite(s, exp, biguint_to_bitvec(c.clone(), width), rm)
    }
}
