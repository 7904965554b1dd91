/*
    Rounding
*/

use std::cmp::Ordering;
use std::ops::AddAssign;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::decimal::Decimal;
use crate::{Round, RoundResult, RoundingDirection, RoundingMode};

use super::*;

macro_rules! bitvec {
    [ $($t:tt)* ] => {
        {
            bitvec::bitvec![u32, Lsb0; $($t)*]
        }
    };
}

// Rounding utilities
impl<const E: usize, const N: usize> Float<E, N> {
    // Rounds a finite number into this representation using the rounding
    // mode `rm`. The value is `(-1)^s c 2^exp` where `c` may have any
    // width, with no information beyond it.
    pub(crate) fn round_finite(s: bool, mut exp: i64, mut c: BitVec, rm: RoundingMode) -> Self {
        if c.not_any() {
            // The exceptional case: exact zero
            // Return zero, no exception flags are raised
            return Self::zero(s);
        }

        // Drop leading zeros
        let lz = c.last_one().unwrap() + 1;
        if lz < c.len() {
            c.truncate(lz);
        }
        let prec = c.len();

        // We will construct the new mantissa with three rounding bits.
        // Then we'll call the (rounding) finalizer to complete the
        // rounding process and raise the correct exception flags.
        let mut c_new = bitvec![0; Self::PREC];
        let mut half_bit = false;
        let mut quarter_bit = false;
        let mut sticky_bit = false;

        // Branch on mantissa size comparison
        match Self::PREC.cmp(&prec) {
            Ordering::Equal => {
                // The current mantissa is the new mantissa
                //  - `half_bit`, `quarter_bit`, `sticky_bit` are zero
                //  - preserve the mantissa and exponent
                c_new = c;
            }
            Ordering::Greater => {
                // The current mantissa will fit entirely in the new mantissa:
                //  - insert most significant bits, then fill with zeros
                //  - `half_bit`, `quarter_bit`, `sticky_bit` are zero
                //  - adjust `exp` accordingly
                let diff = Self::PREC - prec;
                for (i, b) in c.iter().enumerate() {
                    c_new.set(i + diff, *b);
                }
                exp -= diff as i64;
            }
            Ordering::Less => {
                // Truncation will occur:
                //  - preserve the highest `Self::PREC` bits
                //  - the next two bits are the `half_bit` and `quarter_bit`
                //  - if any of the remaining bits are high, set `sticky_bit` to 1
                //  - adjust `exp` accordingly
                let diff = prec - Self::PREC;
                if diff == 1 {
                    // optimized case:
                    //  - half bit is c[0]
                    //  - `quarter_bit` and `sticky_bit` are zero
                    c_new = c[1..prec].to_bitvec();
                    half_bit = c[0];
                } else if diff == 2 {
                    // optimized case:
                    //  - half bit is c[1]
                    //  - quarter bit is c[0]
                    //  - `sticky_bit` is zero
                    c_new = c[2..prec].to_bitvec();
                    half_bit = c[1];
                    quarter_bit = c[0];
                } else {
                    // hard case:
                    //  - actually split the mantissa
                    //  - the high part is the new mantissa
                    //  - half bit is the MSB of the low part
                    //  - quarter bit is the next bit of the low part
                    //  - sticky bit is OR of the rest of the low part
                    let (low, high) = c.split_at(diff);
                    let low_len = low.len();
                    c_new = high.to_bitvec();
                    half_bit = low[low_len - 1];
                    quarter_bit = low[low_len - 2];
                    sticky_bit = low[..low_len - 2].any();
                }
                exp += diff as i64;
            }
        }

        // values far below the subnormal range shift out entirely
        if exp < Self::EXPMIN - (Self::PREC as i64 + 2) {
            let lost = shift_left_accum(&mut c_new, Self::PREC);
            sticky_bit |= half_bit | quarter_bit | lost;
            half_bit = false;
            quarter_bit = false;
            exp = Self::EXPMIN;
        }

        // adjust if the exponent is too small
        while exp < Self::EXPMIN {
            sticky_bit |= quarter_bit;
            quarter_bit = half_bit;
            half_bit = c_new[0];
            c_new.shift_left(1);
            exp += 1;
        }

        // finish the rounding process with all the rounding information
        Self::round_finalize(s, exp, c_new, half_bit, quarter_bit, sticky_bit, rm)
    }

    // Returns true if the rounding information implies the mantissa,
    // as viewed as an integer, should be incremented by 1. Unlike
    // `round_finalize` we only need the `half_bit` and a sticky bit.
    fn round_requires_increment(
        sign: bool,
        lsb: bool,
        half_bit: bool,
        sticky_bit: bool,
        rm: RoundingMode,
    ) -> bool {
        match rm.direction(sign) {
            (true, RoundingDirection::ToEven) => {
                // no half bit => truncate
                // half bit and sticky bit => increment
                // tie => increment if lsb since we want it to be 0
                half_bit && (sticky_bit || lsb)
            }
            (true, RoundingDirection::AwayZero) => {
                // no half bit => truncate
                // half bit => increment (tie requires increment)
                half_bit
            }
            (true, RoundingDirection::ToZero) => {
                // (unused)
                // tie => truncate
                half_bit && sticky_bit
            }
            (false, RoundingDirection::AwayZero) => {
                // increment if not exact
                half_bit || sticky_bit
            }
            (false, RoundingDirection::ToZero) => {
                // always truncate
                false
            }
            (false, RoundingDirection::ToEven) => {
                // (unused)
                // LSB of the mantissa needs to be 0
                lsb
            }
        }
    }

    // Assuming overflow has occurred, return true if
    // the result should be rounded to +/- infinity
    // (rather than +/- MAX_FLOAT).
    fn overflow_to_infinity(sign: bool, rm: RoundingMode) -> bool {
        match rm.direction(sign) {
            // nearest carries all overflows to infinity
            (true, _) => true,
            (_, RoundingDirection::AwayZero) => true,
            // carry all overflows to MAX_FLOAT
            (_, RoundingDirection::ToZero) => false,
            // MAX_FLOAT has an odd lsb
            (_, RoundingDirection::ToEven) => true,
        }
    }

    // Constructs a new `Float` based on rounding information.
    // Requires a sign, exponent, mantissa, and the three rounding bits.
    // The inputs must encode a non-zero, finite number.
    fn round_finalize(
        s: bool,
        mut exp: i64,
        mut c: BitVec,
        half_bit: bool,
        quarter_bit: bool,
        sticky_bit: bool,
        rm: RoundingMode,
    ) -> Self {
        // First, we check if we need to round away from zero.
        // We use the sign, rounding mode, LSB of the mantissa, and the rounding bits.
        let qs_bit = quarter_bit || sticky_bit;
        let increment = Self::round_requires_increment(s, c[0], half_bit, qs_bit, rm);
        if increment {
            // increment the mantissa
            // possibly need to adjust the exponent
            let mut i = bitvec_to_biguint(&c);
            i.add_assign(1_u8);
            let c_ext = biguint_to_bitvec(i, Self::PREC + 1);
            let carry = c_ext[Self::PREC];

            c = c_ext[0..Self::PREC].to_bitvec();
            if carry {
                c.set(Self::PREC - 1, true);
                exp += 1;
            }
        }

        // Next, we check if overflow occurred and alter the result if it has.
        if exp > Self::EXPMAX {
            // overflow has occurred
            // need to check which way we round
            if Self::overflow_to_infinity(s, rm) {
                return Self {
                    num: FloatNum::Infinity(s),
                    flags: Exceptions {
                        invalid: false,
                        overflow: true,
                        underflow: false,
                        inexact: true,
                        carry: increment,
                    },
                };
            } else {
                return Self {
                    num: FloatNum::Normal(s, Self::EXPMAX, bitvec![1; Self::PREC]),
                    flags: Exceptions {
                        invalid: false,
                        overflow: true,
                        underflow: false,
                        inexact: true,
                        carry: increment,
                    },
                };
            }
        }

        // Next, we check if the result is tiny. Tininess is detected after
        // rounding: the result must lie strictly under the smallest normal,
        // judging by what rounding with an unbounded exponent range would
        // have produced.
        let tiny = if c[Self::M] {
            // normal result; only an increment onto MIN_NORM needs care,
            // since with an unbounded exponent range the quantum below
            // MIN_NORM halves and the result may land under it
            exp == Self::EXPMIN
                && increment
                && c[..Self::M].not_any()
                && match rm.direction(s) {
                    // the tie one half-quantum under MIN_NORM resolves to
                    // MIN_NORM itself, so only the lower half of the last
                    // gap stays tiny
                    (true, _) => !quarter_bit,
                    (_, RoundingDirection::AwayZero) => !(half_bit && qs_bit),
                    // never increments
                    (_, RoundingDirection::ToZero) => panic!("unreachable"),
                    // (unused)
                    (_, RoundingDirection::ToEven) => false,
                }
        } else {
            // subnormal or zero result
            true
        };

        // The inexact flag is just if any of the rounding bits are high
        let inexact = half_bit || quarter_bit || sticky_bit;

        // Some sanity checking
        assert_eq!(
            c.len(),
            Self::PREC,
            "unexpected mantissa width after rounding: {}, expected {}",
            c.len(),
            Self::PREC
        );
        assert!(
            (exp >= Self::EXPMIN) && (exp <= Self::EXPMAX),
            "unexpected exponent after rounding: {} [{}, {}]",
            exp,
            Self::EXPMIN,
            Self::EXPMAX
        );

        // construct the number
        let num = if c.not_any() {
            FloatNum::Zero(s)
        } else if c[Self::M] {
            FloatNum::Normal(s, exp, c)
        } else {
            FloatNum::Subnormal(s, c)
        };

        // set the exception flags
        let flags = Exceptions {
            invalid: false,
            overflow: false,
            underflow: tiny && inexact,
            inexact,
            carry: increment,
        };

        Self { num, flags }
    }
}

// Implementing `Round<Float<E2, N2>>` for `Float<E, N>`
impl<const E: usize, const N: usize, const E2: usize, const N2: usize> Round<Float<E2, N2>>
    for Float<E, N>
{
    fn round(&self, rm: RoundingMode) -> Float<E2, N2> {
        match &self.num {
            FloatNum::Zero(s) => Float::zero(*s),
            FloatNum::Subnormal(s, c) => {
                Float::<E2, N2>::round_finite(*s, Self::EXPMIN, c.clone(), rm)
            }
            FloatNum::Normal(s, exp, c) => Float::<E2, N2>::round_finite(*s, *exp, c.clone(), rm),
            FloatNum::Infinity(s) => Float::<E2, N2>::infinity(*s),
            FloatNum::Nan(s, signal, payload) => {
                let payload = if Self::NAN_PAYLOAD_SIZE < Float::<E2, N2>::NAN_PAYLOAD_SIZE {
                    // expand the payload with zeros
                    // payload is put in the most significant bits
                    let diff = Float::<E2, N2>::NAN_PAYLOAD_SIZE - Self::NAN_PAYLOAD_SIZE;
                    let mut p = BitVec::repeat(false, Float::<E2, N2>::NAN_PAYLOAD_SIZE);
                    for (i, b) in payload.iter().enumerate() {
                        p.set(diff + i, *b);
                    }
                    p
                } else {
                    // truncate the payload
                    // only keep the most significant bits
                    let size = Float::<E2, N2>::NAN_PAYLOAD_SIZE;
                    let diff = Self::NAN_PAYLOAD_SIZE - size;
                    let mut p = BitVec::repeat(false, size);
                    for i in 0..size {
                        p.set(i, payload[i + diff]);
                    }
                    p
                };
                Float::<E2, N2>::nan(*s, *signal, payload)
            }
        }
    }

    fn round_exact(&self, rm: RoundingMode) -> RoundResult<Float<E2, N2>> {
        let v: Float<E2, N2> = self.round(rm);
        if v.inexact_flag() {
            RoundResult::Inexact(v)
        } else {
            RoundResult::Exact(v)
        }
    }
}

// Correctly rounded decimal-to-float conversion
impl<const E: usize, const N: usize> Float<E, N> {
    // Rounds the exact value `(-1)^s u 10^-k` into this representation.
    // The quotient by `5^k` is taken to `PREC + 2` bits with the remainder
    // folded into a trailing sticky bit, which decides every mode.
    fn round_decimal(value: &Decimal, rm: RoundingMode) -> Self {
        if value.is_zero() {
            return Self::zero(false);
        }

        let s = value.sign();
        let u = value.unscaled().magnitude();
        let k = value.scale();
        if k == 0 {
            // already an integer
            let width = u.bits() as usize;
            return Self::round_finite(s, 0, biguint_to_bitvec(u.clone(), width), rm);
        }

        // `u 10^-k = u / (5^k 2^k)`: divide by `5^k` at a scale wide
        // enough to leave at least `PREC + 2` quotient bits
        let den = BigUint::from(5_u8).pow(k as u32);
        let shift = (Self::PREC as i64 + 2) + den.bits() as i64 - u.bits() as i64;
        let (num, den) = if shift >= 0 {
            (u << (shift as usize), den)
        } else {
            (u.clone(), den << ((-shift) as usize))
        };
        let (q, r) = num.div_rem(&den);

        // attach the sticky bit below the quotient
        let ext = (q << 1_u8) + u8::from(!r.is_zero());
        let width = ext.bits() as usize;
        let exp = -shift - k as i64 - 1;
        Self::round_finite(s, exp, biguint_to_bitvec(ext, width), rm)
    }
}

// Implementing `Round<Float<E, N>>` for `Decimal`
impl<const E: usize, const N: usize> Round<Float<E, N>> for Decimal {
    fn round(&self, rm: RoundingMode) -> Float<E, N> {
        Float::round_decimal(self, rm)
    }

    fn round_exact(&self, rm: RoundingMode) -> RoundResult<Float<E, N>> {
        let v: Float<E, N> = self.round(rm);
        if v.inexact_flag() {
            RoundResult::Inexact(v)
        } else {
            RoundResult::Exact(v)
        }
    }
}
