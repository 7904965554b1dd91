/*
    Conversions to and from `Float<E, N>`
*/

use bitvec::field::BitField;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::cast::ToPrimitive;
use num_traits::Zero;

use crate::decimal::Decimal;

use super::*;

macro_rules! bitvec {
    [ $($t:tt)* ] => {
        {
            bitvec::bitvec![u32, Lsb0; $($t)*]
        }
    };
}

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

// Utility
impl<const E: usize, const N: usize> Float<E, N> {
    // Splits a packed floating-point representation into
    // the sign, exponent, and mantissa fields.
    // Assumes `bv` is already `N` bits wide.
    #[inline]
    fn split_packed(bv: &BitVec) -> (bool, BitVec, BitVec) {
        (
            Self::packed_sign(bv),
            Self::packed_exponent(bv),
            Self::packed_mantissa(bv),
        )
    }

    #[inline]
    fn pack_components(s: bool, e: BitVec, m: BitVec) -> BitVec {
        assert_eq!(
            e.len(),
            E,
            "trying to pack a float with exponent width: {}, expected {}",
            e.len(),
            E
        );
        assert_eq!(
            m.len(),
            Self::M,
            "trying to pack a float with mantissa width: {}, expected {}",
            m.len(),
            Self::M
        );

        let mut bv = bitvec![0; N];
        for (i, b) in m.iter().enumerate() {
            bv.set(i, *b);
        }
        for (i, b) in e.iter().enumerate() {
            bv.set(i + Self::M, *b);
        }
        bv.set(N - 1, s);
        bv
    }

    // The sign field of a packed representation.
    #[inline]
    fn packed_sign(bv: &BitVec) -> bool {
        bv[N - 1]
    }

    // The exponent field of a packed representation.
    #[inline]
    fn packed_exponent(bv: &BitVec) -> BitVec {
        bv[(N - E - 1)..(N - 1)].to_bitvec()
    }

    // The mantissa field of a packed representation.
    #[inline]
    fn packed_mantissa(bv: &BitVec) -> BitVec {
        bv[..(N - E - 1)].to_bitvec()
    }
}

// Implementing `From<BitVec>` for `Float`
impl<const E: usize, const N: usize> From<BitVec> for Float<E, N> {
    fn from(bv: BitVec) -> Self {
        assert_valid_format!(E, N);
        assert_eq!(
            bv.len(),
            N,
            "expected a BitVec of length {}, received {}",
            N,
            bv.len()
        );

        // split fields
        let (s, e, mut m) = Self::split_packed(&bv);
        let exp = bitvec_to_biguint(&e).to_i64().unwrap() - Self::BIAS;

        // branch on exponent
        if exp > Self::EMAX {
            if m.not_any() {
                // infinity
                Self::infinity(s)
            } else {
                // NaN; the quiet bit is the top mantissa bit
                Self::nan(s, !m[N - E - 2], m[..N - E - 2].to_bitvec())
            }
        } else if exp < Self::EMIN {
            // subnormal or zero
            if m.not_any() {
                // zero
                Self::zero(s)
            } else {
                // subnormal; the implicit leading bit is 0
                m.push(false);
                assert_eq!(m.len(), Self::PREC);
                Self {
                    num: FloatNum::Subnormal(s, m),
                    flags: Exceptions::default(),
                }
            }
        } else {
            // normal; the implicit leading bit is 1
            m.push(true);
            assert_eq!(m.len(), Self::PREC);
            Self {
                num: FloatNum::Normal(s, exp - Self::M as i64, m),
                flags: Exceptions::default(),
            }
        }
    }
}

// Implementing `From<Float>` for `BitVec`
impl<const E: usize, const N: usize> From<Float<E, N>> for BitVec {
    fn from(f: Float<E, N>) -> Self {
        match f.num {
            FloatNum::Zero(s) => {
                let m = bitvec![0; Float::<E, N>::M];
                let e = bitvec![0; E];
                Float::<E, N>::pack_components(s, e, m)
            }
            FloatNum::Subnormal(s, c) => {
                // remove the leading 0
                let m = c[..Float::<E, N>::M].to_bitvec();
                let e = bitvec![0; E];
                Float::<E, N>::pack_components(s, e, m)
            }
            FloatNum::Normal(s, exp, c) => {
                let mut exponent = exp + Float::<E, N>::BIAS + Float::<E, N>::M as i64;
                // remove the leading 1
                let m = c[..Float::<E, N>::M].to_bitvec();
                let mut e = bitvec![0; E];
                for i in 0..E {
                    e.set(i, (exponent % 2) != 0);
                    exponent >>= 1;
                }
                Float::<E, N>::pack_components(s, e, m)
            }
            FloatNum::Infinity(s) => {
                let m = bitvec![0; Float::<E, N>::M];
                let e = bitvec![1; E];
                Float::<E, N>::pack_components(s, e, m)
            }
            FloatNum::Nan(s, signal, payload) => {
                let mut m = payload;
                let e = bitvec![1; E];
                m.push(!signal); // quiet bit
                if signal && m.not_any() {
                    // a signaling NaN needs a non-zero payload
                    // to stay distinct from infinity
                    m.set(0, true);
                }
                Float::<E, N>::pack_components(s, e, m)
            }
        }
    }
}

// Implementing `From<f64>` for `Float<11, 64>`
impl From<f64> for Float<11, 64> {
    fn from(f: f64) -> Self {
        let mut bv = bitvec![0; 64];
        bv.store(f.to_bits());
        Self::from(bv)
    }
}

// Implementing `From<Float<11, 64>>` for `f64`
impl From<Float<11, 64>> for f64 {
    fn from(f: Float<11, 64>) -> Self {
        let bv: BitVec = f.into();
        f64::from_bits(bv[..64].load())
    }
}

// Implementing `From<f32>` for `Float<8, 32>`
impl From<f32> for Float<8, 32> {
    fn from(f: f32) -> Self {
        let mut bv = bitvec![0; 32];
        bv.store(f.to_bits());
        Self::from(bv)
    }
}

// Implementing `From<Float<8, 32>>` for `f32`
impl From<Float<8, 32>> for f32 {
    fn from(f: Float<8, 32>) -> Self {
        let bv: BitVec = f.into();
        f32::from_bits(bv[..32].load())
    }
}

// Exact decimal expansion
impl<const E: usize, const N: usize> Float<E, N> {
    /// Returns the exact decimal value of this `Float`.
    ///
    /// Every finite float is the dyadic rational `(-1)^s c 2^exp`, and
    /// `2^-k = 5^k 10^-k`, so the expansion always terminates. The result
    /// is `None` for infinities and NaN. The sign of a zero is dropped:
    /// exact decimals have no negative zero.
    pub fn to_decimal(&self) -> Option<Decimal> {
        if !self.is_finite() {
            return None;
        }

        let (s, exp, c) = self.finite_parts();
        if c.is_zero() {
            return Some(Decimal::zero());
        }

        let sign = if s { Sign::Minus } else { Sign::Plus };
        if exp >= 0 {
            let unscaled = BigInt::from_biguint(sign, c << (exp as usize));
            Some(Decimal::new(unscaled, 0))
        } else {
            let scale = (-exp) as usize;
            let unscaled =
                BigInt::from_biguint(sign, c * BigUint::from(5_u8).pow(scale as u32));
            Some(Decimal::new(unscaled, scale))
        }
    }
}
