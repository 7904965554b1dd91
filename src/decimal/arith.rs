/*
    Decimal arithmetic
*/

use std::cmp::Ordering;
use std::ops::{Add, Neg, Sub};

use num_bigint::BigInt;

use super::Decimal;

fn pow10(k: usize) -> BigInt {
    BigInt::from(10).pow(k as u32)
}

// Coefficients of both values brought to the larger of the two scales.
fn aligned(a: &Decimal, b: &Decimal) -> (BigInt, BigInt) {
    match a.scale.cmp(&b.scale) {
        Ordering::Equal => (a.unscaled.clone(), b.unscaled.clone()),
        Ordering::Less => (&a.unscaled * pow10(b.scale - a.scale), b.unscaled.clone()),
        Ordering::Greater => (a.unscaled.clone(), &b.unscaled * pow10(a.scale - b.scale)),
    }
}

impl Add for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: &Decimal) -> Decimal {
        let scale = self.scale.max(rhs.scale);
        let (a, b) = aligned(self, rhs);
        Decimal::new(a + b, scale)
    }
}

impl Add for Decimal {
    type Output = Decimal;

    fn add(self, rhs: Decimal) -> Decimal {
        &self + &rhs
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: &Decimal) -> Decimal {
        let scale = self.scale.max(rhs.scale);
        let (a, b) = aligned(self, rhs);
        Decimal::new(a - b, scale)
    }
}

impl Sub for Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Decimal) -> Decimal {
        &self - &rhs
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        // Canonical form is preserved under negation.
        Decimal {
            unscaled: -&self.unscaled,
            scale: self.scale,
        }
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        -&self
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = aligned(self, other);
        a.cmp(&b)
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
