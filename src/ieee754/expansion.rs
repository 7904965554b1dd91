/*
    Binary expansion
*/

use std::fmt;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::decimal::Decimal;

/** The binary positional expansion of a decimal value.
 *
 * Most finite decimal fractions require infinitely many binary fraction
 * digits (any fraction whose reduced denominator has a factor of 5 does).
 * The expansion is cut off after a caller-chosen number of fraction
 * digits and remembers whether anything was left over.
 */
#[derive(Clone, Debug)]
pub struct BinaryExpansion {
    negative: bool,
    int_digits: Vec<u8>,
    frac_digits: Vec<u8>,
    exact: bool,
}

impl BinaryExpansion {
    /// Expands `value` in base 2, keeping at most `max_frac_digits`
    /// fraction digits.
    pub fn of(value: &Decimal, max_frac_digits: usize) -> Self {
        let negative = value.sign();
        let u = value.unscaled().magnitude();
        let k = value.scale();

        // split off the integer part
        let den = BigUint::from(10_u8).pow(k as u32);
        let (int_part, mut rem) = u.div_rem(&den);
        let int_digits = int_part.to_radix_be(2);

        // long division: each doubling of the remainder yields
        // the next binary fraction digit
        let mut frac_digits = Vec::new();
        while !rem.is_zero() && frac_digits.len() < max_frac_digits {
            rem <<= 1_u32;
            let (digit, next) = rem.div_rem(&den);
            frac_digits.push(u8::from(!digit.is_zero()));
            rem = next;
        }

        Self {
            negative,
            int_digits,
            frac_digits,
            exact: rem.is_zero(),
        }
    }

    /// Did the expansion terminate within the digit limit?
    pub fn is_exact(&self) -> bool {
        self.exact
    }
}

impl fmt::Display for BinaryExpansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        for d in &self.int_digits {
            write!(f, "{}", d)?;
        }
        if !self.frac_digits.is_empty() {
            write!(f, ".")?;
            for d in &self.frac_digits {
                write!(f, "{}", d)?;
            }
        }
        if !self.exact {
            write!(f, "...")?;
        }
        Ok(())
    }
}
