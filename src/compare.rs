/*
    Exact vs floating-point comparison
*/

use std::fmt;

use crate::decimal::{Decimal, InvalidDecimalLiteral};
use crate::ieee754::{BinaryExpansion, Double};
use crate::{Round, RoundingMode};

// fraction digits kept when printing binary expansions
const EXPANSION_DIGITS: usize = 64;

/** Side-by-side exact and double-precision evaluation of a sum.
 *
 * Both addends are parsed exactly, rounded to [`Double`] the way a host
 * float literal would be, and summed with one correctly rounded
 * addition. The exact decimal sum is then compared against the decimal
 * text the floating-point sum prints as, which is how a user would
 * usually meet the result.
 */
#[derive(Clone, Debug)]
pub struct Comparison {
    a: Decimal,
    b: Decimal,
    a_double: Double,
    b_double: Double,
    sum: Double,
    exact_sum: Decimal,
    float_sum: f64,
    float_sum_text: String,
    exact_match: bool,
    difference: Option<Decimal>,
}

impl Comparison {
    /// Evaluates `a + b` both exactly and in double precision.
    pub fn of(a: &Decimal, b: &Decimal) -> Self {
        let rm = RoundingMode::NearestEven;
        let a_double: Double = a.round(rm);
        let b_double: Double = b.round(rm);
        let sum: Double = a_double.add(&b_double, rm);
        let exact_sum = a + b;
        let float_sum = f64::from(sum.clone());
        let float_sum_text = float_sum.to_string();

        let (exact_match, difference) = if float_sum.is_finite() {
            // the decimal the user sees: the shortest text that reads
            // back as the stored sum
            let rendered: Decimal = float_sum_text
                .parse()
                .expect("f64 Display output should always be a valid decimal");
            let matches = rendered == exact_sum;
            let difference = (&exact_sum - &rendered).abs();
            (matches, Some(difference))
        } else {
            (false, None)
        };

        Self {
            a: a.clone(),
            b: b.clone(),
            a_double,
            b_double,
            sum,
            exact_sum,
            float_sum,
            float_sum_text,
            exact_match,
            difference,
        }
    }

    /// The two addends, exactly as parsed.
    pub fn addends(&self) -> (&Decimal, &Decimal) {
        (&self.a, &self.b)
    }

    /// The two addends after rounding to double precision, with the
    /// exception flags raised by each conversion.
    pub fn doubles(&self) -> (&Double, &Double) {
        (&self.a_double, &self.b_double)
    }

    /// The double-precision sum, with the exception flags raised by
    /// the addition.
    pub fn binary_sum(&self) -> &Double {
        &self.sum
    }

    /// The exact decimal sum of the addends.
    pub fn exact_sum(&self) -> &Decimal {
        &self.exact_sum
    }

    /// The double-precision sum as a host float.
    pub fn float_sum(&self) -> f64 {
        self.float_sum
    }

    /// The double-precision sum the way it prints.
    pub fn float_sum_text(&self) -> &str {
        &self.float_sum_text
    }

    /// Does the printed float sum read back as the exact sum?
    pub fn exact_match(&self) -> bool {
        self.exact_match
    }

    /// Absolute difference between the exact sum and the printed float
    /// sum, or `None` if the float sum is not finite.
    pub fn difference(&self) -> Option<&Decimal> {
        self.difference.as_ref()
    }

    /// The exact value stored in the double-precision sum, or `None`
    /// if it is not finite.
    pub fn stored_sum(&self) -> Option<Decimal> {
        self.sum.to_decimal()
    }

    /// Does the double-precision sum store exactly the exact sum?
    /// Stricter than [`Comparison::exact_match`]: the printed text can
    /// read back as the exact sum even when the stored value differs.
    pub fn value_match(&self) -> bool {
        self.stored_sum().as_ref() == Some(&self.exact_sum)
    }
}

/// Parses two decimal literals and evaluates their sum both exactly
/// and in double precision.
pub fn compare(a: &str, b: &str) -> Result<Comparison, InvalidDecimalLiteral> {
    let a: Decimal = a.parse()?;
    let b: Decimal = b.parse()?;
    Ok(Comparison::of(&a, &b))
}

fn terminates(bin: &BinaryExpansion) -> &'static str {
    if bin.is_exact() {
        ""
    } else {
        " (does not terminate)"
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} + {}", self.a, self.b)?;

        let a_bin = BinaryExpansion::of(&self.a, EXPANSION_DIGITS);
        let b_bin = BinaryExpansion::of(&self.b, EXPANSION_DIGITS);
        writeln!(f, "  {} in binary: {}{}", self.a, a_bin, terminates(&a_bin))?;
        writeln!(f, "  {} in binary: {}{}", self.b, b_bin, terminates(&b_bin))?;

        match self.a_double.to_decimal() {
            Some(d) => writeln!(f, "  {} is stored as {}", self.a, d)?,
            None => writeln!(
                f,
                "  {} is stored as {}",
                self.a,
                f64::from(self.a_double.clone())
            )?,
        }
        match self.b_double.to_decimal() {
            Some(d) => writeln!(f, "  {} is stored as {}", self.b, d)?,
            None => writeln!(
                f,
                "  {} is stored as {}",
                self.b,
                f64::from(self.b_double.clone())
            )?,
        }

        writeln!(f, "  exact sum:   {}", self.exact_sum)?;
        writeln!(f, "  float sum:   {}", self.float_sum_text)?;
        match self.stored_sum() {
            Some(d) => writeln!(f, "  stored sum:  {}", d)?,
            None => writeln!(f, "  stored sum:  {}", self.float_sum_text)?,
        }
        writeln!(f, "  exact match: {}", self.exact_match)?;
        match &self.difference {
            Some(d) => write!(f, "  difference:  {}", d),
            None => write!(f, "  difference:  n/a"),
        }
    }
}
