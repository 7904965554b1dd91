/*
    IEEE 754 floating-point numbers, simulated in software
*/

use bitvec::prelude::Lsb0;

mod arithmetic;
mod convert;
mod exceptions;
mod expansion;
mod number;
mod round;
mod util;

pub use expansion::BinaryExpansion;
pub(crate) use util::{biguint_to_bitvec, bitvec_to_biguint, shift_left_accum};

type BitVec = bitvec::prelude::BitVec<u32, Lsb0>;

// Minimal floating-point encoding grouped by classification
#[derive(Clone, Debug)]
enum FloatNum {
    // signed zero
    // => (sign)
    Zero(bool),
    // subnormal number with an implicit exponent of `EXPMIN`
    // => (sign, mantissa)
    Subnormal(bool, BitVec),
    // normal number, with the mantissa viewed as an integer
    // => (sign, exponent, mantissa)
    Normal(bool, i64, BitVec),
    // infinity (+/-)
    // => (sign)
    Infinity(bool),
    // not-a-number
    // => (sign, signaling, payload)
    Nan(bool, bool, BitVec),
}

/** Exception flags in the sense of the IEEE-754 standard.
 *
 * A floating-point computation produces a numerical result and, along
 * with it, a set of exceptions describing how faithful that result is.
 * The exceptions tracked here:
 *
 *  - invalid: no useful definable result;
 *  - overflow: the result exceeded in magnitude what rounding with an
 *      unbounded exponent range would have produced;
 *  - underflow: a non-zero result that would lie strictly between `-b^emin` and
 *      `+b^emin` had the exponent range been unbounded, detected after rounding;
 *  - inexact: the result differs from what unbounded exponent range and
 *      precision would have produced;
 *  - carry: rounding incremented the mantissa.
 *
 */
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Exceptions {
    invalid: bool,
    overflow: bool,
    underflow: bool,
    inexact: bool,
    carry: bool,
}

/** A software IEEE-754 binary floating-point number.
 *
 * The generic `E` is the width of the exponent field and `N` the
 * width of the entire encoding, so `Float<11, 64>` behaves like the
 * hardware `f64`.
 *
 * Every value carries the exception flags raised by the operation
 * that produced it.
 */
#[derive(Clone, Debug)]
pub struct Float<const E: usize, const N: usize> {
    num: FloatNum,     // number encoding
    flags: Exceptions, // exceptions
}

/// The binary128 format, `Float<15, 128>`.
pub type Quad = Float<15, 128>;
/// The binary64 format, `Float<11, 64>`.
pub type Double = Float<11, 64>;
/// The binary32 format, `Float<8, 32>`.
pub type Single = Float<8, 32>;
/// The binary16 format, `Float<5, 16>`.
pub type Half = Float<5, 16>;
