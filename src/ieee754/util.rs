use num_bigint::BigUint;

use super::*;

// Converts a `BitVec` to a `BigUint`
pub(crate) fn bitvec_to_biguint(bv: &BitVec) -> BigUint {
    let mut i = BigUint::default();
    for k in bv.iter_ones() {
        i.set_bit(k as u64, true);
    }
    i
}

// Converts a `BigUint` to a `BitVec` of the given width.
// The value must fit: `width >= i.bits()`.
pub(crate) fn biguint_to_bitvec(i: BigUint, width: usize) -> BitVec {
    debug_assert!(i.bits() as usize <= width);
    let mut bv = BitVec::from_vec(i.to_u32_digits());
    bv.resize(width, false);
    bv
}

// Shifts `bv` left by `by` places, reporting whether any of the
// discarded bits was set.
pub(crate) fn shift_left_accum(bv: &mut BitVec, by: usize) -> bool {
    match by {
        0 => false,
        by if by >= bv.len() => {
            let lost = bv.any();
            bv.fill(false);
            lost
        }
        _ => {
            let lost = bv[..by].any();
            bv.shift_left(by);
            lost
        }
    }
}
