/*
    Top-level
*/

mod compare;
mod number;
mod round;

pub mod decimal;
pub mod ieee754;

pub use compare::*;
pub use number::*;
pub use round::*;
