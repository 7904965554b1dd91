/*
    Exception flags
*/

use super::*;

impl Exceptions {
    /// Sets the `invalid` flag.
    pub fn with_invalid(mut self, raised: bool) -> Self {
        self.invalid = raised;
        self
    }

    /// Sets the `overflow` flag.
    pub fn with_overflow(mut self, raised: bool) -> Self {
        self.overflow = raised;
        self
    }

    /// Sets the `underflow` flag.
    pub fn with_underflow(mut self, raised: bool) -> Self {
        self.underflow = raised;
        self
    }

    /// Sets the `inexact` flag.
    pub fn with_inexact(mut self, raised: bool) -> Self {
        self.inexact = raised;
        self
    }

    /// Sets the `carry` flag.
    pub fn with_carry(mut self, raised: bool) -> Self {
        self.carry = raised;
        self
    }

    /// Lowers every flag.
    pub fn clear(&mut self) {
        self.invalid = false;
        self.overflow = false;
        self.underflow = false;
        self.inexact = false;
        self.carry = false;
    }
}
