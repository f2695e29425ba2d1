//! `<<` and `>>` for `Rational`: shift an *integer*
//! `Rational` by a bit count, i.e. multiply/divide by `2^n`. Fails with
//! [`Error::NonInteger`] on a non-integer receiver — shifting is an
//! integer-only operation lifted from `BigUInt` up to `Rational`.

use crate::Rational;
use exact_base::{Error, Result};
use exact_int::BigUInt;

impl Rational {
    /// `self * 2^n`.
    pub fn shl(&self, n: usize) -> Result<Rational> {
        if !self.is_integer() {
            return Err(Error::NonInteger);
        }
        let mut out = self.clone();
        out.p = self.p.clone() << n;
        Ok(out)
    }

    /// `floor(self / 2^n)`. Unlike `BigUInt::shr` (a plain truncating shift
    /// over an unsigned magnitude), a negative `Rational` must floor toward
    /// negative infinity: `-1 >> 1 == -1`, not `0`. So a negative receiver
    /// whose magnitude isn't a clean multiple of `2^n` rounds its quotient
    /// away from zero by one before reattaching the sign.
    pub fn shr(&self, n: usize) -> Result<Rational> {
        if !self.is_integer() {
            return Err(Error::NonInteger);
        }
        let quotient = self.p.clone() >> n;
        let exact = quotient.clone() << n == self.p;
        let mut out = self.clone();
        out.p = if self.sign.is_negative() && !exact {
            quotient + BigUInt::from(1u32)
        } else {
            quotient
        };
        if out.p.is_zero() {
            out.sign = exact_base::Sign::Positive;
        }
        Ok(out)
    }
}
