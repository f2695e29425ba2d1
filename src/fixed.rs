//! Fixed-point controller: getters/setters for `base`, `pointpos`, `fix`,
//! `fixtype`, `fixq`, each force-reducing the value to keep the pinned
//! denominator (`q == base^pointpos` under `Radix`, `q == fixq` under
//! `Denom`) intact the instant the configuration changes, rather than
//! lazily at the next arithmetic operation.

use crate::{FixType, Rational};
use exact_base::{Error, Result};
use exact_int::BigUInt;

impl Rational {
    #[inline]
    pub fn pointpos(&self) -> usize {
        self.pointpos
    }

    #[inline]
    pub fn fix(&self) -> bool {
        self.fix
    }

    #[inline]
    pub fn fixtype(&self) -> FixType {
        self.fixtype
    }

    #[inline]
    pub fn fixq(&self) -> &BigUInt {
        &self.fixq
    }

    /// Change the display base. Fails with [`Error::BaseOutOfRange`] unless
    /// `2 <= base <= MAX_BASE`. When fixed to `Radix`, `base^pointpos`
    /// changes along with `base`, so the value is force-reduced to the new
    /// target immediately.
    pub fn set_base(&mut self, base: u32) -> Result<()> {
        if !(2..=exact_int::MAX_BASE).contains(&base) {
            return Err(Error::BaseOutOfRange);
        }
        self.base = base;
        if self.fix {
            *self = core::mem::take(self).force_reduce_now();
        }
        Ok(())
    }

    /// Change how many fractional digits `Radix` fixed-point mode pins the
    /// denominator to. Only takes effect on the stored value immediately
    /// when `fix` is already on; otherwise it's recorded for the next time
    /// `fix` is turned on with `fixtype == Radix`.
    pub fn set_pointpos(&mut self, pointpos: usize) {
        self.pointpos = pointpos;
        if self.fix {
            *self = core::mem::take(self).force_reduce_now();
        }
    }

    /// Turn fixed-point mode on or off. Turning it on force-reduces to the
    /// current `fixtype`'s target denominator; turning it off leaves `p/q`
    /// as-is until the next arithmetic operation's ordinary gcd reduction
    /// (which may further shrink `q`, never grow it).
    pub fn set_fix(&mut self, fix: bool) {
        self.fix = fix;
        if fix {
            *self = core::mem::take(self).force_reduce_now();
        }
    }

    /// Switch between `Radix` (denominator pinned to `base^pointpos`) and
    /// `Denom` (denominator pinned to the last value given to
    /// [`Self::set_fixq`]). Force-reduces to the new target when fixed.
    pub fn set_fixtype(&mut self, fixtype: FixType) {
        self.fixtype = fixtype;
        if self.fix {
            *self = core::mem::take(self).force_reduce_now();
        }
    }

    /// Pin the denominator to `denom` and switch to `Denom` mode. Fails
    /// with [`Error::NonInteger`] if `denom` is not an integer `Rational`.
    pub fn set_fixq(&mut self, denom: &Rational) -> Result<()> {
        if !denom.is_integer() {
            return Err(Error::NonInteger);
        }
        self.fixq = denom.p.clone();
        self.fixtype = FixType::Denom;
        self.fix = true;
        *self = core::mem::take(self).force_reduce_now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_base_out_of_range() {
        let mut a = Rational::from_i64(1);
        assert_eq!(a.set_base(1), Err(Error::BaseOutOfRange));
        assert_eq!(a.set_base(0), Err(Error::BaseOutOfRange));
    }

    #[test]
    fn test_set_pointpos_with_fix_forces_denominator() {
        let mut a = Rational::from_i64(1);
        a.q = BigUInt::from(3u32); // 1/3
        a.set_fix(true); // default pointpos = 0 => q forced to base^0 = 1
        assert!(a.is_integer());
        a.set_pointpos(2); // q forced to base^2 = 100
        assert_eq!(*a.denominator(), BigUInt::from(100u32));
    }

    #[test]
    fn test_set_fixq_requires_integer() {
        let mut a = Rational::from_i64(1);
        let mut denom = Rational::from_i64(1);
        denom.q = BigUInt::from(2u32); // 1/2, not an integer
        assert_eq!(a.set_fixq(&denom), Err(Error::NonInteger));
    }

    #[test]
    fn test_set_fixq_pins_denominator() {
        let mut a = Rational::from_i64(1);
        a.q = BigUInt::from(3u32); // 1/3
        let denom = Rational::from_i64(7);
        a.set_fixq(&denom).unwrap();
        assert_eq!(a.fixtype(), FixType::Denom);
        assert_eq!(*a.denominator(), BigUInt::from(7u32));
    }

    #[test]
    fn test_set_fixtype_switches_target() {
        let mut a = Rational::from_i64(1);
        a.q = BigUInt::from(3u32);
        a.set_pointpos(2);
        a.set_fix(true); // Radix: q = base^2 = 100
        assert_eq!(*a.denominator(), BigUInt::from(100u32));
        let denom = Rational::from_i64(6);
        a.set_fixq(&denom).unwrap(); // switches to Denom: q = 6
        assert_eq!(*a.denominator(), BigUInt::from(6u32));
    }
}
