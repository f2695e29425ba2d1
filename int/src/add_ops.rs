//! `+` and `-` for `BigUInt`.

use crate::helper_macros::{forward_binop_first_arg_by_value, forward_binop_second_arg_by_value};
use crate::{limb, BigUInt};
use core::ops::{Add, AddAssign, Sub, SubAssign};
use exact_base::{Error, Result};

impl Add<BigUInt> for BigUInt {
    type Output = BigUInt;

    #[inline]
    fn add(self, rhs: BigUInt) -> BigUInt {
        BigUInt {
            limbs: limb::add_limbs(&self.limbs, &rhs.limbs),
            base: self.base,
        }
    }
}

/// Fails with [`Error::Negative`] when `self < rhs`, since `BigUInt` cannot
/// represent a negative result.
impl Sub<BigUInt> for BigUInt {
    type Output = Result<BigUInt>;

    #[inline]
    fn sub(self, rhs: BigUInt) -> Result<BigUInt> {
        Ok(BigUInt {
            limbs: limb::sub_limbs(&self.limbs, &rhs.limbs)?,
            base: self.base,
        })
    }
}

forward_binop_first_arg_by_value!(impl Add<BigUInt> for BigUInt, add);
forward_binop_second_arg_by_value!(impl Add<BigUInt> for BigUInt, add);
forward_binop_first_arg_by_value!(impl Sub<BigUInt> for BigUInt, sub);
forward_binop_second_arg_by_value!(impl Sub<BigUInt> for BigUInt, sub);

impl AddAssign<BigUInt> for BigUInt {
    #[inline]
    fn add_assign(&mut self, rhs: BigUInt) {
        *self = core::mem::take(self).add(rhs);
    }
}
impl AddAssign<&BigUInt> for BigUInt {
    #[inline]
    fn add_assign(&mut self, rhs: &BigUInt) {
        *self = core::mem::take(self).add(rhs.clone());
    }
}

/// Panics (via `.expect`) if the subtraction underflows. Callers who need
/// the fallible form should use `a - b` (which returns `Result<BigUInt>`)
/// instead of `a -= b`.
impl SubAssign<BigUInt> for BigUInt {
    #[inline]
    fn sub_assign(&mut self, rhs: BigUInt) {
        *self = core::mem::take(self)
            .sub(rhs)
            .expect("subtraction underflow");
    }
}
impl SubAssign<&BigUInt> for BigUInt {
    #[inline]
    fn sub_assign(&mut self, rhs: &BigUInt) {
        *self = core::mem::take(self)
            .sub(rhs.clone())
            .expect("subtraction underflow");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let a: BigUInt = 65535u32.into();
        let b: BigUInt = 1u32.into();
        assert_eq!((a + b).limbs, vec![0, 1]);
    }

    #[test]
    fn test_sub_ok() {
        let a: BigUInt = 10u32.into();
        let b: BigUInt = 3u32.into();
        assert_eq!((a - b).unwrap().limbs, vec![7]);
    }

    #[test]
    fn test_sub_underflow() {
        let a: BigUInt = 1u32.into();
        let b: BigUInt = 2u32.into();
        assert_eq!((a - b).unwrap_err(), Error::Negative);
    }
}
