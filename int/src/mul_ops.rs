//! `*` for `BigUInt`.

use crate::helper_macros::{forward_binop_first_arg_by_value, forward_binop_second_arg_by_value};
use crate::{limb, BigUInt};
use core::ops::{Mul, MulAssign};

impl Mul<BigUInt> for BigUInt {
    type Output = BigUInt;

    #[inline]
    fn mul(self, rhs: BigUInt) -> BigUInt {
        BigUInt {
            limbs: limb::mul_limbs(&self.limbs, &rhs.limbs),
            base: self.base,
        }
    }
}

forward_binop_first_arg_by_value!(impl Mul<BigUInt> for BigUInt, mul);
forward_binop_second_arg_by_value!(impl Mul<BigUInt> for BigUInt, mul);

impl MulAssign<BigUInt> for BigUInt {
    #[inline]
    fn mul_assign(&mut self, rhs: BigUInt) {
        *self = core::mem::take(self).mul(rhs);
    }
}
impl MulAssign<&BigUInt> for BigUInt {
    #[inline]
    fn mul_assign(&mut self, rhs: &BigUInt) {
        *self = core::mem::take(self).mul(rhs.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul() {
        let a: BigUInt = 65535u32.into();
        let b = a.clone();
        assert_eq!((a * b).limbs, vec![1, 65534]);
    }

    #[test]
    fn test_mul_by_zero() {
        let a: BigUInt = 12345u32.into();
        assert!((a * BigUInt::zero()).is_zero());
    }
}
