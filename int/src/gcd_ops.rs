//! Greatest common divisor for `BigUInt`, exposed both as an inherent
//! method and through the shared `exact_base::Gcd` trait so `Rational`'s
//! reduce/normalize step can call it generically over either `BigUInt` or a
//! native integer.

use crate::BigUInt;
use exact_base::Gcd;

impl BigUInt {
    /// Euclidean algorithm. `gcd(0, 0) == 0` here (unlike the native-integer
    /// `Gcd` impls in `exact_base`, which panic on that input) since a
    /// `BigUInt` zero is a perfectly ordinary value to hand in, and a
    /// reduce/normalize step only ever calls this when at least one of the
    /// two operands is nonzero.
    pub fn gcd(&self, other: &BigUInt) -> BigUInt {
        let (mut a, mut b) = (self.clone(), other.clone());
        while !b.is_zero() {
            let r = a.div_rem(&b).expect("divisor is nonzero by loop guard").1;
            a = b;
            b = r;
        }
        a
    }
}

impl Gcd<BigUInt> for BigUInt {
    type Output = BigUInt;

    #[inline]
    fn gcd(self, rhs: BigUInt) -> BigUInt {
        BigUInt::gcd(&self, &rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_basic() {
        let a: BigUInt = 48u32.into();
        let b: BigUInt = 18u32.into();
        assert_eq!(BigUInt::gcd(&a, &b).value::<u32>().unwrap(), 6);
    }

    #[test]
    fn test_gcd_with_zero() {
        let a: BigUInt = 42u32.into();
        assert_eq!(BigUInt::gcd(&a, &BigUInt::zero()), a);
    }
}
