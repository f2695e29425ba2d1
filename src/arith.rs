//! Field arithmetic for `Rational`: `+ - * / %`, unary `-`,
//! compound-assigns, increment/decrement.

use crate::reduce::normalize;
use crate::Rational;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Rem, Sub, SubAssign};
use exact_base::{Error, Result, Sign};
use exact_int::BigUInt;

impl Add<Rational> for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        let round = self.round;
        let (pa, pb, q) = normalize(&self, &rhs);
        let (sign, p) = if self.sign == rhs.sign {
            (self.sign, pa + pb)
        } else if pa >= pb {
            (self.sign, (pa - pb).expect("pa >= pb"))
        } else {
            (rhs.sign, (pb - pa).expect("pb > pa"))
        };
        let mut out = self;
        out.sign = sign;
        out.p = p;
        out.q = q;
        out.round = round;
        out.reduce()
    }
}

impl Sub<Rational> for Rational {
    type Output = Rational;

    #[inline]
    fn sub(self, rhs: Rational) -> Rational {
        let mut negated = rhs;
        if !negated.is_zero() {
            negated.sign = negated.sign.flip();
        }
        self.add(negated)
    }
}

impl Mul<Rational> for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        let sign = self.sign * rhs.sign;
        let mut out = self.clone();
        out.sign = sign;
        out.p = self.p * rhs.p;
        out.q = self.q * rhs.q;
        out.reduce()
    }
}

impl Div<Rational> for Rational {
    type Output = Result<Rational>;

    fn div(self, rhs: Rational) -> Result<Rational> {
        if rhs.is_zero() {
            return Err(Error::DivByZero);
        }
        let sign = self.sign * rhs.sign;
        let mut out = self.clone();
        out.sign = sign;
        // Multiply by the reciprocal: swap rhs's p/q.
        out.p = self.p * rhs.q;
        out.q = self.q * rhs.p;
        Ok(out.reduce())
    }
}

/// Integer modulo. Fails with [`Error::NonInteger`] unless both operands
/// are integer, and with [`Error::DivByZero`] if `rhs` is zero.
impl Rem<Rational> for Rational {
    type Output = Result<Rational>;

    fn rem(self, rhs: Rational) -> Result<Rational> {
        if !self.is_integer() || !rhs.is_integer() {
            return Err(Error::NonInteger);
        }
        if rhs.is_zero() {
            return Err(Error::DivByZero);
        }
        let (_, r) = self.p.div_rem(&rhs.p)?;
        let sign = if r.is_zero() { Sign::Positive } else { self.sign };
        let mut out = self;
        out.sign = sign;
        out.p = r;
        out.q = BigUInt::from(1u32);
        Ok(out)
    }
}

/// Negation of zero stays positive, per the canonical-zero invariant.
impl Neg for Rational {
    type Output = Rational;

    fn neg(mut self) -> Rational {
        if !self.is_zero() {
            self.sign = self.sign.flip();
        }
        self
    }
}

impl AddAssign<Rational> for Rational {
    #[inline]
    fn add_assign(&mut self, rhs: Rational) {
        *self = core::mem::take(self).add(rhs);
    }
}
impl SubAssign<Rational> for Rational {
    #[inline]
    fn sub_assign(&mut self, rhs: Rational) {
        *self = core::mem::take(self).sub(rhs);
    }
}

impl Rational {
    /// `self + 1`.
    pub fn increment(self) -> Rational {
        let one = Rational::integer_one_like(&self);
        self.add(one)
    }

    /// `self - 1`.
    pub fn decrement(self) -> Rational {
        let one = Rational::integer_one_like(&self);
        self.sub(one)
    }

    fn integer_one_like(template: &Rational) -> Rational {
        let mut one = Rational::zero();
        one.p = BigUInt::from(1u32);
        one.q = BigUInt::from(1u32);
        one.sign = Sign::Positive;
        one.base = template.base;
        one.round = template.round;
        one
    }

    /// `|self|`.
    pub fn abs(mut self) -> Rational {
        self.sign = Sign::Positive;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_same_sign() {
        let a = Rational::from_i64(1);
        let b = Rational::from_i64(2);
        assert_eq!((a + b).value_i64(), 3);
    }

    #[test]
    fn test_add_cancels_to_zero() {
        let a = Rational::from_i64(5);
        let b = Rational::from_i64(-5);
        assert!((a + b).is_zero());
    }

    #[test]
    fn test_sub() {
        let a = Rational::from_i64(10);
        let b = Rational::from_i64(3);
        assert_eq!((a - b).value_i64(), 7);
    }

    #[test]
    fn test_mul() {
        let a = Rational::from_i64(6);
        let b = Rational::from_i64(7);
        assert_eq!((a * b).value_i64(), 42);
    }

    #[test]
    fn test_div_by_zero() {
        let a = Rational::from_i64(1);
        let b = Rational::from_i64(0);
        assert_eq!(a.div(b), Err(Error::DivByZero));
    }

    #[test]
    fn test_rem_non_integer() {
        let a = Rational::from_i64(1);
        let mut b = Rational::from_i64(1);
        b.q = BigUInt::from(2u32); // 1/2, non-integer
        assert_eq!(a.rem(b), Err(Error::NonInteger));
    }
}
