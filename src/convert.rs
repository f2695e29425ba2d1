//! Conversions into and out of `Rational`: from `BigUInt`, native integers,
//! and floor/ceil/truncate.

use crate::Rational;
use exact_base::{Error, Result, Sign};
use exact_int::BigUInt;

impl From<BigUInt> for Rational {
    fn from(value: BigUInt) -> Rational {
        let mut out = Rational::zero();
        out.p = value;
        out.q = BigUInt::from(1u32);
        out
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty)*) => {$(
        impl From<$t> for Rational {
            fn from(value: $t) -> Rational {
                Rational::from(BigUInt::from(value))
            }
        }
    )*};
}
impl_from_unsigned!(u8 u16 u32 u64 u128 usize);

macro_rules! impl_try_from_signed {
    ($($t:ty)*) => {$(
        impl TryFrom<$t> for Rational {
            type Error = Error;

            fn try_from(value: $t) -> Result<Rational> {
                let negative = value < 0;
                let magnitude = BigUInt::from(value.unsigned_abs());
                let mut out = Rational::from(magnitude);
                if negative {
                    out.sign = Sign::Negative;
                }
                Ok(out)
            }
        }
    )*};
}
impl_try_from_signed!(i8 i16 i32 i64 i128 isize);

impl Rational {
    /// Test-only convenience: build a small integer `Rational` from an
    /// `i64` without going through `TryFrom`'s `Result`.
    #[cfg(test)]
    pub(crate) fn from_i64(value: i64) -> Rational {
        Rational::try_from(value).expect("i64 always converts")
    }

    /// Test-only convenience: read a small integer `Rational` back as an
    /// `i64`.
    #[cfg(test)]
    pub(crate) fn value_i64(&self) -> i64 {
        let magnitude = self.p.value::<i64>().expect("fits in i64 in tests");
        if self.sign.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Largest integer `<= self`.
    pub fn floor(&self) -> Rational {
        self.whole_with_adjustment(self.sign.is_negative())
    }

    /// Smallest integer `>= self`.
    pub fn ceil(&self) -> Rational {
        self.whole_with_adjustment(self.sign.is_positive())
    }

    /// Drop the fractional part (round toward zero).
    pub fn truncate(&self) -> Rational {
        self.whole_with_adjustment(false)
    }

    /// Shared implementation for floor/ceil/truncate: `p' = p / q`, plus
    /// one more if `adjust_if_remainder` and there was a nonzero remainder.
    fn whole_with_adjustment(&self, adjust_if_remainder: bool) -> Rational {
        if self.is_integer() {
            return self.clone();
        }
        let (mut whole, r) = self.p.div_rem(&self.q).expect("denominator is nonzero");
        if adjust_if_remainder && !r.is_zero() {
            whole = whole + BigUInt::from(1u32);
        }
        let mut out = self.clone();
        out.p = whole;
        out.q = BigUInt::from(1u32);
        if out.p.is_zero() {
            out.sign = Sign::Positive;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unsigned() {
        let a = Rational::from(42u32);
        assert_eq!(a.value_i64(), 42);
    }

    #[test]
    fn test_try_from_negative() {
        let a = Rational::try_from(-7i64).unwrap();
        assert_eq!(a.value_i64(), -7);
    }

    #[test]
    fn test_floor_ceil_truncate_positive() {
        let mut a = Rational::from(7u32);
        a.q = BigUInt::from(2u32); // 7/2
        assert_eq!(a.floor().value_i64(), 3);
        assert_eq!(a.ceil().value_i64(), 4);
        assert_eq!(a.truncate().value_i64(), 3);
    }

    #[test]
    fn test_floor_ceil_truncate_negative() {
        let mut a = Rational::from(7u32);
        a.q = BigUInt::from(2u32);
        a.sign = Sign::Negative; // -7/2
        assert_eq!(a.floor().value_i64(), -4);
        assert_eq!(a.ceil().value_i64(), -3);
        assert_eq!(a.truncate().value_i64(), -3);
    }
}
