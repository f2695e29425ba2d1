//! Conversions between `BigUInt` and native integer types.
//!
//! Narrowing (`BigUInt -> T`) goes through `u128` plus `TryFrom`: no bespoke
//! overflow-checked wrapper type, just the standard library's own checked
//! conversions, surfaced as [`Error::ScalarOverflow`].

use crate::{limb, BigUInt, DoubleWord, Word, LIMB_BASE};
use exact_base::{Error, Result};

macro_rules! impl_from_unsigned {
    ($($t:ty)*) => {$(
        impl From<$t> for BigUInt {
            fn from(mut value: $t) -> BigUInt {
                let mut limbs = Vec::new();
                while value != 0 {
                    limbs.push((value as u128 % LIMB_BASE as u128) as Word);
                    value = (value as u128 / LIMB_BASE as u128) as $t;
                }
                BigUInt::from_limbs(limbs)
            }
        }
    )*};
}
impl_from_unsigned!(u8 u16 u32 u64 u128 usize);

/// Fails with [`Error::Negative`] for any negative input.
macro_rules! impl_try_from_signed {
    ($($t:ty)*) => {$(
        impl TryFrom<$t> for BigUInt {
            type Error = Error;

            fn try_from(value: $t) -> Result<BigUInt> {
                if value < 0 {
                    return Err(Error::Negative);
                }
                Ok(BigUInt::from(value as u128))
            }
        }
    )*};
}
impl_try_from_signed!(i8 i16 i32 i64 i128 isize);

impl BigUInt {
    /// Convert to a native integer type, failing with
    /// [`Error::ScalarOverflow`] if the value does not fit.
    pub fn value<T>(&self) -> Result<T>
    where
        T: TryFrom<u128>,
    {
        let mut acc: u128 = 0;
        for &limb in self.limbs.iter().rev() {
            acc = acc
                .checked_mul(LIMB_BASE as u128)
                .and_then(|a| a.checked_add(limb as u128))
                .ok_or(Error::ScalarOverflow)?;
        }
        T::try_from(acc).map_err(|_| Error::ScalarOverflow)
    }
}

/// `push_back(digits)`: append digits (in the receiver's current base) to
/// the low-order end, i.e. `self := self * base^len(digits) + parse(digits)`.
impl BigUInt {
    pub fn push_back(&mut self, digits: &str) -> Result<()> {
        let appended = crate::parse::parse_unsigned_digits(digits, self.base)?;
        let base_pow = pow_limb_base(self.base as u64, digits.chars().count());
        let scaled = limb::mul_limbs(&self.limbs, &base_pow);
        let mut combined = limb::add_limbs(&scaled, &appended);
        limb::trim(&mut combined);
        self.limbs = combined;
        Ok(())
    }
}

/// `base^exponent` as a little-endian limb vector, via repeated
/// multiplication by the scalar `base`.
fn pow_limb_base(base: u64, exponent: usize) -> Vec<Word> {
    let mut result: Vec<Word> = vec![1];
    for _ in 0..exponent {
        result = mul_by_u64(&result, base);
    }
    result
}

fn mul_by_u64(a: &[Word], scalar: u64) -> Vec<Word> {
    let mut out = Vec::with_capacity(a.len() + 2);
    let mut carry: DoubleWord = 0;
    for &d in a {
        let x = d as DoubleWord * scalar + carry;
        out.push((x % LIMB_BASE) as Word);
        carry = x / LIMB_BASE;
    }
    while carry != 0 {
        out.push((carry % LIMB_BASE) as Word);
        carry /= LIMB_BASE;
    }
    limb::trim(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u64() {
        let a: BigUInt = 4294836225u64.into(); // 65535 * 65535
        assert_eq!(a.limbs, vec![1, 65534]);
    }

    #[test]
    fn test_value_roundtrip() {
        let a: BigUInt = 123456789u64.into();
        assert_eq!(a.value::<u64>().unwrap(), 123456789u64);
    }

    #[test]
    fn test_value_overflow() {
        let a: BigUInt = (u64::MAX as u128 + 1).into();
        assert_eq!(a.value::<u64>(), Err(Error::ScalarOverflow));
    }

    #[test]
    fn test_try_from_negative() {
        assert_eq!(BigUInt::try_from(-1i64), Err(Error::Negative));
    }
}
