//! `/` and `%` for `BigUInt` via guess-and-correct long division.

use crate::helper_macros::{forward_binop_first_arg_by_value, forward_binop_second_arg_by_value};
use crate::limb::{compare_limbs, mul_by_limb, sub_limbs, trim};
use crate::{BigUInt, Word, LIMB_BASE};
use core::cmp::Ordering;
use core::ops::{Div, Rem};
use exact_base::{Error, Result};

/// Long division on little-endian limb vectors.
///
/// Processes `a`'s limbs from most to least significant, maintaining a
/// running remainder group and bisecting each quotient digit over
/// `[0, LIMB_BASE)` against the divisor — the interval-halving
/// guess-and-correct loop, just seeded from the midpoint of the whole
/// admissible range on every step rather than from an initial top-limb
/// ratio (see the crate-level division notes).
pub(crate) fn div_rem_limbs(a: &[Word], b: &[Word]) -> Result<(Vec<Word>, Vec<Word>)> {
    if b.is_empty() {
        return Err(Error::DivByZero);
    }
    if compare_limbs(a, b) == Ordering::Less {
        return Ok((Vec::new(), a.to_vec()));
    }

    let mut quotient = vec![0 as Word; a.len()];
    let mut rem: Vec<Word> = Vec::new();
    for i in (0..a.len()).rev() {
        rem.insert(0, a[i]);
        trim(&mut rem);

        if compare_limbs(&rem, b) == Ordering::Less {
            continue;
        }

        // Bisect the largest digit in [1, LIMB_BASE) with digit*b <= rem.
        let (mut lo, mut hi) = (1u64, LIMB_BASE - 1);
        let mut digit = 1u64;
        while lo <= hi {
            let mid = lo + (hi - lo) / 2;
            let trial = mul_by_limb(b, mid as Word);
            if compare_limbs(&trial, &rem) == Ordering::Greater {
                if mid == 0 {
                    break;
                }
                hi = mid - 1;
            } else {
                digit = mid;
                lo = mid + 1;
            }
        }
        let trial = mul_by_limb(b, digit as Word);
        rem = sub_limbs(&rem, &trial)?;
        quotient[i] = digit as Word;
    }
    trim(&mut quotient);
    trim(&mut rem);
    Ok((quotient, rem))
}

impl BigUInt {
    /// Division with remainder, `(self / rhs, self % rhs)`. Fails with
    /// [`Error::DivByZero`] when `rhs` is zero.
    ///
    /// Not routed through the shared `exact_base::DivRem` trait because
    /// that trait's signature has no room for a fallible result; it stays
    /// an inherent method here the way `u32`'s trait impl stays infallible.
    pub fn div_rem(&self, rhs: &BigUInt) -> Result<(BigUInt, BigUInt)> {
        let (q, r) = div_rem_limbs(&self.limbs, &rhs.limbs)?;
        Ok((
            BigUInt {
                limbs: q,
                base: self.base,
            },
            BigUInt {
                limbs: r,
                base: self.base,
            },
        ))
    }
}

impl Div<BigUInt> for BigUInt {
    type Output = Result<BigUInt>;

    #[inline]
    fn div(self, rhs: BigUInt) -> Result<BigUInt> {
        Ok(self.div_rem(&rhs)?.0)
    }
}

impl Rem<BigUInt> for BigUInt {
    type Output = Result<BigUInt>;

    #[inline]
    fn rem(self, rhs: BigUInt) -> Result<BigUInt> {
        Ok(self.div_rem(&rhs)?.1)
    }
}

forward_binop_first_arg_by_value!(impl Div<BigUInt> for BigUInt, div);
forward_binop_second_arg_by_value!(impl Div<BigUInt> for BigUInt, div);
forward_binop_first_arg_by_value!(impl Rem<BigUInt> for BigUInt, rem);
forward_binop_second_arg_by_value!(impl Rem<BigUInt> for BigUInt, rem);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_rem_basic() {
        let a: BigUInt = 1000u32.into();
        let b: BigUInt = 7u32.into();
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q.value::<u32>().unwrap(), 142);
        assert_eq!(r.value::<u32>().unwrap(), 6);
    }

    #[test]
    fn test_div_by_larger() {
        let a: BigUInt = 5u32.into();
        let b: BigUInt = 100u32.into();
        let (q, r) = a.div_rem(&b).unwrap();
        assert!(q.is_zero());
        assert_eq!(r.value::<u32>().unwrap(), 5);
    }

    #[test]
    fn test_div_by_zero() {
        let a: BigUInt = 5u32.into();
        assert_eq!(a.div_rem(&BigUInt::zero()), Err(Error::DivByZero));
    }

    #[test]
    fn test_division_identity_multi_limb() {
        // Exercise the bisection loop across a limb boundary.
        let a: BigUInt = 4294967295u64.into(); // 2^32 - 1
        let b: BigUInt = 65537u32.into();
        let (q, r) = a.div_rem(&b).unwrap();
        let reconstructed = q * b + r;
        assert_eq!(reconstructed, a);
    }
}
