//! `&`, `|`, `^`, `!` for `BigUInt`, limb-wise.

use crate::helper_macros::{forward_binop_first_arg_by_value, forward_binop_second_arg_by_value};
use crate::limb::trim;
use crate::{BigUInt, Word};
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};
use exact_base::BitTest;

const LIMB_MASK: Word = (1 << 16) - 1;
const LIMB_BITS: usize = 16;

/// Each limb holds 16 significant bits, so bit-length, single-bit tests and
/// trailing-zero counts all work one limb at a time rather than over the
/// `Word`'s full 32-bit storage.
impl BitTest for BigUInt {
    fn bit_len(&self) -> usize {
        match self.limbs.last() {
            None => 0,
            Some(&top) => (self.limbs.len() - 1) * LIMB_BITS + (Word::BITS - top.leading_zeros()) as usize,
        }
    }

    fn bit(&self, n: usize) -> bool {
        let (limb, bit) = (n / LIMB_BITS, n % LIMB_BITS);
        self.limbs.get(limb).map_or(false, |&l| (l >> bit) & 1 != 0)
    }

    fn trailing_zeros(&self) -> Option<usize> {
        let mut count = 0;
        for &limb in &self.limbs {
            if limb == 0 {
                count += LIMB_BITS;
            } else {
                return Some(count + limb.trailing_zeros() as usize);
            }
        }
        None
    }
}

/// AND truncates to the shorter operand's length: limbs beyond it are
/// implicitly zero on one side, so their AND is zero too.
impl BitAnd<BigUInt> for BigUInt {
    type Output = BigUInt;

    fn bitand(self, rhs: BigUInt) -> BigUInt {
        let n = self.limbs.len().min(rhs.limbs.len());
        let mut out: Vec<Word> = (0..n).map(|i| self.limbs[i] & rhs.limbs[i]).collect();
        trim(&mut out);
        BigUInt {
            limbs: out,
            base: self.base,
        }
    }
}

/// OR extends to the longer operand's length, treating missing limbs on
/// the shorter side as zero.
impl BitOr<BigUInt> for BigUInt {
    type Output = BigUInt;

    fn bitor(self, rhs: BigUInt) -> BigUInt {
        let n = self.limbs.len().max(rhs.limbs.len());
        let mut out: Vec<Word> = (0..n)
            .map(|i| self.limbs.get(i).copied().unwrap_or(0) | rhs.limbs.get(i).copied().unwrap_or(0))
            .collect();
        trim(&mut out);
        BigUInt {
            limbs: out,
            base: self.base,
        }
    }
}

impl BitXor<BigUInt> for BigUInt {
    type Output = BigUInt;

    fn bitxor(self, rhs: BigUInt) -> BigUInt {
        let n = self.limbs.len().max(rhs.limbs.len());
        let mut out: Vec<Word> = (0..n)
            .map(|i| self.limbs.get(i).copied().unwrap_or(0) ^ rhs.limbs.get(i).copied().unwrap_or(0))
            .collect();
        trim(&mut out);
        BigUInt {
            limbs: out,
            base: self.base,
        }
    }
}

/// Limb-wise complement masked to each limb's 16 significant bits, over the
/// receiver's own limb extent (there is no "infinite leading ones" notion
/// for an unbounded unsigned integer, so `!a` is only meaningful combined
/// with `&`/`|` over values of comparable size).
impl Not for BigUInt {
    type Output = BigUInt;

    fn not(self) -> BigUInt {
        let mut out: Vec<Word> = self.limbs.iter().map(|&l| !l & LIMB_MASK).collect();
        trim(&mut out);
        BigUInt {
            limbs: out,
            base: self.base,
        }
    }
}

forward_binop_first_arg_by_value!(impl BitAnd<BigUInt> for BigUInt, bitand);
forward_binop_second_arg_by_value!(impl BitAnd<BigUInt> for BigUInt, bitand);
forward_binop_first_arg_by_value!(impl BitOr<BigUInt> for BigUInt, bitor);
forward_binop_second_arg_by_value!(impl BitOr<BigUInt> for BigUInt, bitor);
forward_binop_first_arg_by_value!(impl BitXor<BigUInt> for BigUInt, bitxor);
forward_binop_second_arg_by_value!(impl BitXor<BigUInt> for BigUInt, bitxor);

impl BitAndAssign<BigUInt> for BigUInt {
    #[inline]
    fn bitand_assign(&mut self, rhs: BigUInt) {
        *self = core::mem::take(self).bitand(rhs);
    }
}
impl BitOrAssign<BigUInt> for BigUInt {
    #[inline]
    fn bitor_assign(&mut self, rhs: BigUInt) {
        *self = core::mem::take(self).bitor(rhs);
    }
}
impl BitXorAssign<BigUInt> for BigUInt {
    #[inline]
    fn bitxor_assign(&mut self, rhs: BigUInt) {
        *self = core::mem::take(self).bitxor(rhs);
    }
}
