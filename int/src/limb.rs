//! Limb-vector primitives: carry propagation, borrow propagation, trimming,
//! and comparison. These are private; `BigUInt`'s public operators (in the
//! sibling `*_ops` modules) are built on top of them.
//!
//! A limb holds a value in `[0, LIMB_BASE)`, i.e. half of `Word`'s bit
//! width, so that the product of any two limbs fits in a single `Word`
//! without widening (see crate-level docs).

use crate::{DoubleWord, Word, LIMB_BASE};
use core::cmp::Ordering;
use exact_base::Error;

/// Strip trailing (most significant) zero limbs, leaving either an empty
/// vector (canonical zero) or one whose last limb is nonzero.
#[inline]
pub(crate) fn trim(v: &mut Vec<Word>) {
    while v.last() == Some(&0) {
        v.pop();
    }
}

/// Column-wise add with carry ("kindergarten addition"). Operands need not
/// be the same length or already trimmed; the result is canonical.
pub(crate) fn add_limbs(a: &[Word], b: &[Word]) -> Vec<Word> {
    let n = a.len().max(b.len());
    let mut out = Vec::with_capacity(n + 1);
    let mut carry: Word = 0;
    for k in 0..n {
        let x = a.get(k).copied().unwrap_or(0) as u64
            + b.get(k).copied().unwrap_or(0) as u64
            + carry as u64;
        out.push((x % LIMB_BASE) as Word);
        carry = (x / LIMB_BASE) as Word;
    }
    if carry != 0 {
        out.push(carry);
    }
    out
}

/// Column-wise subtract with borrow. Fails with [`Error::Negative`] if
/// `a < b`; otherwise the borrow chain is guaranteed to resolve cleanly by
/// construction, so [`Error::Overrun`] can only occur if that precondition
/// was violated by a caller inside this crate (a bug, not a user error).
pub(crate) fn sub_limbs(a: &[Word], b: &[Word]) -> Result<Vec<Word>, Error> {
    if compare_limbs(a, b) == Ordering::Less {
        return Err(Error::Negative);
    }
    let mut out = Vec::with_capacity(a.len());
    let mut borrow: i64 = 0;
    for k in 0..a.len() {
        let x = a[k] as i64 - b.get(k).copied().unwrap_or(0) as i64 - borrow;
        if x < 0 {
            out.push((x + LIMB_BASE as i64) as Word);
            borrow = 1;
        } else {
            out.push(x as Word);
            borrow = 0;
        }
    }
    if borrow != 0 {
        // Would mean a < b slipped past the guard above.
        return Err(Error::Overrun);
    }
    trim(&mut out);
    Ok(out)
}

/// Grade-school multiplication: accumulate all `a_i * b_j` into a
/// double-width column buffer, then carry once at the end.
pub(crate) fn mul_limbs(a: &[Word], b: &[Word]) -> Vec<Word> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut acc: Vec<DoubleWord> = vec![0; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        for (j, &bj) in b.iter().enumerate() {
            acc[i + j] += ai as DoubleWord * bj as DoubleWord;
        }
    }
    let mut out = Vec::with_capacity(acc.len() + 1);
    let mut carry: DoubleWord = 0;
    for &col in &acc {
        let x = col + carry;
        out.push((x % LIMB_BASE) as Word);
        carry = x / LIMB_BASE;
    }
    while carry != 0 {
        out.push((carry % LIMB_BASE) as Word);
        carry /= LIMB_BASE;
    }
    trim(&mut out);
    out
}

/// Multiply a digit vector by a single limb-sized scalar (`0 <= scalar <
/// LIMB_BASE`). Used by long division's guess-and-correct loop.
pub(crate) fn mul_by_limb(a: &[Word], scalar: Word) -> Vec<Word> {
    if scalar == 0 || a.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry: DoubleWord = 0;
    for &d in a {
        let x = d as DoubleWord * scalar as DoubleWord + carry;
        out.push((x % LIMB_BASE) as Word);
        carry = x / LIMB_BASE;
    }
    while carry != 0 {
        out.push((carry % LIMB_BASE) as Word);
        carry /= LIMB_BASE;
    }
    trim(&mut out);
    out
}

/// Compare two (not-necessarily-trimmed) limb vectors by length first, then
/// from the most to least significant limb.
pub(crate) fn compare_limbs(a: &[Word], b: &[Word]) -> Ordering {
    let la = effective_len(a);
    let lb = effective_len(b);
    match la.cmp(&lb) {
        Ordering::Equal => {
            for i in (0..la).rev() {
                match a[i].cmp(&b[i]) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }
            Ordering::Equal
        }
        other => other,
    }
}

/// Length ignoring any trailing zero limbs, without allocating.
#[inline]
fn effective_len(v: &[Word]) -> usize {
    let mut n = v.len();
    while n > 0 && v[n - 1] == 0 {
        n -= 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_limbs_carries() {
        assert_eq!(add_limbs(&[65535], &[1]), vec![0, 1]);
        assert_eq!(add_limbs(&[], &[5]), vec![5]);
        assert_eq!(add_limbs(&[1, 2], &[3]), vec![4, 2]);
    }

    #[test]
    fn test_sub_limbs_borrows() {
        assert_eq!(sub_limbs(&[0, 1], &[1]).unwrap(), vec![65535]);
        assert!(sub_limbs(&[1], &[2]).is_err());
    }

    #[test]
    fn test_mul_limbs() {
        // 65535 * 65535 = 4294836225 = 0xFFFE0001
        assert_eq!(mul_limbs(&[65535], &[65535]), vec![1, 65534]);
    }

    #[test]
    fn test_compare_limbs_ignores_trailing_zero() {
        assert_eq!(compare_limbs(&[5, 0], &[5]), Ordering::Equal);
        assert_eq!(compare_limbs(&[1, 2], &[5, 1]), Ordering::Greater);
    }
}
