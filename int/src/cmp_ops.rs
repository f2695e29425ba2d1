//! Ordering for `BigUInt`: by limb count first, then high-to-low limb.

use crate::{limb, BigUInt};
use core::cmp::Ordering;

impl PartialOrd for BigUInt {
    #[inline]
    fn partial_cmp(&self, other: &BigUInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigUInt {
    #[inline]
    fn cmp(&self, other: &BigUInt) -> Ordering {
        limb::compare_limbs(&self.limbs, &other.limbs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        let a: BigUInt = 100u32.into();
        let b: BigUInt = 200u32.into();
        assert!(a < b);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    }
}
