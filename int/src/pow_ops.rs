//! Integer exponentiation for `BigUInt`: right-to-left binary
//! exponentiation ("Russian peasant" / square-and-multiply).

use crate::BigUInt;

impl BigUInt {
    /// `self^exponent`. `self^0 == 1` for every `self`, including zero.
    pub fn pow(&self, mut exponent: u64) -> BigUInt {
        let mut result = BigUInt::from(1u32);
        let mut base = self.clone();
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exponent >>= 1;
        }
        result
    }
}
