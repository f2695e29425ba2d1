//! `BigUInt` string rendering.

use crate::{radix, BigUInt};
use core::fmt;

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

impl BigUInt {
    /// Render in the receiver's current display base (see [`Self::base`]).
    #[inline]
    pub fn to_string(&self) -> String {
        self.to_string_radix(self.base)
    }

    /// Render in an explicit base, independent of the receiver's stored
    /// display base.
    ///
    /// Bases `<= 36` use one character per digit from `0-9a-z`. Bases `>
    /// 36` have no single-character alphabet, so each digit is rendered as
    /// a decimal number in quotes, comma-separated (e.g. `"'12','300'"`);
    /// this form is render-only (see the crate's base-conversion notes —
    /// [`BigUInt::from_str_radix`] never accepts it back).
    pub fn to_string_radix(&self, base: u32) -> String {
        let digits = radix::limbs_to_digits(&self.limbs, base as u64);
        if base <= 36 {
            digits
                .iter()
                .map(|&d| ALPHABET[d as usize] as char)
                .collect()
        } else {
            digits
                .iter()
                .map(|d| format!("'{d}'"))
                .collect::<Vec<_>>()
                .join(",")
        }
    }
}

impl fmt::Display for BigUInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string())
    }
}
