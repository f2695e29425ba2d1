//! `BigUInt` string parsing: sign-free digit strings in an explicit
//! base, using the fixed `0-9A-Za-z` alphabet.

use crate::{radix, BigUInt, MAX_BASE};
use core::str::FromStr;
use exact_base::{Error, Result};

/// Map a single digit character to its numeric value under the fixed
/// `0-9A-Za-z` alphabet (`max_input_base()` values, 0..=35).
#[inline]
fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 10),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Parse a sign-free digit string in `base` into a canonical little-endian
/// limb vector. Fails with [`Error::BadFormat`] on any character outside
/// the alphabet or any digit `>= base`, with `position` the 0-based byte
/// offset of the offending character.
pub(crate) fn parse_unsigned_digits(s: &str, base: u32) -> Result<Vec<crate::Word>> {
    if s.is_empty() {
        return Err(Error::BadFormat {
            problem: "empty digit string",
            position: 0,
        });
    }
    let mut msd_digits = Vec::with_capacity(s.len());
    for (position, c) in s.char_indices() {
        let value = digit_value(c).ok_or(Error::BadFormat {
            problem: "unrecognized character",
            position,
        })?;
        if value >= base {
            return Err(Error::BadFormat {
                problem: "digit is not valid in the given base",
                position,
            });
        }
        msd_digits.push(value);
    }
    Ok(radix::digits_to_limbs(&msd_digits, base as u64))
}

impl BigUInt {
    /// Parse a sign-free digit string in the given base.
    ///
    /// # Examples
    /// ```
    /// use exact_int::BigUInt;
    /// let a = BigUInt::from_str_radix("ff", 16).unwrap();
    /// assert_eq!(a.to_string_radix(10), "255");
    /// ```
    pub fn from_str_radix(s: &str, base: u32) -> Result<BigUInt> {
        if !(2..=MAX_BASE).contains(&base) {
            return Err(Error::BaseOutOfRange);
        }
        Ok(BigUInt {
            limbs: parse_unsigned_digits(s, base)?,
            base: 10,
        })
    }
}

/// Parses in base 10.
impl FromStr for BigUInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<BigUInt> {
        BigUInt::from_str_radix(s, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_radix_hex() {
        let a = BigUInt::from_str_radix("ff", 16).unwrap();
        assert_eq!(a.value::<u32>().unwrap(), 255);
    }

    #[test]
    fn test_from_str_decimal() {
        let a: BigUInt = "123456789012345".parse().unwrap();
        assert_eq!(a.value::<u64>().unwrap(), 123456789012345);
    }

    #[test]
    fn test_bad_character() {
        let err = BigUInt::from_str_radix("12g4", 10).unwrap_err();
        assert_eq!(
            err,
            Error::BadFormat {
                problem: "digit is not valid in the given base",
                position: 2,
            }
        );
    }

    #[test]
    fn test_unrecognized_character() {
        let err = BigUInt::from_str_radix("1_2", 10).unwrap_err();
        assert_eq!(
            err,
            Error::BadFormat {
                problem: "unrecognized character",
                position: 1,
            }
        );
    }
}
