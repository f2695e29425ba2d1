//! `Rational` string parser: `[sign][0x|0b|0]digits[.digits][e[sign]digits]`.
//!
//! The lexer below is a single left-to-right scan tracking just enough
//! state (have we seen the radix point? the exponent marker? a sign in
//! each of those positions?) to report one of several precise `BadFormat`
//! messages, then hands the collected digit substrings off to
//! [`BigUInt::from_str_radix`] for the actual base-`N` value (and its own
//! digit-validity/position-translated errors).
//!
//! One resolved ambiguity: the exponent marker is the letter `e`, which is
//! also a legitimate digit in any base > 14 (hex's `e` is digit value 14).
//! This implementation only recognizes `e`/`E` as the exponent marker when
//! `base < 15`; in bases 15 and up, `e` is always a digit and exponent
//! notation is unavailable for that parse. Recorded here and in DESIGN.md
//! rather than decided silently.

use crate::Rational;
use exact_base::{Error, Result, Sign};
use exact_int::BigUInt;

struct Parsed {
    sign: Sign,
    p: BigUInt,
    q: BigUInt,
}

impl Rational {
    /// Parse `s` into `self`, replacing `sign`/`p`/`q` and reducing (to
    /// plain lowest terms, or to the fixed-point target if `fix` is on).
    /// Every other field (`base`, `maxradix`, `fix`, `round`, ...) is left
    /// exactly as configured on the receiver; `base` also supplies the
    /// input radix whenever `autobase` is false, or whenever `autobase` is
    /// true but `s` carries no `0x`/`0b`/leading-zero prefix.
    pub fn set(&mut self, s: &str, autobase: bool) -> Result<()> {
        let parsed = parse_str(s, self.base, autobase)?;
        self.sign = parsed.sign;
        self.p = parsed.p;
        self.q = parsed.q;
        *self = core::mem::take(self).reduce();
        Ok(())
    }

    /// Parse a brand-new, default-configured `Rational` (base 10, ten
    /// significant radix digits, not fixed, `autobase` on).
    pub fn parse(s: &str) -> Result<Rational> {
        let mut out = Rational::zero();
        out.set(s, true)?;
        Ok(out)
    }
}

impl core::str::FromStr for Rational {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Rational> {
        Rational::parse(s)
    }
}

fn parse_str(s: &str, base_field: u32, autobase: bool) -> Result<Parsed> {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    let mut i = 0usize;

    let mut number_sign = Sign::Positive;
    if i < n && (chars[i] == '+' || chars[i] == '-') {
        number_sign = Sign::from_is_negative(chars[i] == '-');
        i += 1;
    }

    let mut base = base_field;
    if autobase {
        if i + 1 < n && chars[i] == '0' && matches!(chars[i + 1], 'x' | 'X') {
            base = 16;
            i += 2;
        } else if i + 1 < n && chars[i] == '0' && matches!(chars[i + 1], 'b' | 'B') {
            base = 2;
            i += 2;
        } else if i + 1 < n && chars[i] == '0' && chars[i + 1].is_ascii_digit() {
            base = 8;
            i += 1;
        }
    }
    if !(2..=exact_int::MAX_BASE).contains(&base) {
        return Err(Error::BaseOutOfRange);
    }
    let exponent_marker_is_ambiguous = base >= 15;

    let mut mant = String::new();
    let mant_start = i;
    let mut point_index: Option<usize> = None;
    let mut frac = String::new();

    let mut seen_exp = false;
    let mut exp_start = 0usize;
    let mut exp_sign = Sign::Positive;
    let mut exp_sign_allowed = false;
    let mut exp_digits = String::new();

    while i < n {
        let c = chars[i];
        let in_exponent = seen_exp;

        if !in_exponent && !exponent_marker_is_ambiguous && matches!(c, 'e' | 'E') {
            seen_exp = true;
            exp_sign_allowed = true;
            exp_start = i + 1;
            i += 1;
            continue;
        }

        if c == '+' || c == '-' {
            if in_exponent {
                if !exp_sign_allowed {
                    return Err(Error::BadFormat {
                        problem: "Sign of exponent given for a second time",
                        position: i,
                    });
                }
                exp_sign = Sign::from_is_negative(c == '-');
                exp_sign_allowed = false;
                exp_start = i + 1;
            } else if point_index.is_some() {
                return Err(Error::BadFormat {
                    problem: "Sign given after radix point",
                    position: i,
                });
            } else if !mant.is_empty() {
                return Err(Error::BadFormat {
                    problem: "Sign given after digits",
                    position: i,
                });
            } else {
                return Err(Error::BadFormat {
                    problem: "Sign of number given for a second time",
                    position: i,
                });
            }
            i += 1;
            continue;
        }

        if c == '.' {
            if in_exponent {
                return Err(Error::BadFormat {
                    problem: "Radix point given in exponent",
                    position: i,
                });
            }
            if point_index.is_some() {
                return Err(Error::BadFormat {
                    problem: "Radix point given for a second time",
                    position: i,
                });
            }
            point_index = Some(i);
            i += 1;
            continue;
        }

        if c.is_ascii_alphanumeric() {
            if in_exponent {
                exp_sign_allowed = false;
                exp_digits.push(c);
            } else if point_index.is_some() {
                frac.push(c);
            } else {
                mant.push(c);
            }
            i += 1;
            continue;
        }

        return Err(Error::BadFormat {
            problem: "Unrecognized character",
            position: i,
        });
    }

    let frac_start = point_index.map(|p| p + 1).unwrap_or(mant_start + mant.len());
    let digits = format!("{mant}{frac}");
    if digits.is_empty() || (seen_exp && exp_digits.is_empty()) {
        return Err(Error::BadFormat {
            problem: "Unrecognized character",
            position: n,
        });
    }
    let digit_value = BigUInt::from_str_radix(&digits, base).map_err(|e| {
        translate_digit_error(e, mant.len(), mant_start, frac_start)
    })?;

    let user_exponent: i64 = if exp_digits.is_empty() {
        0
    } else {
        let magnitude = BigUInt::from_str_radix(&exp_digits, 10)
            .map_err(|e| translate_simple_error(e, exp_start))?
            .value::<i64>()
            .map_err(|_| Error::ScalarOverflow)?;
        if exp_sign.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    };

    let nexp = frac.chars().count() as i64;
    let effective_exponent = user_exponent - nexp;
    let base_bu = BigUInt::from(base as u64);
    let (p, q) = if effective_exponent >= 0 {
        (digit_value * base_bu.pow(effective_exponent as u64), BigUInt::from(1u32))
    } else {
        (digit_value, base_bu.pow((-effective_exponent) as u64))
    };

    Ok(Parsed {
        sign: number_sign,
        p,
        q,
    })
}

/// [`BigUInt::from_str_radix`]'s position is relative to the concatenated
/// `mant + frac` digit string; translate it back to an offset in the
/// original input (the mantissa and fraction substrings aren't adjacent
/// there — a `.` and possibly a sign/prefix sit between them).
fn translate_digit_error(err: Error, mant_len: usize, mant_start: usize, frac_start: usize) -> Error {
    match err {
        Error::BadFormat { problem, position } => {
            let translated = if position < mant_len {
                mant_start + position
            } else {
                frac_start + (position - mant_len)
            };
            Error::BadFormat {
                problem,
                position: translated,
            }
        }
        other => other,
    }
}

fn translate_simple_error(err: Error, start: usize) -> Error {
    match err {
        Error::BadFormat { problem, position } => Error::BadFormat {
            problem,
            position: start + position,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Format;

    #[test]
    fn test_parse_simple_fraction_literal() {
        let a = Rational::parse("1/3");
        // "1/3" isn't part of the number grammar (no '/' token); the
        // fraction textual form is only a *render* format, so this must
        // fail to parse, not silently divide.
        assert!(a.is_err());
    }

    #[test]
    fn test_parse_decimal() {
        let a = Rational::parse("0.1").unwrap();
        assert_eq!(*a.numerator(), BigUInt::from(1u32));
        assert_eq!(*a.denominator(), BigUInt::from(10u32));
    }

    #[test]
    fn test_parse_negative_decimal() {
        let a = Rational::parse("-0.1").unwrap();
        assert!(a.is_negative());
        assert_eq!(*a.numerator(), BigUInt::from(1u32));
        assert_eq!(*a.denominator(), BigUInt::from(10u32));
    }

    #[test]
    fn test_parse_hex_autobase() {
        let a = Rational::parse("0xFF").unwrap();
        assert_eq!(a.to_string_as(Format::Fraction), "255/1");
    }

    #[test]
    fn test_parse_binary_autobase() {
        let a = Rational::parse("0b1010").unwrap();
        assert_eq!(a.to_string_as(Format::Fraction), "10/1");
    }

    #[test]
    fn test_parse_octal_autobase() {
        let a = Rational::parse("010").unwrap();
        assert_eq!(a.to_string_as(Format::Fraction), "8/1");
    }

    #[test]
    fn test_parse_exponent() {
        let a = Rational::parse("1.5e2").unwrap();
        assert_eq!(a.to_string_as(Format::Fraction), "150/1");
    }

    #[test]
    fn test_parse_negative_exponent() {
        let a = Rational::parse("15e-1").unwrap();
        assert_eq!(*a.numerator(), BigUInt::from(3u32));
        assert_eq!(*a.denominator(), BigUInt::from(2u32));
    }

    #[test]
    fn test_parse_second_radix_point() {
        let err = Rational::parse("1.2.3").unwrap_err();
        assert_eq!(
            err,
            Error::BadFormat {
                problem: "Radix point given for a second time",
                position: 3,
            }
        );
    }

    #[test]
    fn test_parse_radix_point_in_exponent() {
        let err = Rational::parse("1e2.3").unwrap_err();
        assert_eq!(
            err,
            Error::BadFormat {
                problem: "Radix point given in exponent",
                position: 3,
            }
        );
    }

    #[test]
    fn test_parse_second_exponent_marker_is_an_invalid_exponent_digit() {
        // The second 'e' isn't recognized as a marker (only the first
        // unmatched 'e' is); it becomes part of the exponent's digit
        // string, and 'e' (digit value 14) isn't valid in base 10.
        let err = Rational::parse("1e2e3").unwrap_err();
        assert_eq!(
            err,
            Error::BadFormat {
                problem: "digit is not valid in the given base",
                position: 3,
            }
        );
    }

    #[test]
    fn test_parse_sign_after_digits() {
        let err = Rational::parse("1-2").unwrap_err();
        assert_eq!(
            err,
            Error::BadFormat {
                problem: "Sign given after digits",
                position: 1,
            }
        );
    }

    #[test]
    fn test_parse_second_number_sign() {
        let err = Rational::parse("+-5").unwrap_err();
        assert_eq!(
            err,
            Error::BadFormat {
                problem: "Sign of number given for a second time",
                position: 1,
            }
        );
    }

    #[test]
    fn test_parse_sign_after_radix_point() {
        let err = Rational::parse("1.-2").unwrap_err();
        assert_eq!(
            err,
            Error::BadFormat {
                problem: "Sign given after radix point",
                position: 2,
            }
        );
    }

    #[test]
    fn test_parse_second_exponent_sign() {
        let err = Rational::parse("1e+-2").unwrap_err();
        assert_eq!(
            err,
            Error::BadFormat {
                problem: "Sign of exponent given for a second time",
                position: 3,
            }
        );
    }

    #[test]
    fn test_parse_unrecognized_character() {
        let err = Rational::parse("1#2").unwrap_err();
        assert_eq!(
            err,
            Error::BadFormat {
                problem: "Unrecognized character",
                position: 1,
            }
        );
    }

    #[test]
    fn test_parse_trailing_exponent_marker_with_no_digits_is_an_error() {
        let err = Rational::parse("1e").unwrap_err();
        assert_eq!(
            err,
            Error::BadFormat {
                problem: "Unrecognized character",
                position: 2,
            }
        );
    }

    #[test]
    fn test_parse_explicit_hex_base_treats_e_as_digit() {
        let mut a = Rational::zero();
        a.set_base(16).unwrap();
        a.set("1e", false).unwrap(); // base 16, no autobase: "1e" = 0x1e = 30
        assert_eq!(*a.numerator(), BigUInt::from(30u32));
    }
}
