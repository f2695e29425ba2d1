//! `Rational` rendering: `RADIX`, `FRACTION`, `BOTH`, and `DEFAULT`
//! output styles.

use crate::reduce::force_reduce;
use crate::{FixType, Format, Rational};
use core::fmt;
use exact_int::BigUInt;

impl Rational {
    /// Render using `self.format` (resolving `Format::Default` to itself —
    /// `Default` only has meaning as an *argument*, never as the stored
    /// field value callers actually render against).
    pub fn to_string(&self) -> String {
        self.to_string_as(self.format)
    }

    /// Render in an explicit format, independent of `self.format`.
    pub fn to_string_as(&self, format: Format) -> String {
        match format {
            Format::Fraction => self.fraction_string(),
            Format::Radix => self.radix_string(),
            Format::Both => format!("{} {}", self.radix_string(), self.fraction_string()),
            Format::Default => self.to_string_as(self.format),
        }
    }

    fn fraction_string(&self) -> String {
        let sign = if self.sign.is_negative() { "-" } else { "" };
        format!(
            "{sign}{}/{}",
            self.p.to_string_radix(self.base),
            self.q.to_string_radix(self.base)
        )
    }

    fn radix_string(&self) -> String {
        if self.is_integer() {
            let mut s = String::new();
            if self.sign.is_negative() {
                s.push('-');
            }
            s.push_str(&self.p.to_string_radix(self.base));
            if self.fix && self.fixtype == FixType::Radix && self.pointpos > 0 {
                s.push('.');
                s.push_str(&"0".repeat(self.pointpos));
            }
            return s;
        }

        let k = self.fraction_digit_count();
        let target_q = BigUInt::from(self.base as u64).pow(k as u64);
        let scaled = force_reduce(&self.p, &self.q, &target_q, self.sign, self.round);

        let mut digits = scaled.to_string_radix(self.base);
        if digits.len() < k + 1 {
            digits = "0".repeat(k + 1 - digits.len()) + &digits;
        }
        let split_at = digits.len() - k;
        let whole_str = &digits[..split_at];
        let mut frac_str = digits[split_at..].to_string();

        let keep_trailing_zeros = self.fix && self.fixtype == FixType::Radix;
        if !keep_trailing_zeros {
            while frac_str.ends_with('0') {
                frac_str.pop();
            }
        }

        let mut s = String::new();
        if self.sign.is_negative() {
            s.push('-');
        }
        s.push_str(whole_str);
        if !frac_str.is_empty() {
            s.push('.');
            s.push_str(&frac_str);
        }
        s
    }

    /// How many digits to render after the radix point: `pointpos` exactly
    /// when fixed to `RADIX`, otherwise simulate the repeated
    /// multiply-divide-remainder loop to find the natural stop — either the
    /// remainder reaches zero, or `maxradix` *significant* digits (leading
    /// zeros before the first nonzero fractional digit don't count) have
    /// been produced.
    fn fraction_digit_count(&self) -> usize {
        if self.fix && self.fixtype == FixType::Radix {
            return self.pointpos;
        }
        let (whole, mut remainder) = self.p.div_rem(&self.q).expect("denominator is nonzero");
        let mut seen_nonzero = !whole.is_zero();
        let mut significant = 0usize;
        let mut k = 0usize;
        let base = BigUInt::from(self.base as u64);
        while !remainder.is_zero() && significant < self.maxradix {
            remainder = remainder * base.clone();
            let (digit, next_remainder) = remainder.div_rem(&self.q).expect("denominator is nonzero");
            remainder = next_remainder;
            k += 1;
            if !digit.is_zero() {
                seen_nonzero = true;
            }
            if seen_nonzero {
                significant += 1;
            }
        }
        k
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_third_radix() {
        let mut a = Rational::from(1u32);
        a.q = BigUInt::from(3u32);
        a.maxradix = 10;
        assert_eq!(a.to_string_as(Format::Radix), "0.3333333333");
    }

    #[test]
    fn test_one_third_fraction() {
        let mut a = Rational::from(1u32);
        a.q = BigUInt::from(3u32);
        assert_eq!(a.to_string_as(Format::Fraction), "1/3");
    }

    #[test]
    fn test_negative_tenth() {
        use exact_base::Sign;
        let mut a = Rational::from(1u32);
        a.q = BigUInt::from(10u32);
        a.sign = Sign::Negative;
        assert_eq!(a.to_string_as(Format::Radix), "-0.1");
    }

    #[test]
    fn test_both_format() {
        let mut a = Rational::from(1u32);
        a.q = BigUInt::from(2u32);
        assert_eq!(a.to_string_as(Format::Both), "0.5 1/2");
    }

    #[test]
    fn test_integer_renders_without_point() {
        let a = Rational::from(42u32);
        assert_eq!(a.to_string_as(Format::Radix), "42");
    }

    #[test]
    fn test_pow_two_hundred_as_fraction() {
        let a = BigUInt::from(2u32).pow(100);
        let r = Rational::from(a);
        assert_eq!(
            r.to_string_as(Format::Fraction),
            "1267650600228229401496703205376/1"
        );
    }
}
