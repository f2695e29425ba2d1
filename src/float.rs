//! IEEE-754 float bridge: exact conversion between `Rational` and
//! binary32 (`f32`), binary64 (`f64`), and binary80 (x87 extended,
//! [`Extended80`]) by decoding/encoding the sign/exponent/mantissa bit
//! fields directly — no float arithmetic is ever performed, only integer
//! shifts and comparisons over `BigUInt`, so the conversion is exact in
//! both directions for every finite value.
//!
//! Rust has no native 80-bit float type, so binary80 values are carried as
//! [`Extended80`], a thin wrapper around the format's 10 raw bytes (x87
//! layout: 64 explicit mantissa bits, then 15 exponent bits, then the sign
//! bit) — enough to exercise the same bit-for-bit round-trip property the
//! other two formats get from `f32`/`f64` directly, without depending on a
//! host C ABI `long double`.

use crate::Rational;
use core::cmp::Ordering;
use exact_base::{BitTest, Error, Result, RoundingMode, Sign};
use exact_int::BigUInt;

/// Raw bytes of an IEEE-754 binary80 (x87 extended precision) value: byte
/// 0-7 the 64-bit explicit mantissa (little-endian), byte 8 the low 8 bits
/// of the 15-bit exponent, byte 9 the sign bit (MSB) plus the exponent's
/// high 7 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extended80([u8; 10]);

impl Extended80 {
    #[inline]
    pub fn from_bits(bytes: [u8; 10]) -> Extended80 {
        Extended80(bytes)
    }

    #[inline]
    pub fn to_bits(self) -> [u8; 10] {
        self.0
    }

    fn fields(self) -> (bool, u64, u64) {
        let mantissa = u64::from_le_bytes(self.0[0..8].try_into().expect("8 bytes"));
        let exp_lo = self.0[8] as u64;
        let exp_hi = (self.0[9] & 0x7F) as u64;
        let exponent = (exp_hi << 8) | exp_lo;
        let sign = (self.0[9] & 0x80) != 0;
        (sign, exponent, mantissa)
    }

    fn from_fields(sign: bool, exponent: u64, mantissa: u64) -> Extended80 {
        let mut bytes = [0u8; 10];
        bytes[0..8].copy_from_slice(&mantissa.to_le_bytes());
        bytes[8] = (exponent & 0xFF) as u8;
        bytes[9] = ((sign as u8) << 7) | (((exponent >> 8) & 0x7F) as u8);
        Extended80(bytes)
    }
}

/// Format description: stored mantissa bit width (not counting the
/// implicit leading bit, when there is one), exponent field width, bias,
/// and whether the leading mantissa bit is stored explicitly (binary80)
/// rather than implied (binary32/binary64).
struct FloatLayout {
    /// Total precision including any implicit leading bit (24/53/64).
    mantissa_bits: u32,
    exponent_bits: u32,
    bias: i64,
    explicit_leading: bool,
}

const BINARY32: FloatLayout = FloatLayout {
    mantissa_bits: 24,
    exponent_bits: 8,
    bias: 127,
    explicit_leading: false,
};
const BINARY64: FloatLayout = FloatLayout {
    mantissa_bits: 53,
    exponent_bits: 11,
    bias: 1023,
    explicit_leading: false,
};
const BINARY80: FloatLayout = FloatLayout {
    mantissa_bits: 64,
    exponent_bits: 15,
    bias: 16383,
    explicit_leading: true,
};

/// Compare `p/q` against `2^e` without doing any division.
fn cmp_ratio_to_power_of_two(p: &BigUInt, q: &BigUInt, e: i64) -> Ordering {
    if e >= 0 {
        p.cmp(&(q.clone() << e as usize))
    } else {
        (p.clone() << (-e) as usize).cmp(q)
    }
}

fn decode(sign_bit: bool, exp_field: u64, mant_field: u64, layout: &FloatLayout) -> Result<Rational> {
    let max_exp = (1u64 << layout.exponent_bits) - 1;
    if exp_field == max_exp {
        return if mant_field != 0 {
            Err(Error::NaN)
        } else if sign_bit {
            Err(Error::NegativeInfinity)
        } else {
            Err(Error::PositiveInfinity)
        };
    }

    let q = BigUInt::from(1u64) << (layout.mantissa_bits as usize - 1);
    let (mut p, shift_exp) = if exp_field == 0 {
        (BigUInt::from(mant_field), 1 - layout.bias)
    } else if layout.explicit_leading {
        (BigUInt::from(mant_field), exp_field as i64 - layout.bias)
    } else {
        (q.clone() + BigUInt::from(mant_field), exp_field as i64 - layout.bias)
    };
    let mut q = q;
    if shift_exp >= 0 {
        p <<= shift_exp as usize;
    } else {
        q <<= (-shift_exp) as usize;
    }

    let mut out = Rational::zero();
    out.sign = Sign::from_is_negative(sign_bit);
    out.p = p;
    out.q = q;
    Ok(out.reduce())
}

fn encode(r: &Rational, layout: &FloatLayout) -> (bool, u64, u64) {
    let sign_bit = r.is_negative();
    if r.is_zero() {
        return (sign_bit, 0, 0);
    }

    let max_exp = (1u64 << layout.exponent_bits) - 1;
    let target = layout.mantissa_bits as i64;

    // Find e with 2^e <= p/q < 2^(e+1): seed from the bit-length gap, then
    // nudge by at most one step in either direction (bit_len only gives
    // floor(log2)+1, so the seed can be off by one).
    let mut e = r.p.bit_len() as i64 - r.q.bit_len() as i64;
    loop {
        if cmp_ratio_to_power_of_two(&r.p, &r.q, e + 1) != Ordering::Less {
            e += 1;
        } else if cmp_ratio_to_power_of_two(&r.p, &r.q, e) == Ordering::Less {
            e -= 1;
        } else {
            break;
        }
    }

    let mut biased = e + layout.bias;
    let mut subnormal = biased <= 0;
    let eff_exp = if subnormal { 1 - layout.bias } else { e };

    let shift_amount = (target - 1) - eff_exp;
    let (num, den) = if shift_amount >= 0 {
        (r.p.clone() << shift_amount as usize, r.q.clone())
    } else {
        (r.p.clone(), r.q.clone() << (-shift_amount) as usize)
    };
    let one = BigUInt::from(1u32);
    let mut mantissa = crate::reduce::force_reduce(&num, &den, &one, Sign::Positive, RoundingMode::Even);

    let stored_bits_before_promotion = if subnormal { target - 1 } else { target };
    if mantissa.bit_len() as i64 > stored_bits_before_promotion {
        mantissa = mantissa >> 1;
        biased += 1;
        subnormal = biased <= 0;
    }

    if biased >= max_exp as i64 {
        return (sign_bit, max_exp, 0); // saturate to infinity
    }
    let biased = if subnormal { 0 } else { biased.max(0) as u64 };

    let stored = if subnormal {
        mantissa
    } else if layout.explicit_leading {
        mantissa
    } else {
        (mantissa - (BigUInt::from(1u32) << (target as usize - 1)))
            .expect("normal mantissa includes the implicit leading bit")
    };
    let stored = stored.value::<u64>().expect("mantissa fits in 64 bits by construction");

    (sign_bit, biased, stored)
}

impl Rational {
    /// Convert to the nearest `f32`, rounding ties to even. Values whose
    /// magnitude exceeds binary32's range saturate to `+-infinity`.
    pub fn to_f32(&self) -> f32 {
        let (sign, exp, mant) = encode(self, &BINARY32);
        let bits = ((sign as u32) << 31) | ((exp as u32) << 23) | (mant as u32);
        f32::from_bits(bits)
    }

    /// Convert to the nearest `f64`, rounding ties to even.
    pub fn to_f64(&self) -> f64 {
        let (sign, exp, mant) = encode(self, &BINARY64);
        let bits = ((sign as u64) << 63) | (exp << 52) | mant;
        f64::from_bits(bits)
    }

    /// Convert to the nearest binary80 (x87 extended) value.
    pub fn to_extended80(&self) -> Extended80 {
        let (sign, exp, mant) = encode(self, &BINARY80);
        Extended80::from_fields(sign, exp, mant)
    }
}

/// Fails with [`Error::PositiveInfinity`]/[`Error::NegativeInfinity`]/
/// [`Error::NaN`] for a non-finite input.
impl TryFrom<f32> for Rational {
    type Error = Error;

    fn try_from(value: f32) -> Result<Rational> {
        let bits = value.to_bits();
        let sign = (bits >> 31) != 0;
        let exp = ((bits >> 23) & 0xFF) as u64;
        let mant = (bits & 0x007F_FFFF) as u64;
        decode(sign, exp, mant, &BINARY32)
    }
}

impl TryFrom<f64> for Rational {
    type Error = Error;

    fn try_from(value: f64) -> Result<Rational> {
        let bits = value.to_bits();
        let sign = (bits >> 63) != 0;
        let exp = (bits >> 52) & 0x7FF;
        let mant = bits & 0x000F_FFFF_FFFF_FFFF;
        decode(sign, exp, mant, &BINARY64)
    }
}

impl TryFrom<Extended80> for Rational {
    type Error = Error;

    fn try_from(value: Extended80) -> Result<Rational> {
        let (sign, exp, mant) = value.fields();
        decode(sign, exp, mant, &BINARY80)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Format;

    #[test]
    fn test_from_f64_simple_fraction() {
        let r = Rational::try_from(0.5f64).unwrap();
        assert_eq!(r.to_string_as(Format::Fraction), "1/2");
    }

    #[test]
    fn test_from_f64_one_tenth_exact_binary_fraction() {
        // The double nearest 0.1 is a dyadic fraction with a 53-bit
        // numerator, not 1/10 — decoding must surface that exact value.
        let r = Rational::try_from(0.1f64).unwrap();
        assert_eq!(
            r.to_string_as(Format::Fraction),
            "3602879701896397/36028797018963968"
        );
    }

    #[test]
    fn test_f64_round_trip() {
        for value in [
            0.1f64,
            -0.1,
            1.0,
            -1.0,
            123.456,
            1e100,
            1e-100,
            f64::MIN_POSITIVE,
            f64::from_bits(1), // smallest positive subnormal
            0.0,
        ] {
            let r = Rational::try_from(value).unwrap();
            assert_eq!(r.to_f64(), value, "round-trip failed for {value}");
        }
    }

    #[test]
    fn test_f32_round_trip() {
        for value in [0.1f32, -0.1, 1.0, 2.5, 65536.0, f32::MIN_POSITIVE, 0.0] {
            let r = Rational::try_from(value).unwrap();
            assert_eq!(r.to_f32(), value, "round-trip failed for {value}");
        }
    }

    #[test]
    fn test_f64_infinity_and_nan_rejected() {
        assert_eq!(Rational::try_from(f64::INFINITY), Err(Error::PositiveInfinity));
        assert_eq!(Rational::try_from(f64::NEG_INFINITY), Err(Error::NegativeInfinity));
        assert_eq!(Rational::try_from(f64::NAN), Err(Error::NaN));
    }

    #[test]
    fn test_f64_zero_round_trip_preserves_sign() {
        let pos = Rational::try_from(0.0f64).unwrap();
        assert!(pos.is_zero());
        assert_eq!(pos.to_f64(), 0.0);
        // Zero is always canonically positive in this type, so the IEEE
        // negative-zero distinction cannot round-trip through it.
        let neg = Rational::try_from(-0.0f64).unwrap();
        assert!(neg.is_zero());
        assert!(!neg.is_positive() && !neg.sign().is_negative());
    }

    #[test]
    fn test_extended80_round_trip() {
        let r = Rational::try_from(1.5f64).unwrap();
        let ext = r.to_extended80();
        let back = Rational::try_from(ext).unwrap();
        assert_eq!(back.to_f64(), 1.5);
    }
}
