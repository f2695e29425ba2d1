//! `exact`: arbitrary-precision signed rational arithmetic.
//!
//! [`Rational`] represents an exact fraction `sign * p / q` over two
//! [`BigUInt`](exact_int::BigUInt)s, with a configurable display base,
//! rounding policy, and an optional fixed-point mode (denominator pinned to
//! either a power of the display base or a caller-chosen value). The
//! numeric core (`BigUInt`, half-word-limb arithmetic, base conversion) is
//! the sibling `exact-int` crate; the shared error/rounding/sign
//! vocabulary lives in `exact-base`, factored out so it can be shared
//! without duplication if another numeric type joins this workspace later.

mod arith;
mod cmp;
mod convert;
mod fixed;
mod float;
mod fmt;
mod parse;
mod pow;
mod reduce;
mod shift;

pub use exact_base::{Error, Result, RoundingMode};
pub use exact_int::BigUInt;
pub use float::Extended80;

use exact_base::Sign;

/// Which denominator a fixed-point [`Rational`] is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixType {
    /// `q` is forced to `base^pointpos`.
    Radix,
    /// `q` is forced to the caller-supplied `fixq`.
    Denom,
}

/// Output style for [`Rational::to_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `p_in_base / q_in_base`.
    Fraction,
    /// Whole-plus-radix-point rendering in the display base.
    Radix,
    /// `<Radix> <Fraction>`, space-separated.
    Both,
    /// Whatever `self.format` currently holds.
    Default,
}

/// An arbitrary-precision signed rational number.
///
/// Always kept in canonical form: `q >= 1`, and `gcd(p, q) == 1` unless
/// fixed-point mode is active (in which case `q` is pinned to the fixed
/// target and reduction only rounds `p`, see [`crate::reduce`]). Zero is
/// canonically `sign = Positive, p = 0, q = 1`.
#[derive(Debug, Clone)]
pub struct Rational {
    pub(crate) sign: Sign,
    pub(crate) p: BigUInt,
    pub(crate) q: BigUInt,
    pub(crate) base: u32,
    pub(crate) pointpos: usize,
    pub(crate) maxradix: usize,
    pub(crate) fix: bool,
    pub(crate) fixtype: FixType,
    pub(crate) fixq: BigUInt,
    pub(crate) format: Format,
    pub(crate) round: RoundingMode,
}

impl Rational {
    /// `0`, display base 10, ten significant radix digits, `EVEN` rounding,
    /// not fixed, `RADIX` output format.
    pub fn zero() -> Rational {
        Rational {
            sign: Sign::Positive,
            p: BigUInt::zero(),
            q: BigUInt::from(1u32),
            base: 10,
            pointpos: 0,
            maxradix: 10,
            fix: false,
            fixtype: FixType::Radix,
            fixq: BigUInt::from(1u32),
            format: Format::Radix,
            round: RoundingMode::Even,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.p.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign.is_positive() && !self.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.q == BigUInt::from(1u32)
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        self.is_integer() && self.p.is_even()
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        self.is_integer() && self.p.is_odd()
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn numerator(&self) -> &BigUInt {
        &self.p
    }

    #[inline]
    pub fn denominator(&self) -> &BigUInt {
        &self.q
    }

    #[inline]
    pub fn base(&self) -> u32 {
        self.base
    }

    #[inline]
    pub fn maxradix(&self) -> usize {
        self.maxradix
    }

    #[inline]
    pub fn set_maxradix(&mut self, maxradix: usize) {
        self.maxradix = maxradix;
    }

    #[inline]
    pub fn round_mode(&self) -> RoundingMode {
        self.round
    }

    #[inline]
    pub fn set_round_mode(&mut self, round: RoundingMode) {
        self.round = round;
    }

    #[inline]
    pub fn format(&self) -> Format {
        self.format
    }

    #[inline]
    pub fn set_format(&mut self, format: Format) {
        self.format = format;
    }
}

impl Default for Rational {
    #[inline]
    fn default() -> Rational {
        Rational::zero()
    }
}
