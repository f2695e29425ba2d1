//! `BigUInt`: an arbitrary-precision non-negative integer stored as a
//! little-endian vector of half-word limbs.
//!
//! The limb word is `Word = u32`; intermediate double-width arithmetic (a
//! limb product, a carry accumulator) uses `DoubleWord = u64`. Limbs are
//! kept in `[0, LIMB_BASE)` where `LIMB_BASE = 2^16`, half of `Word`'s bit
//! width, so that any two-limb product fits in a `DoubleWord` without
//! widening tricks.
//!
//! A single numeric core crate, re-exported by the workspace root, with its
//! error/sign/rounding vocabulary factored out into a shared `exact-base`
//! crate instead of duplicated locally.

mod add_ops;
mod bit_ops;
mod cmp_ops;
mod convert;
mod div_ops;
mod fmt;
mod gcd_ops;
mod helper_macros;
mod limb;
mod mul_ops;
mod parse;
mod pow_ops;
mod radix;
mod shift_ops;

pub use exact_base::{Error, Result};

/// A single limb: a value in `[0, LIMB_BASE)`.
pub type Word = u32;

/// Double-width accumulator used for carries and limb products.
pub type DoubleWord = u64;

/// The internal limb base, `2^16`. Also the largest display/parse base
/// `BigUInt` can represent natively (`MAX_BASE`).
pub(crate) const LIMB_BASE: u64 = 1 << 16;

/// Largest base `BigUInt::set_base`/`from_str_radix` will accept.
pub const MAX_BASE: u32 = LIMB_BASE as u32;

// The half-word invariant this whole crate leans on: any two limbs' product
// must fit in a `DoubleWord` without widening tricks.
static_assertions::const_assert!((LIMB_BASE - 1) * (LIMB_BASE - 1) < DoubleWord::MAX as u64);

/// Default display base for a freshly constructed `BigUInt`.
const DEFAULT_BASE: u32 = 10;

/// An unbounded non-negative integer.
///
/// Internally a canonical little-endian digit vector in base `LIMB_BASE`
/// (no trailing zero limb; the empty vector represents zero) plus a display
/// base used by [`BigUInt::to_string`] and [`std::fmt::Display`]. The base
/// is a presentation attribute: arithmetic ignores it and the result
/// carries the left operand's base.
#[derive(Clone, Debug)]
pub struct BigUInt {
    pub(crate) limbs: Vec<Word>,
    base: u32,
}

impl BigUInt {
    /// The value zero, display base 10.
    #[inline]
    pub fn zero() -> BigUInt {
        BigUInt {
            limbs: Vec::new(),
            base: DEFAULT_BASE,
        }
    }

    /// Construct directly from an already-canonical little-endian limb
    /// vector. Only used internally and by sibling modules in this crate;
    /// callers outside the crate go through `From`/`from_str_radix`.
    #[inline]
    pub(crate) fn from_limbs(limbs: Vec<Word>) -> BigUInt {
        debug_assert!(limbs.last() != Some(&0), "limbs must be canonical");
        BigUInt {
            limbs,
            base: DEFAULT_BASE,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        self.limbs.first().copied().unwrap_or(0) % 2 == 0
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// The display base used by [`Self::to_string`]/[`std::fmt::Display`].
    #[inline]
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Set the display base. Fails with [`Error::BaseOutOfRange`] unless
    /// `2 <= base <= MAX_BASE`.
    pub fn set_base(&mut self, base: u32) -> Result<()> {
        if !(2..=MAX_BASE).contains(&base) {
            return Err(Error::BaseOutOfRange);
        }
        self.base = base;
        Ok(())
    }

    /// The size of the alphabetic digit table (`0-9A-Z`): the largest base
    /// a digit *string* can exercise one character per digit, independent
    /// of `MAX_BASE`.
    #[inline]
    pub fn max_input_base() -> u32 {
        36
    }
}

impl Default for BigUInt {
    #[inline]
    fn default() -> BigUInt {
        BigUInt::zero()
    }
}

impl PartialEq for BigUInt {
    #[inline]
    fn eq(&self, other: &BigUInt) -> bool {
        self.limbs == other.limbs
    }
}
impl Eq for BigUInt {}

impl core::hash::Hash for BigUInt {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.limbs.hash(state);
    }
}
