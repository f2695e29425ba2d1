//! Base conversion: transcode a most-significant-digit-first digit vector
//! from one base to another via repeated long division.
//!
//! The same routine drives both directions: parsing feeds it
//! `(digits in user base, LIMB_BASE)` to get the internal little-endian limb
//! vector (after reversing); rendering feeds it `(limbs reversed to MSD
//! order, display base)` to get the string's digits.

use crate::Word;

/// Divide a digit vector (most-significant digit first, values in
/// `[0, base)`) by a single scalar divisor, returning the quotient (same
/// base, msd-first, no leading zero digits unless the quotient is zero) and
/// the remainder.
///
/// `base` and `divisor` must both fit in a `u64` product without overflow,
/// which holds for any `base, divisor <= LIMB_BASE` (`LIMB_BASE^2` fits in
/// `u64` many times over).
fn divmod_digits_by_scalar(digits: &[u32], base: u64, divisor: u64) -> (Vec<u32>, u64) {
    let mut quotient = Vec::with_capacity(digits.len());
    let mut rem: u64 = 0;
    for &d in digits {
        let cur = rem * base + d as u64;
        quotient.push((cur / divisor) as u32);
        rem = cur % divisor;
    }
    // Drop leading (most-significant) zero digits produced by the division.
    let first_nonzero = quotient.iter().position(|&d| d != 0).unwrap_or(quotient.len());
    (quotient[first_nonzero..].to_vec(), rem)
}

/// Transcode `digits` (most-significant-first, values in `[0, from_base)`)
/// into the equivalent most-significant-first digit vector in `to_base`.
///
/// An empty input (or all-zero input) yields `[0]`.
pub(crate) fn convert_base(digits: &[u32], from_base: u64, to_base: u64) -> Vec<u32> {
    let mut value = digits.to_vec();
    // Strip any leading zeros up front so the "is it zero yet" check below
    // is just "is the vector empty".
    let first_nonzero = value.iter().position(|&d| d != 0).unwrap_or(value.len());
    value.drain(..first_nonzero);

    let mut out_lsd_first = Vec::new();
    while !value.is_empty() {
        let (q, r) = divmod_digits_by_scalar(&value, from_base, to_base);
        out_lsd_first.push(r as u32);
        value = q;
    }
    if out_lsd_first.is_empty() {
        out_lsd_first.push(0);
    }
    out_lsd_first.reverse();
    out_lsd_first
}

/// Parse a most-significant-first digit vector expressed in `from_base`
/// into the crate's internal little-endian limb vector (base `LIMB_BASE`).
pub(crate) fn digits_to_limbs(digits: &[u32], from_base: u64) -> Vec<Word> {
    let mut limbs = convert_base(digits, from_base, crate::LIMB_BASE);
    limbs.reverse(); // msd-first -> little-endian
    crate::limb::trim(&mut limbs);
    limbs
}

/// Render the crate's internal little-endian limb vector as a
/// most-significant-first digit vector in `to_base`.
pub(crate) fn limbs_to_digits(limbs: &[Word], to_base: u64) -> Vec<u32> {
    let mut msd_first: Vec<u32> = limbs.iter().rev().copied().collect();
    if msd_first.is_empty() {
        msd_first.push(0);
    }
    convert_base(&msd_first, crate::LIMB_BASE, to_base)
}
