//! Trait definitions for ring-ish operations shared between `BigUInt` and
//! `Rational`.

/// Compute quotient and remainder at the same time.
///
/// # Example
/// ```
/// use exact_base::DivRem;
/// assert_eq!(23u32.div_rem(10), (2, 3));
/// ```
pub trait DivRem<Rhs = Self> {
    type OutputDiv;
    type OutputRem;

    fn div_rem(self, rhs: Rhs) -> (Self::OutputDiv, Self::OutputRem);
}

impl DivRem for u32 {
    type OutputDiv = u32;
    type OutputRem = u32;

    #[inline]
    fn div_rem(self, rhs: u32) -> (u32, u32) {
        (self / rhs, self % rhs)
    }
}

/// Compute the greatest common divisor.
///
/// # Example
/// ```
/// use exact_base::Gcd;
/// assert_eq!(12u64.gcd(10u64), 2);
/// ```
///
/// # Panics
///
/// Implementations panic if both operands are zero, mirroring the
/// mathematical fact that `gcd(0, 0)` is undefined.
pub trait Gcd<Rhs = Self> {
    type Output;

    fn gcd(self, rhs: Rhs) -> Self::Output;
}

impl Gcd for u64 {
    type Output = u64;

    fn gcd(self, rhs: u64) -> u64 {
        assert!(self != 0 || rhs != 0, "gcd(0, 0) is undefined");
        let (mut a, mut b) = (self, rhs);
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    }
}

/// Compute the greatest common divisor together with the Bezout
/// coefficients `(g, x, y)` such that `a*x + b*y = g`.
pub trait ExtendedGcd<Rhs = Self> {
    type OutputGcd;
    type OutputCoeff;

    fn gcd_ext(self, rhs: Rhs) -> (Self::OutputGcd, Self::OutputCoeff, Self::OutputCoeff);
}

impl ExtendedGcd for i64 {
    type OutputGcd = i64;
    type OutputCoeff = i64;

    fn gcd_ext(self, rhs: i64) -> (i64, i64, i64) {
        let (mut old_r, mut r) = (self, rhs);
        let (mut old_s, mut s) = (1i64, 0i64);
        let (mut old_t, mut t) = (0i64, 1i64);
        while r != 0 {
            let quotient = old_r / r;
            (old_r, r) = (r, old_r - quotient * r);
            (old_s, s) = (s, old_s - quotient * s);
            (old_t, t) = (t, old_t - quotient * t);
        }
        (old_r, old_s, old_t)
    }
}
