//! `pow` and integer `root` for `Rational`.
//!
//! `root` uses a Newton iteration over `Rational` arithmetic itself; since
//! that iteration has no intrinsic termination bound for pathological
//! configurations (huge `maxradix` combined with a huge radicand), it is
//! capped at `MAX_ROOT_ITERATIONS` and surfaces [`Error::RootTooLarge`] if
//! convergence is not reached by then.

use crate::reduce::force_reduce;
use crate::Rational;
use exact_base::{Error, Result, Sign};
use exact_int::BigUInt;

/// Generous bound on Newton iterations for [`Rational::root`]. Each
/// iteration at worst doubles the number of correct digits, so this
/// comfortably covers any `maxradix` a caller could reasonably configure.
const MAX_ROOT_ITERATIONS: usize = 4096;

/// `self^e` for non-negative integer `e`, handling the base's sign: result
/// is negative iff `self` is negative and `e` is odd. Shared by the public
/// `pow` (integer case) and by `root`'s Newton formula (`x^(n-1)`).
fn integer_power(base: &Rational, e: u64) -> Rational {
    let mut out = base.clone();
    out.p = base.p.pow(e);
    out.q = base.q.pow(e);
    out.sign = if base.sign.is_negative() && e % 2 == 1 {
        Sign::Negative
    } else {
        Sign::Positive
    };
    out.reduce()
}

/// Reciprocal: swap numerator and denominator, keep the sign.
fn invert(mut r: Rational) -> Rational {
    core::mem::swap(&mut r.p, &mut r.q);
    r
}

impl Rational {
    /// `self ^ exp`. Fails with [`Error::Complex`] if `self` is negative
    /// and `exp`, in lowest terms, has an even denominator (an even root of
    /// a negative number). Fails with [`Error::DivByZero`] for `0 ^
    /// (negative exponent)`.
    pub fn pow(&self, exp: &Rational) -> Result<Rational> {
        if exp.is_zero() {
            return Ok(Rational::from(1u32));
        }
        if self.is_zero() {
            return if exp.is_negative() {
                Err(Error::DivByZero)
            } else {
                Ok(Rational::zero())
            };
        }

        if exp.is_integer() {
            let e = exp.p.value::<u64>().map_err(|_| Error::ScalarOverflow)?;
            let mut result = integer_power(self, e);
            if exp.is_negative() {
                result = invert(result);
            }
            return Ok(result);
        }

        // Fractional exponent: e = y/z, a^e = root(a^y, z).
        let z = exp.q.value::<u64>().map_err(|_| Error::ScalarOverflow)?;
        if self.is_negative() && z % 2 == 0 {
            return Err(Error::Complex);
        }
        let y = exp.p.value::<u64>().map_err(|_| Error::ScalarOverflow)?;
        let mut base_pow_y = integer_power(self, y);
        if exp.is_negative() {
            base_pow_y = invert(base_pow_y);
        }
        base_pow_y.root(z)
    }

    /// The (real) `n`-th root of `self`. Fails with [`Error::DivByZero`]
    /// for `n = 0`, [`Error::Complex`] for a negative radicand with even
    /// `n`, and [`Error::RootTooLarge`] if Newton's method does not
    /// converge within [`MAX_ROOT_ITERATIONS`].
    pub fn root(&self, n: u64) -> Result<Rational> {
        if n == 0 {
            return Err(Error::DivByZero);
        }
        if self.is_negative() && n % 2 == 0 {
            return Err(Error::Complex);
        }
        if self.is_zero() {
            return Ok(Rational::zero());
        }

        let result_sign = self.sign;
        let magnitude = self.clone().abs();

        let eps_denom = BigUInt::from(self.base as u64).pow(self.maxradix as u64);
        let eps = {
            let mut e = Rational::zero();
            e.p = BigUInt::from(1u32);
            e.q = eps_denom.clone();
            e.base = self.base;
            e
        };

        let mut x = initial_guess(&magnitude, n);
        let mut converged = false;
        for _ in 0..MAX_ROOT_ITERATIONS {
            let x_pow_n_minus_1 = integer_power(&x, n - 1);
            let a_over_xn1 = (magnitude.clone() / x_pow_n_minus_1)
                .expect("x is nonzero by construction");
            let n_minus_1_times_x = x.clone() * Rational::from(n - 1);
            let sum = a_over_xn1 + n_minus_1_times_x;
            let mut x_next = (sum / Rational::from(n)).expect("n is nonzero, checked above");

            // Cap working precision: force the denominator down to the
            // target epsilon's denominator once it grows past it.
            if x_next.q > eps_denom {
                x_next.p = force_reduce(&x_next.p, &x_next.q, &eps_denom, x_next.sign, x_next.round);
                x_next.q = eps_denom.clone();
            }

            let diff = (x_next.clone() - x.clone()).abs();
            x = x_next;
            if diff < eps {
                converged = true;
                break;
            }
        }

        if !converged {
            return Err(Error::RootTooLarge);
        }
        x.sign = if x.is_zero() { Sign::Positive } else { result_sign };
        Ok(x)
    }
}

/// Seed the Newton iteration: for `|magnitude| > 1`, double a running guess
/// until `guess^n >= magnitude`; otherwise start at 1.
fn initial_guess(magnitude: &Rational, n: u64) -> Rational {
    let one = Rational::from(1u32);
    if *magnitude <= one {
        return one;
    }
    let mut guess = one;
    loop {
        guess = guess.clone() * Rational::from(2u32);
        if integer_power(&guess, n) >= *magnitude {
            return guess;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow_integer() {
        let a = Rational::from(2u32);
        let e = Rational::from(10u32);
        assert_eq!(a.pow(&e).unwrap().value_i64(), 1024);
    }

    #[test]
    fn test_pow_zero_exponent() {
        let a = Rational::from(5u32);
        let e = Rational::zero();
        assert_eq!(a.pow(&e).unwrap().value_i64(), 1);
    }

    #[test]
    fn test_pow_negative_exponent() {
        let a = Rational::from(2u32);
        let mut e = Rational::from(1u32);
        e.sign = Sign::Negative; // -1
        let result = a.pow(&e).unwrap();
        assert_eq!(*result.numerator(), BigUInt::from(1u32));
        assert_eq!(*result.denominator(), BigUInt::from(2u32));
    }

    #[test]
    fn test_root_perfect_square() {
        let a = Rational::from(4u32);
        let r = a.root(2).unwrap();
        assert_eq!(r.value_i64(), 2);
    }

    #[test]
    fn test_root_of_two_converges() {
        let mut a = Rational::from(2u32);
        a.maxradix = 15;
        let r = a.root(2).unwrap();
        // r^2 should land within 10^-15 of 2.
        let diff = ((r.clone() * r.clone()) - Rational::from(2u32)).abs();
        let mut bound = Rational::zero();
        bound.p = BigUInt::from(1u32);
        bound.q = BigUInt::from(10u64).pow(15);
        assert!(diff < bound);
    }

    #[test]
    fn test_root_negative_even_is_complex() {
        let mut a = Rational::from(4u32);
        a.sign = Sign::Negative;
        assert_eq!(a.root(2), Err(Error::Complex));
    }

    #[test]
    fn test_root_zero_n_is_div_by_zero() {
        let a = Rational::from(4u32);
        assert_eq!(a.root(0), Err(Error::DivByZero));
    }
}
