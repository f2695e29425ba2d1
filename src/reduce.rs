//! Normalize/reduce: bringing two operands to a common denominator,
//! and collapsing a single `(p, q)` pair back to canonical (or
//! fixed-target) form.

use crate::{FixType, Rational};
use exact_base::{RoundingMode, Sign};
use exact_int::BigUInt;

/// Bring `a` and `b` to a common denominator `lcm(a.q, b.q)`, scaling each
/// numerator accordingly. Returns `(p_a', p_b', common_q)`; signs are left
/// untouched by this step.
pub(crate) fn normalize(a: &Rational, b: &Rational) -> (BigUInt, BigUInt, BigUInt) {
    let g = a.q.gcd(&b.q);
    let lcm = (a.q.clone() / g.clone())
        .expect("gcd divides a.q")
        * b.q.clone();
    let pa = a.p.clone() * (b.q.clone() / g.clone()).expect("gcd divides b.q");
    let pb = b.p.clone() * (a.q.clone() / g).expect("gcd divides a.q");
    (pa, pb, lcm)
}

/// Decide whether rounding should increment the truncated magnitude, given
/// remainder `r` against denominator `q` (`0 <= r < q`), the receiver's
/// sign, rounding mode, and the truncated magnitude `p_trunc` (needed only
/// by `Even`, to test the parity of the candidate incremented value).
fn should_round_up(mode: RoundingMode, sign: Sign, r: &BigUInt, q: &BigUInt, p_trunc: &BigUInt) -> bool {
    if r.is_zero() {
        return false;
    }
    match mode {
        RoundingMode::Up => sign.is_positive(),
        RoundingMode::Down => sign.is_negative(),
        RoundingMode::TowardZero => false,
        RoundingMode::FromZero => true,
        RoundingMode::Normal => {
            let twice_r = r.clone() + r.clone();
            twice_r >= *q
        }
        RoundingMode::Even => {
            let twice_r = r.clone() + r.clone();
            if twice_r > *q {
                true
            } else if twice_r == *q {
                let incremented = p_trunc.clone() + BigUInt::from(1u32);
                incremented.is_odd()
            } else {
                false
            }
        }
    }
}

/// Force `(p, q)` to denominator `target_q`, applying `round` per the
/// table above. Returns the new numerator; the caller sets `q := target_q`.
pub(crate) fn force_reduce(
    p: &BigUInt,
    q: &BigUInt,
    target_q: &BigUInt,
    sign: Sign,
    round: RoundingMode,
) -> BigUInt {
    let scaled = p.clone() * target_q.clone();
    let (p_trunc, r) = scaled.div_rem(q).expect("denominator is nonzero");
    if should_round_up(round, sign, &r, q, &p_trunc) {
        p_trunc + BigUInt::from(1u32)
    } else {
        p_trunc
    }
}

impl Rational {
    /// Divide `p` and `q` by `gcd(p, q)` (canonical reduction), or, when
    /// fixed-point mode is active, force-reduce to the fixed target
    /// denominator with rounding. Then canonicalize zero (`p = 0 => q = 1,
    /// sign = +`).
    pub(crate) fn reduce(mut self) -> Rational {
        if self.p.is_zero() {
            self.q = BigUInt::from(1u32);
            self.sign = Sign::Positive;
            return self;
        }
        if self.fix {
            let target = self.fix_target_denominator();
            self.p = force_reduce(&self.p, &self.q, &target, self.sign, self.round);
            self.q = target;
        } else {
            let g = self.p.gcd(&self.q);
            self.p = (self.p / g.clone()).expect("gcd divides p");
            self.q = (self.q / g).expect("gcd divides q");
        }
        if self.p.is_zero() {
            self.q = BigUInt::from(1u32);
            self.sign = Sign::Positive;
        }
        self
    }

    /// The denominator fixed-point mode currently targets: `base^pointpos`
    /// for `FixType::Radix`, or `fixq` for `FixType::Denom`.
    pub(crate) fn fix_target_denominator(&self) -> BigUInt {
        match self.fixtype {
            FixType::Radix => BigUInt::from(self.base as u64).pow(self.pointpos as u64),
            FixType::Denom => self.fixq.clone(),
        }
    }

    /// Re-run reduction against the current fixed target (or plain gcd
    /// reduction if not fixed). Used whenever the fixed-point
    /// configuration changes.
    pub(crate) fn force_reduce_now(self) -> Rational {
        self.reduce()
    }
}
