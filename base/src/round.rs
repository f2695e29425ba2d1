//! Rounding modes used when a `Rational` drops precision (reduction to a
//! fixed denominator, nth-root convergence, formatted rendering).

/// Policy applied when a reduction step has a nonzero remainder `r` against
/// denominator `q` and must decide whether to round the truncated numerator
/// away from zero.
///
/// The condition each mode applies, given a reduction with sign `sign`,
/// truncated-toward-zero numerator magnitude `p`, remainder `r` and target
/// denominator `q` (`0 <= r < q`):
///
/// | mode | increments `p` when |
/// |------|----------------------|
/// | `Up` | `sign` is positive and `r != 0` |
/// | `Down` | `sign` is negative and `r != 0` |
/// | `TowardZero` | never |
/// | `FromZero` | `r != 0` |
/// | `Normal` | `2*r >= q` |
/// | `Even` (default) | `2*r > q`, or `2*r == q` and the incremented `p` would be odd |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    Even,
    Normal,
    Up,
    Down,
    TowardZero,
    FromZero,
}

impl Default for RoundingMode {
    #[inline]
    fn default() -> RoundingMode {
        RoundingMode::Even
    }
}
