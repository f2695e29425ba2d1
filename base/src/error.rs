//! Shared error taxonomy for the `exact` crates.

use thiserror::Error;

/// The single error type returned by every fallible operation across
/// `exact-int` and `exact` (the `Rational` crate).
///
/// Every variant corresponds to exactly one failure kind; none of them wrap
/// or derive from one another. An operation that returns an `Error` has not
/// mutated any of its operands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A string failed to parse according to the grammar of the type being
    /// constructed. `position` is the 0-based byte offset of the offending
    /// character.
    #[error("invalid number at position {position}: {problem}")]
    BadFormat {
        problem: &'static str,
        position: usize,
    },

    /// Division or modulo by zero, or an nth-root request with `n = 0`.
    #[error("division or modulo by zero")]
    DivByZero,

    /// An operation that only makes sense on an integer value (modulo,
    /// shift-by, `fixq`) was given a non-integer operand.
    #[error("operation requires an integer value")]
    NonInteger,

    /// An unsigned subtraction would underflow, or a negative value was
    /// converted into an unsigned type.
    #[error("operation would produce a negative unsigned value")]
    Negative,

    /// An even-indexed root of a negative value was requested.
    #[error("even root of a negative number is not a real number")]
    Complex,

    /// Conversion from a positive-infinity IEEE float.
    #[error("value is positive infinity")]
    PositiveInfinity,

    /// Conversion from a negative-infinity IEEE float.
    #[error("value is negative infinity")]
    NegativeInfinity,

    /// Conversion from a NaN IEEE float.
    #[error("value is NaN")]
    NaN,

    /// `value::<T>()` exceeded the range of the requested native type.
    #[error("value does not fit in the requested scalar type")]
    ScalarOverflow,

    /// A requested base fell outside `[2, MAX_BASE]`.
    #[error("base is out of range")]
    BaseOutOfRange,

    /// Internal: a borrow ran past the most significant limb. Indicates a
    /// violated precondition (minuend < subtrahend) somewhere upstream
    /// rather than a caller-supplied bad input.
    #[error("internal error: borrow past the highest limb")]
    Overrun,

    /// An nth-root Newton iteration failed to converge within the
    /// implementation's iteration budget.
    #[error("root could not be computed to the requested precision")]
    RootTooLarge,
}

/// Convenience alias used throughout both crates.
pub type Result<T> = core::result::Result<T, Error>;
