//! Shared traits and the error taxonomy for the `exact` family of crates
//! (`exact-int`'s [`BigUInt`](https://docs.rs/exact-int) and the root
//! `exact` crate's `Rational`).
//!
//! A dependency-free (besides `thiserror`) home for the handful of traits
//! and the error enum both numeric layers need, so neither layer has to
//! duplicate them.

mod bit;
mod error;
mod ring;
mod round;
mod sign;

pub use bit::BitTest;
pub use error::{Error, Result};
pub use ring::{DivRem, ExtendedGcd, Gcd};
pub use round::RoundingMode;
pub use sign::Sign;
