//! End-to-end scenarios over the public `Rational` API: parse, render,
//! arithmetic, power/root, and the float bridge working together rather
//! than in isolation, the way each module's own `#[cfg(test)]` block
//! exercises it alone.

use exact::{Format, Rational};

#[test]
fn one_third_renders_both_ways() {
    // The textual fraction form "1/3" isn't part of the parse grammar
    // (there's no '/' token in it — that's the render-only FRACTION
    // format), so the value is built by division instead of by parsing
    // the literal string.
    let a = (Rational::from(1u32) / Rational::from(3u32)).unwrap();
    assert_eq!(*a.numerator(), exact::BigUInt::from(1u32));
    assert_eq!(*a.denominator(), exact::BigUInt::from(3u32));
    assert_eq!(a.to_string_as(Format::Radix), "0.3333333333");
    assert_eq!(a.to_string_as(Format::Fraction), "1/3");
}

#[test]
fn negative_tenth_cancels_and_scales() {
    let a = Rational::parse("-0.1").unwrap();
    assert_eq!(*a.numerator(), exact::BigUInt::from(1u32));
    assert_eq!(*a.denominator(), exact::BigUInt::from(10u32));
    assert!(a.is_negative());

    let b = Rational::parse("0.1").unwrap();
    assert!((a.clone() + b).is_zero());

    let scaled = a * Rational::from(10u32);
    assert!(scaled.is_negative());
    assert_eq!(*scaled.numerator(), exact::BigUInt::from(1u32));
    assert_eq!(*scaled.denominator(), exact::BigUInt::from(1u32));
}

#[test]
fn hex_autobase_renders_in_base_16() {
    let mut a = Rational::parse("0xFF").unwrap();
    assert_eq!(a.to_string_as(Format::Fraction), "255/1");
    a.set_base(16).unwrap();
    assert_eq!(a.to_string_as(Format::Radix), "FF");
}

#[test]
fn two_to_the_hundredth_as_integer_fraction() {
    let two = Rational::from(2u32);
    let hundred = Rational::from(100u32);
    let r = two.pow(&hundred).unwrap();
    assert_eq!(
        r.to_string_as(Format::Fraction),
        "1267650600228229401496703205376/1"
    );
}

#[test]
fn square_root_of_two_to_twenty_digits() {
    let mut a = Rational::from(2u32);
    a.set_maxradix(20);
    let r = a.root(2).unwrap();
    assert_eq!(r.to_string_as(Format::Radix), "1.41421356237309504880");

    let diff = ((r.clone() * r.clone()) - a).abs();
    let ten_to_twenty = Rational::from(exact::BigUInt::from(10u64).pow(20));
    let bound = (Rational::from(1u32) / ten_to_twenty).unwrap();
    assert!(diff < bound);
}

#[test]
fn float_round_trip_through_exact_dyadic_fraction() {
    let r = Rational::try_from(0.1f64).unwrap();
    assert_eq!(
        r.to_string_as(Format::Fraction),
        "3602879701896397/36028797018963968"
    );
    assert_eq!(r.to_f64(), 0.1);
}
