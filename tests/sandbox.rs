/*
    The sandbox
*/

use float_probe::decimal::Decimal;
use float_probe::ieee754::{Double, Half};
use float_probe::Number;

fn classify<T: Number>(x: &T) -> &'static str {
    if x.is_nan() {
        "nan"
    } else if x.is_infinity() {
        "infinity"
    } else if x.is_zero() {
        "zero"
    } else {
        "finite"
    }
}

fn starts_at_zero<T: Number>() -> bool {
    T::default().is_zero() && !T::default().sign()
}

#[test]
fn sandbox() {
    assert_eq!(Decimal::radix(), 10);
    assert_eq!(Double::radix(), 2);
    assert_eq!(Half::radix(), 2);

    assert!(starts_at_zero::<Decimal>());
    assert!(starts_at_zero::<Double>());
    assert!(starts_at_zero::<Half>());

    let d: Decimal = "2.5".parse().unwrap();
    let f = Double::from(2.5);
    assert_eq!(classify(&d), "finite");
    assert_eq!(classify(&f), "finite");
    // 2.5 is a binary fraction, so both sides agree on the exact value
    assert_eq!(f.to_decimal(), Some(d.clone()));
    assert_eq!(Number::to_decimal(&d), Some(d));

    assert_eq!(classify(&Double::from(f64::NAN)), "nan");
    assert_eq!(classify(&Double::from(f64::NEG_INFINITY)), "infinity");
    assert_eq!(classify(&Double::from(-0.0)), "zero");
    assert_eq!(classify(&Decimal::zero()), "zero");
}
