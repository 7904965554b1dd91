use num_bigint::BigInt;

use float_probe::decimal::{Decimal, InvalidDecimalLiteral};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn parsing() {
    let d = dec("0.1");
    assert_eq!(d.unscaled(), &BigInt::from(1));
    assert_eq!(d.scale(), 1);
    assert!(!d.sign());

    let d = dec("-12.34");
    assert_eq!(d.unscaled(), &BigInt::from(-1234));
    assert_eq!(d.scale(), 2);
    assert!(d.sign());

    let d = dec("+7");
    assert_eq!(d.unscaled(), &BigInt::from(7));
    assert_eq!(d.scale(), 0);

    // digits may sit on either side of the point alone
    assert_eq!(dec(".5"), dec("0.5"));
    assert_eq!(dec("5."), dec("5"));

    // leading and trailing zeros do not matter
    assert_eq!(dec("007"), dec("7"));
    assert_eq!(dec("0.10"), dec("0.1"));
    assert_eq!(dec("1.000"), dec("1"));
    assert_eq!(dec("0.3000000000000000444089209850062616169452667236328125").scale(), 52);
}

#[test]
fn parse_errors() {
    assert_eq!("".parse::<Decimal>(), Err(InvalidDecimalLiteral::Empty));
    assert_eq!(".".parse::<Decimal>(), Err(InvalidDecimalLiteral::NoDigits));
    assert_eq!("-".parse::<Decimal>(), Err(InvalidDecimalLiteral::NoDigits));
    assert_eq!("+.".parse::<Decimal>(), Err(InvalidDecimalLiteral::NoDigits));
    assert_eq!(
        "1.2.3".parse::<Decimal>(),
        Err(InvalidDecimalLiteral::MultiplePoints)
    );
    assert_eq!(
        "abc".parse::<Decimal>(),
        Err(InvalidDecimalLiteral::UnexpectedChar('a'))
    );
    assert_eq!(
        "1_000".parse::<Decimal>(),
        Err(InvalidDecimalLiteral::UnexpectedChar('_'))
    );
    assert_eq!(
        "--1".parse::<Decimal>(),
        Err(InvalidDecimalLiteral::UnexpectedChar('-'))
    );
    assert_eq!(
        "1e10".parse::<Decimal>(),
        Err(InvalidDecimalLiteral::UnexpectedChar('e'))
    );
    assert_eq!(
        " 1".parse::<Decimal>(),
        Err(InvalidDecimalLiteral::UnexpectedChar(' '))
    );

    // errors print something readable
    let err = "1.2.3".parse::<Decimal>().unwrap_err();
    assert_eq!(err.to_string(), "more than one decimal point in literal");
}

#[test]
fn display() {
    for s in [
        "0",
        "1",
        "-1",
        "0.1",
        "-0.1",
        "12.34",
        "1000",
        "0.00000000000000004",
        "0.1000000000000000055511151231257827021181583404541015625",
    ] {
        assert_eq!(dec(s).to_string(), s, "display must round-trip the canonical literal");
    }

    // non-canonical literals print in canonical form
    assert_eq!(dec("00.100").to_string(), "0.1");
    assert_eq!(dec("-0").to_string(), "0");
    assert_eq!(dec("3.0").to_string(), "3");
}

#[test]
fn zero_has_no_sign() {
    let d = dec("-0.000");
    assert!(d.is_zero());
    assert!(!d.sign());
    assert_eq!(d, Decimal::zero());
    assert_eq!(d.scale(), 0);
}

#[test]
fn arithmetic() {
    // the sum that motivates this library, in exact form
    assert_eq!(&dec("0.1") + &dec("0.2"), dec("0.3"));

    assert_eq!(&dec("1.5") + &dec("-1.5"), Decimal::zero());
    assert_eq!(&dec("12.5") + &dec("0.25"), dec("12.75"));
    assert_eq!(dec("0.3") - dec("0.1"), dec("0.2"));
    assert_eq!(
        &dec("0.3") - &dec("0.30000000000000004"),
        dec("-0.00000000000000004")
    );
    assert_eq!(-dec("2.5"), dec("-2.5"));
    assert_eq!(-Decimal::zero(), Decimal::zero());
    assert_eq!(dec("-2.5").abs(), dec("2.5"));
    assert_eq!(dec("2.5").abs(), dec("2.5"));

    // sums stay canonical
    let sum = &dec("0.25") + &dec("0.75");
    assert_eq!(sum.scale(), 0);
    assert_eq!(sum.to_string(), "1");
}

#[test]
fn ordering() {
    let mut values = [dec("0.5"), dec("-2"), dec("10"), dec("0"), dec("-0.25"), dec("2")];
    values.sort();
    let sorted: Vec<String> = values.iter().map(|d| d.to_string()).collect();
    assert_eq!(sorted, ["-2", "-0.25", "0", "0.5", "2", "10"]);

    assert!(dec("0.1") < dec("0.2"));
    assert!(dec("2") < dec("10"), "comparison must align scales, not compare digits");
    assert!(dec("-0.1") > dec("-0.2"));
    assert!(dec("0.3") > dec("0.299999999999999988897769753748434595763683319091796875"));
}

#[test]
fn construction_is_canonical() {
    // trailing fractional zeros are stripped on the way in
    let d = Decimal::new(BigInt::from(1230), 3);
    assert_eq!(d.unscaled(), &BigInt::from(123));
    assert_eq!(d.scale(), 2);

    let d = Decimal::new(BigInt::from(1000), 3);
    assert_eq!(d.unscaled(), &BigInt::from(1));
    assert_eq!(d.scale(), 0);

    // zero always normalizes to scale 0
    let d = Decimal::new(BigInt::from(0), 7);
    assert_eq!(d, Decimal::zero());
    assert_eq!(d.scale(), 0);

    // integers keep their trailing zeros
    let d = Decimal::new(BigInt::from(1000), 0);
    assert_eq!(d.to_string(), "1000");
}
