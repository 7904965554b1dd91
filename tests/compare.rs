use float_probe::compare;
use float_probe::decimal::{Decimal, InvalidDecimalLiteral};
use float_probe::Comparison;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn the_famous_example() {
    let c = compare("0.1", "0.2").unwrap();

    assert_eq!(c.exact_sum(), &dec("0.3"));
    assert_eq!(c.float_sum(), 0.1 + 0.2);
    assert_eq!(c.float_sum_text(), "0.30000000000000004");
    assert!(!c.exact_match());
    assert_eq!(c.difference(), Some(&dec("0.00000000000000004")));

    let (a, b) = c.doubles();
    assert_eq!(f64::from(a.clone()), 0.1);
    assert_eq!(f64::from(b.clone()), 0.2);
    // neither addend is representable, so both conversions rounded
    assert!(a.inexact_flag() && b.inexact_flag());
    assert_eq!(
        c.stored_sum().unwrap().to_string(),
        "0.3000000000000000444089209850062616169452667236328125"
    );
    assert!(!c.value_match());
    assert!(c.binary_sum().inexact_flag());
}

#[test]
fn exact_sums_match() {
    // 0.5 is a binary fraction, so nothing rounds anywhere
    let c = compare("0.5", "0.5").unwrap();
    assert_eq!(c.float_sum_text(), "1");
    assert!(c.exact_match());

    let c = compare("0.25", "0.25").unwrap();
    assert_eq!(c.float_sum_text(), "0.5");
    assert!(c.exact_match());
    assert!(c.value_match());
    assert_eq!(c.difference(), Some(&Decimal::zero()));
    assert!(!c.binary_sum().inexact_flag());

    let c = compare("1", "2").unwrap();
    assert_eq!(c.float_sum_text(), "3");
    assert_eq!(c.exact_sum(), &dec("3"));
    assert!(c.exact_match());

    let c = compare("0.5", "0.25").unwrap();
    assert_eq!(c.float_sum_text(), "0.75");
    assert!(c.exact_match());

    let c = compare("-1.5", "1.5").unwrap();
    assert_eq!(c.float_sum_text(), "0");
    assert!(c.exact_match());
    assert_eq!(c.difference(), Some(&Decimal::zero()));
}

#[test]
fn printed_text_can_match_while_the_stored_value_does_not() {
    // 0.25 + 0.05 rounds to the double just below 0.3, which still
    // prints as "0.3"
    let c = compare("0.25", "0.05").unwrap();
    assert_eq!(c.float_sum_text(), "0.3");
    assert!(c.exact_match());
    assert_eq!(c.difference(), Some(&Decimal::zero()));
    assert!(!c.value_match());
    assert_eq!(
        c.stored_sum().unwrap().to_string(),
        "0.299999999999999988897769753748434595763683319091796875"
    );
}

#[test]
fn negative_addends() {
    let c = compare("-0.1", "-0.2").unwrap();
    assert_eq!(c.float_sum_text(), "-0.30000000000000004");
    assert_eq!(c.exact_sum(), &dec("-0.3"));
    assert!(!c.exact_match());
    // the difference is an absolute value
    assert_eq!(c.difference(), Some(&dec("0.00000000000000004")));

    let c = compare("0.3", "-0.1").unwrap();
    assert_eq!(c.float_sum_text(), "0.19999999999999998");
    assert!(!c.exact_match());
}

#[test]
fn parse_failures_surface() {
    assert_eq!(compare("", "1").unwrap_err(), InvalidDecimalLiteral::Empty);
    assert_eq!(
        compare("1", "1.2.3").unwrap_err(),
        InvalidDecimalLiteral::MultiplePoints
    );
    assert_eq!(
        compare("abc", "1").unwrap_err(),
        InvalidDecimalLiteral::UnexpectedChar('a')
    );
    assert_eq!(
        compare("1e5", "1").unwrap_err(),
        InvalidDecimalLiteral::UnexpectedChar('e')
    );
}

#[test]
fn overflowing_sums() {
    let huge = format!("1{}", "0".repeat(309));
    let c = compare(&huge, &huge).unwrap();
    assert!(c.float_sum().is_infinite());
    assert_eq!(c.float_sum_text(), "inf");
    assert!(!c.exact_match());
    assert_eq!(c.difference(), None);
    assert_eq!(c.stored_sum(), None);
    assert!(!c.value_match());
    // the exact side is unbothered
    assert_eq!(c.exact_sum(), &dec(&format!("2{}", "0".repeat(309))));
}

#[test]
fn report_contents() {
    let c = compare("0.1", "0.2").unwrap();
    let report = c.to_string();

    assert!(report.contains("0.1 + 0.2"));
    assert!(report.contains("does not terminate"));
    assert!(report.contains("0.1 in binary: 0.000110011"));
    assert!(report.contains("0.1 is stored as 0.1000000000000000055511151231257827021181583404541015625"));
    assert!(report.contains("exact sum:   0.3"));
    assert!(report.contains("float sum:   0.30000000000000004"));
    assert!(report.contains("stored sum:  0.3000000000000000444089209850062616169452667236328125"));
    assert!(report.contains("exact match: false"));
    assert!(report.contains("difference:  0.00000000000000004"));

    let c = compare("0.25", "0.25").unwrap();
    let report = c.to_string();
    assert!(report.contains("0.25 in binary: 0.01\n"), "a terminating expansion has no ellipsis");
    assert!(report.contains("exact match: true"));
    assert!(report.contains("difference:  0"));
}

#[test]
fn comparisons_are_deterministic() {
    let first = compare("0.1", "0.2").unwrap();
    let second = compare("0.1", "0.2").unwrap();
    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(first.exact_match(), second.exact_match());
    assert_eq!(first.float_sum().to_bits(), second.float_sum().to_bits());
}

#[test]
fn of_takes_parsed_decimals() {
    let a = dec("0.1");
    let b = dec("0.2");
    let c = Comparison::of(&a, &b);
    let (x, y) = c.addends();
    assert_eq!(x, &a);
    assert_eq!(y, &b);
    assert_eq!(c.float_sum_text(), "0.30000000000000004");
}
