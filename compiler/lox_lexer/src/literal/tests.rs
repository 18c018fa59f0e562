use super::*;

// === format_number ===

#[test]
fn integral_values_get_one_fractional_digit() {
    assert_eq!(format_number(0.0), "0.0");
    assert_eq!(format_number(42.0), "42.0");
    assert_eq!(format_number(1234.0), "1234.0");
}

#[test]
fn trailing_zeros_in_source_do_not_matter() {
    // `200.00` decodes to the integral value 200.
    assert_eq!(format_number("200.00".parse::<f64>().unwrap_or_default()), "200.0");
}

#[test]
fn fractional_values_use_shortest_form() {
    assert_eq!(format_number(1.5), "1.5");
    assert_eq!(format_number(123.456), "123.456");
    assert_eq!(format_number(0.1), "0.1");
}

#[test]
fn large_integral_value_is_not_exponential() {
    assert_eq!(format_number(1e21), "1000000000000000000000.0");
}

#[test]
fn overflowing_literal_displays_inf() {
    let value = "9".repeat(400).parse::<f64>().unwrap_or_default();
    assert_eq!(value, f64::INFINITY);
    assert_eq!(Literal::Number(value).to_string(), "inf");
}

#[test]
fn non_finite_values_use_plain_display() {
    assert_eq!(format_number(f64::INFINITY), "inf");
    assert_eq!(format_number(f64::NAN), "NaN");
}

// === Display ===

#[test]
fn display_variants() {
    assert_eq!(Literal::None.to_string(), "null");
    assert_eq!(Literal::Text("a b".to_owned()).to_string(), "a b");
    assert_eq!(Literal::Text(String::new()).to_string(), "");
    assert_eq!(Literal::Number(7.0).to_string(), "7.0");
}

// === Accessors ===

#[test]
fn accessors() {
    assert!(Literal::default().is_none());
    assert_eq!(Literal::Text("x".to_owned()).as_text(), Some("x"));
    assert_eq!(Literal::Number(2.5).as_number(), Some(2.5));
    assert_eq!(Literal::None.as_number(), None);
    assert_eq!(Literal::Number(1.0).as_text(), None);
}
