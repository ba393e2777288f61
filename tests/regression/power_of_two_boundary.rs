// A significand of exactly 2^52 has a rounding interval twice as wide above
// as below. Shortest digits must not be chosen from the wide side's width.

use charconv::{to_chars, to_decimal, Decimal, Mode};

fn digits(value: f64) -> (String, i32) {
    match to_decimal(value, Mode::Shortest) {
        Decimal::Finite { digits, .. } => (String::from(digits.as_str()), digits.exponent()),
        other => panic!("not finite: {:?}", other),
    }
}

#[test]
fn test() {
    for &(value, expected) in &[
        (2f64.powi(-1022), "2.2250738585072014e-308"),
        (2f64.powi(-1021), "4.450147717014403e-308"),
        (9007199254740992.0, "9007199254740992"),
        (1.0f64, "1"),
        (2f64.powi(60), "1152921504606847000"),
    ] {
        assert_eq!(to_decimal(value, Mode::Shortest).to_string(), expected);
    }
    assert_eq!(
        to_decimal(2f32.powi(-126), Mode::Shortest).to_string(),
        "1.1754944e-38"
    );

    assert_eq!(digits(2f64.powi(60)), (String::from("1152921504606847"), 19));
    let mut buf = [0u8; 32];
    let len = to_chars(&mut buf, 2f64.powi(60)).unwrap();
    assert_eq!(&buf[..len], b"1152921504606846976");
}
