#![allow(clippy::float_cmp)]

use charconv::{
    from_chars, from_decimal, to_chars, to_decimal, CharsFormat, Decimal, DecimalDigits, Mode,
};
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

fn shortest_digits(value: f64) -> DecimalDigits {
    match to_decimal(value, Mode::Shortest) {
        Decimal::Finite { digits, .. } => digits,
        other => panic!("not finite: {:?}", other),
    }
}

/// The decimal one unit above `digits` in its last place.
fn increment(digits: &[u8], k: i32) -> (Vec<u8>, i32) {
    let mut digits = digits.to_vec();
    for i in (0..digits.len()).rev() {
        if digits[i] == b'9' {
            digits[i] = b'0';
        } else {
            digits[i] += 1;
            return (digits, k);
        }
    }
    digits.insert(0, b'1');
    digits.pop();
    (digits, k + 1)
}

#[test]
fn test_one() {
    let digits = shortest_digits(1.0);
    assert_eq!(digits.as_str(), "1");
    assert_eq!(digits.exponent(), 1);
    let parsed: f64 = from_decimal(&DecimalDigits::new(false, b"1", 1).unwrap());
    assert_eq!(parsed.to_bits(), 0x3FF0000000000000);
}

#[test]
fn test_one_tenth() {
    let digits = shortest_digits(0.1);
    assert_eq!(digits.as_str(), "1");
    assert_eq!(digits.exponent(), 0);
    let parsed: f64 = from_decimal(&DecimalDigits::new(false, b"1", 0).unwrap());
    assert_eq!(parsed.to_bits(), 0x3FB999999999999A);
}

#[test]
fn test_smallest_subnormal() {
    let value = f64::from_bits(1);
    let digits = shortest_digits(value);
    assert_eq!(digits.as_str(), "5");
    assert_eq!(digits.exponent(), -323);
    assert_eq!(from_decimal::<f64>(&digits).to_bits(), 1);
}

#[test]
fn test_one_digit_fewer_does_not_round_trip() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
    let mut checked = 0;
    while checked < 5_000 {
        let value = f64::from_bits(rng.next_u64() & !(1 << 63));
        if !value.is_finite() || value == 0.0 {
            continue;
        }
        let digits = shortest_digits(value);
        if digits.len() == 1 {
            continue;
        }
        checked += 1;

        let prefix = &digits.digits()[..digits.len() - 1];
        let below = DecimalDigits::new(false, prefix, digits.exponent()).unwrap();
        assert_ne!(from_decimal::<f64>(&below).to_bits(), value.to_bits(), "{:?}", value);

        let (up, k) = increment(prefix, digits.exponent());
        let above = DecimalDigits::new(false, &up, k).unwrap();
        assert_ne!(from_decimal::<f64>(&above).to_bits(), value.to_bits(), "{:?}", value);
    }
}

#[test]
fn test_parse_then_format_is_idempotent() {
    let inputs = [
        "0.1", "1e+21", "123.456", "5e-324", "1.7976931348623157e+308", "0.001", "1e-04",
        "1e+05", "150000", "9007199254740992",
    ];
    let mut buf = [0u8; 64];
    for input in inputs {
        let (value, _) = from_chars::<f64>(input.as_bytes(), CharsFormat::General).unwrap();
        let len = to_chars(&mut buf, value).unwrap();
        assert_eq!(&buf[..len], input.as_bytes());
    }
}
