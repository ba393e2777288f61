// -1770621.25f32 lies exactly between the shortest candidates -1770621.2
// and -1770621.3. The even last digit is chosen.

use charconv::{to_chars, to_decimal, Decimal, Mode};

#[test]
fn test() {
    let value = -1770621.25f32;
    match to_decimal(value, Mode::Shortest) {
        Decimal::Finite { digits, .. } => {
            assert_eq!(digits.as_str(), "17706212");
            assert_eq!(digits.exponent(), 7);
            assert!(digits.is_negative());
        }
        other => panic!("not finite: {:?}", other),
    }
    let mut buf = [0u8; 16];
    let len = to_chars(&mut buf, value).unwrap();
    assert_eq!(&buf[..len], b"-1770621.2");
}
