// Digits beyond the ones that fit the big-integer comparison must still break
// a tie, however far past the halfway point they appear.

use charconv::{from_chars, CharsFormat};

#[test]
fn test() {
    let mut text = String::from("9007199254740993");
    text.push('.');
    text.push_str(&"0".repeat(1000));
    let (value, _) = from_chars::<f64>(text.as_bytes(), CharsFormat::General).unwrap();
    assert_eq!(value, 9007199254740992.0);

    text.push('1');
    let (value, len) = from_chars::<f64>(text.as_bytes(), CharsFormat::General).unwrap();
    assert_eq!(value, 9007199254740994.0);
    assert_eq!(len, text.len());
}
