#![no_main]

use charconv::{from_chars, to_chars, to_chars_precision, CharsFormat};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u64, u16)| {
    let (bits, precision) = data;
    let value = f64::from_bits(bits);

    let mut buf = [0u8; 64];
    let len = to_chars(&mut buf, value).unwrap();
    if value.is_finite() {
        let (parsed, consumed) = from_chars::<f64>(&buf[..len], CharsFormat::General).unwrap();
        assert_eq!(parsed.to_bits(), value.to_bits());
        assert_eq!(consumed, len);
    }

    let mut buf = vec![0u8; 2000];
    for format in [
        CharsFormat::General,
        CharsFormat::Fixed,
        CharsFormat::Scientific,
        CharsFormat::Hex,
    ] {
        _ = to_chars_precision(&mut buf, value, format, usize::from(precision % 1000));
    }
});
