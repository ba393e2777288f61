#![no_main]

use charconv::{from_chars, CharsFormat};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for format in [
        CharsFormat::General,
        CharsFormat::Fixed,
        CharsFormat::Scientific,
        CharsFormat::Hex,
    ] {
        if let Ok((_, len)) = from_chars::<f64>(data, format) {
            assert!(len <= data.len());
        }
        _ = from_chars::<f32>(data, format);
    }
});
