// Rounding an approximation to the downward float first and then again to
// nearest must not move a value that sits just above a halfway point.

use charconv::{from_chars, CharsFormat};

#[test]
fn test() {
    // Largest subnormal and smallest normal, and the halfway point between.
    let (value, _) = from_chars::<f64>(b"2.225073858507201e-308", CharsFormat::General).unwrap();
    assert_eq!(value.to_bits(), 0x000F_FFFF_FFFF_FFFF);
    let (value, _) = from_chars::<f64>(b"2.2250738585072014e-308", CharsFormat::General).unwrap();
    assert_eq!(value.to_bits(), 0x0010_0000_0000_0000);
    let (value, _) = from_chars::<f64>(
        b"2.2250738585072011360574097967091319759348195463516456480234261099e-308",
        CharsFormat::General,
    )
    .unwrap();
    assert_eq!(value.to_bits(), 0x0010_0000_0000_0000);

    // 2.2250738585072012e-308 once sent some parsers into an infinite loop.
    let (value, _) = from_chars::<f64>(b"2.2250738585072012e-308", CharsFormat::General).unwrap();
    assert_eq!(value.to_bits(), 0x0010_0000_0000_0000);
}
