// `%g` must choose the notation from the exponent after rounding, not the
// exponent of the unrounded value.

use charconv::{to_decimal, Mode};

#[test]
fn test() {
    assert_eq!(to_decimal(99999.95f64, Mode::General(6)).to_string(), "99999.9");
    assert_eq!(to_decimal(999999.5f64, Mode::General(6)).to_string(), "1e+06");
    assert_eq!(to_decimal(0.000099999994f64, Mode::General(7)).to_string(), "9.999999e-05");
    assert_eq!(to_decimal(0.0000999999996f64, Mode::General(7)).to_string(), "0.0001");
    assert_eq!(to_decimal(9.96f64, Mode::General(2)).to_string(), "10");
    assert_eq!(to_decimal(99.6f64, Mode::General(2)).to_string(), "1e+02");
}
