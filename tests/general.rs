//! `%g` notation selection checked against a direct transcription of the C
//! rule, built on std's exact `{:e}` and `{:.N}` formatting.

use charconv::{to_decimal, Mode};
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

macro_rules! printf_g {
    ($value:expr, $precision:expr) => {{
        let value = $value;
        let p = std::cmp::max($precision, 1);
        let scientific = format!("{:.*e}", p - 1, value);
        let (mantissa, exp) = scientific.split_once('e').unwrap();
        let x: i64 = exp.parse().unwrap();
        if (p as i64) > x && x >= -4 {
            let fixed = format!("{:.*}", (p as i64 - 1 - x) as usize, value);
            String::from(strip_zeros(&fixed))
        } else {
            format!(
                "{}e{}{:02}",
                strip_zeros(mantissa),
                if x < 0 { '-' } else { '+' },
                x.abs()
            )
        }
    }};
}

#[test]
fn test_general_random_f64() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    for i in 0..20_000 {
        let value = f64::from_bits(rng.next_u64());
        if !value.is_finite() {
            continue;
        }
        let precision = i % 22;
        assert_eq!(
            to_decimal(value, Mode::General(precision)).to_string(),
            printf_g!(value, precision),
            "{:e} at {}",
            value,
            precision
        );
    }
}

#[test]
fn test_general_random_f32() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    for i in 0..20_000 {
        let value = f32::from_bits(rng.next_u32());
        if !value.is_finite() {
            continue;
        }
        let precision = i % 12;
        assert_eq!(
            to_decimal(value, Mode::General(precision)).to_string(),
            printf_g!(value, precision),
            "{:e} at {}",
            value,
            precision
        );
    }
}

#[test]
fn test_general_decade_edges_f64() {
    // Values on both sides of each rounding threshold `(10^p - 1/2) * 10^(x+1-p)`.
    for precision in 1..=20usize {
        for x in -8..=25i32 {
            let threshold = format!("{}5e{}", "9".repeat(precision), x + 1 - precision as i32 - 1);
            let value: f64 = threshold.parse().unwrap();
            for bits in [value.to_bits() - 1, value.to_bits(), value.to_bits() + 1] {
                let value = f64::from_bits(bits);
                assert_eq!(
                    to_decimal(value, Mode::General(precision)).to_string(),
                    printf_g!(value, precision),
                    "{:e} at {}",
                    value,
                    precision
                );
            }
        }
    }
}

#[test]
fn test_general_decade_edges_f32() {
    for precision in 1..=10usize {
        for x in -8..=12i32 {
            let threshold = format!("{}5e{}", "9".repeat(precision), x + 1 - precision as i32 - 1);
            let value: f32 = threshold.parse().unwrap();
            for bits in [value.to_bits() - 1, value.to_bits(), value.to_bits() + 1] {
                let value = f32::from_bits(bits);
                assert_eq!(
                    to_decimal(value, Mode::General(precision)).to_string(),
                    printf_g!(value, precision),
                    "{:e} at {}",
                    value,
                    precision
                );
            }
        }
    }
}

#[test]
fn test_general_examples() {
    let cases: &[(f64, usize, &str)] = &[
        (0.0, 6, "0"),
        (-0.0, 3, "-0"),
        (1.0, 6, "1"),
        (0.0001, 6, "0.0001"),
        (0.00001, 6, "1e-05"),
        (123456.0, 6, "123456"),
        (1234567.0, 6, "1.23457e+06"),
        (999999.5, 6, "1e+06"),
        (9.5, 1, "1e+01"),
        (9.4, 1, "9"),
        (0.5, 0, "0.5"),
        (1e100, 6, "1e+100"),
        (f64::MAX, 17, "1.7976931348623157e+308"),
        (5e-324, 6, "4.94066e-324"),
    ];
    for &(value, precision, expected) in cases {
        assert_eq!(
            to_decimal(value, Mode::General(precision)).to_string(),
            expected
        );
    }
}
