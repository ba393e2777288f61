#![feature(test)]

extern crate test;

use charconv::{
    from_chars, to_chars, to_chars_format, to_chars_precision, to_decimal, CharsFormat, Mode,
};
use test::{black_box, Bencher};

const VALUES: &[f64] = &[
    0.1,
    1.0,
    123.456,
    1e21,
    2.2250738585072014e-308,
    5e-324,
    1.7976931348623157e308,
    0.30000000000000004,
];

const INPUTS: &[&str] = &[
    "0.1",
    "1",
    "123.456",
    "1e21",
    "2.2250738585072014e-308",
    "4.9406564584124654e-324",
    "1.7976931348623157e308",
    "0.30000000000000004",
];

#[bench]
fn bench_to_chars_shortest(b: &mut Bencher) {
    let mut buf = [0u8; 64];
    b.iter(|| {
        for &value in VALUES {
            to_chars(&mut buf, black_box(value)).unwrap();
        }
    });
}

#[bench]
fn bench_to_chars_fixed_6(b: &mut Bencher) {
    let mut buf = [0u8; 400];
    b.iter(|| {
        for &value in VALUES {
            to_chars_precision(&mut buf, black_box(value), CharsFormat::Fixed, 6).unwrap();
        }
    });
}

#[bench]
fn bench_to_chars_scientific_17(b: &mut Bencher) {
    let mut buf = [0u8; 64];
    b.iter(|| {
        for &value in VALUES {
            to_chars_precision(&mut buf, black_box(value), CharsFormat::Scientific, 16).unwrap();
        }
    });
}

#[bench]
fn bench_to_chars_hex(b: &mut Bencher) {
    let mut buf = [0u8; 64];
    b.iter(|| {
        for &value in VALUES {
            to_chars_format(&mut buf, black_box(value), CharsFormat::Hex).unwrap();
        }
    });
}

#[bench]
fn bench_to_decimal_general_6(b: &mut Bencher) {
    b.iter(|| {
        for &value in VALUES {
            black_box(to_decimal(black_box(value), Mode::General(6)));
        }
    });
}

#[bench]
fn bench_from_chars(b: &mut Bencher) {
    let bytes: usize = INPUTS.iter().map(|s| s.len()).sum();
    b.bytes = bytes as u64;
    b.iter(|| {
        for input in INPUTS {
            from_chars::<f64>(black_box(input.as_bytes()), CharsFormat::General).unwrap();
        }
    });
}

#[bench]
fn bench_from_chars_halfway(b: &mut Bencher) {
    // Needs the big-integer comparison to decide the rounding.
    let input = b"9007199254740993.000000000000000000000000000000000000001";
    b.bytes = input.len() as u64;
    b.iter(|| {
        from_chars::<f64>(black_box(input), CharsFormat::General).unwrap();
    });
}
