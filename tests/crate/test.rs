#![no_std]

pub use charconv::*;

pub fn shortest(buf: &mut [u8], value: f64) -> Result<usize> {
    to_chars(buf, value)
}
