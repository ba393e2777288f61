//! Cached powers of ten as normalized 64-bit extended floats.
//!
//! Each value is the nearest `mant * 2^exp` to the exact power, with the
//! high bit of `mant` set.

/*
# the following Python code generates these tables:
for e in list(range(10)) + list(range(-350, 310, 10)):
    v = Fraction(10)**e
    s = 63 - (v.numerator.bit_length() - v.denominator.bit_length())
    # adjust s until 2^63 <= v * 2^s < 2^64, then round to nearest, ties even
    print(hex(round(v * 2**s)), -s)
*/

/// Exponent bias applied before indexing the large table.
pub(crate) const BASE10_BIAS: i32 = 350;

/// Decimal exponent step between consecutive large powers.
pub(crate) const BASE10_STEP: i32 = 10;

/// Mantissas for `10^i`, `i` in `0..10`.
pub(crate) const BASE10_SMALL_MANTISSA: [u64; 10] = [
    0x8000000000000000,
    0xa000000000000000,
    0xc800000000000000,
    0xfa00000000000000,
    0x9c40000000000000,
    0xc350000000000000,
    0xf424000000000000,
    0x9896800000000000,
    0xbebc200000000000,
    0xee6b280000000000,
];

/// Binary exponents for `10^i`, `i` in `0..10`.
pub(crate) const BASE10_SMALL_EXPONENT: [i32; 10] = [
    -63, -60, -57, -54, -50, -47, -44, -40, -37, -34,
];

/// Integer values of `10^i`, `i` in `0..10`.
pub(crate) const BASE10_SMALL_INT_POWERS: [u64; 10] = [
    1,
    10,
    100,
    1000,
    10000,
    100000,
    1000000,
    10000000,
    100000000,
    1000000000,
];

/// Mantissas for `10^(10 * i - 350)`, `i` in `0..66`.
pub(crate) const BASE10_LARGE_MANTISSA: [u64; 66] = [
    0xa05c0dd70f6e161a,
    0xbaaee17fa23ebf76,
    0xd953e8624b85dd79,
    0xfd00b897478238d1,
    0x93445b8731587ea3,
    0xab70fe17c79ac6ca,
    0xc795830d75038c1e,
    0xe858ad248f5c22ca,
    0x873e4f75e2224e68,
    0x9d71ac8fada6c9b5,
    0xb749faed14125d37,
    0xd5605fcdcf32e1d7,
    0xf867241c8cc6d4c1,
    0x9096ea6f3848984f,
    0xa8530886b54dbdec,
    0xc3f490aa77bd60fd,
    0xe41f3d6a7377eeca,
    0x84c8d4dfd2c63f3b,
    0x9a94dd3e8cf578ba,
    0xb3f4e093db73a093,
    0xd17f3b51fca3a7a1,
    0xf3e2f893dec3f126,
    0x8df5efabc5979c90,
    0xa54394fe1eedb8ff,
    0xc06481fb9bcf8d3a,
    0xdff9772470297ebd,
    0x825ecc24c8737830,
    0x97c560ba6b0919a6,
    0xb0af48ec79ace837,
    0xcdb02555653131b6,
    0xef73d256a5c0f77d,
    0x8b61313bbabce2c6,
    0xa2425ff75e14fc32,
    0xbce5086492111aeb,
    0xdbe6fecebdedd5bf,
    0x8000000000000000,
    0x9502f90000000000,
    0xad78ebc5ac620000,
    0xc9f2c9cd04674edf,
    0xeb194f8e1ae525fd,
    0x88d8762bf324cd10,
    0x9f4f2726179a2245,
    0xb975d6b6ee39e437,
    0xd7e77a8f87daf7fc,
    0xfb5878494ace3a5f,
    0x924d692ca61be758,
    0xaa51823e34a7eedf,
    0xc646d63501a1511e,
    0xe6d3102ad96cec1e,
    0x865b86925b9bc5c2,
    0x9c69a97284b578d8,
    0xb616a12b7fe617aa,
    0xd3fa922f2d1675f2,
    0xf6c69a72a3989f5c,
    0x8fa475791a569d11,
    0xa738c6bebb12d16d,
    0xc2abf989935ddbfe,
    0xe2a0b5dc971f303a,
    0x83ea2b892091e44e,
    0x9991a6f3d6bf1766,
    0xb2c71d5bca9023f8,
    0xd01fef10a657842c,
    0xf24a01a73cf2dcd0,
    0x8d07e33455637eb3,
    0xa42e74f3d032f526,
    0xbf21e44003acdd2d,
];

/// Binary exponents for `10^(10 * i - 350)`, `i` in `0..66`.
pub(crate) const BASE10_LARGE_EXPONENT: [i32; 66] = [
    -1226, -1193, -1160, -1127, -1093, -1060, -1027, -994, -960, -927,
    -894, -861, -828, -794, -761, -728, -695, -661, -628, -595,
    -562, -529, -495, -462, -429, -396, -362, -329, -296, -263,
    -230, -196, -163, -130, -97, -63, -30, 3, 36, 69,
    103, 136, 169, 202, 235, 269, 302, 335, 368, 402,
    435, 468, 501, 534, 568, 601, 634, 667, 701, 734,
    767, 800, 833, 867, 900, 933,
];
