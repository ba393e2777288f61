//! Exact powers of five, stored as little-endian 32-bit limbs.
//!
//! The table is split into a small region, `5^0` through `5^13`, where every
//! power fits in a single limb, and a large region holding `5^(14 * i)` for
//! `i` in `1..=32`. Each large entry is prefixed inline by its limb count,
//! so entries of different widths pack into one flat array.

/*
# the following Python code generates the large region:
data, offsets = [], []
for i in range(1, 33):
    v, limbs = 5**(14*i), []
    while v: limbs.append(v & 0xffffffff); v >>= 32
    offsets.append(len(data)); data.append(len(limbs)); data.extend(limbs)
*/

/// Number of powers stored in the small region.
pub(crate) const SMALL_POW5_STEP: u32 = 14;

/// Number of entries in the large region.
pub(crate) const LARGE_POW5_COUNT: usize = 32;

/// `5^i` for `i` in `0..14`.
pub(crate) static SMALL_POW5: [u32; 14] = [
    1,
    5,
    25,
    125,
    625,
    3125,
    15625,
    78125,
    390625,
    1953125,
    9765625,
    48828125,
    244140625,
    1220703125,
];

/// Start of each large entry in `LARGE_POW5_DATA`, at its limb count.
pub(crate) static LARGE_POW5_OFFSETS: [u16; 32] = [
    0, 3, 7, 12, 18, 25, 33, 42,
    52, 63, 75, 88, 102, 117, 133, 150,
    168, 187, 207, 228, 250, 273, 297, 322,
    348, 375, 403, 432, 462, 493, 525, 558,
];

/// `5^(14 * i)` for `i` in `1..=32`, each prefixed by its limb count.
pub(crate) static LARGE_POW5_DATA: [u32; 592] = [
    // 5^14
    2,
    0x6bcc41e9, 0x00000001,
    // 5^28
    3,
    0xe2502611, 0x04fce5e3, 0x00000002,
    // 5^42
    4,
    0xc528f679, 0x140c16b7, 0xdeaf189c, 0x00000002,
    // 5^56
    5,
    0xd4490d21, 0xffc78873, 0x0f6a24fd, 0x140c7894, 0x00000004,
    // 5^70
    6,
    0x041e5409, 0x70915a27, 0x9f17ea9c, 0x71cf21b5, 0xcbaeb5b7, 0x00000005,
    // 5^84
    7,
    0x2d1cc531, 0x861d3ee2, 0xa79e0fa0, 0x92667c6d, 0xaab65db7, 0x3c7088e1,
    0x00000008,
    // 5^98
    8,
    0xfb4cea99, 0x4fc967d8, 0xc2ea52a0, 0xe8edc979, 0xa8a6e45a, 0xa61281f2,
    0xb445da9c, 0x0000000b,
    // 5^112
    9,
    0x257e5e41, 0x2eebee3d, 0x0f2212ea, 0x94fde033, 0xc09bb60e, 0x7c59ed78,
    0x246653c0, 0xa1f5b813, 0x00000010,
    // 5^126
    10,
    0x7cbe4a29, 0x291d6c85, 0x8ff69be1, 0x20236549, 0x97d51e51, 0x787b130a,
    0xca1cb527, 0xa03f7ff6, 0xa2ecc414, 0x00000017,
    // 5^140
    11,
    0x15b1e851, 0xa696e4f6, 0x21c187b2, 0x42b0450e, 0x7ee2fdd3, 0x19963502,
    0x916a6c97, 0xe288e4ae, 0xe6f17082, 0x96e1a496, 0x00000021,
    // 5^154
    12,
    0xe67502b9, 0x54556dab, 0x512d94cd, 0x8517c211, 0xf2f4bf98, 0x3514dc49,
    0x291f93e2, 0xb3f63e97, 0xbed543fe, 0xbfe180ea, 0xbbbed612, 0x0000002f,
    // 5^168
    13,
    0xf49c7361, 0x975d0712, 0x2f78e7e1, 0x5ece59b1, 0x37aadab9, 0x0259ecb4,
    0x0bd0e959, 0x88c7e4e1, 0x2e84217d, 0x7da26978, 0x82114348, 0xd54d7fbc,
    0x00000043,
    // 5^182
    14,
    0xd7fca449, 0xe66c04a2, 0x9150daea, 0x6617e477, 0x31304967, 0x237dd274,
    0xf5a75de8, 0xbe231a2e, 0x93bfcbd1, 0x0b53eef9, 0x2bb50dda, 0xe79e3fc2,
    0x659454c7, 0x00000060,
    // 5^196
    15,
    0x27d40f71, 0xbf84eb54, 0x5217acf3, 0x9716bf92, 0x23bf4c07, 0xb64ab6ce,
    0x137c1af9, 0x6b58d4a4, 0x00100d46, 0xf2749284, 0xf81f0312, 0x1fece3bd,
    0x2241e244, 0xfcf317f2, 0x00000088,
    // 5^210
    16,
    0xa0f9bed9, 0xeb43fc96, 0x2d446515, 0x6d598020, 0x74b3c80a, 0xdb5f75f1,
    0xd347294f, 0x5c37b36d, 0x904f76a7, 0x3293adc5, 0x04e61c74, 0x0ea435f9,
    0xcff893d0, 0x5ddbfe6a, 0xabf98993, 0x000000c2,
    // 5^224
    17,
    0xb4afcc81, 0x424d8c99, 0x32fb7306, 0xf9d1d69e, 0x0ec8c340, 0x43b8934f,
    0x84f50cb1, 0xc95b75e3, 0x6293f48c, 0x2497ff06, 0x52f91baf, 0x218b8b9b,
    0x3554df78, 0x7ad6e1b3, 0x79925f05, 0xa52dffc6, 0x00000114,
    // 5^238
    18,
    0xf8b9e269, 0x06f941d7, 0xc81113b2, 0xffd5ad67, 0x2850d41a, 0xfd5b9a8e,
    0xb38a3f7e, 0x0c027d1b, 0xcb76784f, 0x2cf61581, 0x2d365a70, 0x74e1d933,
    0x82487f03, 0x544fc527, 0x4de57572, 0x455a9de3, 0x22f31411, 0x00000189,
    // 5^252
    19,
    0xe257ba91, 0x585e8be3, 0x8f4c1fcb, 0x71e5d1ca, 0x85b3c2b0, 0x971080ca,
    0x2d65d20f, 0x89b00100, 0x3864ab60, 0x965ea6cb, 0x1493901b, 0x5f98c79c,
    0x19b8ddc7, 0x1ee216e9, 0xdd523897, 0x4226db0b, 0x0270686b, 0xae3bbed9,
    0x0000022e,
    // 5^266
    20,
    0x8ec39ef9, 0x0b1cf255, 0x6cb40d37, 0x6b0b817d, 0xab26a320, 0x7bb11495,
    0xaba2ed51, 0x0df582af, 0x574dc77f, 0xf7671782, 0x26193438, 0x2e49f136,
    0xc8ff4a85, 0x4cd1ab7a, 0xb16b1309, 0x734354c1, 0x0f1814fb, 0x8b3922c5,
    0xeed165f3, 0x00000319,
    // 5^280
    21,
    0x5cd4e9a1, 0xe47d6f6c, 0x3bd9e79b, 0x626fa1f9, 0x8b345177, 0x2b59e8c6,
    0x3cde58de, 0x46ff58cf, 0x577c1522, 0xe77559a8, 0x77675326, 0xe6b76317,
    0xfd0a5feb, 0xe83969e3, 0x05a03533, 0x31b987a8, 0x1f0f43f6, 0x5a43db21,
    0x1bf596d8, 0x3f19a2ab, 0x00000468,
    // 5^294
    22,
    0x04668489, 0x4170ce24, 0x6a5a52da, 0x6a346118, 0x2f043148, 0x4e896342,
    0xb37253ee, 0x14683c44, 0x934996a2, 0x9bc50146, 0x565b66d2, 0xca14ceeb,
    0xe0ee16ee, 0x999f9e08, 0xcbf9111b, 0xb72cc875, 0x65d810e6, 0xf7d53f90,
    0xca395f9f, 0x31a2046e, 0x55ae1cfd, 0x00000643,
    // 5^308
    23,
    0xe92169b1, 0x8af3a385, 0x3bf5ed74, 0xf49665af, 0xcfa1254a, 0x4ea78e65,
    0x25a14b10, 0x7b5e6835, 0x99515138, 0xe2b7cbdd, 0x61008908, 0xcc7680c1,
    0x0b5a0aa1, 0xdf6bef70, 0xa7dc5468, 0xdcc111bc, 0x2b886e6d, 0x1db50c6d,
    0xa7648596, 0xf09eaa7e, 0x4ff8f570, 0x79c2f5e4, 0x000008e6,
    // 5^322
    24,
    0xdf4b2319, 0x848cfc90, 0x7e05e95f, 0x4e5d8a64, 0xe4af235b, 0xf83368ac,
    0x2462ba3f, 0xa81808e5, 0x009370b9, 0xb1084b96, 0x38d74330, 0xfd31585f,
    0x1781b92d, 0x6e6a18b0, 0xb1578ab4, 0x95953a97, 0x0ac8150b, 0xb5a92cb8,
    0x30281810, 0xbdfc434d, 0xbb19cb14, 0x02368385, 0xe89b18b6, 0x00000ca5,
    // 5^336
    25,
    0xba384ac1, 0x20842331, 0x9cb43312, 0xda0d4816, 0x404272c6, 0x8668be1f,
    0x4f1070a2, 0x19534390, 0x0b1cc46c, 0x2a176801, 0xf9cf5a0e, 0x6ad423e8,
    0x1bc0f3c6, 0xcc7cdb31, 0x033d7bce, 0xd20b4b88, 0xcfc8e585, 0xe546bb86,
    0xe181ca8d, 0x0c7b148d, 0x14f63292, 0x49e154bd, 0xdc9cc427, 0x584aeab1,
    0x000011f9,
    // 5^350
    26,
    0x05030aa9, 0xb3e1df66, 0xc7875cf4, 0x579cbe61, 0xc9458c27, 0xbea06775,
    0x58a9691a, 0xa80b733b, 0x391b77f8, 0x9c4c9237, 0xdc8f4ab4, 0x1012ec66,
    0xdc1b30af, 0x1ec7af2a, 0x74252f71, 0x17700b2a, 0xc799463b, 0x3b0d5a00,
    0xd0bd62a2, 0x2c107908, 0xfaff9452, 0x17fff04f, 0x9d8de43c, 0x9b54dbf5,
    0xe78541d9, 0x0000198a,
    // 5^364
    27,
    0x77259cd1, 0xc0b489aa, 0x06de5c27, 0xe5d80b55, 0x51779fe9, 0xb0851376,
    0x637dce44, 0xd4b0d18f, 0x23e47980, 0x84cc8ec4, 0xc1effa6a, 0xabf638bc,
    0x436766b4, 0x137a4398, 0x5bad9347, 0xe0553908, 0x56a879d9, 0xf6a6821d,
    0xb56cf3e8, 0x3cbc47cc, 0x0d3d54ba, 0xbc9a7281, 0x8303067e, 0x7a374f40,
    0x96aa4b03, 0x578df6c5, 0x0000244c,
    // 5^378
    28,
    0x4f98cb39, 0xa60edbbc, 0x83b5872e, 0xa501acff, 0x9cc76f78, 0xbadd4c73,
    0x43e989fa, 0xca7acf80, 0x2e0c824f, 0xb19f4ffc, 0x092fd81c, 0xe4eb645b,
    0xa1ff84c2, 0x8a5a83ba, 0xa8a1fae9, 0x1db43609, 0xb0fed50b, 0x0dd7d2bd,
    0x7d7accd8, 0x91fa640f, 0x37dcc6c5, 0x1c417fd5, 0xe4d462ad, 0xe8a43399,
    0x131bf9a5, 0x8df54d29, 0x36547dc1, 0x00003395,
    // 5^392
    29,
    0x02166fe1, 0x083de486, 0xd62e470a, 0xc6d2b056, 0x3aeef457, 0x1f43aa05,
    0x965bf267, 0xb2f8b1bc, 0x122a5b20, 0x6f8f42f6, 0x69256c95, 0x2d4b9dc1,
    0x782d8463, 0x8442b0dd, 0xb56b439a, 0x8c8db278, 0x5401ede3, 0x4f135bbf,
    0xfa935bf7, 0x23921f46, 0x71d7734c, 0x8d310e07, 0x4b5f2830, 0xc4a88b55,
    0xafef9016, 0x37ae8d85, 0x915c8e18, 0xbc38ef3f, 0x0000494d,
    // 5^406
    30,
    0xcb1ff4c9, 0x571a7f04, 0x85d68895, 0x1b6ed706, 0x7c65dd4f, 0x897cdd9c,
    0x95bdaacc, 0x14f6d8cf, 0x45858068, 0x313cf58b, 0x9fe6cf72, 0x63188b85,
    0x104cfdb7, 0x497f8414, 0x5376b926, 0x48b7c043, 0x2cc937c6, 0x4b7fc353,
    0x70abf5b0, 0x0bce1e0e, 0x287ad01f, 0xb290e0db, 0xa1b4fa05, 0xc29f7695,
    0x0f9fa088, 0x56cea490, 0x5f925bf3, 0x8e56f801, 0xb6b62d28, 0x0000682b,
    // 5^420
    31,
    0x1068d3f1, 0x05360080, 0xe2743643, 0xb574378b, 0x9cd78a30, 0x540200fe,
    0x93f000cf, 0xe0774e48, 0x14c70630, 0x71638bdf, 0x5e8f7a2f, 0x14fb9e4c,
    0x9a254178, 0xf8b27783, 0xf0cb9e67, 0x840ef09c, 0x756b9bfb, 0xbea9e781,
    0xf96eb466, 0x8180a428, 0xe519fb1f, 0x3ffeb3b8, 0x71f0bbd0, 0x4bc766fc,
    0x98ff0a1c, 0xe2d026eb, 0x778ea987, 0x35bcc387, 0x0b6d2505, 0x19bbd462,
    0x00009409,
    // 5^434
    32,
    0x2c451759, 0x7198b0c9, 0xe3582110, 0x4674505c, 0xaa5f87c7, 0xcb5e2a44,
    0x36fb2a09, 0xe311e205, 0xaef3168d, 0x4258b6b0, 0x2232c3a1, 0x6b25441b,
    0x32f99597, 0x8338da70, 0x850ad075, 0x433173da, 0x223a3f89, 0xb914bb92,
    0x93cb2295, 0x721a8ea5, 0xe7252ad7, 0x4ea5ed3d, 0xc87bf898, 0xa05dfad7,
    0x2fb184ec, 0x5f04ccd9, 0xd0c9b253, 0xbcedebb9, 0x0016800f, 0x6136109b,
    0x04dae3a5, 0x0000d25f,
    // 5^448
    33,
    0xa3bbd901, 0x4af13a80, 0xf5c94d29, 0x68a7db60, 0x161f3fe6, 0x0dbd2169,
    0x33725486, 0xb6c7fe76, 0x1e04db88, 0x05ff3dec, 0x9174a95c, 0xba531c3a,
    0xadbbd249, 0x07e5d310, 0x947bc051, 0xe33547df, 0x34ce58ac, 0x667ab134,
    0xf46a60c1, 0x0ce6af23, 0x732f477e, 0x8a578a65, 0x03d7e237, 0xaf75a497,
    0xef471da9, 0xe7144fb9, 0x9005ff4c, 0xb0861ab8, 0x286e7823, 0x3910719d,
    0xe7a74fd5, 0x95c3d7ef, 0x00012af4,
];

/// Largest exponent served by `get_power`.
pub(crate) const MAX_POWER: u32 = SMALL_POW5_STEP * LARGE_POW5_COUNT as u32 + SMALL_POW5_STEP - 1;

/// `5^k` split as `large * small`.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Pow5 {
    /// Little-endian limbs of `5^(14 * (k / 14))`, empty when that is 1.
    pub large: &'static [u32],
    /// `5^(k % 14)`.
    pub small: u32,
}

/// Look up `5^k` without allocating.
///
/// Returns `None` past `MAX_POWER`.
#[inline]
pub(crate) fn get_power(k: u32) -> Option<Pow5> {
    if k > MAX_POWER {
        return None;
    }

    let small = SMALL_POW5[(k % SMALL_POW5_STEP) as usize];
    let large: &'static [u32] = match (k / SMALL_POW5_STEP) as usize {
        0 => &[],
        index => {
            let offset = LARGE_POW5_OFFSETS[index - 1] as usize;
            let count = LARGE_POW5_DATA[offset] as usize;
            &LARGE_POW5_DATA[offset + 1..offset + 1 + count]
        }
    };
    Some(Pow5 { large, small })
}
