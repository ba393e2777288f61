//! Thresholds for choosing between fixed and scientific notation when
//! formatting with a significant-digit precision.
//!
//! For a precision `P` and a scientific exponent `X`, the entry is the bit
//! pattern of the largest value whose scientific form with `P` significant
//! digits has exponent at most `X`. Rows start at `X = -5`. Precisions up
//! to the special limit have their own row in the special table; every
//! larger precision shares the single ordinary row.

/*
# the following Python code generates these tables:
def entry(p, x):
    bound = (Fraction(10)**p - Fraction(1, 2)) * Fraction(10)**(x + 1 - p)
    return largest_bits_strictly_below(bound)
special = [entry(p, x) for p in range(1, MAX_SPECIAL_P + 1) for x in range(-5, p)]
ordinary = [entry(MAX_P, x) for x in range(-5, MAX_P)]
*/

/// Largest precision with a dedicated row for `f64`.
pub(crate) const F64_MAX_SPECIAL_P: usize = 15;

/// Precision at or beyond which `f64` trial formatting never rounds.
pub(crate) const F64_MAX_P: usize = 309;

pub(crate) static F64_SPECIAL_X_TABLE: [u64; 195] = [
    0x3f18e757928e0c9d, 0x3f4f212d77318fc5, 0x3f8374bc6a7ef9db,
    0x3fb851eb851eb851, 0x3fee666666666666, 0x4022ffffffffffff,
    0x3f1a1554fbdad751, 0x3f504d551d68c692, 0x3f8460aa64c2f837,
    0x3fb978d4fdf3b645, 0x3fefd70a3d70a3d7, 0x4023e66666666666,
    0x4058dfffffffffff, 0x3f1a3387ecc8eb96, 0x3f506034f3fd933e,
    0x3f84784230fcf80d, 0x3fb99652bd3c3611, 0x3feffbe76c8b4395,
    0x4023fd70a3d70a3d, 0x4058fccccccccccc, 0x408f3bffffffffff,
    0x3f1a368d04e0ba6a, 0x3f506218230c7482, 0x3f847a9e2bcf91a3,
    0x3fb99945b6c3760b, 0x3fefff972474538e, 0x4023ffbe76c8b439,
    0x4058ffae147ae147, 0x408f3f9999999999, 0x40c387bfffffffff,
    0x3f1a36da54164f19, 0x3f506248748df16f, 0x3f847ada91b16dcb,
    0x3fb99991361dc93e, 0x3feffff583a53b8e, 0x4023fff972474538,
    0x4058fff7ced91687, 0x408f3ff5c28f5c28, 0x40c387f999999999,
    0x40f869f7ffffffff, 0x3f1a36e20f35445d, 0x3f50624d49814aba,
    0x3f847ae09be19d69, 0x3fb99998c2da04c3, 0x3feffffef39085f4,
    0x4023ffff583a53b8, 0x4058ffff2e48e8a7, 0x408f3ffef9db22d0,
    0x40c387ff5c28f5c2, 0x40f869ff33333333, 0x412e847effffffff,
    0x3f1a36e2d51ec34b, 0x3f50624dc5333a0e, 0x3f847ae136800892,
    0x3fb9999984200ab7, 0x3fefffffe5280d65, 0x4023ffffef39085f,
    0x4058ffffeb074a77, 0x408f3fffe5c91d14, 0x40c387ffef9db22d,
    0x40f869ffeb851eb8, 0x412e847fe6666666, 0x416312cfefffffff,
    0x3f1a36e2e8e94ffc, 0x3f50624dd191d1fd, 0x3f847ae145f6467d,
    0x3fb999999773d81c, 0x3feffffffd50ce23, 0x4023fffffe5280d6,
    0x4058fffffde7210b, 0x408f3ffffd60e94e, 0x40c387fffe5c91d1,
    0x40f869fffdf3b645, 0x412e847ffd70a3d7, 0x416312cffe666666,
    0x4197d783fdffffff, 0x3f1a36e2eae3f7a7, 0x3f50624dd2ce7ac8,
    0x3f847ae14782197b, 0x3fb9999999629fd9, 0x3fefffffffbb47d0,
    0x4023ffffffd50ce2, 0x4058ffffffca501a, 0x408f3fffffbce421,
    0x40c387ffffd60e94, 0x40f869ffffcb923a, 0x412e847fffbe76c8,
    0x416312cfffd70a3d, 0x4197d783ffcccccc, 0x41cdcd64ffbfffff,
    0x3f1a36e2eb16a205, 0x3f50624dd2ee2543, 0x3f847ae147a9ae94,
    0x3fb9999999941a39, 0x3feffffffff920c8, 0x4023fffffffbb47d,
    0x4058fffffffaa19c, 0x408f3ffffff94a03, 0x40c387fffffbce42,
    0x40f869fffffac1d2, 0x412e847ffff97247, 0x416312cffffbe76c,
    0x4197d783fffae147, 0x41cdcd64fff99999, 0x4202a05f1ffbffff,
    0x3f1a36e2eb1bb30f, 0x3f50624dd2f14fe9, 0x3f847ae147ada3e3,
    0x3fb9999999990cdc, 0x3fefffffffff5014, 0x4023ffffffff920c,
    0x4058ffffffff768f, 0x408f3fffffff5433, 0x40c387ffffff94a0,
    0x40f869ffffff79c8, 0x412e847fffff583a, 0x416312cfffff9724,
    0x4197d783ffff7ced, 0x41cdcd64ffff5c28, 0x4202a05f1fff9999,
    0x42374876e7ff7fff, 0x3f1a36e2eb1c34c3, 0x3f50624dd2f1a0fa,
    0x3f847ae147ae0938, 0x3fb9999999998b86, 0x3fefffffffffee68,
    0x4023fffffffff501, 0x4058fffffffff241, 0x408f3fffffffeed1,
    0x40c387fffffff543, 0x40f869fffffff294, 0x412e847fffffef39,
    0x416312cffffff583, 0x4197d783fffff2e4, 0x41cdcd64ffffef9d,
    0x4202a05f1ffff5c2, 0x42374876e7fff333, 0x426d1a94a1ffefff,
    0x3f1a36e2eb1c41bb, 0x3f50624dd2f1a915, 0x3f847ae147ae135a,
    0x3fb9999999999831, 0x3feffffffffffe3d, 0x4023fffffffffee6,
    0x4058fffffffffea0, 0x408f3ffffffffe48, 0x40c387fffffffeed,
    0x40f869fffffffea8, 0x412e847ffffffe52, 0x416312cffffffef3,
    0x4197d783fffffeb0, 0x41cdcd64fffffe5c, 0x4202a05f1ffffef9,
    0x42374876e7fffeb8, 0x426d1a94a1fffe66, 0x42a2309ce53ffeff,
    0x3f1a36e2eb1c4307, 0x3f50624dd2f1a9e4, 0x3f847ae147ae145e,
    0x3fb9999999999975, 0x3fefffffffffffd2, 0x4023ffffffffffe3,
    0x4058ffffffffffdc, 0x408f3fffffffffd4, 0x40c387ffffffffe4,
    0x40f869ffffffffdd, 0x412e847fffffffd5, 0x416312cfffffffe5,
    0x4197d783ffffffde, 0x41cdcd64ffffffd6, 0x4202a05f1fffffe5,
    0x42374876e7ffffdf, 0x426d1a94a1ffffd7, 0x42a2309ce53fffe6,
    0x42d6bcc41e8fffdf, 0x3f1a36e2eb1c4328, 0x3f50624dd2f1a9f9,
    0x3f847ae147ae1477, 0x3fb9999999999995, 0x3feffffffffffffb,
    0x4023fffffffffffd, 0x4058fffffffffffc, 0x408f3ffffffffffb,
    0x40c387fffffffffd, 0x40f869fffffffffc, 0x412e847ffffffffb,
    0x416312cffffffffd, 0x4197d783fffffffc, 0x41cdcd64fffffffb,
    0x4202a05f1ffffffd, 0x42374876e7fffffc, 0x426d1a94a1fffffb,
    0x42a2309ce53ffffd, 0x42d6bcc41e8ffffc, 0x430c6bf52633fffb,
];

pub(crate) static F64_ORDINARY_X_TABLE: [u64; 314] = [
    0x3f1a36e2eb1c432c, 0x3f50624dd2f1a9fb, 0x3f847ae147ae147a,
    0x3fb9999999999999, 0x3fefffffffffffff, 0x4023ffffffffffff,
    0x4058ffffffffffff, 0x408f3fffffffffff, 0x40c387ffffffffff,
    0x40f869ffffffffff, 0x412e847fffffffff, 0x416312cfffffffff,
    0x4197d783ffffffff, 0x41cdcd64ffffffff, 0x4202a05f1fffffff,
    0x42374876e7ffffff, 0x426d1a94a1ffffff, 0x42a2309ce53fffff,
    0x42d6bcc41e8fffff, 0x430c6bf52633ffff, 0x4341c37937e07fff,
    0x4376345785d89fff, 0x43abc16d674ec7ff, 0x43e158e460913cff,
    0x4415af1d78b58c3f, 0x444b1ae4d6e2ef4f, 0x4480f0cf064dd591,
    0x44b52d02c7e14af6, 0x44ea784379d99db4, 0x45208b2a2c280290,
    0x4554adf4b7320334, 0x4589d971e4fe8401, 0x45c027e72f1f1281,
    0x45f431e0fae6d721, 0x46293e5939a08ce9, 0x465f8def8808b024,
    0x4693b8b5b5056e16, 0x46c8a6e32246c99c, 0x46fed09bead87c03,
    0x4733426172c74d82, 0x476812f9cf7920e2, 0x479e17b84357691b,
    0x47d2ced32a16a1b1, 0x48078287f49c4a1d, 0x483d6329f1c35ca4,
    0x48725dfa371a19e6, 0x48a6f578c4e0a060, 0x48dcb2d6f618c878,
    0x4911efc659cf7d4b, 0x49466bb7f0435c9e, 0x497c06a5ec5433c6,
    0x49b18427b3b4a05b, 0x49e5e531a0a1c872, 0x4a1b5e7e08ca3a8f,
    0x4a511b0ec57e6499, 0x4a8561d276ddfdc0, 0x4ababa4714957d30,
    0x4af0b46c6cdd6e3e, 0x4b24e1878814c9cd, 0x4b5a19e96a19fc40,
    0x4b905031e2503da8, 0x4bc4643e5ae44d12, 0x4bf97d4df19d6057,
    0x4c2fdca16e04b86d, 0x4c63e9e4e4c2f344, 0x4c98e45e1df3b015,
    0x4ccf1d75a5709c1a, 0x4d03726987666190, 0x4d384f03e93ff9f4,
    0x4d6e62c4e38ff872, 0x4da2fdbb0e39fb47, 0x4dd7bd29d1c87a19,
    0x4e0dac74463a989f, 0x4e428bc8abe49f63, 0x4e772ebad6ddc73c,
    0x4eacfa698c95390b, 0x4ee21c81f7dd43a7, 0x4f16a3a275d49491,
    0x4f4c4c8b1349b9b5, 0x4f81afd6ec0e1411, 0x4fb61bcca7119915,
    0x4feba2bfd0d5ff5b, 0x502145b7e285bf98, 0x50559725db272f7f,
    0x508afcef51f0fb5e, 0x50c0de1593369d1b, 0x50f5159af8044462,
    0x512a5b01b605557a, 0x516078e111c3556c, 0x5194971956342ac7,
    0x51c9bcdfabc13579, 0x5200160bcb58c16c, 0x52341b8ebe2ef1c7,
    0x526922726dbaae39, 0x529f6b0f092959c7, 0x52d3a2e965b9d81c,
    0x53088ba3bf284e23, 0x533eae8caef261ac, 0x53732d17ed577d0b,
    0x53a7f85de8ad5c4e, 0x53ddf67562d8b362, 0x5412ba095dc7701d,
    0x5447688bb5394c25, 0x547d42aea2879f2e, 0x54b249ad2594c37c,
    0x54e6dc186ef9f45c, 0x551c931e8ab87173, 0x5551dbf316b346e7,
    0x558652efdc6018a1, 0x55bbe7abd3781eca, 0x55f170cb642b133e,
    0x5625ccfe3d35d80e, 0x565b403dcc834e11, 0x569108269fd210cb,
    0x56c54a3047c694fd, 0x56fa9cbc59b83a3d, 0x5730a1f5b8132466,
    0x5764ca732617ed7f, 0x5799fd0fef9de8df, 0x57d03e29f5c2b18b,
    0x58044db473335dee, 0x583961219000356a, 0x586fb969f40042c5,
    0x58a3d3e2388029bb, 0x58d8c8dac6a0342a, 0x590efb1178484134,
    0x59435ceaeb2d28c0, 0x59783425a5f872f1, 0x59ae412f0f768fad,
    0x59e2e8bd69aa19cc, 0x5a17a2ecc414a03f, 0x5a4d8ba7f519c84f,
    0x5a827748f9301d31, 0x5ab7151b377c247e, 0x5aecda62055b2d9d,
    0x5b22087d4358fc82, 0x5b568a9c942f3ba3, 0x5b8c2d43b93b0a8b,
    0x5bc19c4a53c4e697, 0x5bf6035ce8b6203d, 0x5c2b843422e3a84c,
    0x5c6132a095ce492f, 0x5c957f48bb41db7b, 0x5ccadf1aea12525a,
    0x5d00cb70d24b7378, 0x5d34fe4d06de5056, 0x5d6a3de04895e46c,
    0x5da066ac2d5daec3, 0x5dd4805738b51a74, 0x5e09a06d06e26112,
    0x5e400444244d7cab, 0x5e7405552d60dbd6, 0x5ea906aa78b912cb,
    0x5edf485516e7577e, 0x5f138d352e5096af, 0x5f48708279e4bc5a,
    0x5f7e8ca3185deb71, 0x5fb317e5ef3ab327, 0x5fe7dddf6b095ff0,
    0x601dd55745cbb7ec, 0x6052a5568b9f52f4, 0x60874eac2e8727b1,
    0x60bd22573a28f19d, 0x60f2357684599702, 0x6126c2d4256ffcc2,
    0x615c73892ecbfbf3, 0x6191c835bd3f7d78, 0x61c63a432c8f5cd6,
    0x61fbc8d3f7b3340b, 0x62315d847ad00087, 0x6265b4e5998400a9,
    0x629b221effe500d3, 0x62d0f5535fef2084, 0x630532a837eae8a5,
    0x633a7f5245e5a2ce, 0x63708f936baf85c1, 0x63a4b378469b6731,
    0x63d9e056584240fd, 0x64102c35f729689e, 0x6444374374f3c2c6,
    0x647945145230b377, 0x64af965966bce055, 0x64e3bdf7e0360c35,
    0x6518ad75d8438f43, 0x654ed8d34e547313, 0x6583478410f4c7ec,
    0x65b819651531f9e7, 0x65ee1fbe5a7e7861, 0x6622d3d6f88f0b3c,
    0x665788ccb6b2ce0c, 0x668d6affe45f818f, 0x66c262dfeebbb0f9,
    0x66f6fb97ea6a9d37, 0x672cba7de5054485, 0x6761f48eaf234ad3,
    0x679671b25aec1d88, 0x67cc0e1ef1a724ea, 0x680188d357087712,
    0x6835eb082cca94d7, 0x686b65ca37fd3a0d, 0x68a11f9e62fe4448,
    0x68d56785fbbdd55a, 0x690ac1677aad4ab0, 0x6940b8e0acac4eae,
    0x6974e718d7d7625a, 0x69aa20df0dcd3af0, 0x69e0548b68a044d6,
    0x6a1469ae42c8560c, 0x6a498419d37a6b8f, 0x6a7fe52048590672,
    0x6ab3ef342d37a407, 0x6ae8eb0138858d09, 0x6b1f25c186a6f04c,
    0x6b537798f428562f, 0x6b88557f31326bbb, 0x6bbe6adefd7f06aa,
    0x6bf302cb5e6f642a, 0x6c27c37e360b3d35, 0x6c5db45dc38e0c82,
    0x6c9290ba9a38c7d1, 0x6cc734e940c6f9c5, 0x6cfd022390f8b837,
    0x6d3221563a9b7322, 0x6d66a9abc9424feb, 0x6d9c5416bb92e3e6,
    0x6dd1b48e353bce6f, 0x6e0621b1c28ac20b, 0x6e3baa1e332d728e,
    0x6e714a52dffc6799, 0x6ea59ce797fb817f, 0x6edb04217dfa61df,
    0x6f10e294eebc7d2b, 0x6f451b3a2a6b9c76, 0x6f7a6208b5068394,
    0x6fb07d457124123c, 0x6fe49c96cd6d16cb, 0x7019c3bc80c85c7e,
    0x70501a55d07d39cf, 0x708420eb449c8842, 0x70b9292615c3aa53,
    0x70ef736f9b3494e8, 0x7123a825c100dd11, 0x7158922f31411455,
    0x718eb6bafd91596b, 0x71c33234de7ad7e2, 0x71f7fec216198ddb,
    0x722dfe729b9ff152, 0x7262bf07a143f6d3, 0x72976ec98994f488,
    0x72cd4a7bebfa31aa, 0x73024e8d737c5f0a, 0x7336e230d05b76cd,
    0x736c9abd04725480, 0x73a1e0b622c774d0, 0x73d658e3ab795204,
    0x740bef1c9657a685, 0x74417571ddf6c813, 0x7475d2ce55747a18,
    0x74ab4781ead1989e, 0x74e10cb132c2ff63, 0x75154fdd7f73bf3b,
    0x754aa3d4df50af0a, 0x7580a6650b926d66, 0x75b4cffe4e7708c0,
    0x75ea03fde214caf0, 0x7620427ead4cfed6, 0x7654531e58a03e8b,
    0x768967e5eec84e2e, 0x76bfc1df6a7a61ba, 0x76f3d92ba28c7d14,
    0x7728cf768b2f9c59, 0x775f03542dfb8370, 0x779362149cbd3226,
    0x77c83a99c3ec7eaf, 0x77fe494034e79e5b, 0x7832edc82110c2f9,
    0x7867a93a2954f3b7, 0x789d9388b3aa30a5, 0x78d27c35704a5e67,
    0x79071b42cc5cf601, 0x793ce2137f743381, 0x79720d4c2fa8a030,
    0x79a6909f3b92c83d, 0x79dc34c70a777a4c, 0x7a11a0fc668aac6f,
    0x7a46093b802d578b, 0x7a7b8b8a6038ad6e, 0x7ab137367c236c65,
    0x7ae585041b2c477e, 0x7b1ae64521f7595e, 0x7b50cfeb353a97da,
    0x7b8503e602893dd1, 0x7bba44df832b8d45, 0x7bf06b0bb1fb384b,
    0x7c2485ce9e7a065e, 0x7c59a742461887f6, 0x7c9008896bcf54f9,
    0x7cc40aabc6c32a38, 0x7cf90d56b873f4c6, 0x7d2f50ac6690f1f8,
    0x7d63926bc01a973b, 0x7d987706b0213d09, 0x7dce94c85c298c4c,
    0x7e031cfd3999f7af, 0x7e37e43c8800759b, 0x7e6ddd4baa009302,
    0x7ea2aa4f4a405be1, 0x7ed754e31cd072d9, 0x7f0d2a1be4048f90,
    0x7f423a516e82d9ba, 0x7f76c8e5ca239028, 0x7fac7b1f3cac7433,
    0x7fe1ccf385ebc89f, 0x7fefffffffffffff,
];

/// Largest precision with a dedicated row for `f32`.
pub(crate) const F32_MAX_SPECIAL_P: usize = 7;

/// Precision at or beyond which `f32` trial formatting never rounds.
pub(crate) const F32_MAX_P: usize = 39;

pub(crate) static F32_SPECIAL_X_TABLE: [u32; 63] = [
    0x38c73abc, 0x3a79096b, 0x3c1ba5e3, 0x3dc28f5c, 0x3f733333, 0x4117ffff,
    0x38d0aaa7, 0x3a826aa8, 0x3c230553, 0x3dcbc6a7, 0x3f7eb851, 0x411f3333,
    0x42c6ffff, 0x38d19c3f, 0x3a8301a7, 0x3c23c211, 0x3dccb295, 0x3f7fdf3b,
    0x411feb85, 0x42c7e666, 0x4479dfff, 0x38d1b468, 0x3a8310c1, 0x3c23d4f1,
    0x3dccca2d, 0x3f7ffcb9, 0x411ffdf3, 0x42c7fd70, 0x4479fccc, 0x461c3dff,
    0x38d1b6d2, 0x3a831243, 0x3c23d6d4, 0x3dcccc89, 0x3f7fffac, 0x411fffcb,
    0x42c7ffbe, 0x4479ffae, 0x461c3fcc, 0x47c34fbf, 0x38d1b710, 0x3a83126a,
    0x3c23d704, 0x3dccccc6, 0x3f7ffff7, 0x411ffffa, 0x42c7fff9, 0x4479fff7,
    0x461c3ffa, 0x47c34ff9, 0x497423f7, 0x38d1b716, 0x3a83126e, 0x3c23d709,
    0x3dcccccc, 0x3f7fffff, 0x411fffff, 0x42c7ffff, 0x4479ffff, 0x461c3fff,
    0x47c34fff, 0x497423ff, 0x4b18967f,
];

pub(crate) static F32_ORDINARY_X_TABLE: [u32; 44] = [
    0x38d1b717, 0x3a83126e, 0x3c23d70a, 0x3dcccccc, 0x3f7fffff, 0x411fffff,
    0x42c7ffff, 0x4479ffff, 0x461c3fff, 0x47c34fff, 0x497423ff, 0x4b18967f,
    0x4cbebc1f, 0x4e6e6b27, 0x501502f8, 0x51ba43b7, 0x5368d4a5, 0x551184e7,
    0x56b5e620, 0x58635fa9, 0x5a0e1bc9, 0x5bb1a2bc, 0x5d5e0b6b, 0x5f0ac723,
    0x60ad78eb, 0x6258d726, 0x64078678, 0x65a96816, 0x6753c21b, 0x69045951,
    0x6aa56fa5, 0x6c4ecb8f, 0x6e013f39, 0x6fa18f07, 0x7149f2c9, 0x72fc6f7c,
    0x749dc5ad, 0x76453719, 0x77f684df, 0x799a130b, 0x7b4097ce, 0x7cf0bdc2,
    0x7e967699, 0x7f7fffff,
];
