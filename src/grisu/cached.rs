//! Precomputed powers of ten for the moderate path.
//!
//! Two tables cover every reachable decimal exponent: exact extended
//! floats for 10^0..=10^7, and correctly rounded 64-bit mantissas for
//! 10^-348..=10^340 in steps of 8. Any power of ten factors into one
//! entry of each, so a conversion costs at most two multiplies.

use crate::grisu::float::ExtendedFloat;

/// Powers of ten as exact u64 integers.
pub(crate) const POW10_64: [u64; 20] = [
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
    10000000000,
    100000000000,
    1000000000000,
    10000000000000,
    100000000000000,
    1000000000000000,
    10000000000000000,
    100000000000000000,
    1000000000000000000,
    10000000000000000000,
];

// Normalized extended floats for 10^0..=10^7; all are exact.
const SMALL_MANTISSA: [u64; 8] = [
    0x8000000000000000, // 10^0
    0xa000000000000000, // 10^1
    0xc800000000000000, // 10^2
    0xfa00000000000000, // 10^3
    0x9c40000000000000, // 10^4
    0xc350000000000000, // 10^5
    0xf424000000000000, // 10^6
    0x9896800000000000, // 10^7
];

const SMALL_EXPONENT: [i32; 8] = [-63, -60, -57, -54, -50, -47, -44, -40];

// Correctly rounded 64-bit mantissas for 10^-348, 10^-340, ..., 10^340.
const LARGE_MANTISSA: [u64; 87] = [
    0xfa8fd5a0081c0288, // 10^-348
    0xbaaee17fa23ebf76, // 10^-340
    0x8b16fb203055ac76, // 10^-332
    0xcf42894a5dce35ea, // 10^-324
    0x9a6bb0aa55653b2d, // 10^-316
    0xe61acf033d1a45df, // 10^-308
    0xab70fe17c79ac6ca, // 10^-300
    0xff77b1fcbebcdc4f, // 10^-292
    0xbe5691ef416bd60c, // 10^-284
    0x8dd01fad907ffc3c, // 10^-276
    0xd3515c2831559a83, // 10^-268
    0x9d71ac8fada6c9b5, // 10^-260
    0xea9c227723ee8bcb, // 10^-252
    0xaecc49914078536d, // 10^-244
    0x823c12795db6ce57, // 10^-236
    0xc21094364dfb5637, // 10^-228
    0x9096ea6f3848984f, // 10^-220
    0xd77485cb25823ac7, // 10^-212
    0xa086cfcd97bf97f4, // 10^-204
    0xef340a98172aace5, // 10^-196
    0xb23867fb2a35b28e, // 10^-188
    0x84c8d4dfd2c63f3b, // 10^-180
    0xc5dd44271ad3cdba, // 10^-172
    0x936b9fcebb25c996, // 10^-164
    0xdbac6c247d62a584, // 10^-156
    0xa3ab66580d5fdaf6, // 10^-148
    0xf3e2f893dec3f126, // 10^-140
    0xb5b5ada8aaff80b8, // 10^-132
    0x87625f056c7c4a8b, // 10^-124
    0xc9bcff6034c13053, // 10^-116
    0x964e858c91ba2655, // 10^-108
    0xdff9772470297ebd, // 10^-100
    0xa6dfbd9fb8e5b88f, // 10^-92
    0xf8a95fcf88747d94, // 10^-84
    0xb94470938fa89bcf, // 10^-76
    0x8a08f0f8bf0f156b, // 10^-68
    0xcdb02555653131b6, // 10^-60
    0x993fe2c6d07b7fac, // 10^-52
    0xe45c10c42a2b3b06, // 10^-44
    0xaa242499697392d3, // 10^-36
    0xfd87b5f28300ca0e, // 10^-28
    0xbce5086492111aeb, // 10^-20
    0x8cbccc096f5088cc, // 10^-12
    0xd1b71758e219652c, // 10^-4
    0x9c40000000000000, // 10^4
    0xe8d4a51000000000, // 10^12
    0xad78ebc5ac620000, // 10^20
    0x813f3978f8940984, // 10^28
    0xc097ce7bc90715b3, // 10^36
    0x8f7e32ce7bea5c70, // 10^44
    0xd5d238a4abe98068, // 10^52
    0x9f4f2726179a2245, // 10^60
    0xed63a231d4c4fb27, // 10^68
    0xb0de65388cc8ada8, // 10^76
    0x83c7088e1aab65db, // 10^84
    0xc45d1df942711d9a, // 10^92
    0x924d692ca61be758, // 10^100
    0xda01ee641a708dea, // 10^108
    0xa26da3999aef774a, // 10^116
    0xf209787bb47d6b85, // 10^124
    0xb454e4a179dd1877, // 10^132
    0x865b86925b9bc5c2, // 10^140
    0xc83553c5c8965d3d, // 10^148
    0x952ab45cfa97a0b3, // 10^156
    0xde469fbd99a05fe3, // 10^164
    0xa59bc234db398c25, // 10^172
    0xf6c69a72a3989f5c, // 10^180
    0xb7dcbf5354e9bece, // 10^188
    0x88fcf317f22241e2, // 10^196
    0xcc20ce9bd35c78a5, // 10^204
    0x98165af37b2153df, // 10^212
    0xe2a0b5dc971f303a, // 10^220
    0xa8d9d1535ce3b396, // 10^228
    0xfb9b7cd9a4a7443c, // 10^236
    0xbb764c4ca7a44410, // 10^244
    0x8bab8eefb6409c1a, // 10^252
    0xd01fef10a657842c, // 10^260
    0x9b10a4e5e9913129, // 10^268
    0xe7109bfba19c0c9d, // 10^276
    0xac2820d9623bf429, // 10^284
    0x80444b5e7aa7cf85, // 10^292
    0xbf21e44003acdd2d, // 10^300
    0x8e679c2f5e44ff8f, // 10^308
    0xd433179d9c8cb841, // 10^316
    0x9e19db92b4e31ba9, // 10^324
    0xeb96bf6ebadf77d9, // 10^332
    0xaf87023b9bf0ee6b, // 10^340
];

const LARGE_EXPONENT: [i32; 87] = [
    -1220, -1193, -1166, -1140, -1113, -1087, -1060, -1034, -1007, -980, -954, -927, -901, -874,
    -847, -821, -794, -768, -741, -715, -688, -661, -635, -608, -582, -555, -529, -502, -475,
    -449, -422, -396, -369, -343, -316, -289, -263, -236, -210, -183, -157, -130, -103, -77, -50,
    -24, 3, 30, 56, 83, 109, 136, 162, 189, 216, 242, 269, 295, 322, 348, 375, 402, 428, 455,
    481, 508, 534, 561, 588, 614, 641, 667, 694, 720, 747, 774, 800, 827, 853, 880, 907, 933,
    960, 986, 1013, 1039, 1066,
];

/// Factored powers of ten for the moderate path.
pub(crate) struct ModeratePathPowers {
    /// Decimal exponent spacing of the large table.
    pub step: i32,
    /// Offset of the first large-table entry, 10^-bias.
    pub bias: i32,
}

pub(crate) const POWERS: ModeratePathPowers = ModeratePathPowers { step: 8, bias: 348 };

impl ModeratePathPowers {
    #[inline]
    pub(crate) fn get_small(&self, index: usize) -> ExtendedFloat {
        ExtendedFloat {
            mant: SMALL_MANTISSA[index],
            exp: SMALL_EXPONENT[index],
        }
    }

    #[inline]
    pub(crate) fn get_large(&self, index: usize) -> ExtendedFloat {
        ExtendedFloat {
            mant: LARGE_MANTISSA[index],
            exp: LARGE_EXPONENT[index],
        }
    }

    #[inline]
    pub(crate) fn get_small_int(&self, index: usize) -> u64 {
        POW10_64[index]
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        LARGE_MANTISSA.len()
    }
}

// TESTS
// -----
