//! The six concrete CRC parameter sets, wired to
//! [`CrcEngine`](crate::engine::CrcEngine).

use once_cell::sync::Lazy;

use crate::engine::{build_table, CrcEngine, CrcParams};

macro_rules! crc_variant {
    ($params:ident, $alias:ident, $width:expr, $poly:expr, $init:expr, $xorout:expr, $refin:expr, $refout:expr) => {
        #[doc = concat!("Parameter block for ", stringify!($alias), ".")]
        #[derive(Copy, Clone, Default)]
        pub struct $params;

        impl CrcParams for $params {
            const WIDTH: u32 = $width;
            const POLY: u32 = $poly;
            const INIT: u32 = $init;
            const XOROUT: u32 = $xorout;
            const REFIN: bool = $refin;
            const REFOUT: bool = $refout;

            fn table() -> &'static [u32; 256] {
                static TABLE: Lazy<[u32; 256]> = Lazy::new(|| build_table($width, $poly));
                &TABLE
            }
        }

        #[doc = concat!(stringify!($alias), " hasher state.")]
        pub type $alias = CrcEngine<$params>;
    };
}

crc_variant!(
    Crc16CcittFalseParams,
    Crc16CcittFalse,
    16,
    0x1021,
    0xFFFF,
    0x0000,
    false,
    false
);
crc_variant!(
    Crc16XmodemParams,
    Crc16Xmodem,
    16,
    0x1021,
    0x0000,
    0x0000,
    false,
    false
);
crc_variant!(
    Crc16X25Params,
    Crc16X25,
    16,
    0x1021,
    0xFFFF,
    0xFFFF,
    true,
    true
);
crc_variant!(
    Crc32Params,
    Crc32,
    32,
    0x04C1_1DB7,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    true,
    true
);
crc_variant!(
    Crc32Bzip2Params,
    Crc32Bzip2,
    32,
    0x04C1_1DB7,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    false,
    false
);
crc_variant!(
    Crc32CParams,
    Crc32C,
    32,
    0x1EDC_6F41,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    true,
    true
);
