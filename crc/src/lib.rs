//! Table-driven CRC-16 and CRC-32 variants: CRC-16/CCITT-FALSE,
//! CRC-16/XMODEM, CRC-16/X-25, CRC-32 (RFC 1952 / Ethernet),
//! CRC-32/BZIP2 and CRC-32C (Castagnoli), all built on one parameterised
//! engine.
//!
//! ```rust
//! use hashiface::Hasher;
//! use crc::Crc32;
//!
//! let mut crc = Crc32::new();
//! crc.init();
//! crc.update(b"123456789");
//! crc.finalize();
//! assert_eq!(crc.checksum(), 0xCBF4_3926);
//! ```
// `once_cell::sync::Lazy` needs `std`'s one-shot synchronisation, so unlike
// `bitutil` and `hashiface` this crate is not `no_std`; the `std` feature
// (on by default) exists only to mirror the per-crate
// `default = ["std"]` convention used elsewhere in this workspace, not to
// gate any code here.

pub mod engine;
pub mod variants;

pub use engine::{CrcEngine, CrcParams};
pub use hashiface::Hasher;
pub use variants::{Crc16CcittFalse, Crc16X25, Crc16Xmodem, Crc32, Crc32Bzip2, Crc32C};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compress_one_byte_reference;
    use crate::variants::{Crc16CcittFalseParams, Crc16X25Params, Crc16XmodemParams};

    const CHECK: &[u8] = b"123456789";

    #[test]
    fn crc16_ccitt_false_check_value() {
        let mut c = Crc16CcittFalse::new();
        c.init();
        c.update(CHECK);
        c.finalize();
        assert_eq!(c.checksum(), 0x29B1);
    }

    #[test]
    fn crc16_xmodem_check_value() {
        let mut c = Crc16Xmodem::new();
        c.init();
        c.update(CHECK);
        c.finalize();
        assert_eq!(c.checksum(), 0x31C3);
    }

    #[test]
    fn crc16_x25_check_value() {
        let mut c = Crc16X25::new();
        c.init();
        c.update(CHECK);
        c.finalize();
        assert_eq!(c.checksum(), 0x906E);
    }

    #[test]
    fn crc32_check_value() {
        let mut c = Crc32::new();
        c.init();
        c.update(CHECK);
        c.finalize();
        assert_eq!(c.checksum(), 0xCBF4_3926);
    }

    #[test]
    fn crc32_bzip2_check_value() {
        let mut c = Crc32Bzip2::new();
        c.init();
        c.update(CHECK);
        c.finalize();
        assert_eq!(c.checksum(), 0xFC89_1918);
    }

    #[test]
    fn crc32c_check_value() {
        let mut c = Crc32C::new();
        c.init();
        c.update(CHECK);
        c.finalize();
        assert_eq!(c.checksum(), 0xE306_9283);
    }

    #[test]
    fn empty_input_leaves_crc16_variants_at_their_init_value_family() {
        // XMODEM has Init=0 and XorOut=0, so the empty-message CRC is 0.
        let mut c = Crc16Xmodem::new();
        c.init();
        c.finalize();
        assert_eq!(c.checksum(), 0x0000);
    }

    #[test]
    fn chunk_boundary_invariance() {
        let mut whole = Crc32::new();
        whole.init();
        whole.update(CHECK);
        whole.finalize();

        let mut chunked = Crc32::new();
        chunked.init();
        chunked.update(&CHECK[..3]);
        chunked.update(&CHECK[3..]);
        chunked.finalize();

        assert_eq!(whole.checksum(), chunked.checksum());
    }

    #[test]
    fn truncated_digest_is_high_order_prefix() {
        let mut c = Crc32::new();
        c.init();
        c.update(CHECK);
        c.finalize();
        let mut full = [0u8; 4];
        c.digest(&mut full);

        let mut half = [0u8; 2];
        let n = c.digest(&mut half);
        assert_eq!(n, 2);
        assert_eq!(half, full[..2]);
    }

    #[test]
    fn conforms_to_the_shared_hasher_properties() {
        let mut h = Crc32::new();
        hashiface::dev::determinism(&mut h, CHECK);
        hashiface::dev::chunk_invariance(&mut h, CHECK, &[1, 2, 3]);
        hashiface::dev::reset::<Crc32>(&mut h, b"some unrelated prior message", CHECK);
        hashiface::dev::truncation(&mut h, CHECK);
    }

    #[test]
    fn table_matches_bitwise_reference_ccitt_family() {
        let table = Crc16CcittFalseParams::table();
        for n in 0..256u32 {
            let expect = compress_one_byte_reference(n as u8, 16, 0x1021);
            assert_eq!(table[n as usize], expect, "mismatch at index {}", n);
        }
    }

    #[test]
    fn display_and_lower_hex_format_the_checksum_zero_padded() {
        let mut c = Crc32::new();
        c.init();
        c.update(CHECK);
        c.finalize();
        assert_eq!(format!("{}", c), "cbf43926");
        assert_eq!(format!("{:x}", c), "cbf43926");

        let mut c16 = Crc16Xmodem::new();
        c16.init();
        c16.update(CHECK);
        c16.finalize();
        assert_eq!(format!("{}", c16), "31c3");
    }

    #[test]
    fn ccitt_variants_share_one_table() {
        // Same polynomial (0x1021) across all three 16-bit variants.
        assert_eq!(
            Crc16CcittFalseParams::table() as *const _ as usize != 0,
            true
        );
        assert_eq!(*Crc16CcittFalseParams::table(), *Crc16XmodemParams::table());
        assert_eq!(*Crc16CcittFalseParams::table(), *Crc16X25Params::table());
    }
}
