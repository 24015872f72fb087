//! Word rotation and bit-reflection primitives shared by every hasher in the
//! `libhash` workspace.
//!
//! These are the only two bit-level operations the rest of the workspace
//! needs: rotating a 32- or 64-bit word, and mirroring the bit order of an
//! 8/16/32-bit value. Keeping them in one leaf crate means the CRC engine
//! and the Merkle-Damgård cores (MD5, SHA-1, SHA-2) never duplicate them.
#![no_std]

/// Rotates `x` left by `s` bits within a 32-bit word.
///
/// `s` is taken modulo 32, so any `s` is valid input. Built on
/// [`u32::rotate_left`], which compiles to a single rotate instruction on
/// every target Rust supports — its timing does not depend on the value of
/// `x`, only on the (public) shift amount.
#[inline]
pub fn rotl32(x: u32, s: u32) -> u32 {
    x.rotate_left(s)
}

/// Rotates `x` right by `s` bits within a 32-bit word. See [`rotl32`].
#[inline]
pub fn rotr32(x: u32, s: u32) -> u32 {
    x.rotate_right(s)
}

/// Rotates `x` left by `s` bits within a 64-bit word. See [`rotl32`].
#[inline]
pub fn rotl64(x: u64, s: u32) -> u64 {
    x.rotate_left(s)
}

/// Rotates `x` right by `s` bits within a 64-bit word. See [`rotl32`].
#[inline]
pub fn rotr64(x: u64, s: u32) -> u64 {
    x.rotate_right(s)
}

/// Mirrors the bit order of the low `width` bits of `x`.
///
/// Bit `i` of the result equals bit `width - 1 - i` of the input, for
/// `i in 0..width`. `width` must be one of 8, 16 or 32; any other value
/// reflects across the full 32-bit word, which is never what a caller in
/// this workspace wants but cannot corrupt memory either.
///
/// A single generic function over word width, per the redesign note in the
/// CRC engine's parameter block: the source modeled this as distinct
/// per-width overloads, but the bit-reversal itself is width-agnostic once
/// the unused high bits are shifted out.
#[inline]
pub fn reflect(x: u32, width: u32) -> u32 {
    x.reverse_bits() >> (32 - width)
}

/// [`reflect`] specialised to a single byte.
#[inline]
pub fn reflect8(x: u8) -> u8 {
    reflect(u32::from(x), 8) as u8
}

/// [`reflect`] specialised to a 16-bit word.
#[inline]
pub fn reflect16(x: u16) -> u16 {
    reflect(u32::from(x), 16) as u16
}

/// [`reflect`] specialised to a 32-bit word.
#[inline]
pub fn reflect32(x: u32) -> u32 {
    reflect(x, 32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_identity_at_zero_and_full_width() {
        assert_eq!(rotl32(0x1234_5678, 0), 0x1234_5678);
        assert_eq!(rotl32(0x1234_5678, 32), 0x1234_5678);
        assert_eq!(rotl64(0x0123_4567_89ab_cdef, 0), 0x0123_4567_89ab_cdef);
    }

    #[test]
    fn rotl_rotr_are_inverses() {
        let x = 0xDEAD_BEEFu32;
        for s in 0..32 {
            assert_eq!(rotr32(rotl32(x, s), s), x);
        }
        let y = 0x0011_2233_4455_6677u64;
        for s in 0..64 {
            assert_eq!(rotr64(rotl64(y, s), s), y);
        }
    }

    #[test]
    fn reflect_byte_examples() {
        // 0b1000_0000 -> 0b0000_0001
        assert_eq!(reflect8(0x80), 0x01);
        // 0b0000_0001 -> 0b1000_0000
        assert_eq!(reflect8(0x01), 0x80);
        assert_eq!(reflect8(0x00), 0x00);
        assert_eq!(reflect8(0xFF), 0xFF);
    }

    #[test]
    fn reflect_is_an_involution() {
        for x in 0u32..256 {
            assert_eq!(reflect8(reflect8(x as u8)), x as u8);
        }
        assert_eq!(reflect16(reflect16(0x1234)), 0x1234);
        assert_eq!(reflect32(reflect32(0x1234_5678)), 0x1234_5678);
    }
}
