//! An implementation of the MD5 message-digest algorithm (RFC 1321).
//!
//! ```rust
//! use md5::{Md5, Digest};
//!
//! let mut hasher = Md5::default();
//! hasher.input(b"abc");
//! let result = hasher.result();
//! assert_eq!(result[..], [
//!     0x90, 0x01, 0x50, 0x98, 0x3c, 0xd2, 0x4f, 0xb0,
//!     0xd6, 0x96, 0x3f, 0x7d, 0x28, 0xe1, 0x7f, 0x72,
//! ]);
//! ```
#![no_std]

extern crate block_buffer;
extern crate byte_tools;
extern crate digest;
extern crate generic_array;

mod compress;
mod consts;

use block_buffer::BlockBuffer;
use byte_tools::write_u32_le;
use generic_array::typenum::{U16, U64};
use generic_array::GenericArray;

pub use digest::Digest;
use hashiface::Hasher;

use compress::compress;
use consts::H;

opaque_debug::implement!(Md5);

/// Structure representing the state of an MD5 computation.
#[derive(Clone)]
pub struct Md5 {
    h: [u32; 4],
    len: u64,
    buffer: BlockBuffer<U64>,
    digest_out: [u8; 16],
}

impl Default for Md5 {
    fn default() -> Self {
        Md5 {
            h: H,
            len: 0,
            buffer: Default::default(),
            digest_out: [0; 16],
        }
    }
}

impl digest::BlockInput for Md5 {
    type BlockSize = U64;
}

impl digest::Input for Md5 {
    #[inline]
    fn process(&mut self, input: &[u8]) {
        self.len += input.len() as u64;
        let h = &mut self.h;
        self.buffer.input(input, |d| compress(h, d));
    }
}

impl digest::Reset for Md5 {
    #[inline]
    fn reset(&mut self) {
        *self = Self::default();
    }
}

impl digest::FixedOutput for Md5 {
    type OutputSize = U16;

    #[inline]
    fn fixed_result(mut self) -> GenericArray<u8, Self::OutputSize> {
        let mut out = GenericArray::default();

        {
            let h = &mut self.h;
            let len_bits = (self.len << 3).to_le_bytes();
            self.buffer.digest_pad(0x80, &len_bits, |d| compress(h, d));
        }

        for (chunk, word) in out.chunks_mut(4).zip(self.h.iter()) {
            write_u32_le(chunk, *word);
        }
        out
    }
}

impl Hasher for Md5 {
    fn init(&mut self) {
        *self = Self::default();
    }

    fn update(&mut self, data: &[u8]) {
        digest::Input::input(self, data);
    }

    fn finalize(&mut self) {
        let result = digest::FixedOutput::fixed_result(self.clone());
        self.digest_out.copy_from_slice(&result);
        self.h = [0; 4];
        self.len = 0;
        self.buffer = Default::default();
    }

    fn digest(&self, out: &mut [u8]) -> usize {
        let n = out.len().min(self.digest_out.len());
        out[..n].copy_from_slice(&self.digest_out[..n]);
        n
    }

    fn hash_size_bits(&self) -> usize {
        128
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn digest_of(input: &[u8]) -> [u8; 16] {
        let mut h = Md5::default();
        h.init();
        h.update(input);
        h.finalize();
        let mut out = [0u8; 16];
        assert_eq!(h.digest(&mut out), 16);
        out
    }

    #[test]
    fn empty_string() {
        assert_eq!(digest_of(b""), hex!("d41d8cd98f00b204e9800998ecf8427e"));
    }

    #[test]
    fn single_char() {
        assert_eq!(digest_of(b"a"), hex!("0cc175b9c0f1b6a831c399e269772661"));
    }

    #[test]
    fn abc() {
        assert_eq!(digest_of(b"abc"), hex!("900150983cd24fb0d6963f7d28e17f72"));
    }

    #[test]
    fn chunked_updates_match_single_update() {
        let msg = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
        let mut chunked = Md5::default();
        chunked.init();
        for chunk in msg.chunks(9) {
            chunked.update(chunk);
        }
        chunked.finalize();
        let mut out = [0u8; 16];
        chunked.digest(&mut out);
        assert_eq!(out, digest_of(msg));
    }

    #[test]
    fn reset_then_reuse_matches_fresh_hasher() {
        let mut h = Md5::default();
        h.init();
        h.update(b"some unrelated prior message");
        h.finalize();

        h.init();
        h.update(b"abc");
        h.finalize();
        let mut out = [0u8; 16];
        h.digest(&mut out);
        assert_eq!(out, digest_of(b"abc"));
    }

    #[test]
    fn truncated_digest_is_high_order_prefix() {
        let full = digest_of(b"abc");
        let mut h = Md5::default();
        h.init();
        h.update(b"abc");
        h.finalize();
        let mut half = [0u8; 8];
        let n = h.digest(&mut half);
        assert_eq!(n, 8);
        assert_eq!(half, full[..8]);
    }

    #[test]
    fn conforms_to_the_shared_hasher_properties() {
        let msg = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
        let mut h = Md5::default();
        hashiface::dev::determinism(&mut h, msg);
        hashiface::dev::chunk_invariance(&mut h, msg, &[1, 2, 3, 9, 20]);
        hashiface::dev::reset::<Md5>(&mut h, b"some unrelated prior message", msg);
        hashiface::dev::truncation(&mut h, msg);
    }
}
