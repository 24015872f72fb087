//! An implementation of the SHA-1 cryptographic hash algorithm (FIPS 180-2).
//!
//! `Sha1` implements both the `digest` crate's `Input`/`BlockInput`/
//! `FixedOutput` traits, for use anywhere the RustCrypto `Digest` ecosystem
//! is expected, and [`hashiface::Hasher`], the uniform streaming contract
//! every algorithm in this workspace shares with the CRC engine.
//!
//! ```rust
//! use sha1::{Sha1, Digest};
//!
//! let mut sh = Sha1::default();
//! sh.input(b"abc");
//! let output = sh.result();
//! assert_eq!(output[..], [
//!     0xa9, 0x99, 0x3e, 0x36, 0x47, 0x06, 0x81, 0x6a, 0xba, 0x3e,
//!     0x25, 0x71, 0x78, 0x50, 0xc2, 0x6c, 0x9c, 0xd0, 0xd8, 0x9d,
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
use byte_tools::write_u32_be;
use generic_array::typenum::{U20, U64};
use generic_array::GenericArray;

pub use digest::Digest;
use hashiface::Hasher;

use compress::compress;
use consts::H;

opaque_debug::implement!(Sha1);

/// Structure representing the state of a SHA-1 computation.
#[derive(Clone)]
pub struct Sha1 {
    h: [u32; 5],
    len: u64,
    buffer: BlockBuffer<U64>,
    digest_out: [u8; 20],
}

impl Default for Sha1 {
    fn default() -> Self {
        Sha1 {
            h: H,
            len: 0,
            buffer: Default::default(),
            digest_out: [0; 20],
        }
    }
}

impl digest::BlockInput for Sha1 {
    type BlockSize = U64;
}

impl digest::Input for Sha1 {
    #[inline]
    fn process(&mut self, input: &[u8]) {
        // Assumes that `length_bits << 3` will not overflow.
        self.len += input.len() as u64;
        let h = &mut self.h;
        self.buffer.input(input, |d| compress(h, d));
    }
}

impl digest::Reset for Sha1 {
    #[inline]
    fn reset(&mut self) {
        *self = Self::default();
    }
}

impl digest::FixedOutput for Sha1 {
    type OutputSize = U20;

    #[inline]
    fn fixed_result(mut self) -> GenericArray<u8, Self::OutputSize> {
        let mut out = GenericArray::default();

        {
            let h = &mut self.h;
            let len_bits = self.len << 3;
            self.buffer.len_padding(len_bits.to_be(), |d| compress(h, d));
        }

        for (chunk, word) in out.chunks_mut(4).zip(self.h.iter()) {
            write_u32_be(chunk, *word);
        }
        out
    }
}

impl Hasher for Sha1 {
    fn init(&mut self) {
        *self = Self::default();
    }

    fn update(&mut self, data: &[u8]) {
        digest::Input::input(self, data);
    }

    fn finalize(&mut self) {
        let result = digest::FixedOutput::fixed_result(self.clone());
        self.digest_out.copy_from_slice(&result);
        self.h = [0; 5];
        self.len = 0;
        self.buffer = Default::default();
    }

    fn digest(&self, out: &mut [u8]) -> usize {
        let n = out.len().min(self.digest_out.len());
        out[..n].copy_from_slice(&self.digest_out[..n]);
        n
    }

    fn hash_size_bits(&self) -> usize {
        160
    }
}
