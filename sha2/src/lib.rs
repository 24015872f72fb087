//! Pure Rust implementation of the SHA-2 hash function family: SHA-224,
//! SHA-256, SHA-384 and SHA-512 (FIPS 180-4).
//!
//! Algorithmically there are only two core algorithms here: the 32-bit core
//! shared by SHA-224/SHA-256, and the 64-bit core shared by SHA-384/
//! SHA-512. The four public types differ only in initial chaining state and
//! output truncation.
//!
//! ```rust
//! use sha2::{Sha256, Digest};
//!
//! let mut hasher = Sha256::default();
//! hasher.input(b"abc");
//! let result = hasher.result();
//! assert_eq!(result[..], [
//!     0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde,
//!     0x5d, 0xae, 0x22, 0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c,
//!     0xb4, 0x10, 0xff, 0x61, 0xf2, 0x00, 0x15, 0xad,
//! ]);
//! ```
#![no_std]

extern crate block_buffer;
extern crate byte_tools;
extern crate digest;
extern crate generic_array;

mod consts;
mod sha256;
mod sha512;

use block_buffer::BlockBuffer;
use byte_tools::{write_u32_be, write_u64_be};
use generic_array::typenum::{U128, U28, U32, U48, U64};
use generic_array::GenericArray;

pub use digest::Digest;
use hashiface::Hasher as HashIface;

macro_rules! sha2_32_variant {
    ($name:ident, $init:expr, $out_bytes:expr, $out_size:ty, $bits:expr) => {
        #[doc = concat!(stringify!($name), " hasher state.")]
        #[derive(Clone)]
        pub struct $name {
            state: [u32; 8],
            len: u64,
            buffer: BlockBuffer<U64>,
            digest_out: [u8; $out_bytes],
        }

        opaque_debug::implement!($name);

        impl Default for $name {
            fn default() -> Self {
                $name {
                    state: $init,
                    len: 0,
                    buffer: Default::default(),
                    digest_out: [0; $out_bytes],
                }
            }
        }

        impl digest::BlockInput for $name {
            type BlockSize = U64;
        }

        impl digest::Input for $name {
            #[inline]
            fn process(&mut self, input: &[u8]) {
                self.len += input.len() as u64;
                let state = &mut self.state;
                self.buffer.input(input, |d| sha256::compress(state, d));
            }
        }

        impl digest::Reset for $name {
            #[inline]
            fn reset(&mut self) {
                *self = Self::default();
            }
        }

        impl digest::FixedOutput for $name {
            type OutputSize = $out_size;

            #[inline]
            fn fixed_result(mut self) -> GenericArray<u8, Self::OutputSize> {
                let mut out = GenericArray::default();
                {
                    let state = &mut self.state;
                    let len_bits = (self.len << 3).to_be_bytes();
                    self.buffer
                        .digest_pad(0x80, &len_bits, |d| sha256::compress(state, d));
                }
                let mut full = [0u8; 32];
                for (chunk, word) in full.chunks_mut(4).zip(self.state.iter()) {
                    write_u32_be(chunk, *word);
                }
                out.copy_from_slice(&full[..$out_bytes]);
                out
            }
        }

        impl HashIface for $name {
            fn init(&mut self) {
                *self = Self::default();
            }

            fn update(&mut self, data: &[u8]) {
                digest::Input::input(self, data);
            }

            fn finalize(&mut self) {
                let result = digest::FixedOutput::fixed_result(self.clone());
                self.digest_out.copy_from_slice(&result);
                self.state = [0; 8];
                self.len = 0;
                self.buffer = Default::default();
            }

            fn digest(&self, out: &mut [u8]) -> usize {
                let n = out.len().min(self.digest_out.len());
                out[..n].copy_from_slice(&self.digest_out[..n]);
                n
            }

            fn hash_size_bits(&self) -> usize {
                $bits
            }
        }
    };
}

macro_rules! sha2_64_variant {
    ($name:ident, $init:expr, $out_bytes:expr, $out_size:ty, $bits:expr) => {
        #[doc = concat!(stringify!($name), " hasher state.")]
        #[derive(Clone)]
        pub struct $name {
            state: [u64; 8],
            len: u128,
            buffer: BlockBuffer<U128>,
            digest_out: [u8; $out_bytes],
        }

        opaque_debug::implement!($name);

        impl Default for $name {
            fn default() -> Self {
                $name {
                    state: $init,
                    len: 0,
                    buffer: Default::default(),
                    digest_out: [0; $out_bytes],
                }
            }
        }

        impl digest::BlockInput for $name {
            type BlockSize = U128;
        }

        impl digest::Input for $name {
            #[inline]
            fn process(&mut self, input: &[u8]) {
                self.len += input.len() as u128;
                let state = &mut self.state;
                self.buffer.input(input, |d| sha512::compress(state, d));
            }
        }

        impl digest::Reset for $name {
            #[inline]
            fn reset(&mut self) {
                *self = Self::default();
            }
        }

        impl digest::FixedOutput for $name {
            type OutputSize = $out_size;

            #[inline]
            fn fixed_result(mut self) -> GenericArray<u8, Self::OutputSize> {
                let mut out = GenericArray::default();
                {
                    let state = &mut self.state;
                    // 128-bit bit-length counter, high word first.
                    let len_bits = (self.len << 3).to_be_bytes();
                    self.buffer
                        .digest_pad(0x80, &len_bits, |d| sha512::compress(state, d));
                }
                let mut full = [0u8; 64];
                for (chunk, word) in full.chunks_mut(8).zip(self.state.iter()) {
                    write_u64_be(chunk, *word);
                }
                out.copy_from_slice(&full[..$out_bytes]);
                out
            }
        }

        impl HashIface for $name {
            fn init(&mut self) {
                *self = Self::default();
            }

            fn update(&mut self, data: &[u8]) {
                digest::Input::input(self, data);
            }

            fn finalize(&mut self) {
                let result = digest::FixedOutput::fixed_result(self.clone());
                self.digest_out.copy_from_slice(&result);
                self.state = [0; 8];
                self.len = 0;
                self.buffer = Default::default();
            }

            fn digest(&self, out: &mut [u8]) -> usize {
                let n = out.len().min(self.digest_out.len());
                out[..n].copy_from_slice(&self.digest_out[..n]);
                n
            }

            fn hash_size_bits(&self) -> usize {
                $bits
            }
        }
    };
}

sha2_32_variant!(Sha224, consts::H224, 28, U28, 224);
sha2_32_variant!(Sha256, consts::H256, 32, U32, 256);
sha2_64_variant!(Sha384, consts::H384, 48, U48, 384);
sha2_64_variant!(Sha512, consts::H512, 64, U64, 512);
