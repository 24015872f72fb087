//! The uniform streaming contract shared by every algorithm in `libhash`:
//! CRCs and cryptographic message digests alike are, from the outside,
//! nothing but `init / update* / finalize / digest`.
//!
//! Concrete algorithm crates (`crc`, `md-5`, `sha1`, `sha2`) each implement
//! [`Hasher`] directly; [`registry`](https://docs.rs/registry) and
//! `libhash-sys` depend only on this trait, never on a concrete algorithm,
//! so adding a new variant never touches the boundary code.
#![no_std]

/// Lifecycle: `created -> init() -> [update()]* -> finalize() -> digest()`.
///
/// A freshly constructed hasher has *not* been initialised — `init` must be
/// called before the first `update`. Calling `update` after `finalize`
/// without an intervening `init`, or reading `digest` before the first
/// `finalize`, is not memory-unsafe but yields an unspecified result; see
/// the individual algorithm crates for what they happen to do in that case.
///
/// `init -> update* -> finalize -> init -> ...` must be supported: an
/// implementation must be safe and correct to reuse for a second, unrelated
/// message after a `finalize`.
pub trait Hasher {
    /// Resets all internal state to the algorithm's defined initial values
    /// and clears the input length counter and block buffer.
    fn init(&mut self);

    /// Absorbs `data`, which may be empty and may be any length; the
    /// digest produced by any split of a byte sequence into successive
    /// `update` calls is identical to feeding the whole sequence at once.
    fn update(&mut self, data: &[u8]);

    /// Applies padding and the final compression(s), computing the digest.
    /// Calling this twice without an intervening `init` is unspecified.
    fn finalize(&mut self);

    /// Copies `min(out.len(), hash_size_bytes())` digest bytes into `out`,
    /// starting from the most-significant byte, and returns the number of
    /// bytes copied. Calling before the first `finalize` yields unspecified
    /// bytes, never undefined behavior.
    fn digest(&self, out: &mut [u8]) -> usize;

    /// The fixed output width of this algorithm, in bits.
    fn hash_size_bits(&self) -> usize;

    /// [`Hasher::hash_size_bits`] expressed in bytes.
    #[inline]
    fn hash_size_bytes(&self) -> usize {
        self.hash_size_bits() / 8
    }
}

/// Generic conformance checks against the [`Hasher`] contract,
/// reusable from every algorithm crate's own test suite instead of each
/// re-deriving them, the way `digest`'s own `dev` feature shares its
/// test-vector macros across crates. Enabled by the `dev` feature,
/// mirroring how `digest = { version = "0.9", features = ["dev"] }` is
/// only pulled in as a dev-dependency.
#[cfg(feature = "dev")]
pub mod dev {
    use super::Hasher;
    extern crate alloc;
    use alloc::vec;
    use alloc::vec::Vec;

    fn run<H: Hasher>(h: &mut H, input: &[u8]) -> Vec<u8> {
        h.init();
        h.update(input);
        h.finalize();
        let mut out = vec![0u8; h.hash_size_bytes()];
        let n = h.digest(&mut out);
        out.truncate(n);
        out
    }

    /// Property 1: `A(S) == A(S)`.
    pub fn determinism<H: Hasher>(h: &mut H, input: &[u8]) {
        let a = run(h, input);
        let b = run(h, input);
        assert_eq!(a, b, "two identical runs produced different digests");
    }

    /// Property 2: chunking the input across any number of `update` calls
    /// must not change the digest.
    pub fn chunk_invariance<H: Hasher>(h: &mut H, input: &[u8], chunk_sizes: &[usize]) {
        let whole = run(h, input);

        h.init();
        let mut rest = input;
        for &n in chunk_sizes {
            let n = n.min(rest.len());
            let (chunk, tail) = rest.split_at(n);
            h.update(chunk);
            rest = tail;
        }
        h.update(rest);
        h.finalize();
        let mut chunked = vec![0u8; h.hash_size_bytes()];
        let n = h.digest(&mut chunked);
        chunked.truncate(n);

        assert_eq!(whole, chunked, "chunked update produced a different digest");
    }

    /// Property 3: reuse after `init` is independent of prior use.
    pub fn reset<H: Hasher + Default>(h: &mut H, first: &[u8], second: &[u8]) {
        let _ = run(h, first);
        let reused = run(h, second);
        let fresh = run(&mut H::default(), second);
        assert_eq!(reused, fresh, "reused hasher diverged from a fresh one");
    }

    /// Property 5: truncated output is the high-order prefix of the full
    /// digest, and the byte count returned matches the buffer length.
    pub fn truncation<H: Hasher>(h: &mut H, input: &[u8]) {
        let full = run(h, input);
        for len in 0..=full.len() {
            h.init();
            h.update(input);
            h.finalize();
            let mut out = vec![0xAAu8; len];
            let n = h.digest(&mut out);
            assert_eq!(n, len);
            assert_eq!(out, &full[..len]);
        }
    }
}
