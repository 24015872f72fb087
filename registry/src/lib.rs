//! Maps the string identifiers exposed at the C ABI boundary to fresh
//! hasher instances. This is the one place in the workspace that knows
//! about every algorithm crate at once; `libhash-sys` is built on top of
//! it instead of hand-wiring its own twelve `match` arms.

use core::fmt;
use core::str::FromStr;

pub use hashiface::Hasher;

/// One variant per supported string identifier. Exhaustive matches over
/// this enum are checked by the compiler; the string form stays the
/// canonical wire-level name and is derived from the variants below, not
/// hand-duplicated at each call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Crc16CcittFalse,
    Crc16Xmodem,
    Crc16X25,
    Crc32,
    Crc32Bzip2,
    Crc32C,
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl Algorithm {
    /// All algorithms the registry recognises, in the order their C ABI
    /// symbols are generated.
    pub const ALL: [Algorithm; 12] = [
        Algorithm::Crc16CcittFalse,
        Algorithm::Crc16Xmodem,
        Algorithm::Crc16X25,
        Algorithm::Crc32,
        Algorithm::Crc32Bzip2,
        Algorithm::Crc32C,
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Crc16CcittFalse => "crc16_ccitt",
            Algorithm::Crc16Xmodem => "crc16_xmodem",
            Algorithm::Crc16X25 => "crc16_x25",
            Algorithm::Crc32 => "crc32",
            Algorithm::Crc32Bzip2 => "crc32_bzip2",
            Algorithm::Crc32C => "crc32c",
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha224 => "sha2_224",
            Algorithm::Sha256 => "sha2_256",
            Algorithm::Sha384 => "sha2_384",
            Algorithm::Sha512 => "sha2_512",
        }
    }

    /// Hash size in bits, fixed per algorithm at compile time.
    pub fn hash_size_bits(&self) -> usize {
        match self {
            Algorithm::Crc16CcittFalse | Algorithm::Crc16Xmodem | Algorithm::Crc16X25 => 16,
            Algorithm::Crc32 | Algorithm::Crc32Bzip2 | Algorithm::Crc32C => 32,
            Algorithm::Md5 => 128,
            Algorithm::Sha1 => 160,
            Algorithm::Sha224 => 224,
            Algorithm::Sha256 => 256,
            Algorithm::Sha384 => 384,
            Algorithm::Sha512 => 512,
        }
    }

    /// Construct a fresh, uninitialised hasher for this algorithm.
    pub fn new_hasher(&self) -> Box<dyn Hasher> {
        match self {
            Algorithm::Crc16CcittFalse => Box::new(crc::Crc16CcittFalse::new()),
            Algorithm::Crc16Xmodem => Box::new(crc::Crc16Xmodem::new()),
            Algorithm::Crc16X25 => Box::new(crc::Crc16X25::new()),
            Algorithm::Crc32 => Box::new(crc::Crc32::new()),
            Algorithm::Crc32Bzip2 => Box::new(crc::Crc32Bzip2::new()),
            Algorithm::Crc32C => Box::new(crc::Crc32C::new()),
            Algorithm::Md5 => Box::new(md5::Md5::default()),
            Algorithm::Sha1 => Box::new(sha1::Sha1::default()),
            Algorithm::Sha224 => Box::new(sha2::Sha224::default()),
            Algorithm::Sha256 => Box::new(sha2::Sha256::default()),
            Algorithm::Sha384 => Box::new(sha2::Sha384::default()),
            Algorithm::Sha512 => Box::new(sha2::Sha512::default()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .iter()
            .copied()
            .find(|a| a.as_str() == s)
            .ok_or(UnknownAlgorithm)
    }
}

/// Returned by [`Algorithm::from_str`] when the name is not one of the
/// twelve identifiers the registry recognises. No other algorithms exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownAlgorithm;

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised algorithm identifier")
    }
}

/// Looks up `name` and produces a fresh hasher, or `None` if `name` is
/// not one of the registry's twelve identifiers.
pub fn new_hasher(name: &str) -> Option<Box<dyn Hasher>> {
    name.parse::<Algorithm>().ok().map(|a| a.new_hasher())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_identifier() {
        for alg in Algorithm::ALL.iter().copied() {
            let s = alg.to_string();
            assert_eq!(s.parse::<Algorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        assert!("sha3_256".parse::<Algorithm>().is_err());
        assert!(new_hasher("sha3_256").is_none());
    }

    #[test]
    fn factory_produces_correctly_sized_digest() {
        for alg in Algorithm::ALL.iter().copied() {
            let mut h = alg.new_hasher();
            h.init();
            h.update(b"123456789");
            h.finalize();
            let mut out = vec![0u8; alg.hash_size_bits() / 8];
            let n = h.digest(&mut out);
            assert_eq!(n, alg.hash_size_bits() / 8);
        }
    }

    #[test]
    fn md5_matches_known_vector() {
        use hex_literal::hex;

        let mut h = new_hasher("md5").unwrap();
        h.init();
        h.update(b"abc");
        h.finalize();
        let mut out = [0u8; 16];
        h.digest(&mut out);
        assert_eq!(out, hex!("900150983cd24fb0d6963f7d28e17f72"));
    }
}
