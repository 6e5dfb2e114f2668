//! The digest interface consumed by [`crate::mac::Hmac`] and
//! [`crate::kdf::pbkdf2`].
//!
//! The hash primitives themselves (MD5, the SHA-2 family, Whirlpool) are
//! external collaborators: this module only defines the uniform contract
//! HMAC/PBKDF2 need and wires it up to the `RustCrypto` digest crates
//! already in the dependency tree.

use digest::Digest as _;

/// A cryptographic hash function with a fixed block size (used for HMAC key
/// padding) and digest size.
pub trait Hash {
    const BLOCK_SIZE: usize;
    const DIGEST_SIZE: usize;

    fn hash(&self, input: &[u8]) -> Vec<u8>;
}

macro_rules! digest_adapter {
    ($name:ident, $inner:ty, $block:expr, $digest:expr) => {
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $name;

        impl Hash for $name {
            const BLOCK_SIZE: usize = $block;
            const DIGEST_SIZE: usize = $digest;

            fn hash(&self, input: &[u8]) -> Vec<u8> {
                <$inner>::digest(input).to_vec()
            }
        }
    };
}

digest_adapter!(Md5, md5::Md5, 64, 16);
digest_adapter!(Sha1, sha1::Sha1, 64, 20);
digest_adapter!(Sha224, sha2::Sha224, 64, 28);
digest_adapter!(Sha256, sha2::Sha256, 64, 32);
digest_adapter!(Sha384, sha2::Sha384, 128, 48);
digest_adapter!(Sha512, sha2::Sha512, 128, 64);
digest_adapter!(Whirlpool, whirlpool::Whirlpool, 64, 64);

/// The subset of supported digests the CLI exposes as subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Md5,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Whirlpool,
}

impl Algorithm {
    pub fn hash(self, input: &[u8]) -> Vec<u8> {
        match self {
            Algorithm::Md5 => Md5.hash(input),
            Algorithm::Sha224 => Sha224.hash(input),
            Algorithm::Sha256 => Sha256.hash(input),
            Algorithm::Sha384 => Sha384.hash(input),
            Algorithm::Sha512 => Sha512.hash(input),
            Algorithm::Whirlpool => Whirlpool.hash(input),
        }
    }
}
