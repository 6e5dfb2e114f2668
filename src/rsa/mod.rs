//! A 64-bit RSA implementation: key generation, DER/PEM codecs, and the
//! `-text` field printer. The modulus is deliberately limited to 64 bits —
//! this is a teaching-scale implementation of the RSA wire format, not a
//! cryptographically sound key size.

pub mod der;
mod keygen;
pub mod print;

pub use keygen::generate;

/// The fixed public exponent this crate always generates keys with.
pub const PUBLIC_EXPONENT: u64 = 65537;

/// An RSA public key: a modulus and a public exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey {
    pub modulus: u64,
    pub exponent: u64,
}

/// An RSA private key in CRT form, as PKCS#1 `RSAPrivateKey` carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivateKey {
    pub modulus: u64,
    pub public_exponent: u64,
    pub private_exponent: u64,
    pub prime1: u64,
    pub prime2: u64,
    pub exponent1: u64,
    pub exponent2: u64,
    pub coefficient: u64,
}

impl PrivateKey {
    pub fn public_key(&self) -> PublicKey {
        PublicKey { modulus: self.modulus, exponent: self.public_exponent }
    }
}
