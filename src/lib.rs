//! A command-line cryptography toolkit: message digests, Base64, DES/3DES
//! in five modes of operation, HMAC, PBKDF2, and a teaching-scale 64-bit
//! RSA implementation with PEM/DER key codecs.

pub mod asn1;
pub mod base64;
pub mod buffer;
pub mod cipher;
pub mod digest;
pub mod error;
pub mod kdf;
pub mod mac;
pub mod pem;
pub mod progname;
pub mod rsa;

pub use error::Error;
