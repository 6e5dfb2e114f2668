//! DER encoding and decoding for the fixed set of ASN.1 structures RSA keys
//! use: PKCS#1 `RSAPrivateKey`/`RSAPublicKey`, PKCS#8 `PrivateKeyInfo`, and
//! X.509 `SubjectPublicKeyInfo`.

pub mod oid;
mod reader;
mod writer;

pub use reader::{integer_to_u64, read_entry, Entry, Tag};
pub use writer::Writer;
