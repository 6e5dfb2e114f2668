//! Pre-encoded DER bodies for the handful of object identifiers this crate
//! needs. Each is the content octets of an OBJECT IDENTIFIER, i.e. what
//! follows the `06 <len>` tag/length header.

/// `1.2.840.113549.1.1.1` — `rsaEncryption`, from RFC 8017 appendix C.
pub const RSA_ENCRYPTION: &[u8] = &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x01];

/// `1.2.840.113549.1.5.13` — `id-PBES2`, from RFC 8018 appendix A.4.
pub const PBES2: &[u8] = &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x05, 0x0D];

/// `1.2.840.113549.1.5.12` — `id-PBKDF2`, from RFC 8018 appendix A.2.
pub const PBKDF2: &[u8] = &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x05, 0x0C];
