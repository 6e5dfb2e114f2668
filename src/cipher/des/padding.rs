//! PKCS#7 padding (RFC 5652 section 6.3), used unconditionally by every DES
//! mode of operation in this crate — even when the plaintext is already a
//! multiple of the block size, a full block of padding is appended.

use crate::error::Error;

const BLOCK_SIZE: usize = 8;

/// Append PKCS#7 padding to `data`, returning a new buffer whose length is a
/// multiple of the block size.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    out.extend(std::iter::repeat(pad_len as u8).take(pad_len));
    out
}

/// Strip and validate PKCS#7 padding from a decrypted buffer.
pub fn unpad(data: &[u8]) -> Result<&[u8], Error> {
    let pad_len = *data.last().ok_or(Error::BadPadding)? as usize;
    if pad_len == 0 || pad_len > BLOCK_SIZE || pad_len > data.len() {
        return Err(Error::BadPadding);
    }
    let body_len = data.len() - pad_len;
    if !data[body_len..].iter().all(|&b| b as usize == pad_len) {
        return Err(Error::BadPadding);
    }
    Ok(&data[..body_len])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pads_partial_block() {
        let padded = pad(b"ABCDE");
        assert_eq!(padded, b"ABCDE\x03\x03\x03");
    }

    #[test]
    fn pads_full_block_when_aligned() {
        let padded = pad(b"ABCDEFGH");
        assert_eq!(padded.len(), 16);
        assert_eq!(&padded[8..], &[8u8; 8]);
    }

    #[test]
    fn roundtrip() {
        for len in 0..20 {
            let data: Vec<u8> = (0..len as u8).collect();
            let padded = pad(&data);
            assert_eq!(unpad(&padded).unwrap(), data.as_slice());
        }
    }

    #[test]
    fn rejects_bad_padding() {
        assert!(unpad(b"ABCDEFG\x00").is_err());
        assert!(unpad(b"ABCDEFG\x09").is_err());
        assert!(unpad(b"").is_err());
    }
}
