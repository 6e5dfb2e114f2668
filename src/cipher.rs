//! Top-level cipher dispatch: picks a [`Mode`] of operation and a DES or
//! 3DES key, and drives the shared block-cipher machinery in [`des`]
//! accordingly. This is the seam the CLI binds its `-e`/`-d`/`-k`/`-iv`
//! flags to.

pub mod des;

use crate::error::Error;
use des::Block;

/// A mode of operation for the DES/3DES block cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Ecb,
    Cbc,
    Pcbc,
    Cfb,
    Ofb,
}

impl Mode {
    /// ECB is the only mode that does not take an initialization vector.
    pub fn requires_iv(self) -> bool {
        !matches!(self, Mode::Ecb)
    }
}

/// The key material for either single or triple DES.
#[derive(Clone, Copy)]
pub enum Variant {
    Des(des::DesKey),
    Des3(des::Des3Key),
}

/// The full set of parameters needed to run a cipher operation.
pub struct Options {
    pub mode: Mode,
    pub variant: Variant,
    pub iv: Option<Block>,
}

fn require_iv(opts: &Options) -> Result<Block, Error> {
    if opts.mode.requires_iv() {
        opts.iv.ok_or(Error::BadIvLength)
    } else {
        Ok([0; 8])
    }
}

fn dispatch_encrypt(mode: Mode, encrypt: &dyn Fn(Block) -> Block, iv: Block, data: &[u8]) -> Vec<u8> {
    match mode {
        Mode::Ecb => des::ecb_encrypt(encrypt, data),
        Mode::Cbc => des::cbc_encrypt(encrypt, iv, data),
        Mode::Pcbc => des::pcbc_encrypt(encrypt, iv, data),
        Mode::Cfb => des::cfb_encrypt(encrypt, iv, data),
        Mode::Ofb => des::ofb_encrypt(encrypt, iv, data),
    }
}

fn dispatch_decrypt(
    mode: Mode,
    encrypt: &dyn Fn(Block) -> Block,
    decrypt: &dyn Fn(Block) -> Block,
    iv: Block,
    data: &[u8],
) -> Vec<u8> {
    match mode {
        Mode::Ecb => des::ecb_decrypt(decrypt, data),
        Mode::Cbc => des::cbc_decrypt(decrypt, iv, data),
        Mode::Pcbc => des::pcbc_decrypt(decrypt, iv, data),
        // CFB and OFB only ever encipher the feedback register.
        Mode::Cfb => des::cfb_decrypt(encrypt, iv, data),
        Mode::Ofb => des::ofb_decrypt(encrypt, iv, data),
    }
}

/// Pad and encrypt `plaintext` under the given options.
pub fn encrypt(opts: &Options, plaintext: &[u8]) -> Result<Vec<u8>, Error> {
    let iv = require_iv(opts)?;
    let padded = des::pad(plaintext);
    let ciphertext = match opts.variant {
        Variant::Des(key) => {
            let subkeys = des::key_schedule(key);
            dispatch_encrypt(opts.mode, &|b| des::encrypt_block(&subkeys, b), iv, &padded)
        }
        Variant::Des3(key) => {
            let subkeys = des::Des3Subkeys::new(key);
            dispatch_encrypt(opts.mode, &|b| des::encrypt_block_3des(&subkeys, b), iv, &padded)
        }
    };
    Ok(ciphertext)
}

/// Decrypt `ciphertext` under the given options and strip its padding.
pub fn decrypt(opts: &Options, ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
    let iv = require_iv(opts)?;
    if ciphertext.is_empty() || ciphertext.len() % 8 != 0 {
        return Err(Error::BadPadding);
    }

    let padded = match opts.variant {
        Variant::Des(key) => {
            let subkeys = des::key_schedule(key);
            dispatch_decrypt(
                opts.mode,
                &|b| des::encrypt_block(&subkeys, b),
                &|b| des::decrypt_block(&subkeys, b),
                iv,
                ciphertext,
            )
        }
        Variant::Des3(key) => {
            let subkeys = des::Des3Subkeys::new(key);
            dispatch_decrypt(
                opts.mode,
                &|b| des::encrypt_block_3des(&subkeys, b),
                &|b| des::decrypt_block_3des(&subkeys, b),
                iv,
                ciphertext,
            )
        }
    };
    des::unpad(&padded).map(|p| p.to_vec())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn des_cbc_roundtrip() {
        let opts = Options { mode: Mode::Cbc, variant: Variant::Des([1; 8]), iv: Some([2; 8]) };
        let plaintext = b"the quick brown fox jumps";
        let ciphertext = encrypt(&opts, plaintext).unwrap();
        assert_eq!(decrypt(&opts, &ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn ecb_ignores_absent_iv() {
        let opts = Options { mode: Mode::Ecb, variant: Variant::Des([3; 8]), iv: None };
        let ciphertext = encrypt(&opts, b"12345678").unwrap();
        assert_eq!(decrypt(&opts, &ciphertext).unwrap(), b"12345678");
    }

    #[test]
    fn non_ecb_without_iv_is_an_error() {
        let opts = Options { mode: Mode::Cbc, variant: Variant::Des([3; 8]), iv: None };
        assert!(matches!(encrypt(&opts, b"hello"), Err(Error::BadIvLength)));
    }

    #[test]
    fn des3_cfb_roundtrip() {
        let key: des::Des3Key = std::array::from_fn(|i| i as u8 + 10);
        let opts = Options { mode: Mode::Cfb, variant: Variant::Des3(key), iv: Some([7; 8]) };
        let plaintext = b"triple des exercises the ede chain";
        let ciphertext = encrypt(&opts, plaintext).unwrap();
        assert_eq!(decrypt(&opts, &ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn tampered_padding_is_rejected() {
        let opts = Options { mode: Mode::Ecb, variant: Variant::Des([4; 8]), iv: None };
        let mut ciphertext = encrypt(&opts, b"hello").unwrap();
        let last = ciphertext.len() - 1;
        ciphertext[last] ^= 0xFF;
        assert!(decrypt(&opts, &ciphertext).is_err());
    }
}
