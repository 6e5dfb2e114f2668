use super::{chunks, xor_block, Block, BlockFn};

/// Cipher Block Chaining: each plaintext block is XORed with the previous
/// ciphertext block (the IV for the first block) before encryption.
pub fn cbc_encrypt(encrypt: &BlockFn, iv: Block, data: &[u8]) -> Vec<u8> {
    let mut feedback = iv;
    let mut out = Vec::with_capacity(data.len());
    for block in chunks(data) {
        let ciphertext = encrypt(xor_block(block, feedback));
        out.extend_from_slice(&ciphertext);
        feedback = ciphertext;
    }
    out
}

pub fn cbc_decrypt(decrypt: &BlockFn, iv: Block, data: &[u8]) -> Vec<u8> {
    let mut feedback = iv;
    let mut out = Vec::with_capacity(data.len());
    for block in chunks(data) {
        let plaintext = xor_block(decrypt(block), feedback);
        out.extend_from_slice(&plaintext);
        feedback = block;
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cipher::des::block::{decrypt_block, encrypt_block, key_schedule};

    #[test]
    fn roundtrip() {
        let subkeys = key_schedule([5; 8]);
        let encrypt = |b: Block| encrypt_block(&subkeys, b);
        let decrypt = |b: Block| decrypt_block(&subkeys, b);
        let iv: Block = [0xAA; 8];

        let data = [[1u8; 8], [2u8; 8], [3u8; 8]].concat();
        let ciphertext = cbc_encrypt(&encrypt, iv, &data);
        assert_ne!(&ciphertext[..8], &ciphertext[8..16]);
        assert_eq!(cbc_decrypt(&decrypt, iv, &ciphertext), data);
    }

    #[test]
    fn different_iv_changes_ciphertext() {
        let subkeys = key_schedule([5; 8]);
        let encrypt = |b: Block| encrypt_block(&subkeys, b);
        let data = [7u8; 8].to_vec();
        let a = cbc_encrypt(&encrypt, [0; 8], &data);
        let b = cbc_encrypt(&encrypt, [1; 8], &data);
        assert_ne!(a, b);
    }
}
