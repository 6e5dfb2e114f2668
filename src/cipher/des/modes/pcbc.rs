use super::{chunks, xor_block, Block, BlockFn};

/// Propagating CBC: the feedback into the next block mixes both the
/// plaintext and the ciphertext of the current block, so a single bit error
/// propagates into every following block in both directions.
pub fn pcbc_encrypt(encrypt: &BlockFn, iv: Block, data: &[u8]) -> Vec<u8> {
    let mut feedback = iv;
    let mut out = Vec::with_capacity(data.len());
    for block in chunks(data) {
        let ciphertext = encrypt(xor_block(block, feedback));
        out.extend_from_slice(&ciphertext);
        feedback = xor_block(block, ciphertext);
    }
    out
}

pub fn pcbc_decrypt(decrypt: &BlockFn, iv: Block, data: &[u8]) -> Vec<u8> {
    let mut feedback = iv;
    let mut out = Vec::with_capacity(data.len());
    for block in chunks(data) {
        let plaintext = xor_block(decrypt(block), feedback);
        out.extend_from_slice(&plaintext);
        feedback = xor_block(plaintext, block);
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cipher::des::block::{decrypt_block, encrypt_block, key_schedule};

    #[test]
    fn roundtrip() {
        let subkeys = key_schedule([3; 8]);
        let encrypt = |b: Block| encrypt_block(&subkeys, b);
        let decrypt = |b: Block| decrypt_block(&subkeys, b);
        let iv: Block = [0x11; 8];

        let data = [[4u8; 8], [5u8; 8], [6u8; 8]].concat();
        let ciphertext = pcbc_encrypt(&encrypt, iv, &data);
        assert_eq!(pcbc_decrypt(&decrypt, iv, &ciphertext), data);
    }
}
