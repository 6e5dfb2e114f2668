use super::{chunks, xor_block, Block, BlockFn};

/// Full-block Cipher Feedback. Note that both directions call `encrypt`:
/// CFB only ever enciphers the feedback register to build a keystream
/// block, which is then XORed with plaintext or ciphertext as appropriate.
pub fn cfb_encrypt(encrypt: &BlockFn, iv: Block, data: &[u8]) -> Vec<u8> {
    let mut feedback = iv;
    let mut out = Vec::with_capacity(data.len());
    for block in chunks(data) {
        let ciphertext = xor_block(block, encrypt(feedback));
        out.extend_from_slice(&ciphertext);
        feedback = ciphertext;
    }
    out
}

pub fn cfb_decrypt(encrypt: &BlockFn, iv: Block, data: &[u8]) -> Vec<u8> {
    let mut feedback = iv;
    let mut out = Vec::with_capacity(data.len());
    for block in chunks(data) {
        let plaintext = xor_block(block, encrypt(feedback));
        out.extend_from_slice(&plaintext);
        feedback = block;
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cipher::des::block::{encrypt_block, key_schedule};

    #[test]
    fn roundtrip() {
        let subkeys = key_schedule([8; 8]);
        let encrypt = |b: Block| encrypt_block(&subkeys, b);
        let iv: Block = [0x42; 8];

        let data = [[1u8; 8], [2u8; 8]].concat();
        let ciphertext = cfb_encrypt(&encrypt, iv, &data);
        assert_eq!(cfb_decrypt(&encrypt, iv, &ciphertext), data);
    }
}
