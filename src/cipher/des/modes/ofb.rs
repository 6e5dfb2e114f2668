use super::{chunks, xor_block, Block, BlockFn};

/// Output Feedback: the keystream is generated by repeatedly enciphering the
/// IV, independent of the data, so encryption and decryption are the same
/// operation.
fn ofb(encrypt: &BlockFn, iv: Block, data: &[u8]) -> Vec<u8> {
    let mut feedback = iv;
    let mut out = Vec::with_capacity(data.len());
    for block in chunks(data) {
        let keystream = encrypt(feedback);
        out.extend_from_slice(&xor_block(block, keystream));
        feedback = keystream;
    }
    out
}

pub fn ofb_encrypt(encrypt: &BlockFn, iv: Block, data: &[u8]) -> Vec<u8> {
    ofb(encrypt, iv, data)
}

pub fn ofb_decrypt(encrypt: &BlockFn, iv: Block, data: &[u8]) -> Vec<u8> {
    ofb(encrypt, iv, data)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cipher::des::block::{encrypt_block, key_schedule};

    #[test]
    fn roundtrip() {
        let subkeys = key_schedule([2; 8]);
        let encrypt = |b: Block| encrypt_block(&subkeys, b);
        let iv: Block = [0x77; 8];

        let data = [[1u8; 8], [2u8; 8], [3u8; 8]].concat();
        let ciphertext = ofb_encrypt(&encrypt, iv, &data);
        assert_eq!(ofb_decrypt(&encrypt, iv, &ciphertext), data);
    }

    #[test]
    fn keystream_independent_of_data() {
        let subkeys = key_schedule([2; 8]);
        let encrypt = |b: Block| encrypt_block(&subkeys, b);
        let iv: Block = [0x01; 8];
        let a = ofb_encrypt(&encrypt, iv, &[0u8; 16]);
        let b = ofb_encrypt(&encrypt, iv, &[0xFFu8; 16]);
        // XOR of the two ciphertexts should equal the XOR of the two plaintexts.
        let xored: Vec<u8> = a.iter().zip(&b).map(|(x, y)| x ^ y).collect();
        assert!(xored.iter().all(|&b| b == 0xFF));
    }
}
