use super::{chunks, Block, BlockFn};

/// Encrypt `data` (must already be a multiple of the block size) one block
/// at a time, independently.
pub fn ecb_encrypt(encrypt: &BlockFn, data: &[u8]) -> Vec<u8> {
    chunks(data).flat_map(|block| encrypt(block)).collect()
}

/// Decrypt `data` one block at a time, independently. The result still
/// carries its padding; callers strip it with [`super::super::padding`].
pub fn ecb_decrypt(decrypt: &BlockFn, data: &[u8]) -> Vec<u8> {
    chunks(data).flat_map(|block| decrypt(block)).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cipher::des::block::{decrypt_block, encrypt_block, key_schedule};

    #[test]
    fn independent_identical_blocks_match() {
        let subkeys = key_schedule([1, 2, 3, 4, 5, 6, 7, 8]);
        let encrypt = |b: Block| encrypt_block(&subkeys, b);
        let decrypt = |b: Block| decrypt_block(&subkeys, b);

        let block: Block = [9, 9, 9, 9, 9, 9, 9, 9];
        let data = [block, block].concat();
        let ciphertext = ecb_encrypt(&encrypt, &data);
        assert_eq!(&ciphertext[..8], &ciphertext[8..]);
        assert_eq!(ecb_decrypt(&decrypt, &ciphertext), data);
    }
}
