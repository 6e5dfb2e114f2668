//! Triple DES in encrypt-decrypt-encrypt (EDE) keying option 1: three
//! independent 8-byte keys.

use super::block::{decrypt_block, encrypt_block, key_schedule, Block, DesKey, Subkeys};

/// A 24-byte 3DES key: three independent DES keys concatenated.
pub type Des3Key = [u8; 24];

/// The three round-key schedules derived from a [`Des3Key`].
pub struct Des3Subkeys([Subkeys; 3]);

impl Des3Subkeys {
    pub fn new(key: Des3Key) -> Self {
        let split = |i: usize| -> DesKey { key[i * 8..i * 8 + 8].try_into().unwrap() };
        Self([key_schedule(split(0)), key_schedule(split(1)), key_schedule(split(2))])
    }
}

/// `E_k3(D_k2(E_k1(block)))`.
pub fn encrypt_block_3des(keys: &Des3Subkeys, block: Block) -> Block {
    let stage1 = encrypt_block(&keys.0[0], block);
    let stage2 = decrypt_block(&keys.0[1], stage1);
    encrypt_block(&keys.0[2], stage2)
}

/// `D_k1(E_k2(D_k3(block)))`.
pub fn decrypt_block_3des(keys: &Des3Subkeys, block: Block) -> Block {
    let stage1 = decrypt_block(&keys.0[2], block);
    let stage2 = encrypt_block(&keys.0[1], stage1);
    decrypt_block(&keys.0[0], stage2)
}
