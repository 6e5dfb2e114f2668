//! The DES/3DES block cipher: key schedule, Feistel network, padding, the
//! five modes of operation, and the EDE triple-keying variant.

pub(crate) mod block;
mod modes;
pub(crate) mod padding;
mod tables;
mod triple;

pub use block::{decrypt_block, encrypt_block, key_schedule, Block, DesKey, Subkeys};
pub use modes::{
    cbc_decrypt, cbc_encrypt, cfb_decrypt, cfb_encrypt, ecb_decrypt, ecb_encrypt, ofb_decrypt,
    ofb_encrypt, pcbc_decrypt, pcbc_encrypt,
};
pub use padding::{pad, unpad};
pub use triple::{decrypt_block_3des, encrypt_block_3des, Des3Key, Des3Subkeys};
