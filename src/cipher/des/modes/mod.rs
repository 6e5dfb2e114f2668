//! The five block cipher modes of operation this crate supports: ECB, CBC,
//! PCBC, CFB (full-block), and OFB. Every mode is expressed purely in terms
//! of the single-block [`super::block::encrypt_block`]/[`decrypt_block`]
//! functions, so a 3DES cipher can reuse the exact same mode logic by
//! supplying its own block function (see [`super::triple`]).

mod cbc;
mod cfb;
mod ecb;
mod ofb;
mod pcbc;

pub use cbc::{cbc_decrypt, cbc_encrypt};
pub use cfb::{cfb_decrypt, cfb_encrypt};
pub use ecb::{ecb_decrypt, ecb_encrypt};
pub use ofb::{ofb_decrypt, ofb_encrypt};
pub use pcbc::{pcbc_decrypt, pcbc_encrypt};

pub(crate) type Block = [u8; 8];
pub(crate) type BlockFn<'a> = dyn Fn(Block) -> Block + 'a;

pub(crate) fn xor_block(a: Block, b: Block) -> Block {
    std::array::from_fn(|i| a[i] ^ b[i])
}

pub(crate) fn chunks(data: &[u8]) -> impl Iterator<Item = Block> + '_ {
    data.chunks_exact(8).map(|c| c.try_into().unwrap())
}
