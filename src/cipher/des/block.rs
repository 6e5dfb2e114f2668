//! The DES block cipher core: the key schedule, the Feistel round function,
//! and the 16-round network itself.
//!
//! Everything here operates on a `u64` interpreted as a big-endian bit
//! string — bit 0 (as used by [`get_bit`]/[`set_bit`]) is the most
//! significant bit of the value, which is bit 1 in the 1-based tables of
//! [`super::tables`]. A block is converted to this representation with
//! [`u64::from_be_bytes`] and back with [`u64::to_be_bytes`], so "MSB of the
//! u64" and "MSB of byte 0" agree.

use super::tables;

/// An 8-byte DES key. The parity bits (every 8th bit) are ignored by the key
/// schedule but are not stripped here — they're preserved on the wire.
pub type DesKey = [u8; 8];

/// A single 8-byte block of plaintext or ciphertext.
pub type Block = [u8; 8];

/// The 16 48-bit round keys derived from a [`DesKey`]. Each entry occupies
/// the low 48 bits of significance by convention of [`permute`]: bits 16-63
/// of the `u64` carry the 48-bit value, with bits 0-15 always zero.
pub type Subkeys = [u64; 16];

fn get_bit(value: u64, bit: u32) -> bool {
    value & (1u64 << (63 - bit)) != 0
}

fn set_bit(value: u64, bit: u32, v: bool) -> u64 {
    let mask = 1u64 << (63 - bit);
    if v {
        value | mask
    } else {
        value & !mask
    }
}

/// Apply a DES permutation table to `value`. `table[i]` is the 1-based bit
/// position (MSB-first) of `value` that becomes output bit `i`.
fn permute(value: u64, table: &[u8]) -> u64 {
    table.iter().enumerate().fold(0u64, |acc, (i, &pos)| {
        set_bit(acc, i as u32, get_bit(value, u32::from(pos - 1)))
    })
}

/// Rotate the low 28 bits of `value` left by `times` positions.
fn rotate_left28(value: u32, times: u8) -> u32 {
    let mut v = value;
    for _ in 0..times {
        let carry = v & (1 << 27) != 0;
        v = (v << 1) & 0x0FFF_FFFF;
        if carry {
            v |= 1;
        }
    }
    v
}

/// Derive the 16 round subkeys from a DES key.
pub fn key_schedule(key: DesKey) -> Subkeys {
    let permuted = permute(u64::from_be_bytes(key), &tables::PC1);
    // PC1 yields 56 bits occupying the top 56 bits of the word (bits 8-63).
    let mut left = ((permuted >> 36) & 0x0FFF_FFFF) as u32;
    let mut right = ((permuted >> 8) & 0x0FFF_FFFF) as u32;

    let mut subkeys = [0u64; 16];
    for (round, out) in subkeys.iter_mut().enumerate() {
        left = rotate_left28(left, tables::SHIFT[round]);
        right = rotate_left28(right, tables::SHIFT[round]);
        let concat = (u64::from(left) << 28 | u64::from(right)) << 8;
        *out = permute(concat, &tables::PC2);
    }
    subkeys
}

/// The Feistel round function `F(R, K)`.
fn feistel(half: u32, subkey: u64) -> u32 {
    let expanded = permute(u64::from(half) << 32, &tables::E);
    let mixed = expanded ^ subkey;

    let mut substituted = 0u64;
    for (i, sbox) in tables::S.iter().enumerate() {
        let base = i * 6;
        let bits: [bool; 6] = std::array::from_fn(|k| get_bit(mixed, (base + k) as u32));
        let row = usize::from(bits[0]) * 2 + usize::from(bits[5]);
        let col = usize::from(bits[1]) * 8
            + usize::from(bits[2]) * 4
            + usize::from(bits[3]) * 2
            + usize::from(bits[4]);
        let nibble = sbox[row * 16 + col];
        for n in 0..4 {
            let bit_on = (nibble >> (3 - n)) & 1 != 0;
            substituted = set_bit(substituted, (i * 4 + n) as u32, bit_on);
        }
    }

    (permute(substituted, &tables::P) >> 32) as u32
}

fn process_block(block: u64, subkeys: &Subkeys, decrypt: bool) -> u64 {
    let permuted = permute(block, &tables::IP);
    let mut left = (permuted >> 32) as u32;
    let mut right = permuted as u32;

    for round in 0..16 {
        let round_key = if decrypt { subkeys[15 - round] } else { subkeys[round] };
        let prev_right = right;
        right = left ^ feistel(right, round_key);
        left = prev_right;
    }

    // Final permutation operates on R16 || L16, not L16 || R16.
    let combined = (u64::from(right) << 32) | u64::from(left);
    permute(combined, &tables::IP_INV)
}

/// Encrypt a single 8-byte block.
pub fn encrypt_block(subkeys: &Subkeys, block: Block) -> Block {
    process_block(u64::from_be_bytes(block), subkeys, false).to_be_bytes()
}

/// Decrypt a single 8-byte block.
pub fn decrypt_block(subkeys: &Subkeys, block: Block) -> Block {
    process_block(u64::from_be_bytes(block), subkeys, true).to_be_bytes()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_answer_ecb() {
        // FIPS 81-style DES test vector.
        let key: DesKey = [0x13, 0x34, 0x57, 0x79, 0x9B, 0xBC, 0xDF, 0xF1];
        let plaintext: Block = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];
        let expected: Block = [0x85, 0xE8, 0x13, 0x54, 0x0F, 0x0A, 0xB4, 0x05];

        let subkeys = key_schedule(key);
        let ciphertext = encrypt_block(&subkeys, plaintext);
        assert_eq!(ciphertext, expected);
        assert_eq!(decrypt_block(&subkeys, ciphertext), plaintext);
    }

    #[test]
    fn self_inverse_for_any_block() {
        let key: DesKey = [1, 2, 3, 4, 5, 6, 7, 8];
        let subkeys = key_schedule(key);
        for seed in 0u64..50 {
            let block = (seed.wrapping_mul(0x9E37_79B9_7F4A_7C15)).to_be_bytes();
            let ciphertext = encrypt_block(&subkeys, block);
            assert_eq!(decrypt_block(&subkeys, ciphertext), block);
        }
    }
}
