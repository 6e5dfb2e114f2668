use crate::{
    digest::{Hash, Sha256},
    mac::{Hmac, Mac},
};

/// PBKDF2-HMAC-`H` as specified by RFC 2898 section 5.2.
///
/// Emits `dk_len` bytes by concatenating `T_i = F(P, S, c, i)` for
/// `i = 1..ceil(dk_len / hLen)`, truncating the final block. `F` is the XOR
/// of `c` successive applications of `HMAC_H`, seeded with the salt
/// concatenated to the big-endian block index.
pub fn pbkdf2<H: Hash>(hash: H, password: &[u8], salt: &[u8], iterations: u32, dk_len: usize) -> Vec<u8> {
    assert!(iterations >= 1, "PBKDF2 requires at least one iteration");
    let hmac = Hmac::new(hash);
    let h_len = H::DIGEST_SIZE;
    let n_blocks = dk_len.div_ceil(h_len);

    let mut out = Vec::with_capacity(n_blocks * h_len);
    for i in 1..=n_blocks as u32 {
        let mut seed = salt.to_vec();
        seed.extend_from_slice(&i.to_be_bytes());

        let mut u = hmac.mac(&seed, password);
        let mut t = u.clone();
        for _ in 1..iterations {
            u = hmac.mac(&u, password);
            for (t_byte, u_byte) in t.iter_mut().zip(&u) {
                *t_byte ^= u_byte;
            }
        }
        out.extend_from_slice(&t);
    }
    out.truncate(dk_len);
    out
}

/// Derive an 8-byte DES key from a password and salt.
///
/// This intentionally replicates an insecure shortcut: only the first 8
/// bytes of a single PBKDF2-HMAC-SHA256 block (`c = 1`) are used, rather than
/// deriving the key with a real iteration count. This exists purely to
/// interoperate with the reference tool this crate's CLI mirrors, which does
/// the same; it must never be used for anything that needs real password
/// stretching.
pub fn des_key_from_password(password: &[u8], salt: &[u8]) -> [u8; 8] {
    let block = pbkdf2(Sha256, password, salt, 1, Sha256::DIGEST_SIZE);
    let mut key = [0u8; 8];
    key.copy_from_slice(&block[..8]);
    key
}
