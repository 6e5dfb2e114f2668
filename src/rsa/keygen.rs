//! 64-bit toy RSA key generation: prime search via Miller-Rabin, and the
//! textbook key assembly (`n`, `phi`, `d`, the CRT parameters).
//!
//! This is deliberately not production RSA — real keys need moduli in the
//! thousands of bits, not 64. It exists to exercise the same ASN.1/PEM
//! machinery real key tooling uses, at a scale a human can sanity-check by
//! hand.

use super::{PrivateKey, PUBLIC_EXPONENT};
use crate::{buffer, error::Error};

const WITNESSES: [u64; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];
const PRIME_LOW: u32 = 0xC000_0000;
const PRIME_HIGH: u32 = 0xFFFF_FFFF;

fn mulmod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

fn powmod(base: u64, mut exp: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let mut result = 1u64;
    let mut base = base % modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mulmod(result, base, modulus);
        }
        exp >>= 1;
        base = mulmod(base, base, modulus);
    }
    result
}

fn miller_rabin_round(n: u64, mut d: u64, a: u64) -> bool {
    let mut x = powmod(a, d, n);
    if x == 1 || x == n - 1 {
        return true;
    }
    while d != n - 1 {
        x = mulmod(x, x, n);
        d *= 2;
        if x == 1 {
            return false;
        }
        if x == n - 1 {
            return true;
        }
    }
    false
}

fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut d = n - 1;
    while d % 2 == 0 {
        d /= 2;
    }
    WITNESSES.iter().all(|&a| miller_rabin_round(n, d, a))
}

fn random_u32() -> Result<u32, Error> {
    let mut bytes = [0u8; 4];
    buffer::fill_random(&mut bytes)?;
    Ok(u32::from_be_bytes(bytes))
}

/// Uniformly sample a `u32` in `[low, high]` by rejection sampling.
fn random_in_range(low: u32, high: u32) -> Result<u64, Error> {
    let span = u64::from(high - low) + 1;
    let threshold = ((u64::from(u32::MAX) + 1) / span) * span;
    loop {
        let candidate = u64::from(random_u32()?);
        if candidate < threshold {
            return Ok(u64::from(low) + candidate % span);
        }
    }
}

fn generate_prime(exclude: Option<u64>) -> Result<u64, Error> {
    loop {
        let candidate = random_in_range(PRIME_LOW, PRIME_HIGH)?;
        if Some(candidate) == exclude {
            continue;
        }
        if is_prime(candidate) {
            return Ok(candidate);
        }
    }
}

/// Extended Euclidean algorithm; returns `a^-1 mod m`.
fn inverse_mod(a: u64, m: u64) -> u64 {
    let (mut old_r, mut r) = (i128::from(a), i128::from(m));
    let (mut old_s, mut s) = (1i128, 0i128);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    let m = i128::from(m);
    (((old_s % m) + m) % m) as u64
}

/// Generate a fresh 64-bit RSA key pair with public exponent 65537.
pub fn generate() -> Result<PrivateKey, Error> {
    let p = generate_prime(None)?;
    let q = generate_prime(Some(p))?;
    let n = p.checked_mul(q).ok_or(Error::NumberTooLarge)?;
    let phi = (p - 1).checked_mul(q - 1).ok_or(Error::NumberTooLarge)?;
    let e = PUBLIC_EXPONENT;
    let d = inverse_mod(e, phi);

    Ok(PrivateKey {
        modulus: n,
        public_exponent: e,
        private_exponent: d,
        prime1: p,
        prime2: q,
        exponent1: d % (p - 1),
        exponent2: d % (q - 1),
        coefficient: inverse_mod(q, p),
    })
}
