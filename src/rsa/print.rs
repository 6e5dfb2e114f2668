//! Formats RSA keys for `-text` output: decimal for small fields (the
//! exponent), colon-separated hex octets for everything else.

use super::{PrivateKey, PublicKey};

fn hex_octets(value: u64) -> String {
    let bytes = value.to_be_bytes();
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len() - 1);
    bytes[start..].iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join(":")
}

fn bit_length(value: u64) -> u32 {
    64 - value.leading_zeros()
}

pub fn private_key_text(key: &PrivateKey) -> String {
    let mut out = String::new();
    out.push_str(&format!("Private-Key: ({} bit, 2 primes)\n", bit_length(key.modulus)));
    out.push_str(&format!("modulus:\n    {}\n", hex_octets(key.modulus)));
    out.push_str(&format!(
        "publicExponent: {} (0x{:x})\n",
        key.public_exponent, key.public_exponent
    ));
    out.push_str(&format!("privateExponent:\n    {}\n", hex_octets(key.private_exponent)));
    out.push_str(&format!("prime1:\n    {}\n", hex_octets(key.prime1)));
    out.push_str(&format!("prime2:\n    {}\n", hex_octets(key.prime2)));
    out.push_str(&format!("exponent1:\n    {}\n", hex_octets(key.exponent1)));
    out.push_str(&format!("exponent2:\n    {}\n", hex_octets(key.exponent2)));
    out.push_str(&format!("coefficient:\n    {}\n", hex_octets(key.coefficient)));
    out
}

pub fn public_key_text(key: &PublicKey) -> String {
    let mut out = String::new();
    out.push_str(&format!("Public-Key: ({} bit)\n", bit_length(key.modulus)));
    out.push_str(&format!("Modulus:\n    {}\n", hex_octets(key.modulus)));
    out.push_str(&format!("Exponent: {} (0x{:x})\n", key.exponent, key.exponent));
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn public_key_text_contains_fields() {
        let text = public_key_text(&PublicKey { modulus: 3_233, exponent: 17 });
        assert!(text.contains("Public-Key: (12 bit)"));
        assert!(text.contains("Exponent: 17 (0x11)"));
        assert!(text.contains("0c:a1"));
    }

    #[test]
    fn private_key_text_lists_all_crt_fields() {
        let key = PrivateKey {
            modulus: 3_233,
            public_exponent: 17,
            private_exponent: 2753,
            prime1: 61,
            prime2: 53,
            exponent1: 53,
            exponent2: 49,
            coefficient: 38,
        };
        let text = private_key_text(&key);
        for label in ["modulus", "publicExponent", "privateExponent", "prime1", "prime2", "exponent1", "exponent2", "coefficient"] {
            assert!(text.contains(label), "missing field {label}");
        }
    }
}
