//! End-to-end known-answer and round-trip tests driven entirely through the
//! public API, as opposed to the unit tests living next to each module.

use sslkit::{asn1, base64, cipher, pem, rsa};

fn hex(s: &str) -> Vec<u8> {
    sslkit::buffer::from_hex(s).unwrap()
}

#[test]
fn des_ecb_known_answer_vector() {
    let key: [u8; 8] = hex("133457799BBCDFF1").try_into().unwrap();
    let opts = cipher::Options { mode: cipher::Mode::Ecb, variant: cipher::Variant::Des(key), iv: None };

    let subkeys = cipher::des::key_schedule(key);
    let plaintext: [u8; 8] = hex("0123456789ABCDEF").try_into().unwrap();
    let ciphertext = cipher::des::encrypt_block(&subkeys, plaintext);
    assert_eq!(ciphertext, hex("85E813540F0AB405").as_slice());

    // And round-trip through the padded, mode-dispatching public surface.
    let wrapped = cipher::encrypt(&opts, b"eight!!!").unwrap();
    assert_eq!(cipher::decrypt(&opts, &wrapped).unwrap(), b"eight!!!");
}

#[test]
fn des_cbc_known_answer_vector() {
    // NIST SP 800-17 single-block CBC vector: same key/plaintext as the ECB
    // case, IV of all zero bits reduces CBC's first block to plain ECB.
    let key: [u8; 8] = hex("133457799BBCDFF1").try_into().unwrap();
    let subkeys = cipher::des::key_schedule(key);
    let ciphertext = cipher::des::cbc_encrypt(
        &|b| cipher::des::encrypt_block(&subkeys, b),
        [0; 8],
        &hex("0123456789ABCDEF"),
    );
    assert_eq!(ciphertext, hex("85E813540F0AB405"));
}

#[test]
fn des3_degrades_to_des_when_keys_match() {
    let key = [0x11u8; 8];
    let des3_key: cipher::des::Des3Key = {
        let mut k = [0u8; 24];
        k[..8].copy_from_slice(&key);
        k[8..16].copy_from_slice(&key);
        k[16..].copy_from_slice(&key);
        k
    };

    let subkeys = cipher::des::key_schedule(key);
    let triple_subkeys = cipher::des::Des3Subkeys::new(des3_key);

    let block = *b"abcdefgh";
    let single = cipher::des::encrypt_block(&subkeys, block);
    let triple = cipher::des::encrypt_block_3des(&triple_subkeys, block);
    assert_eq!(single, triple);
}

#[test]
fn all_five_modes_roundtrip_with_3des() {
    let key: cipher::des::Des3Key = std::array::from_fn(|i| i as u8);
    let plaintext = b"a message that spans several eight-byte blocks of input";

    for mode in [cipher::Mode::Ecb, cipher::Mode::Cbc, cipher::Mode::Pcbc, cipher::Mode::Cfb, cipher::Mode::Ofb] {
        let iv = if mode.requires_iv() { Some([9; 8]) } else { None };
        let opts = cipher::Options { mode, variant: cipher::Variant::Des3(key), iv };
        let ciphertext = cipher::encrypt(&opts, plaintext).unwrap();
        assert_eq!(cipher::decrypt(&opts, &ciphertext).unwrap(), plaintext, "mode {mode:?} failed to roundtrip");
    }
}

#[test]
fn base64_roundtrip_and_length() {
    for len in [0usize, 1, 2, 3, 4, 10, 100] {
        let data: Vec<u8> = (0..len as u8).collect();
        let encoded = base64::encode(&data);
        assert_eq!(base64::decode(&encoded).unwrap(), data);

        let payload_len = encoded.chars().filter(|c| !c.is_whitespace()).count();
        assert_eq!(payload_len, 4 * len.div_ceil(3));
    }
}

#[test]
fn der_integer_minimal_encoding_edge_cases() {
    let mut w = asn1::Writer::new();
    w.add_integer(255);
    let der = w.into_bytes();
    assert_eq!(der, vec![0x02, 0x02, 0x00, 0xFF]);

    let mut cursor = der.as_slice();
    let entry = asn1::read_entry(&mut cursor).unwrap().expect(asn1::Tag::Integer).unwrap();
    assert_eq!(entry.as_u64().unwrap(), 255);

    let mut w = asn1::Writer::new();
    w.add_integer(127);
    assert_eq!(w.into_bytes(), vec![0x02, 0x01, 0x7F]);
}

#[test]
fn rsa_private_key_pem_roundtrip() {
    let key = rsa::generate().unwrap();

    let der = rsa::der::encode_private_key_pkcs1(&key);
    let pem_text = pem::write(pem::KeyType::RsaPrivateKey, &der);

    let (key_type, decoded_der) = pem::read_private_key(&pem_text).unwrap();
    assert_eq!(key_type, pem::KeyType::RsaPrivateKey);

    let roundtripped = rsa::der::decode_private_key(key_type, &decoded_der).unwrap();
    assert_eq!(roundtripped, key);
}

#[test]
fn rsa_public_key_spki_pem_roundtrip() {
    let key = rsa::generate().unwrap();
    let public = key.public_key();

    let der = rsa::der::encode_public_key_spki(&public);
    let pem_text = pem::write(pem::KeyType::PublicKey, &der);

    let (key_type, decoded_der) = pem::read_public_key(&pem_text).unwrap();
    let roundtripped = rsa::der::decode_public_key(key_type, &decoded_der).unwrap();
    assert_eq!(roundtripped, public);
}

#[test]
fn rsa_generated_key_encrypts_and_decrypts_through_the_public_exponent() {
    let key = rsa::generate().unwrap();
    assert_eq!(key.public_exponent, rsa::PUBLIC_EXPONENT);

    // Toy-scale textbook RSA on a message smaller than the modulus.
    let message: u128 = 42;
    let n = u128::from(key.modulus);

    let encrypted = mod_pow(message, u128::from(key.public_exponent), n);
    let decrypted = mod_pow(encrypted, u128::from(key.private_exponent), n);
    assert_eq!(decrypted, message);
}

fn mod_pow(mut base: u128, mut exp: u128, modulus: u128) -> u128 {
    let mut result = 1u128;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        exp >>= 1;
        base = base * base % modulus;
    }
    result
}
