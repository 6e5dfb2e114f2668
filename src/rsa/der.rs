//! DER encoding/decoding between [`PublicKey`]/[`PrivateKey`] and the three
//! ASN.1 structures this crate reads and writes: PKCS#1 `RSAPublicKey` /
//! `RSAPrivateKey`, PKCS#8 `PrivateKeyInfo`, and X.509
//! `SubjectPublicKeyInfo`.

use super::{PrivateKey, PublicKey};
use crate::{
    asn1::{oid, Entry, Tag, Writer},
    error::Error,
    pem::KeyType,
};

fn algorithm_identifier() -> Writer {
    let mut algo = Writer::new();
    algo.add_object_identifier(oid::RSA_ENCRYPTION).add_null();
    algo
}

fn check_rsa_algorithm(entry: Entry) -> Result<(), Error> {
    let mut body = entry.data;
    let algorithm = crate::asn1::read_entry(&mut body)?.expect(Tag::ObjectIdentifier)?;
    if algorithm.data != oid::RSA_ENCRYPTION {
        return Err(Error::UnsupportedAlgorithm);
    }
    let params = crate::asn1::read_entry(&mut body)?.expect(Tag::Null)?;
    if !params.data.is_empty() {
        return Err(Error::InvalidDer);
    }
    Ok(())
}

/// `RSAPublicKey ::= SEQUENCE { modulus INTEGER, publicExponent INTEGER }`
pub fn encode_public_key_pkcs1(key: &PublicKey) -> Vec<u8> {
    let mut seq = Writer::new();
    seq.add_integer(key.modulus).add_integer(key.exponent);
    let mut outer = Writer::new();
    outer.add_sequence(seq);
    outer.into_bytes()
}

pub fn decode_public_key_pkcs1(der: &[u8]) -> Result<PublicKey, Error> {
    let mut cursor = der;
    let seq = crate::asn1::read_entry(&mut cursor)?.expect(Tag::Sequence)?;
    let mut body = seq.data;
    let modulus = crate::asn1::read_entry(&mut body)?.expect(Tag::Integer)?.as_u64()?;
    let exponent = crate::asn1::read_entry(&mut body)?.expect(Tag::Integer)?.as_u64()?;
    Ok(PublicKey { modulus, exponent })
}

/// `SubjectPublicKeyInfo ::= SEQUENCE { algorithm AlgorithmIdentifier,
/// subjectPublicKey BIT STRING }`
pub fn encode_public_key_spki(key: &PublicKey) -> Vec<u8> {
    let mut spki = Writer::new();
    spki.add_sequence(algorithm_identifier());
    spki.add_bit_string_seq({
        let mut inner = Writer::new();
        inner.add_integer(key.modulus).add_integer(key.exponent);
        inner
    });
    let mut outer = Writer::new();
    outer.add_sequence(spki);
    outer.into_bytes()
}

pub fn decode_public_key_spki(der: &[u8]) -> Result<PublicKey, Error> {
    let mut cursor = der;
    let outer = crate::asn1::read_entry(&mut cursor)?.expect(Tag::Sequence)?;
    let mut body = outer.data;

    let algorithm = crate::asn1::read_entry(&mut body)?.expect(Tag::Sequence)?;
    check_rsa_algorithm(algorithm)?;

    let bit_string = crate::asn1::read_entry(&mut body)?.expect(Tag::BitString)?;
    let (&unused_bits, rest) = bit_string.data.split_first().ok_or(Error::InvalidDer)?;
    if unused_bits != 0 {
        return Err(Error::InvalidDer);
    }
    decode_public_key_pkcs1(rest)
}

/// `RSAPrivateKey ::= SEQUENCE { version, n, e, d, p, q, dP, dQ, qInv }`
pub fn encode_private_key_pkcs1(key: &PrivateKey) -> Vec<u8> {
    let mut seq = Writer::new();
    seq.add_integer(0)
        .add_integer(key.modulus)
        .add_integer(key.public_exponent)
        .add_integer(key.private_exponent)
        .add_integer(key.prime1)
        .add_integer(key.prime2)
        .add_integer(key.exponent1)
        .add_integer(key.exponent2)
        .add_integer(key.coefficient);
    let mut outer = Writer::new();
    outer.add_sequence(seq);
    outer.into_bytes()
}

pub fn decode_private_key_pkcs1(der: &[u8]) -> Result<PrivateKey, Error> {
    let mut cursor = der;
    let seq = crate::asn1::read_entry(&mut cursor)?.expect(Tag::Sequence)?;
    let mut body = seq.data;

    let mut next_integer = || -> Result<u64, Error> {
        crate::asn1::read_entry(&mut body)?.expect(Tag::Integer)?.as_u64()
    };

    let version = next_integer()?;
    if version != 0 {
        return Err(Error::InvalidDer);
    }
    Ok(PrivateKey {
        modulus: next_integer()?,
        public_exponent: next_integer()?,
        private_exponent: next_integer()?,
        prime1: next_integer()?,
        prime2: next_integer()?,
        exponent1: next_integer()?,
        exponent2: next_integer()?,
        coefficient: next_integer()?,
    })
}

/// `PrivateKeyInfo ::= SEQUENCE { version, algorithm AlgorithmIdentifier,
/// privateKey OCTET STRING }`
pub fn encode_private_key_pkcs8(key: &PrivateKey) -> Vec<u8> {
    let mut info = Writer::new();
    info.add_integer(0);
    info.add_sequence(algorithm_identifier());

    let mut rsa_key_seq = Writer::new();
    rsa_key_seq
        .add_integer(0)
        .add_integer(key.modulus)
        .add_integer(key.public_exponent)
        .add_integer(key.private_exponent)
        .add_integer(key.prime1)
        .add_integer(key.prime2)
        .add_integer(key.exponent1)
        .add_integer(key.exponent2)
        .add_integer(key.coefficient);
    info.add_octet_string_seq(rsa_key_seq);

    let mut outer = Writer::new();
    outer.add_sequence(info);
    outer.into_bytes()
}

pub fn decode_private_key_pkcs8(der: &[u8]) -> Result<PrivateKey, Error> {
    let mut cursor = der;
    let outer = crate::asn1::read_entry(&mut cursor)?.expect(Tag::Sequence)?;
    let mut body = outer.data;

    let version = crate::asn1::read_entry(&mut body)?.expect(Tag::Integer)?.as_u64()?;
    if version != 0 {
        return Err(Error::InvalidDer);
    }

    let algorithm = crate::asn1::read_entry(&mut body)?.expect(Tag::Sequence)?;
    check_rsa_algorithm(algorithm)?;

    let octet_string = crate::asn1::read_entry(&mut body)?.expect(Tag::OctetString)?;
    decode_private_key_pkcs1(octet_string.data)
}

/// Decode whichever private-key format the PEM label indicated.
pub fn decode_private_key(key_type: KeyType, der: &[u8]) -> Result<PrivateKey, Error> {
    match key_type {
        KeyType::RsaPrivateKey => decode_private_key_pkcs1(der),
        KeyType::PrivateKey => decode_private_key_pkcs8(der),
        KeyType::EncryptedPrivateKey => Err(Error::UnsupportedAlgorithm),
        KeyType::PublicKey | KeyType::RsaPublicKey => Err(Error::InvalidDer),
    }
}

/// Decode whichever public-key format the PEM label indicated.
pub fn decode_public_key(key_type: KeyType, der: &[u8]) -> Result<PublicKey, Error> {
    match key_type {
        KeyType::RsaPublicKey => decode_public_key_pkcs1(der),
        KeyType::PublicKey => decode_public_key_spki(der),
        _ => Err(Error::InvalidDer),
    }
}
