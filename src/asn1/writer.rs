//! An append-only DER builder. Each `add_*` method appends one complete
//! tag-length-value entry; nested structures (SEQUENCE, OCTET STRING,
//! BIT STRING) take an already-built [`Writer`] and wrap its bytes.

use super::reader::Tag;

#[derive(Default)]
pub struct Writer {
    buf: Vec<u8>,
}

fn push_length(buf: &mut Vec<u8>, len: usize) {
    if len < 0x80 {
        buf.push(len as u8);
    } else if len <= 0xFF {
        buf.push(0x81);
        buf.push(len as u8);
    } else {
        buf.push(0x82);
        buf.push((len >> 8) as u8);
        buf.push(len as u8);
    }
}

/// Minimal-length big-endian encoding of a DER INTEGER's content octets.
fn encode_integer(value: u64) -> Vec<u8> {
    let mut bytes = value.to_be_bytes().to_vec();
    while bytes.len() > 1 && bytes[0] == 0 && bytes[1] & 0x80 == 0 {
        bytes.remove(0);
    }
    if bytes[0] & 0x80 != 0 {
        bytes.insert(0, 0);
    }
    bytes
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_tlv(&mut self, tag: u8, body: &[u8]) {
        self.buf.push(tag);
        push_length(&mut self.buf, body.len());
        self.buf.extend_from_slice(body);
    }

    pub fn add_integer(&mut self, value: u64) -> &mut Self {
        let body = encode_integer(value);
        self.push_tlv(Tag::Integer as u8, &body);
        self
    }

    /// `der_body` is the content octets of the OBJECT IDENTIFIER, as found
    /// in [`super::oid`].
    pub fn add_object_identifier(&mut self, der_body: &[u8]) -> &mut Self {
        self.push_tlv(Tag::ObjectIdentifier as u8, der_body);
        self
    }

    pub fn add_null(&mut self) -> &mut Self {
        self.push_tlv(Tag::Null as u8, &[]);
        self
    }

    pub fn add_sequence(&mut self, inner: Writer) -> &mut Self {
        self.push_tlv(Tag::Sequence as u8, &inner.into_bytes());
        self
    }

    /// An OCTET STRING whose payload is itself a complete DER SEQUENCE, as
    /// PKCS#8 uses to carry the algorithm-specific private key.
    pub fn add_octet_string_seq(&mut self, inner: Writer) -> &mut Self {
        self.push_tlv(Tag::OctetString as u8, &inner.into_bytes());
        self
    }

    /// A BIT STRING whose payload is a complete DER SEQUENCE, as SPKI uses
    /// to carry the algorithm-specific public key. The leading "unused
    /// bits" octet is always zero here, since everything this crate emits
    /// is byte-aligned.
    pub fn add_bit_string_seq(&mut self, inner: Writer) -> &mut Self {
        let mut body = vec![0u8];
        body.extend(inner.into_bytes());
        self.push_tlv(Tag::BitString as u8, &body);
        self
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::asn1::reader::read_entry;

    #[test]
    fn integer_minimal_encoding() {
        assert_eq!(encode_integer(0), vec![0x00]);
        assert_eq!(encode_integer(127), vec![0x7F]);
        assert_eq!(encode_integer(255), vec![0x00, 0xFF]);
        assert_eq!(encode_integer(256), vec![0x01, 0x00]);
    }

    #[test]
    fn roundtrips_through_reader() {
        let mut seq = Writer::new();
        seq.add_integer(0).add_integer(65537);
        let mut outer = Writer::new();
        outer.add_sequence(seq);
        let bytes = outer.into_bytes();

        let mut cursor = bytes.as_slice();
        let entry = read_entry(&mut cursor).unwrap().expect(Tag::Sequence).unwrap();
        let mut body = entry.data;
        let version = read_entry(&mut body).unwrap();
        let exponent = read_entry(&mut body).unwrap();
        assert_eq!(version.as_u64().unwrap(), 0);
        assert_eq!(exponent.as_u64().unwrap(), 65537);
    }
}
