use {
    crate::{digest::Hash, mac::Mac},
    docext::docext,
};

const OPAD: u8 = 0x5C;
const IPAD: u8 = 0x36;

/// A hash-based message authentication code is a method for creating a
/// [MAC](crate::mac::Mac) from a [hash function](crate::digest::Hash).
///
/// It works by first padding the key with zeros if it is smaller than the
/// internal block size of the hash function. If the key is larger than the
/// internal block size, it is first hashed and then padded with zeros to
/// exactly the block size. The resulting value is $K'$.
///
/// The HMAC tag is computed as
///
/// $$
/// H\Big((K' \oplus opad) \parallel H\big((K' \oplus ipad) \parallel m
/// \big) \Big)
/// $$
///
/// where $m$ is the message, $H$ is the hash function, $opad$ (outer padding)
/// is a sequence of $\mathrm{5C}_{16}$ bytes equal in size to the internal
/// block of the hash function, and $ipad$ (inner padding) is a sequence of
/// $\mathrm{36}_{16}$ bytes. Essentially, first an _inner hash_ is computed by
/// hashing the message concatenated to the inner padded key. Then, an outer
/// hash is computed by hashing the inner hash concatenated to the outer
/// padded key. The outer hash is the resulting tag.
///
/// This method was chosen as the standard because it's theoretically more
/// secure than simply prepending or appending the key to the message, and is
/// resistant to length-extension attacks even if the underlying hash
/// function isn't.
#[docext]
pub struct Hmac<H>(H);

impl<H> Hmac<H> {
    pub fn new(h: H) -> Self {
        Self(h)
    }
}

impl<H: Hash> Mac for Hmac<H> {
    fn mac(&self, msg: &[u8], key: &[u8]) -> Vec<u8> {
        let block_size = H::BLOCK_SIZE;

        // Derive K' from the key.
        let mut k = vec![0u8; block_size];
        if key.len() <= block_size {
            k[..key.len()].copy_from_slice(key);
        } else {
            let h = self.0.hash(key);
            let s = h.len().min(block_size);
            k[..s].copy_from_slice(&h[..s]);
        }

        // Compute the inner hash.
        let mut inner_preimage = Vec::with_capacity(block_size + msg.len());
        inner_preimage.extend(k.iter().map(|n| n ^ IPAD));
        inner_preimage.extend(msg);
        let inner_hash = self.0.hash(&inner_preimage);

        // Compute the outer hash, which is the result of the MAC function.
        let mut outer_preimage = Vec::with_capacity(block_size + inner_hash.len());
        outer_preimage.extend(k.iter().map(|n| n ^ OPAD));
        outer_preimage.extend(inner_hash);
        self.0.hash(&outer_preimage)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::digest::Sha256;

    #[test]
    fn rfc4231_case1() {
        // RFC 4231 test case 1.
        let key = [0x0b; 20];
        let data = b"Hi There";
        let tag = Hmac::new(Sha256).mac(data, &key);
        assert_eq!(
            crate::buffer::to_hex(&tag),
            "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
        );
    }
}
