use crate::{Base32Error, RawId};

const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";
const NO_VALUE: u8 = 255;
const BITS_PER_CHAR: u32 = 5;

/// Number of characters needed for a 64-bit value: ceil(64 / 5).
pub(crate) const ENCODED_LEN: usize = 13;

/// Lookup table for Crockford base32 decoding
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    // Main alphabet, allow lower-case
    while i < 32 {
        let c = ALPHABET[i as usize];
        lut[c as usize] = i;
        if c.is_ascii_uppercase() {
            lut[(c + 32) as usize] = i; // lowercase letter
        }
        i += 1;
    }
    // Crockford-specific aliases
    lut[b'O' as usize] = 0;
    lut[b'o' as usize] = 0;
    lut[b'I' as usize] = 1;
    lut[b'i' as usize] = 1;
    lut[b'L' as usize] = 1;
    lut[b'l' as usize] = 1;
    lut
};

/// Encodes `raw` as 13 Crockford base32 characters, most significant first.
///
/// The leading character only carries the top 4 bits, so fixed-width output
/// sorts the same way as the numeric value.
pub(crate) fn encode_base32(raw: RawId) -> [u8; ENCODED_LEN] {
    let mut buf = [0_u8; ENCODED_LEN];
    for (i, out) in buf.iter_mut().enumerate() {
        let shift = BITS_PER_CHAR * (ENCODED_LEN - 1 - i) as u32;
        *out = ALPHABET[((raw >> shift) & 0x1F) as usize];
    }
    buf
}

/// Decodes a 13-character Crockford base32 string.
///
/// Accepts lowercase letters and the `O`/`I`/`L` aliases.
pub(crate) fn decode_base32(encoded: &str) -> Result<RawId, Base32Error> {
    if encoded.len() != ENCODED_LEN {
        return Err(Base32Error::DecodeInvalidLen { len: encoded.len() });
    }

    let mut acc: RawId = 0;
    for (index, byte) in encoded.bytes().enumerate() {
        let val = LOOKUP[byte as usize];
        if val == NO_VALUE {
            return Err(Base32Error::DecodeInvalidAscii { byte, index });
        }
        // 13 * 5 = 65 bits; the spare bit lives in the first character.
        if index == 0 && val > 0x0F {
            return Err(Base32Error::DecodeOverflow);
        }
        acc = (acc << BITS_PER_CHAR) | RawId::from(val);
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(val: u64) {
        let buf = encode_base32(val);
        let s = core::str::from_utf8(&buf).unwrap();
        let decoded = decode_base32(s).unwrap();
        assert_eq!(val, decoded, "roundtrip for u64: input={val}, b32={s}");
    }

    #[test]
    fn encode_decode_preserves_u64_values() {
        for v in [0, 1, 42, u64::MAX, 0xFF00_FF00_FF00_FF00, 0x1234_5678_90AB_CDEF] {
            roundtrip(v);
        }
    }

    #[test]
    fn known_encodings() {
        assert_eq!(&encode_base32(0), b"0000000000000");
        assert_eq!(&encode_base32(u64::MAX), b"FZZZZZZZZZZZZ");
        assert_eq!(&encode_base32(2_424_242_424_242_424_242), b"23953MG16DJDJ");
    }

    #[test]
    fn encoding_sorts_like_the_value() {
        let mut values = [u64::MAX, 0, 1 << 40, 31, 32, 7_000_000];
        let mut encoded: Vec<_> = values.iter().map(|&v| encode_base32(v)).collect();
        values.sort_unstable();
        encoded.sort_unstable();
        let sorted: Vec<_> = values.iter().map(|&v| encode_base32(v)).collect();
        assert_eq!(encoded, sorted);
    }

    #[test]
    fn decode_accepts_lowercase_and_aliases() {
        let upper = decode_base32("23953MG16DJDJ").unwrap();
        assert_eq!(decode_base32("23953mg16djdj").unwrap(), upper);
        assert_eq!(
            decode_base32("OOOOOOOOOOOOI").unwrap(),
            decode_base32("0000000000001").unwrap()
        );
        assert_eq!(decode_base32("000000000000l").unwrap(), 1);
    }

    #[test]
    fn decode_rejects_bad_input() {
        assert_eq!(
            decode_base32("ZZZZ"),
            Err(Base32Error::DecodeInvalidLen { len: 4 })
        );
        assert_eq!(
            decode_base32("000000000000!"),
            Err(Base32Error::DecodeInvalidAscii {
                byte: b'!',
                index: 12
            })
        );
        assert_eq!(decode_base32("G000000000000"), Err(Base32Error::DecodeOverflow));
    }
}
