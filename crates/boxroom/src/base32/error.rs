/// Errors produced when decoding a Crockford base32 id.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Base32Error {
    /// The input is not exactly 13 characters long.
    #[error("invalid length: {len} (expected 13)")]
    DecodeInvalidLen { len: usize },

    /// The input contains a byte outside the Crockford alphabet.
    #[error("invalid ascii byte {byte:#04x} at index {index}")]
    DecodeInvalidAscii { byte: u8, index: usize },

    /// The input encodes a value wider than 64 bits.
    #[error("decoded value overflows 64 bits")]
    DecodeOverflow,
}
