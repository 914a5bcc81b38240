use crate::base32::crockford::{decode_base32, encode_base32};
use crate::{Base32Error, Kind, TypedId};
use core::str::FromStr;

impl<K: Kind> TypedId<K> {
    /// Encodes this id as a 13-character Crockford base32 string.
    ///
    /// The output is fixed-width ASCII and sorts the same way as the raw value.
    ///
    /// # Example
    /// ```
    /// use boxroom::ContainerId;
    ///
    /// let id = ContainerId::from_raw(2_424_242_424_242_424_242);
    /// assert_eq!(id.encode(), "23953MG16DJDJ");
    /// assert_eq!(ContainerId::decode("23953MG16DJDJ"), Ok(id));
    /// ```
    pub fn encode(&self) -> String {
        encode_base32(self.to_raw())
            .iter()
            .map(|&b| char::from(b))
            .collect()
    }

    /// Decodes an id from its Crockford base32 form.
    ///
    /// Lowercase letters and the `O`/`I`/`L` aliases are accepted.
    ///
    /// # Errors
    /// Returns a [`Base32Error`] if the input has the wrong length, contains a
    /// character outside the alphabet, or encodes more than 64 bits.
    pub fn decode(encoded: &str) -> Result<Self, Base32Error> {
        decode_base32(encoded).map(Self::from_raw)
    }
}

impl<K: Kind> FromStr for TypedId<K> {
    type Err = Base32Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Base32Error, ContainerId, ItemId};

    #[test]
    fn typed_ids_parse_from_their_encoding() {
        let id = ItemId::from_raw(0x1234_5678_90AB_CDEF);
        let parsed: ItemId = id.encode().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_errors_surface() {
        assert_eq!(
            "nope".parse::<ContainerId>(),
            Err(Base32Error::DecodeInvalidLen { len: 4 })
        );
    }
}
