//! Serde support for typed ids.
//!
//! [`TypedId`] serializes as its native integer. Enable the `base32` feature
//! as well to get the [`as_base32`] field adapter, which uses the fixed-width
//! Crockford string instead.

use crate::{Kind, RawId, TypedId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<K: Kind> Serialize for TypedId<K> {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_raw().serialize(s)
    }
}

impl<'de, K: Kind> Deserialize<'de> for TypedId<K> {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawId::deserialize(d).map(Self::from_raw)
    }
}

/// Serialize a typed id as a Crockford base32 string.
///
/// ```
/// use boxroom::ItemId;
///
/// #[derive(serde::Serialize, serde::Deserialize)]
/// struct Label {
///     #[serde(with = "boxroom::serde::as_base32")]
///     item: ItemId,
/// }
///
/// let json = serde_json::to_string(&Label { item: ItemId::from_raw(42) }).unwrap();
/// assert_eq!(json, r#"{"item":"000000000001A"}"#);
/// ```
#[cfg_attr(docsrs, doc(cfg(all(feature = "serde", feature = "base32"))))]
#[cfg(feature = "base32")]
pub mod as_base32 {
    use super::{Deserializer, Serializer};
    use crate::{Kind, TypedId};

    /// Serialize a typed id as a Crockford base32 encoded string.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<K, S>(id: &TypedId<K>, s: S) -> Result<S::Ok, S::Error>
    where
        K: Kind,
        S: Serializer,
    {
        s.serialize_str(id.encode().as_str())
    }

    /// Deserialize a typed id from a Crockford base32 encoded string.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The string is not valid Crockford base32 (invalid length or ascii)
    /// - The decoded value does not fit in 64 bits
    pub fn deserialize<'de, K, D>(d: D) -> Result<TypedId<K>, D::Error>
    where
        K: Kind,
        D: Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(d)?;
        TypedId::decode(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        AllocatorConfig, AnyId, Container, ContainerId, Item, ItemId, Record, RepositoryEvent,
    };
    use core::num::NonZeroU32;
    use serde_json::json;

    #[test]
    fn typed_ids_are_plain_integers() {
        let id = ContainerId::from_raw(1234);
        assert_eq!(serde_json::to_value(id).unwrap(), json!(1234));
        assert_eq!(serde_json::from_value::<ContainerId>(json!(1234)).unwrap(), id);
    }

    #[test]
    fn records_are_tagged_by_kind() {
        let mut container = Container::new(ContainerId::from_raw(1), "shed");
        container.add_item(ItemId::from_raw(2));
        let record = Record::from(container);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({ "kind": "container", "id": 1, "title": "shed", "items": [2] })
        );
        assert_eq!(serde_json::from_value::<Record>(value).unwrap(), record);
    }

    #[test]
    fn items_keep_their_back_reference() {
        let item = Item::new(ItemId::from_raw(2), "rake", ContainerId::from_raw(1));
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, json!({ "id": 2, "title": "rake", "container": 1 }));
    }

    #[test]
    fn events_carry_typed_ids() {
        let event = RepositoryEvent::ItemAdded {
            id: ItemId::from_raw(2),
            container: ContainerId::from_raw(1),
        };
        let value = serde_json::to_value(event).unwrap();
        assert_eq!(value, json!({ "event": "item_added", "id": 2, "container": 1 }));

        let updated = RepositoryEvent::Updated {
            id: AnyId::new(crate::KindTag::Item, 2),
        };
        assert_eq!(
            serde_json::to_value(updated).unwrap(),
            json!({ "event": "updated", "id": { "kind": "item", "raw": 2 } })
        );
    }

    #[test]
    fn allocator_config_round_trips() {
        let config = AllocatorConfig::bounded(NonZeroU32::new(8).unwrap());
        let value = serde_json::to_value(config).unwrap();
        assert_eq!(value, json!({ "max_attempts": 8 }));
        assert_eq!(
            serde_json::from_value::<AllocatorConfig>(json!({ "max_attempts": null })).unwrap(),
            AllocatorConfig::UNBOUNDED
        );
    }

    #[cfg(feature = "base32")]
    #[test]
    fn base32_adapter_rejects_garbage() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Label {
            #[serde(with = "crate::serde::as_base32")]
            item: ItemId,
        }

        let err = serde_json::from_value::<Label>(json!({ "item": "???" })).unwrap_err();
        assert!(err.to_string().contains("invalid length"));

        let label: Label = serde_json::from_value(json!({ "item": "000000000001a" })).unwrap();
        assert_eq!(label.item, ItemId::from_raw(42));
    }
}
