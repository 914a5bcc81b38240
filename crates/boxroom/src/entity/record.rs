use crate::{AnyId, Container, Item, Kind, KindTag, TypedId};

/// A stored record: one entity of any kind.
///
/// This is the unit a [`crate::Store`] persists. The [`Entity`] trait converts
/// between records and the concrete entity types.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Record {
    Container(Container),
    Item(Item),
}

impl Record {
    /// The store key of this record.
    pub const fn key(&self) -> AnyId {
        match self {
            Self::Container(container) => container.id().erase(),
            Self::Item(item) => item.id().erase(),
        }
    }

    /// The kind of entity this record holds.
    pub const fn kind(&self) -> KindTag {
        match self {
            Self::Container(_) => KindTag::Container,
            Self::Item(_) => KindTag::Item,
        }
    }
}

impl From<Container> for Record {
    fn from(container: Container) -> Self {
        Self::Container(container)
    }
}

impl From<Item> for Record {
    fn from(item: Item) -> Self {
        Self::Item(item)
    }
}

/// A domain entity that can be stored as a [`Record`].
pub trait Entity: Kind + Clone + Into<Record> {
    /// The entity's assigned id.
    fn id(&self) -> TypedId<Self>;

    /// Extracts the entity if `record` is of this kind.
    fn from_record(record: Record) -> Option<Self>;
}

impl Entity for Container {
    fn id(&self) -> TypedId<Self> {
        Container::id(self)
    }

    fn from_record(record: Record) -> Option<Self> {
        match record {
            Record::Container(container) => Some(container),
            Record::Item(_) => None,
        }
    }
}

impl Entity for Item {
    fn id(&self) -> TypedId<Self> {
        Item::id(self)
    }

    fn from_record(record: Record) -> Option<Self> {
        match record {
            Record::Item(item) => Some(item),
            Record::Container(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ContainerId, ItemId};

    #[test]
    fn key_and_kind_follow_the_held_entity() {
        let shed = Record::from(Container::new(ContainerId::from_raw(5), "shed"));
        let rake = Record::from(Item::new(ItemId::from_raw(5), "rake", ContainerId::from_raw(5)));

        assert_eq!(shed.kind(), KindTag::Container);
        assert_eq!(rake.kind(), KindTag::Item);
        assert_eq!(shed.key(), AnyId::new(KindTag::Container, 5));
        assert_ne!(shed.key(), rake.key());
    }

    #[test]
    fn from_record_rejects_other_kinds() {
        let rake = Item::new(ItemId::from_raw(1), "rake", ContainerId::from_raw(2));
        let record = Record::from(rake.clone());

        assert_eq!(Container::from_record(record.clone()), None);
        assert_eq!(Item::from_record(record), Some(rake));
    }
}
