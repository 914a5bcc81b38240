use crate::{ContainerId, Kind, KindTag, TypedId};

/// Identifier of an [`Item`].
pub type ItemId = TypedId<Item>;

/// An item held by a container.
///
/// `container` is a back-reference to the owner's id, not an ownership edge:
/// the container's item collection is what owns the relation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    id: ItemId,
    title: String,
    container: ContainerId,
}

impl Kind for Item {
    const TAG: KindTag = KindTag::Item;
}

impl Item {
    /// Creates an item with an already allocated id, held by `container`.
    pub fn new(id: ItemId, title: impl Into<String>, container: ContainerId) -> Self {
        Self {
            id,
            title: title.into(),
            container,
        }
    }

    pub const fn id(&self) -> ItemId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Id of the container holding this item.
    pub const fn container(&self) -> ContainerId {
        self.container
    }
}
