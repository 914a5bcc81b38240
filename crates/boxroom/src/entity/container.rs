use crate::{ItemId, Kind, KindTag, TypedId};

/// Identifier of a [`Container`].
pub type ContainerId = TypedId<Container>;

/// A container ("box") that owns an ordered collection of items.
///
/// The id is fixed at construction; the title and the item collection are
/// mutable. A container is only ever built around an id that was already
/// allocated, there is no way for it to pick its own.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Container {
    id: ContainerId,
    title: String,
    items: Vec<ItemId>,
}

impl Kind for Container {
    const TAG: KindTag = KindTag::Container;
}

impl Container {
    /// Creates an empty container with an already allocated id.
    pub fn new(id: ContainerId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub const fn id(&self) -> ContainerId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// The owned items, in the order they were added.
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    /// Appends `item` to the collection.
    ///
    /// Returns `false` and leaves the collection unchanged if the item is
    /// already held. Neither the item's id nor this container's id changes.
    pub fn add_item(&mut self, item: ItemId) -> bool {
        if self.contains(item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Removes `item` from the collection, returning whether it was held.
    pub fn remove_item(&mut self, item: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|held| *held != item);
        self.items.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_keep_insertion_order_without_duplicates() {
        let mut container = Container::new(ContainerId::from_raw(1), "shed");
        assert!(container.add_item(ItemId::from_raw(30)));
        assert!(container.add_item(ItemId::from_raw(10)));
        assert!(!container.add_item(ItemId::from_raw(30)));
        assert!(container.add_item(ItemId::from_raw(20)));

        let raw: Vec<_> = container.items().iter().map(|id| id.to_raw()).collect();
        assert_eq!(raw, [30, 10, 20]);
        assert_eq!(container.id(), ContainerId::from_raw(1));
    }

    #[test]
    fn remove_item_reports_whether_it_was_held() {
        let mut container = Container::new(ContainerId::from_raw(1), "shed");
        container.add_item(ItemId::from_raw(5));

        assert!(container.remove_item(ItemId::from_raw(5)));
        assert!(!container.remove_item(ItemId::from_raw(5)));
        assert!(container.items().is_empty());
    }

    #[test]
    fn title_is_mutable() {
        let mut container = Container::new(ContainerId::from_raw(1), "shed");
        container.set_title("garage");
        assert_eq!(container.title(), "garage");
    }
}
