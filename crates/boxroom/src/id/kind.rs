use core::fmt;

/// The runtime tag of an entity kind.
///
/// Used as half of a store key ([`crate::AnyId`]) and in diagnostics. The
/// type-level counterpart is the [`Kind`] trait.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum KindTag {
    /// A container ("box") that owns an ordered collection of items.
    Container,
    /// An item held by exactly one container.
    Item,
}

impl KindTag {
    /// Lowercase name used in log output and error messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Item => "item",
        }
    }

    /// Name of the typed id alias for this kind.
    pub const fn id_name(self) -> &'static str {
        match self {
            Self::Container => "ContainerId",
            Self::Item => "ItemId",
        }
    }
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type-level entity kind.
///
/// Implemented by the entity types themselves, so `TypedId<Container>` and
/// `TypedId<Item>` are distinct types that never unify.
pub trait Kind: 'static {
    /// The runtime tag for this kind.
    const TAG: KindTag;
}
