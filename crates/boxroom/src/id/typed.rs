use crate::{AnyId, Kind, KindTag, RawId};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

/// An identifier tagged with the entity kind it names.
///
/// `TypedId<K>` is a zero-cost wrapper over a [`RawId`]. Two typed ids are
/// equal only when both their kinds and their raw values match, and since the
/// kind is part of the type, ids of different kinds cannot even be compared:
///
/// ```compile_fail
/// use boxroom::{ContainerId, ItemId};
///
/// let container = ContainerId::from_raw(7);
/// let item = ItemId::from_raw(7);
/// assert!(container != item);
/// ```
///
/// Passing an id of the wrong kind is likewise a type error:
///
/// ```compile_fail
/// use boxroom::{ContainerId, ItemId};
///
/// fn open(_id: ContainerId) {}
/// open(ItemId::from_raw(7));
/// ```
///
/// Use [`TypedId::erase`] when a kind-agnostic key is needed.
pub struct TypedId<K: Kind> {
    raw: RawId,
    _kind: PhantomData<fn() -> K>,
}

impl<K: Kind> TypedId<K> {
    /// Wraps a raw value as an id of kind `K`.
    ///
    /// Outside of tests, ids should come from an allocator (see
    /// [`crate::Repository::next_container_id`]); this constructor does not
    /// check the store.
    pub const fn from_raw(raw: RawId) -> Self {
        Self {
            raw,
            _kind: PhantomData,
        }
    }

    /// Returns the underlying raw value.
    pub const fn to_raw(self) -> RawId {
        self.raw
    }

    /// Returns the runtime tag of this id's kind.
    pub const fn kind(self) -> KindTag {
        K::TAG
    }

    /// Drops the type-level kind, keeping it as a runtime tag.
    pub const fn erase(self) -> AnyId {
        AnyId::new(K::TAG, self.raw)
    }
}

// Manual impls so `K` itself needs none of these traits.

impl<K: Kind> Clone for TypedId<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Kind> Copy for TypedId<K> {}

impl<K: Kind> PartialEq for TypedId<K> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<K: Kind> Eq for TypedId<K> {}

impl<K: Kind> PartialOrd for TypedId<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Kind> Ord for TypedId<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<K: Kind> Hash for TypedId<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<K: Kind> fmt::Debug for TypedId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(K::TAG.id_name())
            .field(&format_args!("{} (0x{:x})", self.raw, self.raw))
            .finish()
    }
}

impl<K: Kind> fmt::Display for TypedId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.raw, f)
    }
}

impl<K: Kind> From<TypedId<K>> for AnyId {
    fn from(id: TypedId<K>) -> Self {
        id.erase()
    }
}
