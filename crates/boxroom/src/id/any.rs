use crate::{Kind, KindTag, RawId, TypedId};
use core::fmt;

/// A kind-erased identifier: the kind as a runtime tag plus the raw value.
///
/// This is the key a [`crate::Store`] indexes records by. Two `AnyId`s with
/// equal raw values but different kinds are different keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnyId {
    kind: KindTag,
    raw: RawId,
}

impl AnyId {
    /// Creates a key for a record of `kind` with the given raw value.
    pub const fn new(kind: KindTag, raw: RawId) -> Self {
        Self { kind, raw }
    }

    /// Returns the runtime kind tag.
    pub const fn kind(self) -> KindTag {
        self.kind
    }

    /// Returns the raw value.
    pub const fn raw(self) -> RawId {
        self.raw
    }

    /// Recovers the typed id if this key names a `K`.
    pub fn downcast<K: Kind>(self) -> Option<TypedId<K>> {
        (self.kind == K::TAG).then(|| TypedId::from_raw(self.raw))
    }
}

impl fmt::Display for AnyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.raw)
    }
}
