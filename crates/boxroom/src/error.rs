use crate::{AnyId, KindTag};

/// A result type whose error defaults to the infallible storage case.
///
/// Storage-backed operations use `Result<T, E>` where `E` is the storage
/// collaborator's own error type.
pub type Result<T, E = core::convert::Infallible> = core::result::Result<T, Error<E>>;

/// All errors that `boxroom` can produce.
///
/// The generic parameter `E` is the error type of whatever answers existence
/// queries or stores records. With an in-memory store this is
/// [`Infallible`](core::convert::Infallible) and only the allocation ceiling
/// and missing-record variants can surface.
///
/// Inserting a record whose id is already stored is *not* represented here.
/// That is a contract violation and panics; see [`crate::Repository::add`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error<E = core::convert::Infallible> {
    /// The storage collaborator failed while answering a query or applying a
    /// write. An allocation attempt that hits this is aborted, never treated as
    /// "not taken".
    #[error("store access failed: {0}")]
    Store(E),

    /// Every candidate drawn within the configured attempt ceiling was already
    /// taken.
    ///
    /// Only returned when [`crate::AllocatorConfig::max_attempts`] is set.
    #[error("no free {kind} id found after {attempts} attempts")]
    AllocationExhausted {
        /// The entity kind being allocated for.
        kind: KindTag,
        /// The number of candidates drawn and rejected.
        attempts: u32,
    },

    /// The referenced record does not exist in the store.
    #[error("{0} not found")]
    NotFound(AnyId),
}

impl<E> Error<E> {
    /// Returns `true` if this is a storage failure.
    pub const fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}
