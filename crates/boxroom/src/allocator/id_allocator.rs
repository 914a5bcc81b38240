use crate::{AllocatorConfig, Error, ExistenceOracle, IdentifierSource, Kind, Result, TypedId};
use core::fmt;
use core::marker::PhantomData;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Allocates ids of kind `K` that are unused at the moment they are checked.
///
/// The allocator draws a candidate from its [`IdentifierSource`], asks an
/// [`ExistenceOracle`] whether it is taken, and repeats until a free one turns
/// up. It keeps no state of its own between calls and never remembers earlier
/// candidates; build it once and reuse it.
///
/// The free answer only holds at check time. Nothing stops a second allocation
/// from picking the same candidate before the first is stored, so callers that
/// allocate concurrently must hold a per-kind lock across "allocate, then
/// insert".
///
/// ## See Also
/// - [`crate::Repository`], which owns one allocator per kind and supplies a
///   store-backed oracle.
///
/// # Example
/// ```
/// use boxroom::{Container, ContainerId, IdAllocator, ScriptedSource};
/// use std::collections::HashSet;
///
/// let taken: HashSet<u64> = [1234].into_iter().collect();
/// let allocator = IdAllocator::<Container, _>::new(ScriptedSource::new([1234, 5678]));
///
/// let id = allocator.next_id(&taken);
/// assert_eq!(id, ContainerId::from_raw(5678));
/// ```
pub struct IdAllocator<K, R>
where
    K: Kind,
    R: IdentifierSource,
{
    source: R,
    config: AllocatorConfig,
    _kind: PhantomData<fn() -> K>,
}

impl<K, R> IdAllocator<K, R>
where
    K: Kind,
    R: IdentifierSource,
{
    /// Creates an unbounded allocator drawing candidates from `source`.
    pub const fn new(source: R) -> Self {
        Self::with_config(source, AllocatorConfig::UNBOUNDED)
    }

    /// Creates an allocator with an explicit [`AllocatorConfig`].
    pub const fn with_config(source: R, config: AllocatorConfig) -> Self {
        Self {
            source,
            config,
            _kind: PhantomData,
        }
    }

    /// The attempt ceiling this allocator applies.
    pub const fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// The source candidates are drawn from.
    pub const fn source(&self) -> &R {
        &self.source
    }

    /// Allocates an id that `oracle` reports as free.
    ///
    /// Internally calls [`Self::try_next_id`] and unwraps the result. Prefer
    /// the fallible version when the oracle can fail or a ceiling is set.
    ///
    /// # Panics
    /// Panics if the oracle fails or the configured attempt ceiling is reached.
    pub fn next_id<O>(&self, oracle: &O) -> TypedId<K>
    where
        O: ExistenceOracle,
        O::Error: fmt::Display,
    {
        match self.try_next_id(oracle) {
            Ok(id) => id,
            Err(e) => panic!("{} allocation failed: {e}", K::TAG),
        }
    }

    /// Allocates an id that `oracle` reports as free, with fallible error
    /// handling.
    ///
    /// Never returns a candidate the oracle reported as taken. Each draw is
    /// checked exactly once, so for a script of `k` taken values followed by a
    /// free one the oracle is consulted `k + 1` times.
    ///
    /// # Errors
    /// - [`Error::Store`] if the oracle fails; the attempt is abandoned rather
    ///   than treating the candidate as free.
    /// - [`Error::AllocationExhausted`] if a ceiling is configured and every
    ///   candidate within it was taken.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self, oracle), fields(kind = K::TAG.as_str())))]
    pub fn try_next_id<O>(&self, oracle: &O) -> Result<TypedId<K>, O::Error>
    where
        O: ExistenceOracle,
    {
        let mut attempts: u32 = 0;
        loop {
            let candidate = self.source.generate();
            attempts = attempts.saturating_add(1);
            if !oracle.is_taken(candidate).map_err(Error::Store)? {
                return Ok(TypedId::from_raw(candidate));
            }

            #[cfg(feature = "tracing")]
            tracing::debug!(candidate, attempts, "candidate already taken");

            if self.config.exhausted(attempts) {
                #[cfg(feature = "tracing")]
                tracing::warn!(attempts, "giving up on {} allocation", K::TAG);
                return Err(Error::AllocationExhausted {
                    kind: K::TAG,
                    attempts,
                });
            }
        }
    }
}

impl<K, R> Clone for IdAllocator<K, R>
where
    K: Kind,
    R: IdentifierSource + Clone,
{
    fn clone(&self) -> Self {
        Self::with_config(self.source.clone(), self.config)
    }
}

impl<K, R> fmt::Debug for IdAllocator<K, R>
where
    K: Kind,
    R: IdentifierSource + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdAllocator")
            .field("kind", &K::TAG)
            .field("source", &self.source)
            .field("config", &self.config)
            .finish()
    }
}
