use crate::{AnyId, Kind, RawId, Store};
use core::convert::Infallible;
use core::marker::PhantomData;
use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

/// Answers whether a candidate raw id is already assigned to a stored record
/// of one specific entity kind.
///
/// The answer reflects the store at call time only; nothing guarantees it is
/// still true once the call returns. Asking twice about the same candidate
/// with no store change in between must give the same answer.
///
/// Failing to query the store is reported through [`Self::Error`] and aborts
/// the allocation; it is never treated as "not taken".
///
/// # Example
/// ```
/// use boxroom::ExistenceOracle;
/// use std::collections::HashSet;
///
/// let taken: HashSet<u64> = [1234].into_iter().collect();
/// assert_eq!(taken.is_taken(1234), Ok(true));
/// assert_eq!(taken.is_taken(5678), Ok(false));
/// ```
pub trait ExistenceOracle {
    /// Error raised when the backing store cannot be queried.
    type Error;

    /// Returns whether `candidate` is already in use.
    ///
    /// # Errors
    /// Returns `Self::Error` if the backing store cannot be queried.
    fn is_taken(&self, candidate: RawId) -> Result<bool, Self::Error>;
}

impl<F, E> ExistenceOracle for F
where
    F: Fn(RawId) -> Result<bool, E>,
{
    type Error = E;

    fn is_taken(&self, candidate: RawId) -> Result<bool, E> {
        self(candidate)
    }
}

impl<S: BuildHasher> ExistenceOracle for HashSet<RawId, S> {
    type Error = Infallible;

    fn is_taken(&self, candidate: RawId) -> Result<bool, Infallible> {
        Ok(self.contains(&candidate))
    }
}

impl ExistenceOracle for BTreeSet<RawId> {
    type Error = Infallible;

    fn is_taken(&self, candidate: RawId) -> Result<bool, Infallible> {
        Ok(self.contains(&candidate))
    }
}

/// The oracle a [`crate::Repository`] hands its allocators: asks a [`Store`]
/// whether a record of kind `K` with the candidate raw id exists.
///
/// This is the only place the "kind + raw id" store query is phrased, so the
/// allocator never depends on the storage engine.
pub struct StoreOracle<'a, S, K> {
    store: &'a S,
    _kind: PhantomData<fn() -> K>,
}

impl<'a, S, K> StoreOracle<'a, S, K>
where
    S: Store,
    K: Kind,
{
    /// Creates an oracle over `store` for records of kind `K`.
    pub const fn new(store: &'a S) -> Self {
        Self {
            store,
            _kind: PhantomData,
        }
    }
}

impl<S, K> ExistenceOracle for StoreOracle<'_, S, K>
where
    S: Store,
    K: Kind,
{
    type Error = S::Error;

    fn is_taken(&self, candidate: RawId) -> Result<bool, S::Error> {
        self.store.contains(AnyId::new(K::TAG, candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Container, ContainerId, Item, ItemId, MemoryStore, Repository, ScriptedSource};

    #[test]
    fn repeated_queries_against_an_unchanged_store_agree() {
        let mut repo = Repository::new(MemoryStore::new(), ScriptedSource::new([1234]));
        let id = repo.next_container_id().unwrap();
        repo.add(Container::new(id, "tools")).unwrap();

        let oracle = StoreOracle::<_, Container>::new(repo.store());
        for candidate in [1234, 5678] {
            let first = oracle.is_taken(candidate).unwrap();
            let second = oracle.is_taken(candidate).unwrap();
            assert_eq!(first, second);
        }
        assert_eq!(oracle.is_taken(1234), Ok(true));
    }

    #[test]
    fn store_oracle_only_sees_its_own_kind() {
        let mut store = MemoryStore::new();
        let container = ContainerId::from_raw(1);
        store.insert(Container::new(container, "a").into()).unwrap();
        store
            .insert(crate::Item::new(ItemId::from_raw(2), "b", container).into())
            .unwrap();

        let containers = StoreOracle::<_, Container>::new(&store);
        let items = StoreOracle::<_, Item>::new(&store);

        assert_eq!(containers.is_taken(1), Ok(true));
        assert_eq!(containers.is_taken(2), Ok(false));
        assert_eq!(items.is_taken(1), Ok(false));
        assert_eq!(items.is_taken(2), Ok(true));
    }

    #[test]
    fn closures_are_oracles() {
        let oracle = |candidate: RawId| -> Result<bool, &'static str> {
            if candidate == 0 {
                Err("offline")
            } else {
                Ok(candidate % 2 == 0)
            }
        };
        assert_eq!(oracle.is_taken(4), Ok(true));
        assert_eq!(oracle.is_taken(3), Ok(false));
        assert_eq!(oracle.is_taken(0), Err("offline"));
    }
}
