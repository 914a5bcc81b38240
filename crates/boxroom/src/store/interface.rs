use crate::{AnyId, KindTag, Record};

/// Outcome of [`Store::insert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The record was stored.
    Inserted,
    /// A record with the same key already exists; nothing was written.
    AlreadyExists,
}

/// The storage collaborator behind a [`crate::Repository`].
///
/// How records are physically kept is up to the implementation. The
/// repository relies only on this contract:
///
/// - `contains` reflects the store at call time.
/// - `insert` never overwrites: a key collision yields
///   [`InsertOutcome::AlreadyExists`] and leaves the stored record untouched.
/// - `all` returns records of one kind in insertion order.
pub trait Store {
    /// Error raised when the store cannot be accessed.
    type Error;

    /// Returns whether a record with `key` exists.
    ///
    /// # Errors
    /// Returns `Self::Error` if the store cannot be queried.
    fn contains(&self, key: AnyId) -> Result<bool, Self::Error>;

    /// Stores `record` under its own key unless that key is already taken.
    ///
    /// # Errors
    /// Returns `Self::Error` if the store cannot be written.
    fn insert(&mut self, record: Record) -> Result<InsertOutcome, Self::Error>;

    /// Replaces the stored record with the same key, returning `false` if there
    /// was none (in which case nothing is written).
    ///
    /// # Errors
    /// Returns `Self::Error` if the store cannot be written.
    fn update(&mut self, record: Record) -> Result<bool, Self::Error>;

    /// Fetches the record stored under `key`.
    ///
    /// # Errors
    /// Returns `Self::Error` if the store cannot be queried.
    fn get(&self, key: AnyId) -> Result<Option<Record>, Self::Error>;

    /// Fetches every record of `kind`, in insertion order.
    ///
    /// # Errors
    /// Returns `Self::Error` if the store cannot be queried.
    fn all(&self, kind: KindTag) -> Result<Vec<Record>, Self::Error>;
}
