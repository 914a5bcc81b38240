use crate::RawId;

/// A source of candidate identifiers.
///
/// This abstraction lets you plug in a real random source or a scripted one in
/// tests without changing the allocator or the repository.
///
/// Sources are infallible: there is no way to report that a value could not be
/// produced. Any state a source needs (an RNG, a script cursor) lives behind
/// `&self`.
///
/// # Example
/// ```
/// use boxroom::IdentifierSource;
///
/// struct FixedSource;
/// impl IdentifierSource for FixedSource {
///     fn generate(&self) -> u64 {
///         1234
///     }
/// }
///
/// assert_eq!(FixedSource.generate(), 1234);
/// ```
pub trait IdentifierSource {
    /// Returns the next candidate raw id.
    fn generate(&self) -> RawId;
}

impl<F> IdentifierSource for F
where
    F: Fn() -> RawId,
{
    fn generate(&self) -> RawId {
        self()
    }
}
