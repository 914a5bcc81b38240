use crate::{IdentifierSource, RawId};
use core::cell::Cell;

/// A deterministic [`IdentifierSource`] that replays a fixed script.
///
/// Each call returns the next scripted value. Once the script is exhausted the
/// last value is returned forever. The number of calls made so far is tracked,
/// so tests can assert how many candidates an allocation consumed.
///
/// # Example
/// ```
/// use boxroom::{IdentifierSource, ScriptedSource};
///
/// let source = ScriptedSource::new([1234, 5678]);
/// assert_eq!(source.generate(), 1234);
/// assert_eq!(source.generate(), 5678);
/// assert_eq!(source.generate(), 5678);
/// assert_eq!(source.calls(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    values: Vec<RawId>,
    calls: Cell<usize>,
}

impl ScriptedSource {
    /// Creates a source that replays `values` in order.
    ///
    /// # Panics
    /// Panics if `values` is empty: there would be no value to hold.
    pub fn new(values: impl IntoIterator<Item = RawId>) -> Self {
        let values: Vec<RawId> = values.into_iter().collect();
        assert!(
            !values.is_empty(),
            "a scripted source needs at least one value"
        );
        Self {
            values,
            calls: Cell::new(0),
        }
    }

    /// Number of values handed out so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Returns `true` once every scripted value has been handed out.
    pub fn is_exhausted(&self) -> bool {
        self.calls.get() >= self.values.len()
    }
}

impl IdentifierSource for ScriptedSource {
    fn generate(&self) -> RawId {
        let call = self.calls.get();
        self.calls.set(call + 1);
        let last = self.values.len() - 1;
        self.values[call.min(last)]
    }
}
