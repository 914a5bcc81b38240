use core::num::NonZeroU32;

/// Tuning for an [`crate::IdAllocator`].
///
/// The default is unbounded: the allocator keeps drawing candidates until one
/// is free. Termination then rests on used ids being sparse in the 64-bit
/// space; a saturated store would make allocation spin forever. Set
/// `max_attempts` to turn that case into
/// [`crate::Error::AllocationExhausted`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocatorConfig {
    /// Maximum number of candidates to draw per allocation, or `None` for no
    /// limit.
    pub max_attempts: Option<NonZeroU32>,
}

impl AllocatorConfig {
    /// Never give up.
    pub const UNBOUNDED: Self = Self { max_attempts: None };

    /// Give up after `max_attempts` taken candidates in a row.
    pub const fn bounded(max_attempts: NonZeroU32) -> Self {
        Self {
            max_attempts: Some(max_attempts),
        }
    }

    /// Returns `true` if `attempts` draws have used up the ceiling.
    pub(crate) fn exhausted(&self, attempts: u32) -> bool {
        self.max_attempts.is_some_and(|max| attempts >= max.get())
    }
}
