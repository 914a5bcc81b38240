mod any;
mod kind;
mod typed;

pub use any::*;
pub use kind::*;
pub use typed::*;

/// An unwrapped, fixed-width identifier value.
///
/// A raw id carries no meaning beyond "a 64-bit value not yet interpreted as
/// naming an entity of any particular kind". Wrap it in a [`TypedId`] to give
/// it one.
pub type RawId = u64;
