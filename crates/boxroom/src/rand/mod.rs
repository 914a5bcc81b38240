mod interface;
mod scripted;
#[cfg(feature = "std")]
mod seeded;
#[cfg(feature = "std")]
mod thread_random;

pub use interface::*;
pub use scripted::*;
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use seeded::*;
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use thread_random::*;
