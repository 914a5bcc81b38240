mod event;
mod repo;

pub use event::*;
pub use repo::*;
