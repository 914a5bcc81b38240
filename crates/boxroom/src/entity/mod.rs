mod container;
mod item;
mod record;

pub use container::*;
pub use item::*;
pub use record::*;
