mod config;
mod id_allocator;

pub use config::*;
pub use id_allocator::*;
