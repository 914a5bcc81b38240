mod crockford;
mod error;
mod interface;

pub use error::*;
