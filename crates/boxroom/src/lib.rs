#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

mod allocator;
#[cfg(feature = "base32")]
mod base32;
mod entity;
mod error;
mod id;
mod oracle;
mod rand;
mod repository;
#[cfg(feature = "serde")]
pub mod serde;
mod store;

pub use crate::allocator::*;
#[cfg_attr(docsrs, doc(cfg(feature = "base32")))]
#[cfg(feature = "base32")]
pub use crate::base32::*;
pub use crate::entity::*;
pub use crate::error::*;
pub use crate::id::*;
pub use crate::oracle::*;
pub use crate::rand::*;
pub use crate::repository::*;
pub use crate::store::*;
