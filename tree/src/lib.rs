//! Read-only index over a flat collection of parent-referencing records.
//!
//! A [`TreeIndex`] is built once from a sequence of [`Record`]s and answers
//! structural queries against the tree those records imply: direct children,
//! whole subtrees, and the chain of ancestors up to the root sentinel.

mod error;
mod id;
mod index;
mod options;
mod record;

pub use crate::error::*;
pub use crate::id::*;
pub use crate::index::*;
pub use crate::options::*;
pub use crate::record::*;
