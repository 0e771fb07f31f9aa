//! Text rendering of the trees held in an [`arbor_tree::TreeIndex`].

mod label;
mod tree;

pub use crate::label::*;
pub use crate::tree::*;
