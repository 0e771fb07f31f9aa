use arbor_tree::{Record, TreeIndex};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt::Display, vec};
use termtree::Tree as DisplayTree;

use crate::Label;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewTree {
    Branch {
        label: String,
        children: Vec<ViewTree>,
    },
    Leaf {
        label: String,
    },
}

impl ViewTree {
    pub fn label(&self) -> &str {
        match self {
            ViewTree::Branch { label, .. } => label,
            ViewTree::Leaf { label } => label,
        }
    }

    pub fn children(&self) -> &[ViewTree] {
        match self {
            ViewTree::Branch { children, .. } => children,
            ViewTree::Leaf { .. } => &[],
        }
    }
}

impl Display for ViewTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        DisplayTree::<String>::from(self.clone()).fmt(f)
    }
}

impl From<ViewTree> for DisplayTree<String> {
    fn from(value: ViewTree) -> Self {
        match value {
            ViewTree::Branch { label, children } => DisplayTree::new(label).with_leaves(children),
            ViewTree::Leaf { label } => DisplayTree::new(label),
        }
    }
}

struct Frame<'a, R> {
    label: String,
    pending: vec::IntoIter<&'a R>,
    children: Vec<ViewTree>,
}

impl<'a, R> Frame<'a, R>
where
    R: Record + Label,
{
    fn new(index: &'a TreeIndex<R>, record: &'a R) -> Self {
        Self {
            label: record.label(),
            pending: index.get_children(record.id()).into_iter(),
            children: Vec::new(),
        }
    }

    fn finish(self) -> ViewTree {
        if self.children.is_empty() {
            ViewTree::Leaf { label: self.label }
        } else {
            ViewTree::Branch {
                label: self.label,
                children: self.children,
            }
        }
    }
}

/// The tree rooted at record `id`, children in input order.
///
/// Returns `None` when `id` is not in the index. A record already placed in
/// the view is not placed again, so cyclic parent links still terminate.
pub fn view_subtree<R>(index: &TreeIndex<R>, id: &R::Id) -> Option<ViewTree>
where
    R: Record + Label,
{
    let record = index.get_item(id)?;
    let mut placed = HashSet::from([record.id()]);
    let mut stack = vec![Frame::new(index, record)];

    loop {
        let frame = stack.last_mut()?;
        if let Some(child) = frame.pending.next() {
            if placed.insert(child.id()) {
                stack.push(Frame::new(index, child));
            }
            continue;
        }

        let tree = stack.pop()?.finish();
        match stack.last_mut() {
            Some(parent) => parent.children.push(tree),
            None => return Some(tree),
        }
    }
}

/// One view per top-level record of the index.
pub fn view_roots<R>(index: &TreeIndex<R>) -> Vec<ViewTree>
where
    R: Record + Label,
{
    index
        .get_roots()
        .into_iter()
        .filter_map(|record| view_subtree(index, record.id()))
        .collect()
}
