use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace, warn};

use crate::{
    DuplicatePolicy, Item, NodeId, Record, RootSentinel, TreeIndexError, TreeIndexOptions,
};

/// Read-only index over a flat sequence of records.
///
/// Records are kept once, in input order. The lookup maps refer to them by
/// position:
///
/// - `by_id`: id -> position of the record with that id.
/// - `children`: parent id -> positions of its children, in input order.
/// - `parents`: id -> parent id.
///
/// A parent id does not have to resolve to a record. The root sentinel and
/// dangling references only ever show up as keys of `children`.
#[derive(Debug, Clone)]
pub struct TreeIndex<R: Record> {
    records: Vec<R>,
    root: R::Id,
    by_id: HashMap<R::Id, usize>,
    children: IndexMap<R::Id, Vec<usize>>,
    parents: HashMap<R::Id, R::Id>,
}

impl<R> TreeIndex<R>
where
    R: Record,
    R::Id: RootSentinel,
{
    /// Build with the default root sentinel, rejecting duplicate ids.
    pub fn new(records: Vec<R>) -> Result<Self, TreeIndexError<R::Id>> {
        Self::with_options(records, TreeIndexOptions::default())
    }
}

impl TreeIndex<Item> {
    /// Parse a JSON array of items and build with default options.
    pub fn from_json_str(json: &str) -> Result<Self, TreeIndexError<NodeId>> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Self::new(items)
    }
}

impl<R: Record> TreeIndex<R> {
    #[tracing::instrument(skip_all, fields(records = records.len()))]
    pub fn with_options(
        records: Vec<R>,
        options: TreeIndexOptions<R::Id>,
    ) -> Result<Self, TreeIndexError<R::Id>> {
        let TreeIndexOptions { root, duplicates } = options;

        let mut by_id = HashMap::with_capacity(records.len());
        let mut children: IndexMap<R::Id, Vec<usize>> = IndexMap::new();
        let mut parents = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            let id = record.id();
            let parent = record.parent();

            if let Some(previous) = by_id.insert(id.clone(), position) {
                match duplicates {
                    DuplicatePolicy::Reject => {
                        return Err(TreeIndexError::DuplicateId { id: id.clone() });
                    }
                    DuplicatePolicy::LastWins => {
                        warn!(?id, previous, position, "Duplicate record id, last one wins");
                    }
                }
            }

            children.entry(parent.clone()).or_default().push(position);
            parents.insert(id.clone(), parent.clone());
        }

        debug!(parents = children.len(), "Built tree index");

        Ok(Self {
            records,
            root,
            by_id,
            children,
            parents,
        })
    }

    /// The root sentinel this index was built with.
    pub fn root(&self) -> &R::Id {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &R::Id) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    /// All records, in input order.
    pub fn get_all(&self) -> &[R] {
        &self.records
    }

    pub fn get_item(&self, id: &R::Id) -> Option<&R> {
        self.by_id.get(id).map(|&position| &self.records[position])
    }

    /// Records whose parent is `id`, in input order.
    ///
    /// An id without children and an unknown id both give an empty list.
    pub fn get_children(&self, id: &R::Id) -> Vec<&R> {
        self.child_positions(id)
            .iter()
            .map(|&position| &self.records[position])
            .collect()
    }

    /// Top-level records: the children of the root sentinel.
    pub fn get_roots(&self) -> Vec<&R> {
        self.get_children(&self.root)
    }

    /// The record of the direct parent of `id`, if it resolves.
    pub fn get_parent(&self, id: &R::Id) -> Option<&R> {
        let parent = self.parents.get(id)?;
        if *parent == self.root {
            return None;
        }
        self.get_item(parent)
    }

    /// Every descendant of `id`, excluding `id` itself, sorted by id.
    ///
    /// Collected in pre-order with an explicit stack, so depth is bounded by
    /// memory rather than the call stack. A record is collected at most once.
    pub fn get_all_children(&self, id: &R::Id) -> Vec<&R> {
        let mut seen: HashSet<usize> = HashSet::new();
        if let Some(&position) = self.by_id.get(id) {
            seen.insert(position);
        }

        let mut result = Vec::new();
        let mut stack: Vec<usize> = self.child_positions(id).iter().rev().copied().collect();

        while let Some(position) = stack.pop() {
            let record = &self.records[position];
            if !seen.insert(position) {
                warn!(id = ?record.id(), "Record reached twice while collecting descendants");
                continue;
            }
            result.push(record);
            stack.extend(self.child_positions(record.id()).iter().rev());
        }

        result.sort_by(|a, b| a.id().cmp(b.id()));
        trace!(?id, count = result.len(), "Collected descendants");
        result
    }

    /// The ancestor chain of `id`, starting with `id` itself.
    ///
    /// The walk stops before the root sentinel or at the first parent that
    /// does not resolve to a record. Unknown ids and the sentinel itself give
    /// an empty chain. Reaching the same id twice is a cycle.
    pub fn get_all_parents(&self, id: &R::Id) -> Result<Vec<&R>, TreeIndexError<R::Id>> {
        let mut result = Vec::new();
        let mut visited = HashSet::new();
        let mut current = id;

        while *current != self.root {
            let Some(record) = self.get_item(current) else {
                break;
            };
            if !visited.insert(current) {
                return Err(TreeIndexError::CycleDetected {
                    id: current.clone(),
                });
            }
            result.push(record);

            let Some(parent) = self.parents.get(current) else {
                break;
            };
            current = parent;
        }

        trace!(?id, count = result.len(), "Collected ancestors");
        Ok(result)
    }

    fn child_positions(&self, id: &R::Id) -> &[usize] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl<'a, R: Record> IntoIterator for &'a TreeIndex<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
