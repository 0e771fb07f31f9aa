use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fmt::Debug, hash::Hash};

use crate::NodeId;

/// A node of the tree, naming itself and its parent.
pub trait Record {
    type Id: Clone + Eq + Hash + Ord + Debug;

    fn id(&self) -> &Self::Id;

    /// The parent id, or the root sentinel for a top-level record.
    fn parent(&self) -> &Self::Id;
}

/// Stock record: an id, a parent, and any other fields carried opaquely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: NodeId,
    pub parent: NodeId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    pub fn new(id: impl Into<NodeId>, parent: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            parent: parent.into(),
            extra: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

impl Record for Item {
    type Id = NodeId;

    fn id(&self) -> &NodeId {
        &self.id
    }

    fn parent(&self) -> &NodeId {
        &self.parent
    }
}
