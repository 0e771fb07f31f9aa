use serde::{Deserialize, Serialize};

use crate::RootSentinel;

/// What construction does when two records share an id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Fail with [`TreeIndexError::DuplicateId`](crate::TreeIndexError::DuplicateId).
    #[default]
    Reject,
    /// Lookup by id sees the last record, while every record stays listed
    /// under its own parent.
    LastWins,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "Id: Deserialize<'de> + RootSentinel"))]
pub struct TreeIndexOptions<Id> {
    #[serde(default = "RootSentinel::root")]
    pub root: Id,
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
}

impl<Id> TreeIndexOptions<Id> {
    pub fn new(root: Id) -> Self {
        Self {
            root,
            duplicates: DuplicatePolicy::default(),
        }
    }

    pub fn root(mut self, root: Id) -> Self {
        self.root = root;
        self
    }

    pub fn duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }
}

impl<Id> Default for TreeIndexOptions<Id>
where
    Id: RootSentinel,
{
    fn default() -> Self {
        Self::new(Id::root())
    }
}
