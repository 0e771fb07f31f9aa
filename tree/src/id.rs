use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// The parent value that marks a top-level record.
pub const ROOT: &str = "root";

/// Identifier of a record: either an integer or a string.
///
/// The order is total across both kinds. Every integer sorts before every
/// string, integers compare numerically and strings compare by bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Int(i64),
    Str(String),
}

impl NodeId {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            NodeId::Int(value) => Some(*value),
            NodeId::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            NodeId::Int(_) => None,
            NodeId::Str(value) => Some(value),
        }
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(value) => write!(f, "{}", value),
            NodeId::Str(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for NodeId {
    fn from(value: i64) -> Self {
        NodeId::Int(value)
    }
}

impl From<i32> for NodeId {
    fn from(value: i32) -> Self {
        NodeId::Int(i64::from(value))
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        NodeId::Str(value.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        NodeId::Str(value)
    }
}

/// Id types with a default root sentinel.
pub trait RootSentinel {
    fn root() -> Self;
}

impl RootSentinel for NodeId {
    fn root() -> Self {
        NodeId::from(ROOT)
    }
}

impl RootSentinel for String {
    fn root() -> Self {
        ROOT.to_owned()
    }
}
