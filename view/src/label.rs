use arbor_tree::Item;
use serde_json::Value;

/// One-line label for a record in a rendered tree.
pub trait Label {
    fn label(&self) -> String;
}

impl Label for Item {
    fn label(&self) -> String {
        match self.field("name").and_then(Value::as_str) {
            Some(name) => format!("{} {}", self.id, name),
            None => self.id.to_string(),
        }
    }
}
