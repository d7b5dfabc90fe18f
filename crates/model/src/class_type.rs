use serde::{Deserialize, Serialize};

/// Entry of the `class_types` reference collection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClassType {
    #[serde(rename = "type")]
    pub label: String,
}

impl ClassType {
    pub fn new(label: impl Into<String>) -> Self {
        ClassType {
            label: label.into(),
        }
    }
}
