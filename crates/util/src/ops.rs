use serde::{Deserialize, Serialize};

/// One step of a randomized tree test.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    Insert { weight: i64, id: Option<String> },
    Delete { weight: i64 },
    DeleteWithId { weight: i64, id: String },
}

impl Op {
    pub fn weight(&self) -> i64 {
        match self {
            Op::Insert { weight, .. } | Op::Delete { weight } | Op::DeleteWithId { weight, .. } => {
                *weight
            }
        }
    }
}

/// Shape of a generated script.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScriptConfig {
    pub len: usize,
    /// Inclusive weight bounds. A narrow range produces many duplicates.
    pub weight_range: (i64, i64),
    pub delete_probability: f64,
    /// Delete live entries by `(weight, id)` instead of by weight.
    pub by_id: bool,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            len: 100,
            weight_range: (-1000, 1000),
            delete_probability: 0.35,
            by_id: true,
        }
    }
}

/// Serializes a script for attaching to a failure report.
pub fn to_json(ops: &[Op]) -> String {
    serde_json::to_string(ops).unwrap_or_default()
}

pub fn from_json(text: &str) -> Result<Vec<Op>, serde_json::Error> {
    serde_json::from_str(text)
}
