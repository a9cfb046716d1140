//! Engine configuration.
//!
//! ```toml
//! accept_duplicates = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AvlError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvlConfig {
    /// Route equal weights into the right subtree instead of rejecting them.
    pub accept_duplicates: bool,
}

impl AvlConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, AvlError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AvlError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
