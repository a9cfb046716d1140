use thiserror::Error;

#[derive(Debug, Error)]
pub enum AvlError {
    #[error("tree is empty")]
    EmptyTree,
    #[error("line {line}: invalid weight {text:?}")]
    Parse { line: usize, text: String },
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
