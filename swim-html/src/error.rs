use thiserror::Error;

/// Errors raised by the markup crate
#[derive(Error, Debug)]
pub enum MarkupError {
    #[error("Failed to parse serializer options: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, MarkupError>;
