use thiserror::Error;

/// Errors raised while walking a component tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwimError {
    /// The operation has no defined meaning for this kind of component.
    ///
    /// This is distinct from a missing value: a preference read that finds
    /// no writer succeeds with the key's default.
    #[error("{operation} is not supported through an {component}")]
    Unsupported {
        operation: &'static str,
        component: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, SwimError>;
