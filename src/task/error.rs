use thiserror::Error;

/// Errors raised by the task core: parsers, constructors and the sort engine.
///
/// Every variant carries a message meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// Malformed user date, canonical date, datafile line or kind letter.
    #[error("{0}")]
    Parse(String),

    /// Unsupported sort key or order, bad description, bad task number.
    #[error("{0}")]
    InvalidArgument(String),

    /// A task was built in an internally inconsistent state.
    #[error("{0}")]
    State(String),
}

impl TaskError {
    pub(crate) fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
