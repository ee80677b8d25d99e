//! Error types for the min stack.

use std::fmt;

/// A stack operation that requires at least one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Removing the top element.
    Pop,

    /// Reading the top element.
    Top,

    /// Reading the current minimum.
    GetMin,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Pop => write!(f, "pop"),
            Operation::Top => write!(f, "top"),
            Operation::GetMin => write!(f, "get_min"),
        }
    }
}

/// Errors that can occur when operating on a [`MinStack`](crate::MinStack).
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The operation needs an element but the stack is empty.
    #[error("Empty stack: cannot {operation} an empty stack")]
    EmptyStack {
        /// Operation that was rejected
        operation: Operation,
    },

    /// A checked push would grow the stack past its configured bound.
    #[error("Depth exceeded: stack is bounded to {max_depth} elements")]
    DepthExceeded {
        /// Configured maximum depth
        max_depth: usize,
    },

    /// Configuration could not be parsed or is inconsistent
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for stack operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an empty-stack error for the given operation.
    pub fn empty_stack(operation: Operation) -> Self {
        Error::EmptyStack { operation }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns `true` if this error was caused by reading an empty stack.
    pub fn is_empty_stack(&self) -> bool {
        matches!(self, Error::EmptyStack { .. })
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::config(err.to_string())
    }
}
