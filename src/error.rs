//! Error types for the smoke-test harness

use thiserror::Error;

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a mount attempt
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// The render attempt raised an error
    #[error("Render attempt raised: {message}")]
    Render {
        /// Message as produced by the component or collaborator, verbatim
        message: String,
        /// Stack text when the raiser provided one
        stack: Option<String>,
    },
}

impl Error {
    /// Build a render error from a bare message
    pub fn render(message: impl Into<String>) -> Self {
        Error::Render {
            message: message.into(),
            stack: None,
        }
    }

    /// Build a render error carrying a stack trace
    pub fn render_with_stack(message: impl Into<String>, stack: impl Into<String>) -> Self {
        Error::Render {
            message: message.into(),
            stack: Some(stack.into()),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Error::Render { message, .. } => message,
        }
    }

    pub fn stack(&self) -> Option<&str> {
        match self {
            Error::Render { stack, .. } => stack.as_deref(),
        }
    }
}
