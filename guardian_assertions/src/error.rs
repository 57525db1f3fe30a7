use std::borrow::Cow;

use thiserror::Error;

/// Message carried by the error from [`Assertions::new`](crate::Assertions::new).
pub const NOT_INSTANTIABLE_MESSAGE: &str = "This class can not be instantiated";

/// The standard error raised by a failed assertion.
///
/// Carries the caller's message when one was supplied and is otherwise
/// empty. `Display` prints the message verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct AssertionError {
    /// Empty when no message was supplied.
    message: Cow<'static, str>,
}

impl AssertionError {
    /// An error with no message.
    pub const fn new() -> Self {
        Self {
            message: Cow::Borrowed(""),
        }
    }

    /// An error carrying `message`.
    pub fn with_message(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message, or `""` when none was supplied.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether a non-empty message was supplied.
    pub fn has_message(&self) -> bool {
        !self.message.is_empty()
    }
}
