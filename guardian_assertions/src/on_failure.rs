//! What a failed check raises.
//!
//! A check takes one [`OnFailure`] value and only consults it once the check
//! has failed. Three shapes are accepted:
//!
//! - nothing (`()` or `None`): a message-less [`AssertionError`];
//! - a message (`&str`, `String`, `Cow<'static, str>` or `Some(message)`): an
//!   [`AssertionError`] carrying it;
//! - a producer wrapped with [`raise`]: whatever the closure returns, of any type.

use std::borrow::Cow;

use crate::AssertionError;

/// Converts into the error a failed check returns.
pub trait OnFailure {
    /// The error type produced.
    type Error;

    /// Builds the error. Called at most once, and only on failure.
    fn into_error(self) -> Self::Error;
}

impl OnFailure for () {
    type Error = AssertionError;

    fn into_error(self) -> AssertionError {
        AssertionError::new()
    }
}

impl OnFailure for &str {
    type Error = AssertionError;

    fn into_error(self) -> AssertionError {
        AssertionError::with_message(self.to_owned())
    }
}

impl OnFailure for String {
    type Error = AssertionError;

    fn into_error(self) -> AssertionError {
        AssertionError::with_message(self)
    }
}

impl OnFailure for Cow<'static, str> {
    type Error = AssertionError;

    fn into_error(self) -> AssertionError {
        AssertionError::with_message(self)
    }
}

impl<M> OnFailure for Option<M>
where
    M: OnFailure<Error = AssertionError>,
{
    type Error = AssertionError;

    fn into_error(self) -> AssertionError {
        self.map_or_else(AssertionError::new, OnFailure::into_error)
    }
}

/// A caller-supplied error producer. Built with [`raise`].
#[derive(Debug, Clone, Copy)]
pub struct Raise<F>(F);

/// Wraps `producer` so that a failed check returns `producer()` as its error.
///
/// ```
/// use guardian_assertions::{is_number, raise};
///
/// #[derive(Debug, PartialEq)]
/// struct NotANumber(&'static str);
///
/// let err = is_number("12", raise(|| NotANumber("width"))).unwrap_err();
/// assert_eq!(err, NotANumber("width"));
/// ```
pub const fn raise<F, E>(producer: F) -> Raise<F>
where
    F: FnOnce() -> E,
{
    Raise(producer)
}

impl<F, E> OnFailure for Raise<F>
where
    F: FnOnce() -> E,
{
    type Error = E;

    fn into_error(self) -> E {
        (self.0)()
    }
}
