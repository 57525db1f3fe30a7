//! The assertion checks.
//!
//! Every check is built on [`is_true`]: [`with_guard`] evaluates a closure and
//! hands the result to it, and the typed checks are guards over the subject.
//! Checks that take a subject give it back untouched on success, so they can
//! be used inline:
//!
//! ```
//! use guardian_assertions::{AssertionError, is_positive_number};
//!
//! fn area(width: f64, height: f64) -> Result<f64, AssertionError> {
//!     Ok(is_positive_number(width, "width")? * is_positive_number(height, "height")?)
//! }
//!
//! assert_eq!(area(2.0, 3.0), Ok(6.0));
//! assert_eq!(area(2.0, 0.0).unwrap_err().message(), "height");
//! ```

use std::any::Any;
use std::panic::Location;

use guardian_primitives::{TYPE_IDENTIFIER_NUMBER, TYPE_IDENTIFIER_STRING, TypeIdentifier};
use tracing::trace;

use crate::{Class, Lineage, OnFailure};

/// Fails unless `subject` is `true`.
///
/// # Errors
///
/// Returns `on_failure`'s error when `subject` is `false`.
#[track_caller]
pub fn is_true<M: OnFailure>(subject: bool, on_failure: M) -> Result<(), M::Error> {
    if subject {
        return Ok(());
    }
    trace!(location = %Location::caller(), "assertion failed");
    Err(on_failure.into_error())
}

/// Fails unless `guard` returns `true`. `guard` is called exactly once.
///
/// # Errors
///
/// Returns `on_failure`'s error when `guard` returns `false`.
#[track_caller]
pub fn with_guard<G, M>(guard: G, on_failure: M) -> Result<(), M::Error>
where
    G: FnOnce() -> bool,
    M: OnFailure,
{
    is_true(guard(), on_failure)
}

/// Returns `subject` if it is classified as a string.
///
/// # Errors
///
/// Returns `on_failure`'s error for any other subject.
#[track_caller]
pub fn is_string<T: Any, M: OnFailure>(subject: T, on_failure: M) -> Result<T, M::Error> {
    is_primitive_type_of(subject, TYPE_IDENTIFIER_STRING, on_failure)
}

/// Returns `subject` if it is classified as a number. NaN and the infinities
/// are numbers; big integers are not.
///
/// # Errors
///
/// Returns `on_failure`'s error for any other subject.
#[track_caller]
pub fn is_number<T: Any, M: OnFailure>(subject: T, on_failure: M) -> Result<T, M::Error> {
    is_primitive_type_of(subject, TYPE_IDENTIFIER_NUMBER, on_failure)
}

/// Returns `subject` if it is a number with no fractional part.
///
/// NaN and the infinities fail, as does anything that is not a number (an
/// `i64` holding `3` is a big integer, not an integer number).
///
/// # Errors
///
/// Returns `on_failure`'s error for any other subject.
#[track_caller]
pub fn is_integer_number<T: Any, M: OnFailure>(subject: T, on_failure: M) -> Result<T, M::Error> {
    with_guard(
        || guardian_primitives::number_value(&subject).is_some_and(is_integral),
        on_failure,
    )?;
    Ok(subject)
}

/// Returns `subject` if it is a number greater than zero. `-0.0` fails.
///
/// # Errors
///
/// Returns `on_failure`'s error when the subject is not a number or not
/// strictly positive.
#[track_caller]
pub fn is_positive_number<T: Any, M: OnFailure>(subject: T, on_failure: M) -> Result<T, M::Error> {
    with_guard(
        || guardian_primitives::number_value(&subject).is_some_and(|n| n > 0.0),
        on_failure,
    )?;
    Ok(subject)
}

/// Returns `subject` if it is a number no less than zero. `-0.0` passes.
///
/// # Errors
///
/// Returns `on_failure`'s error when the subject is not a number or is
/// negative.
#[track_caller]
pub fn is_non_negative_number<T: Any, M: OnFailure>(
    subject: T,
    on_failure: M,
) -> Result<T, M::Error> {
    with_guard(
        || guardian_primitives::number_value(&subject).is_some_and(|n| n >= 0.0),
        on_failure,
    )?;
    Ok(subject)
}

/// Returns `subject` if it is an instance of `C`, directly or through its
/// declared [`Lineage`].
///
/// # Errors
///
/// Returns `on_failure`'s error for primitives and for instances of
/// unrelated types.
#[track_caller]
pub fn is_instance_of<T, C, M>(subject: T, class: Class<C>, on_failure: M) -> Result<T, M::Error>
where
    T: Lineage,
    C: ?Sized + 'static,
    M: OnFailure,
{
    with_guard(|| class.is_instance(&subject), on_failure)?;
    Ok(subject)
}

#[track_caller]
fn is_primitive_type_of<T: Any, M: OnFailure>(
    subject: T,
    type_identifier: TypeIdentifier,
    on_failure: M,
) -> Result<T, M::Error> {
    with_guard(
        || guardian_primitives::is_type_of(&subject, type_identifier),
        on_failure,
    )?;
    Ok(subject)
}

fn is_integral(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}
