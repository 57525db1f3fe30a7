//! The non-instantiable [`Assertions`] namespace.

use std::any::Any;

use crate::{AssertionError, Class, Lineage, NOT_INSTANTIABLE_MESSAGE, OnFailure, checks};

/// The checks gathered under one name.
///
/// `Assertions` has no values: it only namespaces the free functions of this
/// crate, and [`Assertions::new`] always fails.
#[derive(Debug)]
pub enum Assertions {}

impl Assertions {
    /// Always fails with [`NOT_INSTANTIABLE_MESSAGE`].
    ///
    /// # Errors
    ///
    /// Always.
    pub fn new() -> Result<Self, AssertionError> {
        Err(AssertionError::with_message(NOT_INSTANTIABLE_MESSAGE))
    }

    /// See [`is_true`](crate::is_true).
    ///
    /// # Errors
    ///
    /// Returns `on_failure`'s error when `subject` is `false`.
    #[track_caller]
    pub fn is_true<M: OnFailure>(subject: bool, on_failure: M) -> Result<(), M::Error> {
        checks::is_true(subject, on_failure)
    }

    /// See [`with_guard`](crate::with_guard).
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
        checks::with_guard(guard, on_failure)
    }

    /// See [`is_string`](crate::is_string).
    ///
    /// # Errors
    ///
    /// Returns `on_failure`'s error unless `subject` is a string.
    #[track_caller]
    pub fn is_string<T: Any, M: OnFailure>(subject: T, on_failure: M) -> Result<T, M::Error> {
        checks::is_string(subject, on_failure)
    }

    /// See [`is_number`](crate::is_number).
    ///
    /// # Errors
    ///
    /// Returns `on_failure`'s error unless `subject` is a number.
    #[track_caller]
    pub fn is_number<T: Any, M: OnFailure>(subject: T, on_failure: M) -> Result<T, M::Error> {
        checks::is_number(subject, on_failure)
    }

    /// See [`is_integer_number`](crate::is_integer_number).
    ///
    /// # Errors
    ///
    /// Returns `on_failure`'s error unless `subject` is an integer number.
    #[track_caller]
    pub fn is_integer_number<T: Any, M: OnFailure>(
        subject: T,
        on_failure: M,
    ) -> Result<T, M::Error> {
        checks::is_integer_number(subject, on_failure)
    }

    /// See [`is_positive_number`](crate::is_positive_number).
    ///
    /// # Errors
    ///
    /// Returns `on_failure`'s error unless `subject` is a positive number.
    #[track_caller]
    pub fn is_positive_number<T: Any, M: OnFailure>(
        subject: T,
        on_failure: M,
    ) -> Result<T, M::Error> {
        checks::is_positive_number(subject, on_failure)
    }

    /// See [`is_non_negative_number`](crate::is_non_negative_number).
    ///
    /// # Errors
    ///
    /// Returns `on_failure`'s error unless `subject` is a non-negative number.
    #[track_caller]
    pub fn is_non_negative_number<T: Any, M: OnFailure>(
        subject: T,
        on_failure: M,
    ) -> Result<T, M::Error> {
        checks::is_non_negative_number(subject, on_failure)
    }

    /// See [`is_instance_of`](crate::is_instance_of).
    ///
    /// # Errors
    ///
    /// Returns `on_failure`'s error unless `subject` is an instance of `C`.
    #[track_caller]
    pub fn is_instance_of<T, C, M>(
        subject: T,
        class: Class<C>,
        on_failure: M,
    ) -> Result<T, M::Error>
    where
        T: Lineage,
        C: ?Sized + 'static,
        M: OnFailure,
    {
        checks::is_instance_of(subject, class, on_failure)
    }
}
