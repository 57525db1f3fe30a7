#![allow(dead_code)]

use std::sync::OnceLock;

use guardian_assertions::{
    Class, OnFailure, is_instance_of, is_integer_number, is_non_negative_number, is_number,
    is_positive_number, is_string, is_true, lineage, with_guard,
};

pub fn init_test_logger() {
    static INIT: OnceLock<()> = OnceLock::new();
    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A caller-defined error that shares nothing with `AssertionError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomError {
    pub code: u32,
}

/// Target type for instance-of checks in the shared tables.
pub struct Marker;

lineage!(Marker);

/// Every check, runnable against the same `bool` subject.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    IsTrue,
    WithGuard,
    IsString,
    IsNumber,
    IsIntegerNumber,
    IsPositiveNumber,
    IsNonNegativeNumber,
    IsInstanceOf,
}

impl Check {
    pub fn run<M: OnFailure>(self, subject: bool, on_failure: M) -> Result<bool, M::Error> {
        match self {
            Self::IsTrue => is_true(subject, on_failure).map(|()| subject),
            Self::WithGuard => with_guard(|| subject, on_failure).map(|()| subject),
            Self::IsString => is_string(subject, on_failure),
            Self::IsNumber => is_number(subject, on_failure),
            Self::IsIntegerNumber => is_integer_number(subject, on_failure),
            Self::IsPositiveNumber => is_positive_number(subject, on_failure),
            Self::IsNonNegativeNumber => is_non_negative_number(subject, on_failure),
            Self::IsInstanceOf => is_instance_of(subject, Class::<Marker>::new(), on_failure),
        }
    }
}
