#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use std::borrow::Cow;
use std::cell::Cell;

use guardian_assertions::{AssertionError, raise};
use rstest::rstest;

mod common;
use common::{Check, CustomError, init_test_logger};

#[rstest]
fn test_absent_raises_message_less_error(
    #[values(
        Check::IsTrue,
        Check::WithGuard,
        Check::IsString,
        Check::IsNumber,
        Check::IsIntegerNumber,
        Check::IsPositiveNumber,
        Check::IsNonNegativeNumber,
        Check::IsInstanceOf
    )]
    check: Check,
) {
    init_test_logger();
    let err = check.run(false, ()).unwrap_err();
    assert_eq!(err, AssertionError::default());
    assert!(!err.has_message());

    assert_eq!(check.run(false, None::<&str>), Err(AssertionError::new()));
}

#[rstest]
fn test_message_raises_error_with_message(
    #[values(
        Check::IsTrue,
        Check::WithGuard,
        Check::IsString,
        Check::IsNumber,
        Check::IsIntegerNumber,
        Check::IsPositiveNumber,
        Check::IsNonNegativeNumber,
        Check::IsInstanceOf
    )]
    check: Check,
) {
    init_test_logger();
    assert_eq!(check.run(false, "message").unwrap_err().message(), "message");
    assert_eq!(
        check.run(false, String::from("owned")).unwrap_err().message(),
        "owned"
    );
    assert_eq!(
        check.run(false, Cow::Borrowed("cow")).unwrap_err().message(),
        "cow"
    );
    assert_eq!(check.run(false, Some("some")).unwrap_err().message(), "some");
}

#[rstest]
fn test_producer_raises_its_value(
    #[values(
        Check::IsTrue,
        Check::WithGuard,
        Check::IsString,
        Check::IsNumber,
        Check::IsIntegerNumber,
        Check::IsPositiveNumber,
        Check::IsNonNegativeNumber,
        Check::IsInstanceOf
    )]
    check: Check,
) {
    init_test_logger();
    let custom = CustomError { code: 42 };
    let expected = custom.clone();
    assert_eq!(check.run(false, raise(move || custom)), Err(expected));
}

#[rstest]
fn test_producer_runs_once_on_failure(
    #[values(Check::IsTrue, Check::IsString, Check::IsPositiveNumber)] check: Check,
) {
    let calls = Cell::new(0_u32);
    let result = check.run(
        false,
        raise(|| {
            calls.set(calls.get() + 1);
            CustomError { code: calls.get() }
        }),
    );
    assert_eq!(result, Err(CustomError { code: 1 }));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_producer_not_run_on_success() {
    let calls = Cell::new(0_u32);
    let result = Check::IsTrue.run(
        true,
        raise(|| {
            calls.set(calls.get() + 1);
            CustomError { code: 0 }
        }),
    );
    assert_eq!(result, Ok(true));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_errors_propagate_with_question_mark() {
    fn validate(width: f64) -> Result<f64, AssertionError> {
        let width = guardian_assertions::is_number(width, "width must be a number")?;
        guardian_assertions::is_positive_number(width, "width must be positive")
    }

    assert_eq!(validate(3.0), Ok(3.0));
    assert_eq!(validate(-3.0).unwrap_err().message(), "width must be positive");
}
