//! Runtime classification of type-erased values.
//!
//! Classification is by concrete type, not by value: a `String` is always a
//! string (even when empty), an `f64` is always a number (even when NaN), and
//! an `i64` is always a big integer (even when it is small).
//!
//! Type-erased boxes are looked through, so a `Box<dyn Any>` holding an `f64`
//! classifies as a number rather than as an opaque object.

use std::any::Any;
use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use contracts::debug_ensures;

use crate::TypeIdentifier;

/// `true` if `$value` is any one of the listed concrete types.
macro_rules! is_any_of {
    ($value:expr; $($ty:ty),+ $(,)?) => {
        $( $value.is::<$ty>() )||+
    };
}

/// Returns the `f64` view of `$value` from the first listed type it holds.
macro_rules! widen_first_of {
    ($value:expr; $($ty:ty),+ $(,)?) => {
        $(
            if let Some(n) = $value.downcast_ref::<$ty>() {
                return Some(f64::from(*n));
            }
        )+
    };
}

/// Classifies `value`, or returns `None` for values that are not primitives.
pub fn type_of(value: &dyn Any) -> Option<TypeIdentifier> {
    if let Some(inner) = unboxed(value) {
        return type_of(inner);
    }

    #[cfg(feature = "json")]
    if let Some(json) = value.downcast_ref::<serde_json::Value>() {
        return json_type_of(json);
    }

    if is_any_of!(value; String, &'static str, Box<str>, Rc<str>, Arc<str>, Cow<'static, str>) {
        Some(TypeIdentifier::String)
    } else if is_any_of!(value; f64, f32, i8, i16, i32, u8, u16, u32) {
        Some(TypeIdentifier::Number)
    } else if is_any_of!(value; i64, u64, i128, u128, isize, usize) {
        Some(TypeIdentifier::BigInt)
    } else if value.is::<bool>() {
        Some(TypeIdentifier::Boolean)
    } else {
        None
    }
}

/// Whether `value` is classified as `type_identifier`.
pub fn is_type_of(value: &dyn Any, type_identifier: TypeIdentifier) -> bool {
    type_of(value) == Some(type_identifier)
}

/// Whether `value` is classified as a string.
pub fn is_string(value: &dyn Any) -> bool {
    is_type_of(value, TypeIdentifier::String)
}

/// Whether `value` is classified as a number.
pub fn is_number(value: &dyn Any) -> bool {
    is_type_of(value, TypeIdentifier::Number)
}

/// Whether `value` is classified as a big integer.
pub fn is_big_int(value: &dyn Any) -> bool {
    is_type_of(value, TypeIdentifier::BigInt)
}

/// Whether `value` is classified as a boolean.
pub fn is_boolean(value: &dyn Any) -> bool {
    is_type_of(value, TypeIdentifier::Boolean)
}

/// The numeric value of a number-classified `value`.
///
/// Returns `None` exactly when `value` is not a number, so big integers never
/// produce a (possibly rounded) `f64` here.
#[debug_ensures(ret.is_some() == is_number(value))]
pub fn number_value(value: &dyn Any) -> Option<f64> {
    widen(value)
}

fn widen(value: &dyn Any) -> Option<f64> {
    if let Some(inner) = unboxed(value) {
        return widen(inner);
    }

    #[cfg(feature = "json")]
    if let Some(json) = value.downcast_ref::<serde_json::Value>() {
        return json.as_number().and_then(serde_json::Number::as_f64);
    }

    widen_first_of!(value; f64, f32, i8, i16, i32, u8, u16, u32);
    None
}

/// The contents of a type-erased box, if `value` is one.
fn unboxed(value: &dyn Any) -> Option<&dyn Any> {
    if let Some(inner) = value.downcast_ref::<Box<dyn Any>>() {
        Some(&**inner)
    } else if let Some(inner) = value.downcast_ref::<Box<dyn Any + Send>>() {
        Some(&**inner)
    } else if let Some(inner) = value.downcast_ref::<Box<dyn Any + Send + Sync>>() {
        Some(&**inner)
    } else {
        None
    }
}

#[cfg(feature = "json")]
const fn json_type_of(json: &serde_json::Value) -> Option<TypeIdentifier> {
    match json {
        serde_json::Value::String(_) => Some(TypeIdentifier::String),
        serde_json::Value::Number(_) => Some(TypeIdentifier::Number),
        serde_json::Value::Bool(_) => Some(TypeIdentifier::Boolean),
        serde_json::Value::Null | serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            None
        }
    }
}
