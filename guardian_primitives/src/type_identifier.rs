use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The primitive kinds a value can be classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeIdentifier {
    /// Text held in a `String`, a `&'static str` or a shared/boxed `str`.
    String,
    /// IEEE-754 floats, and integers whose full range fits in an `f64`.
    Number,
    /// Integers too wide for an `f64` to hold exactly.
    BigInt,
    /// `bool`.
    Boolean,
}

/// Identifier for string-classified values.
pub const TYPE_IDENTIFIER_STRING: TypeIdentifier = TypeIdentifier::String;
/// Identifier for number-classified values.
pub const TYPE_IDENTIFIER_NUMBER: TypeIdentifier = TypeIdentifier::Number;
/// Identifier for big-integer-classified values.
pub const TYPE_IDENTIFIER_BIG_INT: TypeIdentifier = TypeIdentifier::BigInt;
/// Identifier for boolean-classified values.
pub const TYPE_IDENTIFIER_BOOLEAN: TypeIdentifier = TypeIdentifier::Boolean;

impl TypeIdentifier {
    /// Every identifier, in declaration order.
    pub const ALL: [Self; 4] = [Self::String, Self::Number, Self::BigInt, Self::Boolean];

    /// The lowercase name of the identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::BigInt => "bigint",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for TypeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name does not match any [`TypeIdentifier`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown type identifier '{0}'")]
pub struct ParseTypeIdentifierError(String);

impl FromStr for TypeIdentifier {
    type Err = ParseTypeIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ParseTypeIdentifierError(s.to_owned()))
    }
}
