//! Primitive type classification for the guardian workspace.
//!
//! Values arrive type-erased as `&dyn Any` and are sorted into the handful of
//! primitive kinds that assertions care about: strings, numbers, big integers
//! and booleans. Anything else is left unclassified.

mod classify;
mod type_identifier;

pub use crate::classify::*;
pub use crate::type_identifier::*;
