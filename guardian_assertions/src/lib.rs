//! Runtime assertion guards.
//!
//! Each check inspects a subject and either hands it back or returns an error
//! chosen by the caller (see [`OnFailure`]). Checks are pure: no state is kept
//! between calls, and a failed check only emits a `TRACE` event before
//! returning its error.
//!
//! ```
//! use guardian_assertions::{is_non_negative_number, is_string, raise};
//!
//! let name = is_string("ada", ())?;
//! let age = is_non_negative_number(36_u8, "age must not be negative")?;
//! assert_eq!((name, age), ("ada", 36));
//!
//! #[derive(Debug, PartialEq)]
//! enum Rejected { Age }
//! assert_eq!(is_non_negative_number(-1_i32, raise(|| Rejected::Age)), Err(Rejected::Age));
//! # Ok::<(), guardian_assertions::AssertionError>(())
//! ```

mod checks;
mod error;
mod lineage;
mod namespace;
mod on_failure;

pub use crate::checks::*;
pub use crate::error::*;
pub use crate::lineage::*;
pub use crate::namespace::*;
pub use crate::on_failure::*;

pub use guardian_primitives as primitives;
pub use guardian_primitives::TypeIdentifier;
