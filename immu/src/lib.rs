//! Immu - Deep immutable views over JSON-like data
//!
//! `wrap` turns a raw value into a read-only projection of it:
//!
//! - Scalars, callables, null and undefined are returned as-is
//! - Records become a [`Record`] view with lazily wrapped, memoized fields
//! - Sequences become a [`Sequence`] view whose "mutating" methods return new views
//! - Every attempted write fails with [`ImmuError::MutationRejected`]
//!   (or is ignored under [`Strictness::Relaxed`])
//! - `to_mutable` gives back a raw, fully mutable deep copy
//!
//! ```
//! use immu::{wrap, Value};
//!
//! let raw = Value::from_json_str(r#"{"a": {"b": {"c": "d"}}}"#).unwrap();
//! let view = wrap(raw.clone());
//!
//! let c = view.get("a").and_then(|a| a.get("b")).and_then(|b| b.get("c"));
//! assert_eq!(c, Some(Value::from("d")));
//! assert!(view.as_record().unwrap().try_set("a", 1).is_err());
//! assert_eq!(view.to_mutable(), raw);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod json;
pub mod key;
pub mod kind;
pub mod options;
pub mod record;
pub mod sequence;
mod text;
pub mod value;
pub mod view;
pub mod wrap;

// Re-export commonly used types
pub use error::{ImmuError, Result};
pub use key::Key;
pub use kind::ValueKind;
pub use options::{Strictness, WrapOptions};
pub use record::Record;
pub use sequence::Sequence;
pub use value::{Callable, Map, Value};
pub use view::Immutable;
pub use wrap::{wrap, wrap_with};
