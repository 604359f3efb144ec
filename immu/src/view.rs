//! Capability interface shared by record and sequence views

use crate::error::{ImmuError, Result};
use crate::key::Key;
use crate::options::WrapOptions;
use crate::value::Value;
use tracing::debug;

/// Read-only access implemented by every immutable view
pub trait Immutable {
    /// Read a field, position, or `length`
    fn lookup(&self, key: &Key) -> Option<Value>;

    /// Attempt a write; strict views always fail
    fn try_set(&self, key: Key, value: Value) -> Result<()>;

    /// Enumerable keys in source order
    fn keys(&self) -> Vec<Key>;

    /// Deep copy with all wrapping removed
    fn to_mutable(&self) -> Value;

    /// Options this view was built with
    fn options(&self) -> WrapOptions;
}

/// Apply the write policy to an attempted assignment
///
/// Nothing is ever written: strict options turn the attempt into
/// `MutationRejected`, relaxed options drop it.
pub(crate) fn reject_write(options: WrapOptions, key: &Key, value: &Value) -> Result<()> {
    if options.is_strict() {
        debug!(key = %key, "rejected write to immutable view");
        return Err(ImmuError::MutationRejected {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    debug!(key = %key, "ignored write to immutable view");
    Ok(())
}
