//! Classification and wrap entry points

use crate::options::WrapOptions;
use crate::record::Record;
use crate::sequence::Sequence;
use crate::value::Value;
use tracing::trace;

/// Wrap a value with default (strict) options
///
/// See [`wrap_with`].
pub fn wrap(value: impl Into<Value>) -> Value {
    wrap_with(value, WrapOptions::default())
}

/// Produce an immutable view of `value`
///
/// - Scalars, callables, null and undefined come back unchanged.
/// - Views come back unchanged, whatever `options` says.
/// - Raw sequences become a [`Sequence`] whose elements are wrapped on first read.
/// - Raw records become a [`Record`] whose fields are wrapped on first read.
pub fn wrap_with(value: impl Into<Value>, options: WrapOptions) -> Value {
    let value = value.into();

    if value.kind().is_passthrough() || value.is_immutable() {
        return value;
    }

    match value {
        Value::Array(items) => {
            trace!(len = items.len(), strictness = %options.strictness, "wrapping sequence");
            Value::Sequence(Sequence::from_raw(items, options))
        }
        Value::Object(map) => {
            trace!(fields = map.len(), strictness = %options.strictness, "wrapping record");
            Value::Record(Record::new(map, options))
        }
        other => other,
    }
}
