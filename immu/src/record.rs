//! Immutable view over a keyed record
//!
//! Every field of the source record becomes a read-only accessor. A field is
//! wrapped the first time it is read and the wrapped value is kept in a
//! compute-once slot, so later reads hand back the same view.

use crate::error::Result;
use crate::key::Key;
use crate::options::WrapOptions;
use crate::value::{Map, Value};
use crate::view::{reject_write, Immutable};
use crate::wrap::wrap_with;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::trace;

/// Immutable record view
#[derive(Clone)]
pub struct Record {
    inner: Arc<RecordInner>,
}

struct RecordInner {
    source: Map,
    slots: Vec<OnceLock<Value>>,
    options: WrapOptions,
}

impl Record {
    pub(crate) fn new(source: Map, options: WrapOptions) -> Self {
        let slots = (0..source.len()).map(|_| OnceLock::new()).collect();
        Self {
            inner: Arc::new(RecordInner {
                source,
                slots,
                options,
            }),
        }
    }

    /// Read a field, wrapping it on first access
    pub fn get(&self, key: &str) -> Option<&Value> {
        let idx = self.inner.source.get_index_of(key)?;
        self.materialize(idx)
    }

    /// Whether the source record has this field
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.source.contains_key(key)
    }

    /// Field names in source order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.source.keys().map(String::as_str)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.inner.source.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.inner.source.is_empty()
    }

    /// Fields and their wrapped values in source order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        (0..self.len()).filter_map(move |idx| {
            let (key, _) = self.inner.source.get_index(idx)?;
            Some((key.as_str(), self.materialize(idx)?))
        })
    }

    /// Attempt to assign a field
    ///
    /// Applies to existing and new fields alike. Strict views return
    /// `MutationRejected`; relaxed views ignore the write.
    pub fn try_set(&self, key: impl Into<Key>, value: impl Into<Value>) -> Result<()> {
        reject_write(self.inner.options, &key.into(), &value.into())
    }

    /// Raw deep copy of the source record
    pub fn to_mutable(&self) -> Value {
        Value::Object(
            self.inner
                .source
                .iter()
                .map(|(key, value)| (key.clone(), value.to_mutable()))
                .collect(),
        )
    }

    /// Options this view was built with
    pub fn options(&self) -> WrapOptions {
        self.inner.options
    }

    /// Whether both handles share the same view
    pub fn ptr_eq(&self, other: &Record) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn source(&self) -> &Map {
        &self.inner.source
    }

    fn materialize(&self, idx: usize) -> Option<&Value> {
        let slot = self.inner.slots.get(idx)?;
        let (key, raw) = self.inner.source.get_index(idx)?;
        Some(slot.get_or_init(|| {
            trace!(key = %key, "materializing record field");
            wrap_with(raw.clone(), self.inner.options)
        }))
    }
}

impl Immutable for Record {
    fn lookup(&self, key: &Key) -> Option<Value> {
        self.get(&key.to_name()).cloned()
    }

    fn try_set(&self, key: Key, value: Value) -> Result<()> {
        reject_write(self.inner.options, &key, &value)
    }

    fn keys(&self) -> Vec<Key> {
        self.inner.source.keys().map(Key::from).collect()
    }

    fn to_mutable(&self) -> Value {
        Record::to_mutable(self)
    }

    fn options(&self) -> WrapOptions {
        self.inner.options
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Record ")?;
        f.debug_map().entries(self.inner.source.iter()).finish()
    }
}
