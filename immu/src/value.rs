//! Host data model: scalars, raw containers, and immutable views

use crate::key::Key;
use crate::kind::ValueKind;
use crate::record::Record;
use crate::sequence::Sequence;
use crate::text;
use crate::view::Immutable;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Insertion-ordered record storage
pub type Map = IndexMap<String, Value>;

type NativeFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A callable host value
///
/// Callables are passed through `wrap` untouched. Two callables are equal only
/// when they share the same underlying function.
#[derive(Clone)]
pub struct Callable {
    func: Arc<NativeFn>,
}

impl Callable {
    /// Create a callable from a closure
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// Invoke the callable
    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }

    /// Check whether both handles point at the same function
    pub fn ptr_eq(&self, other: &Callable) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable").finish_non_exhaustive()
    }
}

/// Any value of the host data domain
///
/// `Object` and `Array` are raw, mutable containers. `Record` and `Sequence`
/// are the immutable views produced by [`crate::wrap`].
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Missing value
    #[default]
    Undefined,
    /// Present but null
    Null,
    /// Boolean value
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// String value
    String(String),
    /// Callable value
    Function(Callable),
    /// Raw keyed record
    Object(Map),
    /// Raw ordered sequence
    Array(Vec<Value>),
    /// Immutable view over a record
    Record(Record),
    /// Immutable view over a sequence
    Sequence(Sequence),
}

impl Value {
    /// Kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Undefined,
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Function(_) => ValueKind::Function,
            Value::Object(_) | Value::Record(_) => ValueKind::Object,
            Value::Array(_) | Value::Sequence(_) => ValueKind::Array,
        }
    }

    /// Whether this value is an immutable view
    pub fn is_immutable(&self) -> bool {
        matches!(self, Value::Record(_) | Value::Sequence(_))
    }

    /// Whether this value is `Undefined`
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Whether this value is `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Boolean payload, if any
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric payload, if any
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// String payload, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Callable payload, if any
    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Value::Function(func) => Some(func),
            _ => None,
        }
    }

    /// Record view, if this is one
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Sequence view, if this is one
    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Value::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// Mutable access to a raw record
    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Mutable access to a raw sequence
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Read a field or position
    ///
    /// Views return their wrapped (and memoized) child; raw containers return a
    /// copy of the raw child. Scalars have no properties.
    pub fn get(&self, key: impl Into<Key>) -> Option<Value> {
        let key = key.into();
        match self {
            Value::Record(record) => record.lookup(&key),
            Value::Sequence(seq) => seq.lookup(&key),
            Value::Object(map) => map.get(&key.to_name()).cloned(),
            Value::Array(items) => {
                if key.is_length() {
                    return Some(Value::from(items.len()));
                }
                key.as_index().and_then(|idx| items.get(idx).cloned())
            }
            _ => None,
        }
    }

    /// Deep copy with every view unwrapped into raw containers
    pub fn to_mutable(&self) -> Value {
        match self {
            Value::Record(record) => record.to_mutable(),
            Value::Sequence(seq) => seq.to_mutable(),
            Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_mutable()))
                    .collect(),
            ),
            Value::Array(items) => Value::Array(items.iter().map(Value::to_mutable).collect()),
            other => other.clone(),
        }
    }

    /// Identity comparison used by position searches
    ///
    /// Scalars compare by value (`NaN` never matches), callables and views by
    /// identity. Raw containers never match anything.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Record(a), Value::Record(b)) => a.ptr_eq(b),
            (Value::Sequence(a), Value::Sequence(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    pub(crate) fn elements(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            Value::Sequence(seq) => Some(seq.source()),
            _ => None,
        }
    }

    pub(crate) fn entries(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            Value::Record(record) => Some(record.source()),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Record(a), Value::Record(b)) if a.ptr_eq(b) => true,
            (Value::Sequence(a), Value::Sequence(b)) if a.ptr_eq(b) => true,
            _ => {
                if let (Some(a), Some(b)) = (self.elements(), other.elements()) {
                    return a == b;
                }
                if let (Some(a), Some(b)) = (self.entries(), other.entries()) {
                    return a.len() == b.len()
                        && a.iter().all(|(key, value)| b.get(key) == Some(value));
                }
                false
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => f.write_str(&text::format_number(*n)),
            Value::String(s) => f.write_str(s),
            Value::Function(_) => f.write_str("function"),
            Value::Object(_) | Value::Record(_) => f.write_str("[object Object]"),
            Value::Array(items) => f.write_str(&text::join(items, ",")),
            Value::Sequence(seq) => f.write_str(&text::join(seq.source(), ",")),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Callable> for Value {
    fn from(func: Callable) -> Self {
        Value::Function(func)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

impl From<Sequence> for Value {
    fn from(seq: Sequence) -> Self {
        Value::Sequence(seq)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}
