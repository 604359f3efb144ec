//! Value kind classification

/// Kind of a value, as reported by a host `typeof`-style check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Missing value
    Undefined,
    /// Present but null
    Null,
    /// Boolean value
    Bool,
    /// Numeric value
    Number,
    /// String value
    String,
    /// Callable value
    Function,
    /// Keyed record, raw or wrapped
    Object,
    /// Ordered sequence, raw or wrapped
    Array,
}

impl ValueKind {
    /// Name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Function => "function",
            ValueKind::Object => "object",
            ValueKind::Array => "array",
        }
    }

    /// Whether values of this kind are immutable as-is
    ///
    /// Scalars, callables, null and undefined are never wrapped.
    pub fn is_passthrough(&self) -> bool {
        !matches!(self, ValueKind::Object | ValueKind::Array)
    }
}
