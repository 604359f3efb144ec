//! Property keys for record fields and sequence positions

use std::fmt;

/// Name of the read-only sequence length property
pub const LENGTH: &str = "length";

/// Key addressing a record field or a sequence position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Named property
    Name(String),
    /// Positional index
    Index(usize),
}

impl Key {
    /// Interpret the key as a sequence position
    ///
    /// Names made only of decimal digits count as positions, like `"0"`.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(idx) => Some(*idx),
            Key::Name(name) => {
                if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                // "01" is a name, not a position
                if name.len() > 1 && name.starts_with('0') {
                    return None;
                }
                name.parse().ok()
            }
        }
    }

    /// Interpret the key as a record field name
    pub fn to_name(&self) -> String {
        match self {
            Key::Name(name) => name.clone(),
            Key::Index(idx) => idx.to_string(),
        }
    }

    /// Whether this key addresses the sequence length
    pub fn is_length(&self) -> bool {
        matches!(self, Key::Name(name) if name == LENGTH)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => f.write_str(name),
            Key::Index(idx) => write!(f, "{}", idx),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<&String> for Key {
    fn from(name: &String) -> Self {
        Key::Name(name.clone())
    }
}

impl From<usize> for Key {
    fn from(idx: usize) -> Self {
        Key::Index(idx)
    }
}
