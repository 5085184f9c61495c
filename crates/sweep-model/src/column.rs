use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-column type tag, computed once at ingestion and carried through the
/// session so operations never re-infer types ad hoc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    /// Integer or floating-point values.
    Numeric,
    /// Non-numeric values: strings, booleans, dates rendered as text.
    Text,
    /// Every value is missing; the column carries no usable type.
    MissingOnly,
}

impl ColumnKind {
    /// True for columns that participate in mean fill and chart selection.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Numeric)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Text => "text",
            ColumnKind::MissingOnly => "missing-only",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of one column taken at ingestion time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    pub kind: ColumnKind,
    pub null_count: usize,
}

impl ColumnProfile {
    pub fn new(name: impl Into<String>, kind: ColumnKind, null_count: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            null_count,
        }
    }
}
