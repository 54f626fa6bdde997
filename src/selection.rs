//! Key expressions accepted by the selection engine, and the shapes it can return.
//!
//! Callers rarely build these enums by hand: every `select` method takes `impl Into<IndexKey>` or
//! `impl Into<ColumnKey>`, so a bare label, a list of labels, a boolean mask, or another
//! [`LabeledSequence`] can be passed directly.
//!
//! ```rust
//! use nelta::{LabeledSequence, Selection, Value};
//!
//! let seq = LabeledSequence::with_index(
//!     vec![Value::from(1), Value::from(2), Value::from(3)],
//!     vec![Value::from("a"), Value::from("b"), Value::from("b")],
//! )
//! .unwrap();
//!
//! // One match collapses to the bare value.
//! assert_eq!(seq.select("a").unwrap(), Selection::Value(Value::from(1)));
//! // Duplicate labels expand.
//! assert_eq!(seq.select("b").unwrap().into_sequence().unwrap().len(), 2);
//! // Masks select by position.
//! assert_eq!(seq.select(vec![true, false, true]).unwrap().into_sequence().unwrap().len(), 2);
//! ```

use crate::error::{TableError, TableResult};
use crate::sequence::LabeledSequence;
use crate::table::LabeledTable;
use crate::types::Value;

/// Index expression for [`LabeledSequence::select`].
#[derive(Debug, Clone, PartialEq)]
pub enum IndexKey {
    /// A single label (or a single boolean, which acts as a one-element mask).
    Scalar(Value),
    /// A list of labels, or of booleans when every element is a [`Value::Bool`].
    List(Vec<Value>),
    /// A positional boolean mask.
    Mask(Vec<bool>),
    /// Another sequence; its values are used as the key list.
    Sequence(LabeledSequence),
}

impl IndexKey {
    /// Normalize into the flat candidate list the engine classifies.
    pub(crate) fn into_candidates(self) -> Vec<Value> {
        match self {
            IndexKey::Scalar(v) => vec![v],
            IndexKey::List(values) => values,
            IndexKey::Mask(mask) => mask.into_iter().map(Value::Bool).collect(),
            IndexKey::Sequence(seq) => seq.into_values(),
        }
    }
}

/// Column expression for [`LabeledTable::select`].
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnKey {
    /// A single column label.
    Label(Value),
    /// A list of column labels, or a row mask when the first element is a [`Value::Bool`].
    List(Vec<Value>),
}

/// Result of [`LabeledSequence::select`].
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Exactly one position matched.
    Value(Value),
    /// Zero or several positions matched, or a mask was applied.
    Sequence(LabeledSequence),
}

impl Selection {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Selection::Value(v) => Some(v),
            Selection::Sequence(_) => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&LabeledSequence> {
        match self {
            Selection::Sequence(s) => Some(s),
            Selection::Value(_) => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Selection::Value(v) => Some(v),
            Selection::Sequence(_) => None,
        }
    }

    pub fn into_sequence(self) -> Option<LabeledSequence> {
        match self {
            Selection::Sequence(s) => Some(s),
            Selection::Value(_) => None,
        }
    }
}

/// Result of [`LabeledTable::select`].
#[derive(Debug, Clone, PartialEq)]
pub enum TableSelection {
    /// Exactly one column matched; its values indexed by the table's row labels.
    Sequence(LabeledSequence),
    /// Several columns matched, a label list was given, or a row mask was applied.
    Table(LabeledTable),
}

impl TableSelection {
    pub fn as_sequence(&self) -> Option<&LabeledSequence> {
        match self {
            TableSelection::Sequence(s) => Some(s),
            TableSelection::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&LabeledTable> {
        match self {
            TableSelection::Table(t) => Some(t),
            TableSelection::Sequence(_) => None,
        }
    }

    pub fn into_sequence(self) -> Option<LabeledSequence> {
        match self {
            TableSelection::Sequence(s) => Some(s),
            TableSelection::Table(_) => None,
        }
    }

    pub fn into_table(self) -> Option<LabeledTable> {
        match self {
            TableSelection::Table(t) => Some(t),
            TableSelection::Sequence(_) => None,
        }
    }
}

/// A candidate list is a mask when it is non-empty and made only of booleans.
///
/// The empty list is vacuously all-boolean but must be treated as an (empty) label list.
pub(crate) fn is_mask(candidates: &[Value]) -> bool {
    !candidates.is_empty() && candidates.iter().all(Value::is_bool)
}

/// Convert a list of values into a mask, rejecting any non-boolean element.
pub(crate) fn values_to_mask(values: &[Value]) -> TableResult<Vec<bool>> {
    values
        .iter()
        .enumerate()
        .map(|(pos, v)| {
            v.as_bool().ok_or_else(|| TableError::MalformedKey {
                message: format!(
                    "expected bool at position {pos} of mask, found {} '{v}'",
                    v.kind()
                ),
            })
        })
        .collect()
}

impl From<Value> for IndexKey {
    fn from(v: Value) -> Self {
        IndexKey::Scalar(v)
    }
}

impl From<&Value> for IndexKey {
    fn from(v: &Value) -> Self {
        IndexKey::Scalar(v.clone())
    }
}

impl From<&str> for IndexKey {
    fn from(v: &str) -> Self {
        IndexKey::Scalar(Value::from(v))
    }
}

impl From<String> for IndexKey {
    fn from(v: String) -> Self {
        IndexKey::Scalar(Value::from(v))
    }
}

impl From<f64> for IndexKey {
    fn from(v: f64) -> Self {
        IndexKey::Scalar(Value::from(v))
    }
}

impl From<i32> for IndexKey {
    fn from(v: i32) -> Self {
        IndexKey::Scalar(Value::from(v))
    }
}

impl From<bool> for IndexKey {
    fn from(v: bool) -> Self {
        IndexKey::Scalar(Value::Bool(v))
    }
}

impl From<Vec<Value>> for IndexKey {
    fn from(v: Vec<Value>) -> Self {
        IndexKey::List(v)
    }
}

impl From<Vec<&str>> for IndexKey {
    fn from(v: Vec<&str>) -> Self {
        IndexKey::List(v.into_iter().map(Value::from).collect())
    }
}

impl From<Vec<bool>> for IndexKey {
    fn from(v: Vec<bool>) -> Self {
        IndexKey::Mask(v)
    }
}

impl From<&[bool]> for IndexKey {
    fn from(v: &[bool]) -> Self {
        IndexKey::Mask(v.to_vec())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for IndexKey {
    fn from(v: [T; N]) -> Self {
        IndexKey::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<LabeledSequence> for IndexKey {
    fn from(v: LabeledSequence) -> Self {
        IndexKey::Sequence(v)
    }
}

impl From<&LabeledSequence> for IndexKey {
    fn from(v: &LabeledSequence) -> Self {
        IndexKey::Sequence(v.clone())
    }
}

impl From<Value> for ColumnKey {
    fn from(v: Value) -> Self {
        ColumnKey::Label(v)
    }
}

impl From<&Value> for ColumnKey {
    fn from(v: &Value) -> Self {
        ColumnKey::Label(v.clone())
    }
}

impl From<&str> for ColumnKey {
    fn from(v: &str) -> Self {
        ColumnKey::Label(Value::from(v))
    }
}

impl From<String> for ColumnKey {
    fn from(v: String) -> Self {
        ColumnKey::Label(Value::from(v))
    }
}

impl From<f64> for ColumnKey {
    fn from(v: f64) -> Self {
        ColumnKey::Label(Value::from(v))
    }
}

impl From<i32> for ColumnKey {
    fn from(v: i32) -> Self {
        ColumnKey::Label(Value::from(v))
    }
}

impl From<Vec<Value>> for ColumnKey {
    fn from(v: Vec<Value>) -> Self {
        ColumnKey::List(v)
    }
}

impl From<Vec<&str>> for ColumnKey {
    fn from(v: Vec<&str>) -> Self {
        ColumnKey::List(v.into_iter().map(Value::from).collect())
    }
}

impl From<Vec<String>> for ColumnKey {
    fn from(v: Vec<String>) -> Self {
        ColumnKey::List(v.into_iter().map(Value::from).collect())
    }
}

impl From<Vec<bool>> for ColumnKey {
    fn from(v: Vec<bool>) -> Self {
        ColumnKey::List(v.into_iter().map(Value::Bool).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for ColumnKey {
    fn from(v: [T; N]) -> Self {
        ColumnKey::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<LabeledSequence> for ColumnKey {
    fn from(v: LabeledSequence) -> Self {
        ColumnKey::List(v.into_values())
    }
}

impl From<&LabeledSequence> for ColumnKey {
    fn from(v: &LabeledSequence) -> Self {
        ColumnKey::List(v.values().to_vec())
    }
}
