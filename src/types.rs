//! Core scalar type stored in sequences and tables.
//!
//! Every cell and every label is a [`Value`]. Equality is defined for any pair of values, while
//! ordering comparisons only succeed between values of the same kind; see [`Value::compare`].

use std::cmp::Ordering;
use std::fmt;

/// A single tagged cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing value.
    Null,
    /// 64-bit floating point number. Loaded numeric fields always land here.
    Number(f64),
    /// UTF-8 string.
    Text(String),
    /// Boolean.
    Bool(bool),
}

/// Elementwise comparison operator used by [`Value::compare`] and mask-building helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
}

impl CompareOp {
    /// Operator symbol, used in log output.
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Gt => ">",
            CompareOp::Le => "<=",
            CompareOp::Ge => ">=",
        }
    }
}

impl Value {
    /// Create a text value.
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` for [`Value::Bool`].
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Short name of the value's kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Bool(_) => "bool",
        }
    }

    /// Compare `self` against `other` with `op`.
    ///
    /// - `Eq`/`Ne` work for any pair; `Null` equals only `Null`.
    /// - Ordering operators yield `false` when either side is `Null` or when the kinds differ.
    pub fn compare(&self, op: CompareOp, other: &Value) -> bool {
        match op {
            CompareOp::Eq => self == other,
            CompareOp::Ne => self != other,
            CompareOp::Lt => self.ordering(other) == Some(Ordering::Less),
            CompareOp::Gt => self.ordering(other) == Some(Ordering::Greater),
            CompareOp::Le => matches!(
                self.ordering(other),
                Some(Ordering::Less | Ordering::Equal)
            ),
            CompareOp::Ge => matches!(
                self.ordering(other),
                Some(Ordering::Greater | Ordering::Equal)
            ),
        }
    }

    fn ordering(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` keeps width/alignment flags working for table rendering.
        match self {
            Value::Null => f.pad(""),
            Value::Number(v) => f.pad(&v.to_string()),
            Value::Text(s) => f.pad(s),
            Value::Bool(b) => f.pad(if *b { "true" } else { "false" }),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Number(v as f64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Build the default `0..n-1` label vector.
pub(crate) fn range_labels(n: usize) -> Vec<Value> {
    (0..n).map(Value::from).collect()
}

#[cfg(test)]
mod tests {
    use super::{CompareOp, Value};

    #[test]
    fn equality_is_defined_across_kinds() {
        assert!(Value::Null.compare(CompareOp::Eq, &Value::Null));
        assert!(!Value::Null.compare(CompareOp::Eq, &Value::Number(0.0)));
        assert!(Value::Null.compare(CompareOp::Ne, &Value::from("x")));
        assert!(!Value::from(1).compare(CompareOp::Eq, &Value::from("1")));
        assert!(Value::from(1).compare(CompareOp::Eq, &Value::Number(1.0)));
    }

    #[test]
    fn ordering_against_null_is_false() {
        for op in [CompareOp::Lt, CompareOp::Gt, CompareOp::Le, CompareOp::Ge] {
            assert!(!Value::Null.compare(op, &Value::from(1)));
            assert!(!Value::from(1).compare(op, &Value::Null));
        }
    }

    #[test]
    fn ordering_across_kinds_is_false() {
        assert!(!Value::from(1).compare(CompareOp::Lt, &Value::from("2")));
        assert!(!Value::from("2").compare(CompareOp::Gt, &Value::from(1)));
    }

    #[test]
    fn ordering_within_kind() {
        assert!(Value::from(1).compare(CompareOp::Lt, &Value::from(2.5)));
        assert!(Value::from("b").compare(CompareOp::Gt, &Value::from("a")));
        assert!(Value::from(false).compare(CompareOp::Lt, &Value::from(true)));
        assert!(Value::from(2).compare(CompareOp::Le, &Value::from(2)));
        assert!(Value::from(2).compare(CompareOp::Ge, &Value::from(2)));
        assert!(!Value::Number(f64::NAN).compare(CompareOp::Ge, &Value::from(2)));
    }

    #[test]
    fn display_is_undecorated() {
        assert_eq!(Value::from(1).to_string(), "1");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from(-3.0).to_string(), "-3");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from("abc").to_string(), "abc");
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(format!("{:>4}", Value::from(7)), "   7");
    }

    #[test]
    fn option_conversion_maps_none_to_null() {
        assert_eq!(Value::from(None::<f64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
