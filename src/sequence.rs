//! One-dimensional labeled sequence.

use std::fmt;

use crate::error::{TableError, TableResult};
use crate::selection::{IndexKey, Selection, is_mask, values_to_mask};
use crate::types::{CompareOp, Value, range_labels};

/// An ordered list of [`Value`]s paired 1:1 with an ordered list of labels.
///
/// Labels are themselves [`Value`]s and may repeat. The two vectors always have the same length.
/// There are no mutating methods: every operation returns a freshly allocated sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabeledSequence {
    values: Vec<Value>,
    index: Vec<Value>,
}

impl LabeledSequence {
    /// Create a sequence labeled `0..n-1`.
    pub fn new(values: Vec<Value>) -> Self {
        let index = range_labels(values.len());
        Self { values, index }
    }

    /// Create a sequence with explicit labels.
    ///
    /// Returns [`TableError::DimensionMismatch`] if `index` and `values` differ in length.
    pub fn with_index(values: Vec<Value>, index: Vec<Value>) -> TableResult<Self> {
        if values.len() != index.len() {
            return Err(TableError::DimensionMismatch {
                expected: values.len(),
                actual: index.len(),
            });
        }
        Ok(Self { values, index })
    }

    /// Internal constructor for callers that already maintain the length invariant.
    pub(crate) fn from_parts(values: Vec<Value>, index: Vec<Value>) -> Self {
        debug_assert_eq!(values.len(), index.len());
        Self { values, index }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Labels, positionally aligned with [`Self::values`].
    pub fn index(&self) -> &[Value] {
        &self.index
    }

    pub(crate) fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Value at `position`, ignoring labels.
    pub fn get(&self, position: usize) -> Option<&Value> {
        self.values.get(position)
    }

    /// Iterate `(label, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> + '_ {
        self.index.iter().zip(self.values.iter())
    }

    /// Resolve an index expression against this sequence.
    ///
    /// The key is first normalized into a candidate list (a scalar becomes a one-element list, a
    /// sequence contributes its values). A non-empty list made only of booleans is applied as a
    /// positional mask; anything else is treated as a list of labels:
    ///
    /// - each label must match at least one position, else [`TableError::KeyNotFound`]
    /// - every matching position contributes its `(label, value)`, in key order then position order
    /// - exactly one contribution collapses to [`Selection::Value`]
    ///
    /// ```rust
    /// use nelta::{LabeledSequence, Value};
    ///
    /// let seq = LabeledSequence::with_index(
    ///     vec![1.into(), 2.into(), 3.into(), 4.into(), 5.into()],
    ///     vec!["A".into(), "BB".into(), "BB".into(), "CCC".into(), "D".into()],
    /// )
    /// .unwrap();
    ///
    /// let bb = seq.select("BB").unwrap().into_sequence().unwrap();
    /// assert_eq!(bb.values(), &[Value::from(2), Value::from(3)]);
    ///
    /// let picked = seq.select(["A", "BB"]).unwrap().into_sequence().unwrap();
    /// assert_eq!(picked.len(), 3);
    /// ```
    pub fn select(&self, key: impl Into<IndexKey>) -> TableResult<Selection> {
        let candidates = key.into().into_candidates();

        if is_mask(&candidates) {
            let mask = values_to_mask(&candidates)?;
            log::trace!("select: applying {}-element mask", mask.len());
            return self.filter_mask(&mask).map(Selection::Sequence);
        }

        let mut index = Vec::new();
        let mut values = Vec::new();
        for key in &candidates {
            let before = values.len();
            for (label, value) in self.iter().filter(|(label, _)| *label == key) {
                index.push(label.clone());
                values.push(value.clone());
            }
            if values.len() == before {
                return Err(TableError::key_not_found(key));
            }
        }
        log::trace!(
            "select: {} key(s) matched {} position(s)",
            candidates.len(),
            values.len()
        );

        if values.len() == 1 {
            return Ok(Selection::Value(values.swap_remove(0)));
        }
        Ok(Selection::Sequence(Self::from_parts(values, index)))
    }

    /// Keep only positions where `mask` is `true`, preserving order and original labels.
    ///
    /// Returns [`TableError::DimensionMismatch`] if the mask length differs from [`Self::len`].
    pub fn filter_mask(&self, mask: &[bool]) -> TableResult<Self> {
        if mask.len() != self.len() {
            return Err(TableError::DimensionMismatch {
                expected: self.len(),
                actual: mask.len(),
            });
        }
        let (index, values) = self
            .iter()
            .zip(mask)
            .filter(|(_, keep)| **keep)
            .map(|((label, value), _)| (label.clone(), value.clone()))
            .unzip();
        Ok(Self::from_parts(values, index))
    }

    /// Keep only entries whose value satisfies `predicate`.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Value) -> bool,
    {
        let (index, values) = self
            .iter()
            .filter(|(_, value)| predicate(value))
            .map(|(label, value)| (label.clone(), value.clone()))
            .unzip();
        Self::from_parts(values, index)
    }

    /// Apply `mapper` to every non-null value. Nulls pass through unchanged; labels are kept.
    pub fn map<F>(&self, mut mapper: F) -> Self
    where
        F: FnMut(&Value) -> Value,
    {
        let values = self
            .values
            .iter()
            .map(|v| if v.is_null() { Value::Null } else { mapper(v) })
            .collect();
        Self::from_parts(values, self.index.clone())
    }

    /// Compare every value against `scalar`, producing a boolean sequence with the same labels.
    ///
    /// Ordering operators yield `false` for null values rather than failing.
    pub fn compare(&self, op: CompareOp, scalar: impl Into<Value>) -> Self {
        let scalar = scalar.into();
        log::trace!("compare: {} {} '{scalar}'", self.len(), op.symbol());
        let values = self
            .values
            .iter()
            .map(|v| Value::Bool(v.compare(op, &scalar)))
            .collect();
        Self::from_parts(values, self.index.clone())
    }

    pub fn equals(&self, scalar: impl Into<Value>) -> Self {
        self.compare(CompareOp::Eq, scalar)
    }

    pub fn not_equals(&self, scalar: impl Into<Value>) -> Self {
        self.compare(CompareOp::Ne, scalar)
    }

    pub fn less_than(&self, scalar: impl Into<Value>) -> Self {
        self.compare(CompareOp::Lt, scalar)
    }

    pub fn greater_than(&self, scalar: impl Into<Value>) -> Self {
        self.compare(CompareOp::Gt, scalar)
    }

    pub fn less_equal(&self, scalar: impl Into<Value>) -> Self {
        self.compare(CompareOp::Le, scalar)
    }

    pub fn greater_equal(&self, scalar: impl Into<Value>) -> Self {
        self.compare(CompareOp::Ge, scalar)
    }

    /// Read this sequence as a boolean mask.
    ///
    /// Returns [`TableError::MalformedKey`] if any value is not a [`Value::Bool`].
    pub fn to_mask(&self) -> TableResult<Vec<bool>> {
        values_to_mask(&self.values)
    }
}

impl<T: Into<Value>> FromIterator<T> for LabeledSequence {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for LabeledSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = max_width(&self.index);
        let value_width = max_width(&self.values);
        for (label, value) in self.iter() {
            writeln!(f, "{label:>label_width$} {value:>value_width$}")?;
        }
        Ok(())
    }
}

pub(crate) fn max_width(values: &[Value]) -> usize {
    values
        .iter()
        .map(|v| v.to_string().chars().count())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::LabeledSequence;
    use crate::error::TableError;
    use crate::selection::Selection;
    use crate::types::{CompareOp, Value};

    fn sample() -> LabeledSequence {
        LabeledSequence::with_index(
            vec![1.into(), 2.into(), 3.into(), 4.into(), 5.into()],
            vec!["A".into(), "BB".into(), "BB".into(), "CCC".into(), "D".into()],
        )
        .unwrap()
    }

    #[test]
    fn default_index_is_positional() {
        let seq = LabeledSequence::new(vec!["x".into(), "y".into()]);
        assert_eq!(seq.index(), &[Value::from(0), Value::from(1)]);
    }

    #[test]
    fn with_index_rejects_length_mismatch() {
        let err = LabeledSequence::with_index(vec![1.into()], vec![]).unwrap_err();
        assert!(matches!(
            err,
            TableError::DimensionMismatch {
                expected: 1,
                actual: 0
            }
        ));
    }

    #[test]
    fn empty_key_list_yields_empty_sequence() {
        let out = sample().select(Vec::<Value>::new()).unwrap();
        assert_eq!(out, Selection::Sequence(LabeledSequence::default()));
    }

    #[test]
    fn scalar_bool_key_is_one_element_mask() {
        let err = sample().select(true).unwrap_err();
        assert!(matches!(
            err,
            TableError::DimensionMismatch {
                expected: 5,
                actual: 1
            }
        ));

        let single = LabeledSequence::new(vec![Value::from("only")]);
        let out = single.select(true).unwrap().into_sequence().unwrap();
        assert_eq!(out, single);
    }

    #[test]
    fn mixed_bool_and_label_list_uses_label_path() {
        let seq = LabeledSequence::with_index(
            vec![10.into(), 20.into()],
            vec![Value::Bool(true), "x".into()],
        )
        .unwrap();
        let out = seq.select(vec![Value::Bool(true), "x".into()]).unwrap();
        let out = out.into_sequence().unwrap();
        assert_eq!(out.values(), &[Value::from(10), Value::from(20)]);
    }

    #[test]
    fn missing_key_fails_even_after_partial_matches() {
        let err = sample().select(["A", "nope"]).unwrap_err();
        match err {
            TableError::KeyNotFound { key } => assert_eq!(key, Value::from("nope")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn map_passes_nulls_through() {
        let seq = LabeledSequence::new(vec![1.into(), Value::Null, 3.into()]);
        let out = seq.map(|v| Value::Number(v.as_f64().unwrap_or_default() * 10.0));
        assert_eq!(out.values(), &[Value::from(10), Value::Null, Value::from(30)]);
        assert_eq!(out.index(), seq.index());
    }

    #[test]
    fn compare_builds_mask_with_same_labels() {
        let seq = LabeledSequence::new(vec![1.into(), Value::Null, 3.into()]);
        let out = seq.compare(CompareOp::Gt, 1);
        assert_eq!(out.to_mask().unwrap(), vec![false, false, true]);
        assert_eq!(out.index(), seq.index());
        assert_eq!(seq.not_equals(1).to_mask().unwrap(), vec![false, true, true]);
    }

    #[test]
    fn to_mask_rejects_non_bool_values() {
        assert!(matches!(
            sample().to_mask(),
            Err(TableError::MalformedKey { .. })
        ));
    }

    #[test]
    fn display_right_aligns_both_columns() {
        let seq = LabeledSequence::with_index(
            vec![1.into(), 250.into()],
            vec!["a".into(), "bbb".into()],
        )
        .unwrap();
        assert_eq!(seq.to_string(), "  a   1\nbbb 250\n");
    }
}
