//! Two-dimensional labeled table.
//!
//! A [`LabeledTable`] stores row-major [`Value`]s with one label per row and one label per
//! column. Column labels may repeat; selecting a repeated label returns every matching column.

use std::fmt;

use crate::error::{TableError, TableResult};
use crate::selection::{ColumnKey, TableSelection, values_to_mask};
use crate::sequence::{LabeledSequence, max_width};
use crate::types::{Value, range_labels};

/// In-memory labeled table.
///
/// Invariants: every row has exactly `column_labels.len()` cells and there is one row label per
/// row. Fields are private and there are no mutating methods; selections and slices copy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabeledTable {
    rows: Vec<Vec<Value>>,
    row_labels: Vec<Value>,
    column_labels: Vec<Value>,
}

impl LabeledTable {
    /// Create a table with row labels `0..R-1` and column labels `0..W-1`.
    ///
    /// The width is taken from the first row; a ragged row fails with
    /// [`TableError::DimensionMismatch`].
    pub fn new(rows: Vec<Vec<Value>>) -> TableResult<Self> {
        let width = rows.first().map_or(0, Vec::len);
        let row_labels = range_labels(rows.len());
        Self::with_labels(rows, row_labels, range_labels(width))
    }

    /// Create a table with explicit row and column labels.
    pub fn with_labels(
        rows: Vec<Vec<Value>>,
        row_labels: Vec<Value>,
        column_labels: Vec<Value>,
    ) -> TableResult<Self> {
        if row_labels.len() != rows.len() {
            return Err(TableError::DimensionMismatch {
                expected: rows.len(),
                actual: row_labels.len(),
            });
        }
        let width = column_labels.len();
        if let Some(bad) = rows.iter().find(|row| row.len() != width) {
            return Err(TableError::DimensionMismatch {
                expected: width,
                actual: bad.len(),
            });
        }
        Ok(Self {
            rows,
            row_labels,
            column_labels,
        })
    }

    pub(crate) fn from_parts(
        rows: Vec<Vec<Value>>,
        row_labels: Vec<Value>,
        column_labels: Vec<Value>,
    ) -> Self {
        debug_assert_eq!(rows.len(), row_labels.len());
        debug_assert!(rows.iter().all(|r| r.len() == column_labels.len()));
        Self {
            rows,
            row_labels,
            column_labels,
        }
    }

    /// `(row_count, column_count)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.column_labels.len())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_labels.len()
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn row_labels(&self) -> &[Value] {
        &self.row_labels
    }

    pub fn column_labels(&self) -> &[Value] {
        &self.column_labels
    }

    /// Resolve a column expression against this table.
    ///
    /// - a single label matching one column returns that column as a [`LabeledSequence`]
    ///   indexed by the row labels
    /// - a single label matching several columns returns a table of just those columns
    /// - a list whose first element is a boolean is applied as a row mask
    /// - any other list projects the named columns, in the requested order
    ///
    /// ```rust
    /// use nelta::{LabeledTable, Value};
    ///
    /// let table = LabeledTable::with_labels(
    ///     vec![
    ///         vec![1.into(), 2.into(), 3.into()],
    ///         vec![4.into(), 5.into(), 6.into()],
    ///     ],
    ///     vec![0.into(), 1.into()],
    ///     vec!["a".into(), "b".into(), "a".into()],
    /// )
    /// .unwrap();
    ///
    /// let a = table.select("a").unwrap().into_table().unwrap();
    /// assert_eq!(a.shape(), (2, 2));
    ///
    /// let b = table.select("b").unwrap().into_sequence().unwrap();
    /// assert_eq!(b.values(), &[Value::from(2), Value::from(5)]);
    /// ```
    pub fn select(&self, key: impl Into<ColumnKey>) -> TableResult<TableSelection> {
        match key.into() {
            ColumnKey::List(keys) => {
                // Row masks are detected from the first element only.
                if matches!(keys.first(), Some(Value::Bool(_))) {
                    if keys.len() != self.row_count() {
                        return Err(TableError::DimensionMismatch {
                            expected: self.row_count(),
                            actual: keys.len(),
                        });
                    }
                    let mask = values_to_mask(&keys)?;
                    return self.filter_rows(&mask).map(TableSelection::Table);
                }

                let positions = keys
                    .iter()
                    .map(|key| {
                        self.column_labels
                            .iter()
                            .position(|label| label == key)
                            .ok_or_else(|| TableError::key_not_found(key))
                    })
                    .collect::<TableResult<Vec<usize>>>()?;
                log::trace!("select: projecting columns {positions:?}");
                Ok(TableSelection::Table(self.project(&positions, keys)))
            }
            ColumnKey::Label(key) => {
                let positions: Vec<usize> = self
                    .column_labels
                    .iter()
                    .enumerate()
                    .filter(|(_, label)| **label == key)
                    .map(|(pos, _)| pos)
                    .collect();
                match positions.as_slice() {
                    [] => Err(TableError::KeyNotFound { key }),
                    [pos] => Ok(TableSelection::Sequence(self.column_at(*pos))),
                    _ => {
                        let labels = vec![key; positions.len()];
                        Ok(TableSelection::Table(self.project(&positions, labels)))
                    }
                }
            }
        }
    }

    /// Keep only rows where `mask` is `true`, preserving row labels.
    ///
    /// Returns [`TableError::DimensionMismatch`] if the mask length differs from the row count.
    pub fn filter_rows(&self, mask: &[bool]) -> TableResult<Self> {
        if mask.len() != self.row_count() {
            return Err(TableError::DimensionMismatch {
                expected: self.row_count(),
                actual: mask.len(),
            });
        }
        Ok(self.keep_rows(mask))
    }

    /// Row filtering for masks already known to match the row count.
    pub(crate) fn keep_rows(&self, mask: &[bool]) -> Self {
        debug_assert_eq!(mask.len(), self.row_count());
        let (row_labels, rows) = self
            .row_labels
            .iter()
            .zip(&self.rows)
            .zip(mask)
            .filter(|(_, keep)| **keep)
            .map(|((label, row), _)| (label.clone(), row.clone()))
            .unzip();
        Self::from_parts(rows, row_labels, self.column_labels.clone())
    }

    /// Keep only rows where the boolean sequence `mask` is `true`.
    ///
    /// Typically fed by a comparison on one of this table's columns:
    ///
    /// ```rust
    /// use nelta::{LabeledTable, Value};
    ///
    /// let table = LabeledTable::new(vec![vec![1.into()], vec![5.into()], vec![9.into()]]).unwrap();
    /// let column = table.select(0).unwrap().into_sequence().unwrap();
    /// let big = table.filter(&column.greater_than(2)).unwrap();
    /// assert_eq!(big.row_labels(), &[Value::from(1), Value::from(2)]);
    /// ```
    pub fn filter(&self, mask: &LabeledSequence) -> TableResult<Self> {
        self.filter_rows(&mask.to_mask()?)
    }

    /// First `n` rows (all rows if `n` exceeds the row count).
    pub fn head(&self, n: usize) -> Self {
        let end = n.min(self.row_count());
        self.slice_rows(0, end)
    }

    /// Last `n` rows (all rows if `n` exceeds the row count).
    pub fn tail(&self, n: usize) -> Self {
        let start = self.row_count().saturating_sub(n);
        self.slice_rows(start, self.row_count())
    }

    /// The first row labeled `label`, as a sequence indexed by the column labels.
    pub fn row(&self, label: impl Into<Value>) -> TableResult<LabeledSequence> {
        let label = label.into();
        let pos = self
            .row_labels
            .iter()
            .position(|l| *l == label)
            .ok_or_else(|| TableError::key_not_found(&label))?;
        Ok(LabeledSequence::from_parts(
            self.rows[pos].clone(),
            self.column_labels.clone(),
        ))
    }

    /// The column at `position`, indexed by the row labels.
    pub fn column(&self, position: usize) -> Option<LabeledSequence> {
        (position < self.column_count()).then(|| self.column_at(position))
    }

    fn column_at(&self, position: usize) -> LabeledSequence {
        let values = self.rows.iter().map(|row| row[position].clone()).collect();
        LabeledSequence::from_parts(values, self.row_labels.clone())
    }

    fn project(&self, positions: &[usize], column_labels: Vec<Value>) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|row| positions.iter().map(|&p| row[p].clone()).collect())
            .collect();
        Self::from_parts(rows, self.row_labels.clone(), column_labels)
    }

    fn slice_rows(&self, start: usize, end: usize) -> Self {
        Self::from_parts(
            self.rows[start..end].to_vec(),
            self.row_labels[start..end].to_vec(),
            self.column_labels.clone(),
        )
    }
}

impl fmt::Display for LabeledTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = max_width(&self.row_labels);
        let widths: Vec<usize> = self
            .column_labels
            .iter()
            .enumerate()
            .map(|(pos, label)| {
                self.rows
                    .iter()
                    .map(|row| row[pos].to_string().chars().count())
                    .fold(label.to_string().chars().count(), usize::max)
            })
            .collect();

        write!(f, "{:label_width$}", "")?;
        for (label, width) in self.column_labels.iter().zip(widths.iter().copied()) {
            write!(f, " {label:>width$}")?;
        }
        writeln!(f)?;

        for (label, row) in self.row_labels.iter().zip(&self.rows) {
            write!(f, "{label:>label_width$}")?;
            for (value, width) in row.iter().zip(widths.iter().copied()) {
                write!(f, " {value:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
