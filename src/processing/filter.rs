//! Predicate filtering for sequences and tables.

use crate::sequence::LabeledSequence;
use crate::table::LabeledTable;
use crate::types::Value;

/// Returns a new [`LabeledSequence`] containing only entries for which `predicate` returns `true`.
///
/// This is a convenience wrapper around [`LabeledSequence::filter`].
pub fn filter<F>(sequence: &LabeledSequence, predicate: F) -> LabeledSequence
where
    F: FnMut(&Value) -> bool,
{
    sequence.filter(predicate)
}

/// Returns a new [`LabeledTable`] containing only rows for which `predicate` returns `true`.
///
/// Row labels of kept rows are preserved.
pub fn filter_table<F>(table: &LabeledTable, mut predicate: F) -> LabeledTable
where
    F: FnMut(&[Value]) -> bool,
{
    let mask: Vec<bool> = table.rows().iter().map(|row| predicate(row)).collect();
    table.keep_rows(&mask)
}
