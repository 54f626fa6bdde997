//! Elementwise mapping for [`crate::sequence::LabeledSequence`].

use crate::sequence::LabeledSequence;
use crate::types::Value;

/// Returns a new [`LabeledSequence`] by applying `mapper` to every non-null value.
///
/// This is a convenience wrapper around [`LabeledSequence::map`].
pub fn map<F>(sequence: &LabeledSequence, mapper: F) -> LabeledSequence
where
    F: FnMut(&Value) -> Value,
{
    sequence.map(mapper)
}
