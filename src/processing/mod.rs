//! Function-style helpers over [`crate::sequence::LabeledSequence`] and
//! [`crate::table::LabeledTable`].
//!
//! These mirror the container methods for callers that prefer free functions in pipelines.
//!
//! Currently implemented:
//!
//! - [`filter()`]: keep sequence entries by predicate
//! - [`filter_table()`]: keep table rows by predicate
//! - [`map()`]: elementwise sequence transform (nulls pass through)
//!
//! ## Example: filter → map
//!
//! ```rust
//! use nelta::processing::{filter, map};
//! use nelta::{LabeledSequence, Value};
//!
//! let seq: LabeledSequence = [1.0, 20.0, 3.0].into_iter().collect();
//!
//! let small = filter(&seq, |v| v.as_f64().is_some_and(|x| x < 10.0));
//! let doubled = map(&small, |v| Value::from(v.as_f64().unwrap_or_default() * 2.0));
//!
//! assert_eq!(doubled.values(), &[Value::from(2), Value::from(6)]);
//! assert_eq!(doubled.index(), &[Value::from(0), Value::from(2)]);
//! ```

pub mod filter;
pub mod map;

pub use filter::{filter, filter_table};
pub use map::map;
