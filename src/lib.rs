//! `nelta` is a small library of labeled containers: a one-dimensional [`LabeledSequence`] and a
//! two-dimensional [`LabeledTable`], plus a loader that reads delimited text into a table.
//!
//! The centerpiece is the selection engine. A single `select` call accepts a bare label, a list
//! of labels, a boolean mask, or another sequence, and resolves it into a bare [`Value`], a new
//! sequence, or a new table, depending on how many positions matched.
//!
//! ## Sequences
//!
//! ```rust
//! use nelta::{LabeledSequence, Selection, Value};
//!
//! let seq = LabeledSequence::with_index(
//!     vec![1.into(), 2.into(), 3.into(), 4.into(), 5.into()],
//!     vec!["A".into(), "BB".into(), "BB".into(), "CCC".into(), "D".into()],
//! )
//! .unwrap();
//!
//! // A unique label collapses to the bare value.
//! assert_eq!(seq.select("A").unwrap(), Selection::Value(Value::from(1)));
//!
//! // A duplicated label expands to every match.
//! let bb = seq.select("BB").unwrap().into_sequence().unwrap();
//! assert_eq!(bb.values(), &[Value::from(2), Value::from(3)]);
//! assert_eq!(bb.index(), &[Value::from("BB"), Value::from("BB")]);
//!
//! // Comparisons build masks, and masks select by position.
//! let big = seq.select(seq.greater_than(3)).unwrap().into_sequence().unwrap();
//! assert_eq!(big.index(), &[Value::from("CCC"), Value::from("D")]);
//! ```
//!
//! ## Tables
//!
//! ```rust
//! use nelta::ingestion::{LoadOptions, csv::{load_csv_from_reader, reader_builder}};
//! use nelta::Value;
//!
//! let input = "a,b,c\n1,2,3\n,,\n4,5,6\n";
//! let opts = LoadOptions::default();
//! let mut rdr = reader_builder(&opts).from_reader(input.as_bytes());
//! let table = load_csv_from_reader(&mut rdr, &opts).unwrap();
//!
//! // The blank record is dropped and row labels stay dense.
//! assert_eq!(table.shape(), (2, 3));
//! assert_eq!(table.row_labels(), &[Value::from(0), Value::from(1)]);
//!
//! // One matching column comes back as a sequence labeled by the rows.
//! let b = table.select("b").unwrap().into_sequence().unwrap();
//! assert_eq!(b.values(), &[Value::Number(2.0), Value::Number(5.0)]);
//! ```
//!
//! ## Modules
//!
//! - [`types`]: the [`Value`] cell type and comparison operators
//! - [`sequence`] / [`table`]: the containers and their selection engines
//! - [`selection`]: key expressions and selection results
//! - [`ingestion`]: CSV loading with optional observers
//! - [`processing`]: free-function filter/map helpers
//! - [`error`]: the crate error type

pub mod error;
pub mod ingestion;
pub mod processing;
pub mod selection;
pub mod sequence;
pub mod table;
pub mod types;

pub use error::{TableError, TableResult};
pub use ingestion::load;
pub use selection::{ColumnKey, IndexKey, Selection, TableSelection};
pub use sequence::LabeledSequence;
pub use table::LabeledTable;
pub use types::{CompareOp, Value};
