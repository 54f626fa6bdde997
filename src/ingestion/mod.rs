//! Loading entrypoints and implementations.
//!
//! Most callers should use [`load`] or [`load_from_path`] (from [`loader`]) which:
//!
//! - reads a delimited text file with a header record into a [`crate::table::LabeledTable`]
//! - coerces every field to a number when it parses as one
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! Reader-level functions are available under [`csv`].

pub mod csv;
pub mod loader;
pub mod observability;

pub use loader::{LoadOptions, LoadRequest, load, load_from_path};
pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats,
    LogObserver, StdErrObserver,
};
