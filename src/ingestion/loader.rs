//! Path-based loading entrypoint.
//!
//! Most callers should use [`load`] or [`load_from_path`], which read a delimited text file into
//! an in-memory [`crate::table::LabeledTable`].
//!
//! - [`LoadOptions`] controls the delimiter and whitespace handling.
//! - If a [`super::observability::LoadObserver`] is provided, success/failure/alerts are
//!   reported to it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::TableResult;
use crate::table::LabeledTable;

use super::csv;
use super::observability::{LoadContext, LoadObserver, LoadSeverity};

/// Options controlling loading behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// Field delimiter byte. Defaults to `b','`.
    pub delimiter: u8,
    /// Trim surrounding whitespace before attempting numeric coercion. Text cells keep their raw
    /// form either way.
    pub trim: bool,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("delimiter", &char::from(self.delimiter))
            .field("trim", &self.trim)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load `path` with default options.
///
/// ```no_run
/// # fn main() -> Result<(), nelta::TableError> {
/// let table = nelta::load("people.csv")?;
/// println!("{}", table.head(5));
/// # Ok(())
/// # }
/// ```
pub fn load(path: impl AsRef<Path>) -> TableResult<LabeledTable> {
    load_from_path(path, &LoadOptions::default())
}

/// Load entry point for path-based sources.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row/column stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// ## Observability (stderr logging + alert threshold)
///
/// ```no_run
/// use std::sync::Arc;
///
/// use nelta::ingestion::{LoadOptions, LoadSeverity, StdErrObserver, load_from_path};
///
/// let opts = LoadOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     alert_at_or_above: LoadSeverity::Critical,
///     ..Default::default()
/// };
///
/// // Missing files are treated as Critical and will trigger `on_alert` at this threshold.
/// let _err = load_from_path("does_not_exist.csv", &opts).unwrap_err();
/// ```
pub fn load_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> TableResult<LabeledTable> {
    let path = path.as_ref();
    let ctx = LoadContext {
        path: path.to_path_buf(),
        delimiter: options.delimiter,
        trim: options.trim,
    };

    log::debug!("loading {}", path.display());
    let result = csv::load_csv_with_stats(path, options);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok((_, stats)) => obs.on_success(&ctx, *stats),
            Err(e) => {
                let sev = LoadSeverity::for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result.map(|(table, _)| table)
}

/// Convenience helper for callers that want an owned request object.
#[derive(Debug, Clone)]
pub struct LoadRequest {
    /// Path to the input file.
    pub path: PathBuf,
    /// Options controlling loading.
    pub options: LoadOptions,
}

impl LoadRequest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            options: LoadOptions::default(),
        }
    }

    /// Execute the request by calling [`load_from_path`].
    pub fn run(&self) -> TableResult<LabeledTable> {
        load_from_path(&self.path, &self.options)
    }
}
