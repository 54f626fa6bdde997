use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::TableError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (load failed on the input's content).
    Error,
    /// Critical error (the source could not be read at all).
    Critical,
}

impl LoadSeverity {
    /// Severity assigned to a failed load.
    pub fn for_error(error: &TableError) -> Self {
        match error {
            TableError::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        }
    }
}

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// The input path used for loading.
    pub path: PathBuf,
    /// Field delimiter the file was read with.
    pub delimiter: u8,
    /// Whether fields were trimmed before numeric coercion.
    pub trim: bool,
}

/// `path=<path> delimiter=<c>`, plus `trim=off` when trimming is disabled.
impl fmt::Display for LoadContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "path={} delimiter={:?}",
            self.path.display(),
            char::from(self.delimiter)
        )?;
        if !self.trim {
            f.write_str(" trim=off")?;
        }
        Ok(())
    }
}

/// Stats reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of rows kept.
    pub rows: usize,
    /// Number of columns (header width).
    pub columns: usize,
    /// Number of all-empty records dropped.
    pub skipped_blank_rows: usize,
}

impl fmt::Display for LoadStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "shape={}x{} blank_rows_skipped={}",
            self.rows, self.columns, self.skipped_blank_rows
        )
    }
}

/// Input line a failure points at, when the error carries one.
fn failing_line(error: &TableError) -> Option<u64> {
    match error {
        TableError::MalformedInput { line, .. } => Some(*line),
        TableError::Csv(err) => err.position().map(|p| p.line()),
        _ => None,
    }
}

/// `severity=<s> [line=<n>] err=<e>`
struct FailureLine<'a>(LoadSeverity, &'a TableError);

impl fmt::Display for FailureLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "severity={:?}", self.0)?;
        if let Some(line) = failing_line(self.1) {
            write!(f, " line={line}")?;
        }
        write!(f, " err={}", self.1)
    }
}

/// Observer interface for load outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait LoadObserver: Send + Sync {
    /// Called when loading succeeds.
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when loading fails.
    fn on_failure(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &TableError) {}

    /// Called when a load failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &TableError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl LoadObserver for CompositeObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &TableError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &TableError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Prints load events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl LoadObserver for StdErrObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        eprintln!("[nelta][loaded] {ctx} {stats}");
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &TableError) {
        eprintln!("[nelta][failed] {ctx} {}", FailureLine(severity, error));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &TableError) {
        eprintln!("[nelta][ALERT] {ctx} {}", FailureLine(severity, error));
    }
}

/// Forwards load events to the [`log`] facade under the `nelta::load` target.
#[derive(Debug, Default)]
pub struct LogObserver;

impl LoadObserver for LogObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        if stats.skipped_blank_rows > 0 {
            log::info!(target: "nelta::load", "loaded {ctx} {stats} (blank records dropped)");
        } else {
            log::info!(target: "nelta::load", "loaded {ctx} {stats}");
        }
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &TableError) {
        log::warn!(target: "nelta::load", "load failed {ctx} {}", FailureLine(severity, error));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &TableError) {
        log::error!(target: "nelta::load", "load alert {ctx} {}", FailureLine(severity, error));
    }
}

/// Appends one line per load event to a local log file, prefixed with a unix timestamp.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append(&self, event: &str, detail: fmt::Arguments<'_>) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{} {event} {detail}", unix_ts());
        }
    }
}

impl LoadObserver for FileObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        self.append("loaded", format_args!("{ctx} {stats}"));
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &TableError) {
        self.append("failed", format_args!("{ctx} {}", FailureLine(severity, error)));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &TableError) {
        self.append("ALERT", format_args!("{ctx} {}", FailureLine(severity, error)));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
