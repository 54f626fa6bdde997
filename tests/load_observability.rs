use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use nelta::ingestion::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadOptions, LoadRequest,
    LoadSeverity, LoadStats, load_from_path,
};
use nelta::TableError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<LoadStats>>,
    failures: Mutex<Vec<LoadSeverity>>,
    alerts: Mutex<Vec<LoadSeverity>>,
}

impl LoadObserver for RecordingObserver {
    fn on_success(&self, _ctx: &LoadContext, stats: LoadStats) {
        self.successes.lock().unwrap().push(stats);
    }

    fn on_failure(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &TableError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &TableError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn tmp_file(ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("nelta-observability-{nanos}.{ext}"))
}

fn options_with(obs: Arc<RecordingObserver>) -> LoadOptions {
    LoadOptions {
        observer: Some(obs),
        alert_at_or_above: LoadSeverity::Critical,
        ..Default::default()
    }
}

#[test]
fn observer_receives_success_stats() {
    let obs = Arc::new(RecordingObserver::default());
    let table = load_from_path("tests/fixtures/blank_rows.csv", &options_with(obs.clone())).unwrap();

    assert_eq!(table.shape(), (2, 3));
    let successes = obs.successes.lock().unwrap().clone();
    assert_eq!(
        successes,
        vec![LoadStats {
            rows: 2,
            columns: 3,
            skipped_blank_rows: 1,
        }]
    );
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let obs = Arc::new(RecordingObserver::default());

    // Missing file -> Io error -> Critical
    let _ = load_from_path("tests/fixtures/does_not_exist.csv", &options_with(obs.clone()))
        .unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    let alerts = obs.alerts.lock().unwrap().clone();
    assert_eq!(failures, vec![LoadSeverity::Critical]);
    assert_eq!(alerts, vec![LoadSeverity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_malformed_input() {
    let obs = Arc::new(RecordingObserver::default());

    // Ragged record -> Error severity (not Critical) -> should not alert
    let _ = load_from_path("tests/fixtures/ragged.csv", &options_with(obs.clone())).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    assert_eq!(failures, vec![LoadSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn lower_alert_threshold_alerts_on_content_errors() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        alert_at_or_above: LoadSeverity::Error,
        ..options_with(obs.clone())
    };

    let _ = load_from_path("tests/fixtures/ragged.csv", &opts).unwrap_err();
    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![LoadSeverity::Error]);
}

#[test]
fn composite_and_file_observers_fan_out() {
    let log_path = tmp_file("log");
    let recording = Arc::new(RecordingObserver::default());
    let composite = CompositeObserver::new(vec![
        recording.clone() as Arc<dyn LoadObserver>,
        Arc::new(FileObserver::new(&log_path)),
    ]);

    let request = LoadRequest {
        path: PathBuf::from("tests/fixtures/people.csv"),
        options: LoadOptions {
            observer: Some(Arc::new(composite)),
            ..Default::default()
        },
    };
    request.run().unwrap();
    let _ = LoadRequest {
        path: PathBuf::from("tests/fixtures/does_not_exist.csv"),
        options: request.options.clone(),
    }
    .run()
    .unwrap_err();

    assert_eq!(recording.successes.lock().unwrap().len(), 1);
    assert_eq!(recording.alerts.lock().unwrap().len(), 1);

    let logged = std::fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = logged.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains(" loaded path=tests/fixtures/people.csv delimiter=','"));
    assert!(lines[0].ends_with("shape=3x4 blank_rows_skipped=0"));
    assert!(lines[1].contains(" failed path="));
    assert!(lines[1].contains("severity=Critical err=io error"));
    assert!(lines[2].contains(" ALERT path="));

    let _ = std::fs::remove_file(&log_path);
}

#[test]
fn file_observer_reports_delimiter_and_failing_line() {
    let log_path = tmp_file("log");
    let opts = LoadOptions {
        observer: Some(Arc::new(FileObserver::new(&log_path))),
        alert_at_or_above: LoadSeverity::Error,
        ..Default::default()
    };

    let _ = load_from_path("tests/fixtures/ragged.csv", &opts).unwrap_err();
    let semicolons = LoadOptions {
        delimiter: b';',
        trim: false,
        ..opts.clone()
    };
    load_from_path("tests/fixtures/semicolon.csv", &semicolons).unwrap();

    let logged = std::fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = logged.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains(" failed path=tests/fixtures/ragged.csv delimiter=','"));
    assert!(lines[0].contains("severity=Error line=3 err=malformed input"));
    assert!(lines[1].contains(" ALERT "));
    assert!(lines[2].contains(" loaded path=tests/fixtures/semicolon.csv delimiter=';' trim=off"));

    let _ = std::fs::remove_file(&log_path);
}
