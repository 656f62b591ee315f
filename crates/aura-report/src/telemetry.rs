//! Append-only query telemetry.
//!
//! One `timestamp,query` line per non-empty query. Commas in the query
//! become semicolons and newlines become spaces so a line stays a line.
//! Write failures are swallowed: logging never interrupts the primary flow.

use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

const HEADER: &str = "timestamp,query";

/// The telemetry log file. Single writer by construction (one query is
/// processed start-to-finish); the handle is opened and closed per record.
#[derive(Debug, Clone)]
pub struct Telemetry {
    path: PathBuf,
}

impl Telemetry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a query. Empty queries and I/O failures are ignored.
    pub fn record(&self, query: &str) {
        if query.trim().is_empty() {
            return;
        }
        if let Err(e) = self.append(query) {
            warn!(path = %self.path.display(), error = %e, "telemetry write failed");
        }
    }

    fn append(&self, query: &str) -> std::io::Result<()> {
        let write_header = !self.path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if write_header {
            writeln!(file, "{}", HEADER)?;
        }
        writeln!(
            file,
            "{},{}",
            Utc::now().to_rfc3339(),
            sanitize_query(query)
        )
    }
}

/// Make a query safe for one CSV line: commas to semicolons, newlines and
/// carriage returns to spaces.
pub fn sanitize_query(query: &str) -> String {
    query.replace(',', ";").replace('\n', " ").replace('\r', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_commas_and_newlines() {
        assert_eq!(sanitize_query("a,b\nc"), "a;b c");
        assert_eq!(sanitize_query("plain"), "plain");
    }

    #[test]
    fn header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let log = Telemetry::new(dir.path().join("telemetry.csv"));
        log.record("first query");
        log.record("second query");

        let content = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "timestamp,query");
        assert!(lines[1].ends_with("first query"));
        assert!(lines[2].ends_with("second query"));
    }

    #[test]
    fn empty_queries_are_not_logged() {
        let dir = tempfile::tempdir().unwrap();
        let log = Telemetry::new(dir.path().join("telemetry.csv"));
        log.record("");
        log.record("   ");
        assert!(!log.path().exists());
    }

    #[test]
    fn embedded_separators_stay_on_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let log = Telemetry::new(dir.path().join("telemetry.csv"));
        log.record("a,b\nc");
        let content = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.lines().nth(1).unwrap().contains("a;b c"));
    }

    #[test]
    fn write_failure_is_swallowed() {
        // Path whose parent does not exist: append fails, record must not panic.
        let log = Telemetry::new("/nonexistent-dir/telemetry.csv");
        log.record("query");
    }
}
