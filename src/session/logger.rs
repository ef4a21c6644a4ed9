//! Session logger for the append-only session log
//!
//! Provides the SessionLogger struct that writes session entries to a log
//! file. Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{ReceiptError, ReceiptResult};

use super::entry::SessionEntry;

/// Handles writing session entries to the session log file
///
/// The log file uses a line-delimited JSON format (JSONL) where each line
/// is a complete JSON object representing one session entry.
pub struct SessionLogger {
    /// Path to the session log file
    log_path: PathBuf,
}

impl SessionLogger {
    /// Create a new SessionLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Log a session entry
    ///
    /// Appends the entry as a JSON line to the session log file.
    /// Each write is flushed immediately to ensure durability.
    pub fn log(&self, entry: &SessionEntry) -> ReceiptResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| ReceiptError::Io(format!("Failed to open session log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| ReceiptError::Json(format!("Failed to serialize session entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| ReceiptError::Io(format!("Failed to write session entry: {}", e)))?;

        file.flush()
            .map_err(|e| ReceiptError::Io(format!("Failed to flush session log: {}", e)))?;

        Ok(())
    }

    /// Read all session entries from the log file
    ///
    /// Returns entries in chronological order (oldest first).
    pub fn read_all(&self) -> ReceiptResult<Vec<SessionEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| ReceiptError::Io(format!("Failed to open session log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                ReceiptError::Io(format!(
                    "Failed to read session log line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            let entry: SessionEntry = serde_json::from_str(&line).map_err(|e| {
                ReceiptError::Json(format!(
                    "Failed to parse session entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Check if the session log file exists
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Get the path to the session log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::entry::{SessionEvent, SessionId};
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_logger() -> (SessionLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("sessions.log");
        let logger = SessionLogger::new(log_path);
        (logger, temp_dir)
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        let session_id = SessionId::new();

        let entry = SessionEntry::new(session_id, SessionEvent::StepOneCaptured)
            .with_payload(&json!({"date": "2024-01-05", "location": "Market St"}));
        logger.log(&entry).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].event, SessionEvent::StepOneCaptured);
        assert_eq!(entries[0].session_id, session_id);
    }

    #[test]
    fn test_multiple_entries_in_order() {
        let (logger, _temp) = create_test_logger();
        let session_id = SessionId::new();

        let events = [
            SessionEvent::StepOneCaptured,
            SessionEvent::RecognitionStarted,
            SessionEvent::RecognitionFailed,
            SessionEvent::RecognitionRetried,
        ];
        for event in events {
            logger.log(&SessionEntry::new(session_id, event)).unwrap();
        }

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[2].event, SessionEvent::RecognitionFailed);
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();

        assert!(!logger.exists());
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_survives_reopen() {
        let (logger, temp) = create_test_logger();

        let entry = SessionEntry::new(SessionId::new(), SessionEvent::ReceiptDispatched);
        logger.log(&entry).unwrap();

        // A new logger pointing at the same file still reads everything
        let logger2 = SessionLogger::new(temp.path().join("sessions.log"));
        let entries = logger2.read_all().unwrap();
        assert_eq!(entries.len(), 1);
    }
}
