//! Session logging for receipt-cli
//!
//! Records the lifecycle of each wizard run (step captures, recognition
//! attempts, dispatches) in an append-only session log.
//!
//! # Architecture
//!
//! The session log consists of two components:
//!
//! - `SessionEntry`: Represents a single log entry with timestamp, session
//!   id, event, and an optional detail string and JSON payload.
//! - `SessionLogger`: Handles writing entries to the session log file using
//!   a line-delimited JSON format (JSONL).
//!
//! # Example
//!
//! ```rust,ignore
//! use receipt_cli::session::{SessionEntry, SessionEvent, SessionId, SessionLogger};
//!
//! let logger = SessionLogger::new(session_log_path);
//! let session_id = SessionId::new();
//!
//! let entry = SessionEntry::new(session_id, SessionEvent::StepOneCaptured)
//!     .with_payload(&step_one_data);
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{SessionEntry, SessionEvent, SessionId};
pub use logger::SessionLogger;
