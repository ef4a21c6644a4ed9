//! Receipt entry wizard
//!
//! The two-step state machine behind the entry flow. The wizard owns the
//! captured step data, the recognition bookkeeping, and the submission
//! sink; it knows nothing about rendering or key handling, which makes the
//! whole flow drivable from tests.
//!
//! Step one resolves in one of two ways: an immediate advance when no image
//! is attached, or a recognition round-trip when one is. Recognition runs
//! outside the wizard (the TUI puts it on a worker thread); its result
//! comes back through `complete_recognition`.

use std::path::PathBuf;

use crate::error::ReceiptError;
use crate::models::{ParsedData, ReceiptRecord, StepOneData, StepTwoData};
use crate::session::{SessionEntry, SessionEvent, SessionId, SessionLogger};
use crate::submit::ReceiptSink;

/// The two screens of the entry flow
///
/// Transitions run strictly forward; there is no way back to step one and
/// no step three to fall off into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    /// Collecting date, location, and the optional receipt image
    #[default]
    StepOne,
    /// Collecting purchased items
    StepTwo,
}

/// Outcome of a step-one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOneOutcome {
    /// No image attached; the wizard advanced straight to step two
    Advanced,
    /// An image is attached; a recognition job must run and report back
    /// through `complete_recognition` before the step resolves
    RecognitionStarted(PathBuf),
    /// The submission was not accepted: a recognition job is still
    /// outstanding, or the wizard is already past step one
    Rejected,
}

/// The receipt entry state machine
pub struct ReceiptWizard {
    session_id: SessionId,
    step: WizardStep,
    step_one: StepOneData,
    step_two: StepTwoData,
    parsed: ParsedData,
    parsing_error: bool,
    recognition_in_flight: bool,
    /// Step-one data held back while its recognition job runs; captured on
    /// success, discarded on failure
    pending_step_one: Option<StepOneData>,
    sink: Box<dyn ReceiptSink>,
    logger: Option<SessionLogger>,
}

impl ReceiptWizard {
    /// Create a wizard dispatching to the given sink
    pub fn new(sink: Box<dyn ReceiptSink>) -> Self {
        Self {
            session_id: SessionId::new(),
            step: WizardStep::default(),
            step_one: StepOneData::default(),
            step_two: StepTwoData::default(),
            parsed: ParsedData::default(),
            parsing_error: false,
            recognition_in_flight: false,
            pending_step_one: None,
            sink,
            logger: None,
        }
    }

    /// Create a wizard that also records lifecycle events to a session log
    pub fn with_logger(sink: Box<dyn ReceiptSink>, logger: SessionLogger) -> Self {
        let mut wizard = Self::new(sink);
        wizard.logger = Some(logger);
        wizard
    }

    /// Submit step one
    ///
    /// Without an image the data is captured and the wizard advances
    /// immediately. With an image the data is parked, a recognition job is
    /// owed, and nothing is captured until `complete_recognition` reports
    /// success.
    pub fn submit_step_one(
        &mut self,
        data: StepOneData,
        image: Option<PathBuf>,
    ) -> StepOneOutcome {
        if self.step != WizardStep::StepOne || self.recognition_in_flight {
            return StepOneOutcome::Rejected;
        }

        match image {
            None => {
                self.capture_step_one(data);
                self.step = WizardStep::StepTwo;
                StepOneOutcome::Advanced
            }
            Some(image) => {
                self.recognition_in_flight = true;
                self.pending_step_one = Some(data);
                self.log(
                    SessionEntry::new(self.session_id, SessionEvent::RecognitionStarted)
                        .with_detail(image.display().to_string()),
                );
                StepOneOutcome::RecognitionStarted(image)
            }
        }
    }

    /// Apply the result of the outstanding recognition job
    ///
    /// On success the parked step-one data is captured, with blank fields
    /// filled from the recognized overlay, and the wizard advances. On
    /// failure the parked data is discarded and the wizard stays on step
    /// one with the parsing-error flag raised; only `retry_parsing` clears
    /// it. A result arriving with no job outstanding is ignored.
    pub fn complete_recognition(&mut self, result: Result<ParsedData, ReceiptError>) {
        if !self.recognition_in_flight {
            return;
        }
        self.recognition_in_flight = false;

        match result {
            Ok(parsed) => {
                self.log(SessionEntry::new(
                    self.session_id,
                    SessionEvent::RecognitionSucceeded,
                ));
                if let Some(mut data) = self.pending_step_one.take() {
                    data.merge_defaults(&parsed);
                    self.parsed = parsed;
                    self.capture_step_one(data);
                    self.step = WizardStep::StepTwo;
                }
            }
            Err(err) => {
                self.pending_step_one = None;
                self.parsing_error = true;
                self.log(
                    SessionEntry::new(self.session_id, SessionEvent::RecognitionFailed)
                        .with_detail(err.to_string()),
                );
            }
        }
    }

    /// Clear the parsing-error flag and any partially parsed data
    ///
    /// This is the only way out of a failed recognition; the panel fields
    /// themselves are untouched so the user can fix the image path or just
    /// proceed manually.
    pub fn retry_parsing(&mut self) {
        if self.step != WizardStep::StepOne {
            return;
        }
        if self.parsing_error {
            self.log(SessionEntry::new(
                self.session_id,
                SessionEvent::RecognitionRetried,
            ));
        }
        self.parsing_error = false;
        self.parsed = ParsedData::default();
    }

    /// Submit step two: assemble the full record and dispatch it
    ///
    /// Returns true when a record was handed to the sink. The wizard stays
    /// on step two; a later submission assembles and dispatches again.
    pub fn submit_step_two(&mut self, data: StepTwoData) -> bool {
        if self.step != WizardStep::StepTwo {
            return false;
        }

        self.step_two = data;
        let record = ReceiptRecord::new(self.step_one.clone(), self.step_two.clone());
        self.log(
            SessionEntry::new(self.session_id, SessionEvent::ReceiptDispatched)
                .with_payload(&record),
        );
        self.sink.submit(record);
        true
    }

    /// The session id correlating this run's log entries
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// The currently active step
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Whether the last recognition attempt failed and has not been retried
    pub fn parsing_error(&self) -> bool {
        self.parsing_error
    }

    /// Whether a recognition job is outstanding
    pub fn is_recognizing(&self) -> bool {
        self.recognition_in_flight
    }

    /// The overlay recovered by the last successful recognition
    pub fn parsed(&self) -> &ParsedData {
        &self.parsed
    }

    /// Step-one data as last captured
    pub fn step_one(&self) -> &StepOneData {
        &self.step_one
    }

    /// Step-two data as last captured
    pub fn step_two(&self) -> &StepTwoData {
        &self.step_two
    }

    fn capture_step_one(&mut self, data: StepOneData) {
        self.log(
            SessionEntry::new(self.session_id, SessionEvent::StepOneCaptured)
                .with_payload(&data),
        );
        self.step_one = data;
    }

    // Log failures never interrupt entry
    fn log(&self, entry: SessionEntry) {
        if let Some(logger) = &self.logger {
            let _ = logger.log(&entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemRecord, Price};
    use crate::session::SessionEvent;
    use crate::submit::CollectingSink;
    use std::path::Path;

    fn wizard_with_sink() -> (ReceiptWizard, CollectingSink) {
        let sink = CollectingSink::new();
        let wizard = ReceiptWizard::new(Box::new(sink.clone()));
        (wizard, sink)
    }

    fn sample_items() -> Vec<ItemRecord> {
        vec![
            ItemRecord::new("Milk", 1, Price::from_cents(350)),
            ItemRecord::new("Eggs", 2, Price::from_cents(400)),
        ]
    }

    #[test]
    fn test_starts_on_step_one() {
        let (wizard, _) = wizard_with_sink();
        assert_eq!(wizard.step(), WizardStep::StepOne);
        assert!(!wizard.parsing_error());
        assert!(!wizard.is_recognizing());
        assert_eq!(*wizard.step_one(), StepOneData::default());
    }

    #[test]
    fn test_submit_without_image_advances() {
        let (mut wizard, _) = wizard_with_sink();

        let outcome =
            wizard.submit_step_one(StepOneData::new("2024-01-05", "Market St"), None);

        assert_eq!(outcome, StepOneOutcome::Advanced);
        assert_eq!(wizard.step(), WizardStep::StepTwo);
        assert_eq!(wizard.step_one().date, "2024-01-05");
        assert_eq!(wizard.step_one().location, "Market St");
    }

    #[test]
    fn test_submit_with_image_starts_recognition() {
        let (mut wizard, _) = wizard_with_sink();

        let outcome = wizard.submit_step_one(
            StepOneData::new("2024-01-05", "Market St"),
            Some(PathBuf::from("receipt.png")),
        );

        assert_eq!(
            outcome,
            StepOneOutcome::RecognitionStarted(PathBuf::from("receipt.png"))
        );
        assert!(wizard.is_recognizing());
        // Nothing is captured until the job reports back
        assert_eq!(wizard.step(), WizardStep::StepOne);
        assert_eq!(*wizard.step_one(), StepOneData::default());
    }

    #[test]
    fn test_recognition_failure_stays_on_step_one() {
        let (mut wizard, _) = wizard_with_sink();
        wizard.submit_step_one(
            StepOneData::new("2024-01-05", "Market St"),
            Some(PathBuf::from("receipt.png")),
        );

        wizard.complete_recognition(Err(ReceiptError::recognition("simulated failure")));

        assert_eq!(wizard.step(), WizardStep::StepOne);
        assert!(wizard.parsing_error());
        assert!(!wizard.is_recognizing());
        assert_eq!(*wizard.step_one(), StepOneData::default());
    }

    #[test]
    fn test_retry_clears_flag_and_parsed() {
        let (mut wizard, _) = wizard_with_sink();
        wizard.submit_step_one(
            StepOneData::default(),
            Some(PathBuf::from("receipt.png")),
        );
        wizard.complete_recognition(Err(ReceiptError::recognition("simulated failure")));
        assert!(wizard.parsing_error());

        wizard.retry_parsing();

        assert!(!wizard.parsing_error());
        assert!(wizard.parsed().is_empty());
        assert_eq!(wizard.step(), WizardStep::StepOne);
    }

    #[test]
    fn test_recognition_success_advances_and_fills_blanks() {
        let (mut wizard, _) = wizard_with_sink();
        wizard.submit_step_one(
            StepOneData::new("2024-01-05", ""),
            Some(PathBuf::from("receipt.png")),
        );

        let parsed = ParsedData {
            date: Some("2024-02-09".to_string()),
            location: Some("Market St".to_string()),
            items: None,
        };
        wizard.complete_recognition(Ok(parsed));

        assert_eq!(wizard.step(), WizardStep::StepTwo);
        // Manual entry wins; only the blank field takes the parsed value
        assert_eq!(wizard.step_one().date, "2024-01-05");
        assert_eq!(wizard.step_one().location, "Market St");
        assert!(!wizard.parsed().is_empty());
    }

    #[test]
    fn test_double_submission_rejected_while_in_flight() {
        let (mut wizard, _) = wizard_with_sink();
        wizard.submit_step_one(
            StepOneData::default(),
            Some(PathBuf::from("receipt.png")),
        );

        let outcome = wizard.submit_step_one(StepOneData::default(), None);

        assert_eq!(outcome, StepOneOutcome::Rejected);
        assert!(wizard.is_recognizing());
    }

    #[test]
    fn test_step_one_submission_rejected_after_advance() {
        let (mut wizard, _) = wizard_with_sink();
        wizard.submit_step_one(StepOneData::new("2024-01-05", "Market St"), None);

        let outcome = wizard.submit_step_one(StepOneData::new("other", "other"), None);

        assert_eq!(outcome, StepOneOutcome::Rejected);
        assert_eq!(wizard.step_one().date, "2024-01-05");
    }

    #[test]
    fn test_stray_recognition_result_is_ignored() {
        let (mut wizard, _) = wizard_with_sink();

        wizard.complete_recognition(Err(ReceiptError::recognition("stray")));

        assert!(!wizard.parsing_error());
        assert_eq!(wizard.step(), WizardStep::StepOne);
    }

    #[test]
    fn test_submit_step_two_dispatches_in_order() {
        let (mut wizard, sink) = wizard_with_sink();
        wizard.submit_step_one(StepOneData::new("2024-01-05", "Market St"), None);

        let accepted = wizard.submit_step_two(StepTwoData::new(sample_items()));

        assert!(accepted);
        let records = sink.drain();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].step_one.location, "Market St");
        assert_eq!(records[0].step_two.items.len(), 2);
        assert_eq!(records[0].step_two.items[0].name, "Milk");
        assert_eq!(records[0].step_two.items[1].name, "Eggs");
        assert_eq!(records[0].step_two.items[1].price, Price::from_cents(400));
    }

    #[test]
    fn test_step_two_submission_rejected_on_step_one() {
        let (mut wizard, sink) = wizard_with_sink();

        let accepted = wizard.submit_step_two(StepTwoData::new(sample_items()));

        assert!(!accepted);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_resubmission_dispatches_again() {
        let (mut wizard, sink) = wizard_with_sink();
        wizard.submit_step_one(StepOneData::new("2024-01-05", "Market St"), None);

        wizard.submit_step_two(StepTwoData::new(sample_items()));
        wizard.submit_step_two(StepTwoData::new(vec![]));

        let records = sink.drain();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].step_two.items.len(), 2);
        assert!(records[1].step_two.items.is_empty());
        assert_eq!(records[1].step_one.location, "Market St");
    }

    #[test]
    fn test_empty_step_one_is_accepted() {
        let (mut wizard, _) = wizard_with_sink();

        let outcome = wizard.submit_step_one(StepOneData::default(), None);

        assert_eq!(outcome, StepOneOutcome::Advanced);
        assert_eq!(wizard.step(), WizardStep::StepTwo);
    }

    #[test]
    fn test_session_log_records_lifecycle() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let log_path = temp_dir.path().join("sessions.log");
        let sink = CollectingSink::new();
        let mut wizard = ReceiptWizard::with_logger(
            Box::new(sink.clone()),
            crate::session::SessionLogger::new(log_path.clone()),
        );

        wizard.submit_step_one(
            StepOneData::default(),
            Some(PathBuf::from("receipt.png")),
        );
        wizard.complete_recognition(Err(ReceiptError::recognition("simulated failure")));
        wizard.retry_parsing();
        wizard.submit_step_one(StepOneData::new("2024-01-05", "Market St"), None);
        wizard.submit_step_two(StepTwoData::new(sample_items()));

        let entries = crate::session::SessionLogger::new(log_path)
            .read_all()
            .unwrap();
        let events: Vec<SessionEvent> = entries.iter().map(|e| e.event).collect();
        assert_eq!(
            events,
            vec![
                SessionEvent::RecognitionStarted,
                SessionEvent::RecognitionFailed,
                SessionEvent::RecognitionRetried,
                SessionEvent::StepOneCaptured,
                SessionEvent::ReceiptDispatched,
            ]
        );
        // Every entry belongs to the same run
        let session_id = wizard.session_id();
        assert!(entries.iter().all(|e| e.session_id == session_id));
        // The dispatch entry carries the full record
        assert!(entries.last().unwrap().payload.is_some());
        assert!(Path::new(&temp_dir.path().join("sessions.log")).exists());
    }
}
