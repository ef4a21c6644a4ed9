//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use crate::config::settings::Settings;
use crate::recognition::RecognitionPipeline;
use crate::wizard::ReceiptWizard;

use super::event::Event;
use super::views::step_one::StepOneFormState;
use super::views::step_two::StepTwoFormState;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    ParsingError,
    ConfirmQuit,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Wizard state machine driving the two entry steps
    pub wizard: ReceiptWizard,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Status message to display
    pub status_message: Option<String>,

    /// Step one form state (date, location, image path)
    pub step_one_form: StepOneFormState,

    /// Step two form state (item editor and item list)
    pub step_two_form: StepTwoFormState,

    /// Sender for events posted by background recognition jobs
    event_tx: mpsc::Sender<Event>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(
        wizard: ReceiptWizard,
        settings: &'a Settings,
        event_tx: mpsc::Sender<Event>,
    ) -> Self {
        Self {
            settings,
            wizard,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            status_message: None,
            step_one_form: StepOneFormState::new(settings),
            step_two_form: StepTwoFormState::new(),
            event_tx,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Start a background recognition job for the given image.
    ///
    /// The job posts its result back through the event channel, so the
    /// entry loop stays responsive while the OCR command runs.
    pub fn spawn_recognition(&self, image: PathBuf) {
        let pipeline = RecognitionPipeline::from_settings(self.settings);
        let sender = self.event_tx.clone();
        thread::spawn(move || {
            let result = pipeline.run(&image);
            // The receiver is gone when the app already exited
            let _ = sender.send(Event::Recognition(result));
        });
    }

    /// Reset the item editor when the wizard advances to step two
    pub fn enter_step_two(&mut self) {
        self.step_two_form = StepTwoFormState::new();
    }
}
