//! Receipt image recognition
//!
//! The recognizer turns a receipt image into raw text. The production
//! implementation shells out to an external OCR command (tesseract by
//! default); every failure along that path collapses into the single
//! recognition error so callers only ever see "recognition failed".

use std::path::Path;
use std::process::Command;

use crate::config::Settings;
use crate::error::{ReceiptError, ReceiptResult};

/// Turns a receipt image into recognized text
pub trait Recognizer: Send {
    /// Recognize the text content of an image file
    fn recognize(&self, image: &Path) -> ReceiptResult<String>;
}

/// Recognizer backed by an external tesseract-style OCR command
///
/// Invokes `<command> <image> stdout -l <language>` and captures stdout.
#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
    command: String,
    language: String,
}

impl TesseractRecognizer {
    /// Create a recognizer for a specific OCR command and language
    pub fn new(command: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            language: language.into(),
        }
    }

    /// Create a recognizer from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.ocr_command, &settings.ocr_language)
    }
}

impl Recognizer for TesseractRecognizer {
    fn recognize(&self, image: &Path) -> ReceiptResult<String> {
        if !image.exists() {
            return Err(ReceiptError::recognition(format!(
                "image not found: {}",
                image.display()
            )));
        }

        let output = Command::new(&self.command)
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .map_err(|e| {
                ReceiptError::recognition(format!("failed to run {}: {}", self.command, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ReceiptError::recognition(format!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|_| ReceiptError::recognition("OCR output was not valid UTF-8"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_image_is_recognition_error() {
        let recognizer = TesseractRecognizer::new("tesseract", "eng");
        let err = recognizer
            .recognize(Path::new("/nonexistent/receipt.png"))
            .unwrap_err();
        assert!(err.is_recognition());
    }

    #[test]
    fn test_missing_command_is_recognition_error() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let recognizer = TesseractRecognizer::new("definitely-not-a-real-ocr-command", "eng");
        let err = recognizer.recognize(temp.path()).unwrap_err();
        assert!(err.is_recognition());
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_command_output_is_returned() {
        // `echo` stands in for the OCR command and prints its arguments
        let temp = tempfile::NamedTempFile::new().unwrap();
        let recognizer = TesseractRecognizer::new("echo", "eng");
        let text = recognizer.recognize(temp.path()).unwrap();
        assert!(text.contains("stdout"));
        assert!(text.contains("-l eng"));
    }
}
