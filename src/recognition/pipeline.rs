//! Recognition pipeline
//!
//! Composes a recognizer and a field extractor into the single operation
//! the wizard invokes: image in, parsed overlay out.

use std::path::Path;

use super::extract::{FieldExtractor, NoopExtractor};
use super::recognizer::{Recognizer, TesseractRecognizer};
use crate::config::Settings;
use crate::error::ReceiptResult;
use crate::models::ParsedData;

/// Image-to-overlay pipeline: OCR followed by field extraction
pub struct RecognitionPipeline {
    recognizer: Box<dyn Recognizer>,
    extractor: Box<dyn FieldExtractor>,
}

impl RecognitionPipeline {
    /// Compose a pipeline from its two stages
    pub fn new(recognizer: Box<dyn Recognizer>, extractor: Box<dyn FieldExtractor>) -> Self {
        Self {
            recognizer,
            extractor,
        }
    }

    /// Build the default pipeline from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            Box::new(TesseractRecognizer::from_settings(settings)),
            Box::new(NoopExtractor),
        )
    }

    /// Run the pipeline for one image
    pub fn run(&self, image: &Path) -> ReceiptResult<ParsedData> {
        self.run_with_text(image).map(|(_, parsed)| parsed)
    }

    /// Run the pipeline and also return the raw recognized text
    pub fn run_with_text(&self, image: &Path) -> ReceiptResult<(String, ParsedData)> {
        let text = self.recognizer.recognize(image)?;
        let parsed = self.extractor.extract(&text);
        Ok((text, parsed))
    }
}
