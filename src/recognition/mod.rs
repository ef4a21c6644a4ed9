//! Receipt image recognition
//!
//! This module covers the optional OCR-assisted autofill path:
//! - Recognizer: image to raw text (external OCR command)
//! - FieldExtractor: raw text to a partial field overlay
//! - RecognitionPipeline: the composed operation the wizard invokes

pub mod extract;
pub mod pipeline;
pub mod recognizer;

pub use extract::{FieldExtractor, NoopExtractor};
pub use pipeline::RecognitionPipeline;
pub use recognizer::{Recognizer, TesseractRecognizer};
