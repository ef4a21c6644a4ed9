//! Field extraction from recognized text
//!
//! Turning raw OCR text into structured receipt fields is a pluggable
//! collaborator; the heuristics themselves live behind the trait. The
//! shipped default recovers nothing, which still lets the wizard advance
//! on successful recognition with an empty overlay.

use crate::models::ParsedData;

/// Derives structured field values from recognized receipt text
pub trait FieldExtractor: Send {
    /// Extract whatever fields can be recovered; never fails, missing
    /// fields stay `None`
    fn extract(&self, text: &str) -> ParsedData;
}

/// Extractor that recovers nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExtractor;

impl FieldExtractor for NoopExtractor {
    fn extract(&self, _text: &str) -> ParsedData {
        ParsedData::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_extractor_returns_empty_overlay() {
        let extractor = NoopExtractor;
        let parsed = extractor.extract("MARKET ST GROCERY\n2024-01-05\nMILK 3.50");
        assert!(parsed.is_empty());
    }
}
