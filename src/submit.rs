//! Receipt submission
//!
//! The wizard hands each assembled record to a sink by value and does not
//! look back: no success or failure flows back into the entry flow.
//! Delivery (network, file, whatever) is entirely the sink's concern.

use std::sync::{Arc, Mutex, PoisonError};

use crate::models::ReceiptRecord;

/// Receives assembled receipt records
pub trait ReceiptSink: Send {
    /// Take ownership of one finished record
    fn submit(&mut self, record: ReceiptRecord);
}

/// Sink that buffers records in shared memory
///
/// Clones share one buffer, so the caller can keep a handle while the
/// wizard owns its own boxed clone. The TUI drains the buffer after the
/// terminal is restored and prints the records as JSON.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    records: Arc<Mutex<Vec<ReceiptRecord>>>,
}

impl CollectingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every record collected so far
    pub fn drain(&self) -> Vec<ReceiptRecord> {
        let mut records = self
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *records)
    }

    /// Number of records collected so far
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check whether nothing has been collected yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReceiptSink for CollectingSink {
    fn submit(&mut self, record: ReceiptRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemRecord, Price, StepOneData, StepTwoData};

    fn sample_record(location: &str) -> ReceiptRecord {
        ReceiptRecord::new(
            StepOneData::new("2024-01-05", location),
            StepTwoData::new(vec![ItemRecord::new("Milk", 1, Price::from_cents(350))]),
        )
    }

    #[test]
    fn test_collecting_sink_preserves_order() {
        let sink = CollectingSink::new();
        let mut boxed: Box<dyn ReceiptSink> = Box::new(sink.clone());

        boxed.submit(sample_record("Market St"));
        boxed.submit(sample_record("Elm Ave"));

        let records = sink.drain();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].step_one.location, "Market St");
        assert_eq!(records[1].step_one.location, "Elm Ave");
    }

    #[test]
    fn test_drain_empties_the_buffer() {
        let sink = CollectingSink::new();
        let mut boxed: Box<dyn ReceiptSink> = Box::new(sink.clone());
        boxed.submit(sample_record("Market St"));

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.drain().len(), 1);
        assert!(sink.is_empty());
    }
}
