//! Simulated pileup extraction.

use evtable_foundation::{Error, PileupSummary, Result};
use evtable_storage::{EventRecord, labels};

/// Copies pileup summaries for simulated events.
#[derive(Clone, Copy, Debug, Default)]
pub struct PileupExtractor;

impl PileupExtractor {
    /// Creates the extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Appends one entry per bunch crossing. Real data is skipped and its
    /// pileup columns stay empty.
    ///
    /// # Errors
    ///
    /// Returns a missing collection error if a simulated event has no
    /// pileup summaries.
    pub fn extract(
        &self,
        is_real_data: bool,
        pileup: Option<&[PileupSummary]>,
        record: &mut EventRecord,
    ) -> Result<()> {
        if is_real_data {
            return Ok(());
        }
        let summaries = pileup.ok_or_else(|| Error::missing_collection(labels::PILEUP))?;
        for summary in summaries {
            record.push_pileup(summary);
        }
        Ok(())
    }
}
