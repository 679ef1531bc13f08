//! HLT path, trigger object, and L1 extraction.

use evtable_foundation::{Error, L1TriggerWord, PathDecision, Result, TriggerObject};
use evtable_storage::EventRecord;
use tracing::debug;

/// Copies trigger information into the event record.
#[derive(Clone, Copy, Debug)]
pub struct TriggerExtractor {
    l1_word_bits: usize,
}

impl Default for TriggerExtractor {
    fn default() -> Self {
        Self::new(evtable_foundation::L1_WORD_BITS)
    }
}

impl TriggerExtractor {
    /// Creates an extractor substituting L1 words of the given width.
    #[must_use]
    pub fn new(l1_word_bits: usize) -> Self {
        Self { l1_word_bits }
    }

    /// Appends one `(name, decision, prescale)` triple per path, in order.
    ///
    /// # Errors
    ///
    /// Returns a malformed association error if there are fewer prescales
    /// than paths.
    pub fn extract_paths(
        &self,
        paths: &[PathDecision],
        prescales: &[f32],
        record: &mut EventRecord,
    ) -> Result<()> {
        if prescales.len() < paths.len() {
            return Err(Error::malformed(format!(
                "{} trigger paths but only {} prescales",
                paths.len(),
                prescales.len()
            )));
        }
        for (path, &prescale) in paths.iter().zip(prescales) {
            record.push_trigger(&path.name, path.accept, prescale);
        }
        Ok(())
    }

    /// Appends every trigger object after checking its path references.
    ///
    /// # Errors
    ///
    /// Returns a malformed association error if an object references a path
    /// outside `paths`.
    pub fn extract_objects(
        &self,
        objects: &[TriggerObject],
        paths: &[PathDecision],
        record: &mut EventRecord,
    ) -> Result<()> {
        for object in objects {
            object.unpack_path_names(paths)?;
            record.push_trigger_object(object);
        }
        Ok(())
    }

    /// The event's L1 word, or an all-false substitute when absent.
    #[must_use]
    pub fn l1_word(&self, word: Option<&L1TriggerWord>) -> L1TriggerWord {
        match word {
            Some(word) => {
                let fired: Vec<usize> = word.set_bits().collect();
                debug!(decision = word.decision, ?fired, "L1 global decision");
                word.clone()
            }
            None => {
                debug!(bits = self.l1_word_bits, "no L1 readout, using null word");
                L1TriggerWord::null(self.l1_word_bits)
            }
        }
    }
}
