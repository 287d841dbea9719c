//! Sequence Ordering State
//!
//! Tracks the last server-acknowledged order and decides whether a freshly
//! read order needs to be persisted. Kept free of DOM types so the save
//! logic is testable off-browser.

use crate::models::{ImageId, ReorderRequest};

/// Result of comparing a freshly read order against the baseline
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Order matches the baseline; no request should be issued
    Unchanged,
    /// Order changed; send this request, then [`SequenceEditor::commit`]
    Persist(ReorderRequest),
}

/// Holds the confirmed (server-acknowledged) order of the sequence
#[derive(Debug, Clone)]
pub struct SequenceEditor {
    confirmed: Vec<ImageId>,
}

impl SequenceEditor {
    pub fn new(initial_order: Vec<ImageId>) -> Self {
        Self {
            confirmed: initial_order,
        }
    }

    pub fn confirmed(&self) -> &[ImageId] {
        &self.confirmed
    }

    /// Compare `working` (the order just read from the gallery) against the
    /// baseline. Length and element order both count; same ids in a
    /// different order is a change.
    pub fn prepare_save(&self, working: &[ImageId]) -> SaveOutcome {
        if working == self.confirmed.as_slice() {
            SaveOutcome::Unchanged
        } else {
            SaveOutcome::Persist(ReorderRequest {
                image_ids: working.to_vec(),
            })
        }
    }

    /// Advance the baseline after the server acknowledged `working`.
    /// Copies the slice so later mutation of the caller's order cannot
    /// silently alter the recorded baseline.
    pub fn commit(&mut self, working: &[ImageId]) {
        self.confirmed = working.to_vec();
    }
}

#[cfg(test)]
mod tests {
    use super::{SaveOutcome, SequenceEditor};
    use crate::models::ReorderRequest;

    #[test]
    fn test_unchanged_order_skips_request() {
        let editor = SequenceEditor::new(vec![1, 2, 3]);
        assert_eq!(editor.prepare_save(&[1, 2, 3]), SaveOutcome::Unchanged);
    }

    #[test]
    fn test_same_set_different_order_is_a_change() {
        let editor = SequenceEditor::new(vec![1, 2, 3]);
        assert_eq!(
            editor.prepare_save(&[3, 2, 1]),
            SaveOutcome::Persist(ReorderRequest {
                image_ids: vec![3, 2, 1]
            })
        );
    }

    #[test]
    fn test_length_change_is_a_change() {
        let editor = SequenceEditor::new(vec![1, 2, 3]);
        assert!(matches!(
            editor.prepare_save(&[1, 2]),
            SaveOutcome::Persist(_)
        ));
    }

    #[test]
    fn test_payload_is_the_working_order() {
        let editor = SequenceEditor::new(vec![101, 102, 103]);
        match editor.prepare_save(&[103, 101, 102]) {
            SaveOutcome::Persist(req) => assert_eq!(req.image_ids, vec![103, 101, 102]),
            SaveOutcome::Unchanged => panic!("reorder not detected"),
        }
    }

    #[test]
    fn test_commit_advances_baseline() {
        let mut editor = SequenceEditor::new(vec![101, 102, 103]);
        let working = [103, 101, 102];

        assert!(matches!(
            editor.prepare_save(&working),
            SaveOutcome::Persist(_)
        ));
        editor.commit(&working);

        assert_eq!(editor.confirmed(), &working);
        // Second save with the now-matching order stays silent
        assert_eq!(editor.prepare_save(&working), SaveOutcome::Unchanged);
    }

    #[test]
    fn test_failed_request_leaves_baseline_behind() {
        let mut editor = SequenceEditor::new(vec![1, 2]);
        let working = [2, 1];

        // Request failed: no commit. The next save with the same DOM order
        // still differs from the baseline and is retried.
        assert!(matches!(
            editor.prepare_save(&working),
            SaveOutcome::Persist(_)
        ));
        assert_eq!(editor.confirmed(), &[1, 2]);
        assert!(matches!(
            editor.prepare_save(&working),
            SaveOutcome::Persist(_)
        ));

        editor.commit(&working);
        assert_eq!(editor.prepare_save(&working), SaveOutcome::Unchanged);
    }
}
