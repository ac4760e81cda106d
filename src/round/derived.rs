//! Derived state: the flags presentation needs to gate the commit action.
//!
//! The tracker is a read-only observer. It recomputes after every edit —
//! the computation is pure, cheap, and idempotent, so there is no need to
//! coalesce bursts of edits — and reports only actual flag movement, which
//! is what gates the corresponding change notification.

use serde::{Deserialize, Serialize};

use super::model::RoundModel;

/// Validity/duplicate/ready flags for the in-progress step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedState {
    /// The in-progress step has four distinct, non-empty colors.
    pub has_valid_combination: bool,

    /// Index of the first history entry slot-equal to the in-progress step,
    /// if any. An incomplete step never matches a history entry.
    pub duplicate_from_history: Option<usize>,

    /// The commit action is legal: valid combination, no history duplicate.
    pub ready_to_move: bool,
}

impl DerivedState {
    /// Compute the flags from the current model state.
    #[must_use]
    pub fn compute(model: &RoundModel) -> Self {
        let completed = model.current().complete();
        let has_valid_combination = completed.is_some();

        let duplicate_from_history = completed.and_then(|record| {
            model
                .history()
                .iter()
                .position(|entry| *entry.record() == record)
        });

        Self {
            has_valid_combination,
            duplicate_from_history,
            ready_to_move: has_valid_combination && duplicate_from_history.is_none(),
        }
    }
}

/// Caches the last published flags and detects movement.
#[derive(Clone, Debug)]
pub struct DerivedStateTracker {
    current: DerivedState,
}

impl DerivedStateTracker {
    /// Create a tracker seeded from the model's current state.
    #[must_use]
    pub fn new(model: &RoundModel) -> Self {
        Self {
            current: DerivedState::compute(model),
        }
    }

    /// The last computed flags.
    #[must_use]
    pub fn current(&self) -> DerivedState {
        self.current
    }

    /// Recompute against the model. Returns the new flags only when they
    /// differ from the last published set.
    pub fn recompute(&mut self, model: &RoundModel) -> Option<DerivedState> {
        let next = DerivedState::compute(model);
        if next == self.current {
            None
        } else {
            self.current = next;
            Some(next)
        }
    }
}
