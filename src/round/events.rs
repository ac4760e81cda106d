//! Change notifications published by the round engine.
//!
//! Every successful mutation pushes events onto the controller's queue,
//! synchronously, in the order the changes happened. Presentation drains
//! the queue after each call and reacts; nothing here is asynchronous.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Feedback, Slot};

use super::derived::DerivedState;
use super::model::RoundOutcome;

/// A single engine notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// An in-progress slot changed value, including resets to empty.
    SlotChanged {
        slot: Slot,
        color: Option<Color>,
    },

    /// A move was committed: history grew by the entry at `index`.
    MoveCommitted {
        index: usize,
        feedback: Feedback,
    },

    /// The validity/duplicate/ready flags moved.
    DerivedStateChanged(DerivedState),

    /// The committed move ended the round.
    RoundOver(RoundOutcome),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() {
        let event = RoundEvent::MoveCommitted {
            index: 2,
            feedback: Feedback { guess: 1, correct: 2 },
        };

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: RoundEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
