//! # codebreak
//!
//! A Mastermind-style deduction game round engine.
//!
//! A hidden 4-slot color target is drawn at round start. The player edits
//! an in-progress 4-slot guess and commits it; each committed guess is
//! scored against the target until it matches exactly (win) or the step
//! budget runs out (loss).
//!
//! ## Design Principles
//!
//! 1. **Single writer**: [`RoundController`] is the only mutator of a
//!    [`RoundModel`]. Everything else reads `&RoundModel` or a
//!    [`RoundSnapshot`].
//!
//! 2. **Deterministic**: randomness comes from an injected, seeded
//!    [`RoundRng`]; the same seed always draws the same target.
//!
//! 3. **Synchronous**: every operation completes before returning. Change
//!    notifications queue on the controller and the host drains them; no
//!    background work, no locks.
//!
//! 4. **Invalid states are unrepresentable where practical**: finalized
//!    records hold four distinct colors by construction; only the editable
//!    [`Draft`] can have empty slots.
//!
//! ## Modules
//!
//! - `core`: palette colors, slots, step records, feedback, RNG, config
//! - `round`: the round model, its controller, derived state, notifications

pub mod core;
pub mod round;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorSet, Draft, Feedback, RoundConfig, RoundRng, ScoredStep, Slot, StepRecord,
    SLOT_COUNT,
};

pub use crate::round::{
    CommitError, DerivedState, DerivedStateTracker, RoundController, RoundEvent, RoundModel,
    RoundOutcome, RoundSnapshot,
};
