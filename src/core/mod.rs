//! Core value types: palette colors, slots, step records, RNG, configuration.
//!
//! Everything here is a pure value with no knowledge of round flow; the
//! `round` module builds the engine on top of these.

pub mod config;
pub mod palette;
pub mod rng;
pub mod step;

pub use config::RoundConfig;
pub use palette::{Color, ColorSet};
pub use rng::RoundRng;
pub use step::{Draft, Feedback, ScoredStep, Slot, StepRecord, SLOT_COUNT};
