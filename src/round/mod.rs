//! The round engine: model, controller, derived state, notifications.

pub mod controller;
pub mod derived;
pub mod events;
pub mod model;

pub use controller::{CommitError, RoundController};
pub use derived::{DerivedState, DerivedStateTracker};
pub use events::RoundEvent;
pub use model::{RoundModel, RoundOutcome, RoundSnapshot};
