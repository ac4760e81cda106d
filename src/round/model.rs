//! The round data container.
//!
//! `RoundModel` owns the hidden target, the in-progress step, the
//! append-only history, and the step budget. It exposes read access to
//! everyone and mutation to nobody outside this crate: the controller is
//! the single writer, every other collaborator works from `&RoundModel`
//! or a [`RoundSnapshot`].

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Color, Draft, RoundConfig, RoundRng, ScoredStep, StepRecord, SLOT_COUNT};

/// Terminal result of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The last committed step matched the target.
    Win,
    /// The step budget ran out without a match.
    Loss,
}

/// State of one round: target, in-progress step, history, budget.
///
/// Created once per round and dropped when the round ends. The model has
/// no persistence of its own; hosts that want to save it serialize a
/// [`RoundSnapshot`].
#[derive(Clone, Debug)]
pub struct RoundModel {
    target: StepRecord,
    current: Draft,
    history: Vector<ScoredStep>,
    max_steps: u32,
}

impl RoundModel {
    /// Create a round with a freshly drawn target.
    ///
    /// The target is a uniformly random draw of four distinct colors from
    /// the six-color palette, taken without replacement from the injected
    /// generator.
    ///
    /// # Panics
    ///
    /// Panics if `max_steps` is zero.
    #[must_use]
    pub fn new(max_steps: u32, rng: &mut RoundRng) -> Self {
        let mut colors = Color::ALL;
        rng.shuffle(&mut colors);
        let [c1, c2, c3, c4, ..] = colors;

        Self::with_target(StepRecord::new([c1, c2, c3, c4]), max_steps)
    }

    /// Create a round from a host configuration.
    #[must_use]
    pub fn from_config(config: &RoundConfig, rng: &mut RoundRng) -> Self {
        Self::new(config.effective_max_steps(), rng)
    }

    /// Create a round with a known target. Used by tests and replay hosts.
    ///
    /// # Panics
    ///
    /// Panics if `max_steps` is zero.
    #[must_use]
    pub fn with_target(target: StepRecord, max_steps: u32) -> Self {
        assert!(max_steps > 0, "Step budget must be positive");

        Self {
            target,
            current: Draft::new(),
            history: Vector::new(),
            max_steps,
        }
    }

    /// The hidden target combination.
    #[must_use]
    pub fn target(&self) -> &StepRecord {
        &self.target
    }

    /// The in-progress step.
    #[must_use]
    pub fn current(&self) -> &Draft {
        &self.current
    }

    /// All committed steps, in chronological order.
    #[must_use]
    pub fn history(&self) -> &Vector<ScoredStep> {
        &self.history
    }

    /// The step budget for this round.
    #[must_use]
    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    /// Number of steps committed so far.
    #[must_use]
    pub fn steps_taken(&self) -> usize {
        self.history.len()
    }

    /// The most recently committed step, if any.
    #[must_use]
    pub fn last_step(&self) -> Option<&ScoredStep> {
        self.history.last()
    }

    /// Terminal result, or `None` while the round is in progress.
    ///
    /// A match on the final permitted step is still a win: the match is
    /// checked first, the exhausted budget second.
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        let won = self
            .last_step()
            .map_or(false, |entry| *entry.record() == self.target);

        if won {
            Some(RoundOutcome::Win)
        } else if self.history.len() as u32 >= self.max_steps {
            Some(RoundOutcome::Loss)
        } else {
            None
        }
    }

    /// Check if the round has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// A serializable read-only projection of the whole round.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            target: self.target,
            current: self.current.slots(),
            history: self.history.iter().copied().collect(),
            max_steps: self.max_steps,
            outcome: self.outcome(),
        }
    }

    pub(crate) fn current_mut(&mut self) -> &mut Draft {
        &mut self.current
    }

    pub(crate) fn push_step(&mut self, step: ScoredStep) {
        self.history.push_back(step);
    }
}

/// Immutable picture of a round at one instant.
///
/// Hosts decide whether and how to encode this; the engine only promises
/// that it serializes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub target: StepRecord,
    pub current: [Option<Color>; SLOT_COUNT],
    pub history: Vec<ScoredStep>,
    pub max_steps: u32,
    pub outcome: Option<RoundOutcome>,
}
