//! The move-evaluation engine: the single writer of a [`RoundModel`].
//!
//! Presentation routes every edit through [`RoundController::set_slot_color`]
//! and every commit through [`RoundController::commit_move`]; all other
//! collaborators read `controller.model()` and drain change notifications.
//!
//! Commit preconditions are contract, not user input: presentation gates
//! the commit action on [`DerivedState::ready_to_move`] and the round-over
//! state, so a refused commit means a presentation bug. The engine refuses
//! the mutation, logs the violation, and stays consistent.

use thiserror::Error;

use crate::core::{Color, Feedback, RoundConfig, RoundRng, ScoredStep, Slot};

use super::derived::{DerivedState, DerivedStateTracker};
use super::events::RoundEvent;
use super::model::RoundModel;

/// Why a commit was refused. Every variant is a caller contract violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CommitError {
    /// The round already ended; no further moves exist.
    #[error("move submitted after the round is over")]
    RoundOver,

    /// The in-progress step has an empty slot or a repeated color.
    #[error("current step is not a complete combination")]
    IncompleteStep,

    /// The in-progress step slot-equals a committed step.
    #[error("current step repeats an earlier guess")]
    RepeatedStep,

    /// The history is already at the step budget.
    #[error("step budget exhausted")]
    StepOverflow,
}

/// Sole mutator of a round: validates, scores, and commits moves.
#[derive(Debug)]
pub struct RoundController {
    model: RoundModel,
    tracker: DerivedStateTracker,
    events: Vec<RoundEvent>,
}

impl RoundController {
    /// Take ownership of a round.
    #[must_use]
    pub fn new(model: RoundModel) -> Self {
        let tracker = DerivedStateTracker::new(&model);
        Self {
            model,
            tracker,
            events: Vec::new(),
        }
    }

    /// Start a fresh round from a host configuration.
    #[must_use]
    pub fn from_config(config: &RoundConfig, rng: &mut RoundRng) -> Self {
        Self::new(RoundModel::from_config(config, rng))
    }

    /// Read-only view of the round; this is what presentation holds.
    #[must_use]
    pub fn model(&self) -> &RoundModel {
        &self.model
    }

    /// The current validity/duplicate/ready flags.
    #[must_use]
    pub fn derived(&self) -> DerivedState {
        self.tracker.current()
    }

    /// The color currently in one in-progress slot.
    #[must_use]
    pub fn slot_color(&self, slot: Slot) -> Option<Color> {
        self.model.current().get(slot)
    }

    /// Assign an in-progress slot, `None` clearing it.
    ///
    /// If the color is already held by another slot, that slot resets to
    /// empty in the same call, so no two occupied slots ever share a color.
    /// Emits a `SlotChanged` notification per slot actually changed, then
    /// republishes derived state if the flags moved.
    pub fn set_slot_color(&mut self, slot: Slot, color: Option<Color>) {
        let changes = self.model.current_mut().set(slot, color);
        for (slot, color) in changes {
            self.events.push(RoundEvent::SlotChanged { slot, color });
        }

        self.publish_derived();
    }

    /// Validate, score, and commit the in-progress step.
    ///
    /// On success the scored step is appended to history, the in-progress
    /// step resets to all-empty, and the feedback is returned. On any
    /// precondition failure nothing mutates and the violation is reported.
    pub fn commit_move(&mut self) -> Result<Feedback, CommitError> {
        if self.model.is_over() {
            log::error!("commit refused: round is already over");
            return Err(CommitError::RoundOver);
        }

        let Some(record) = self.model.current().complete() else {
            log::error!("commit refused: current step is not a complete combination");
            return Err(CommitError::IncompleteStep);
        };

        if self
            .model
            .history()
            .iter()
            .any(|entry| *entry.record() == record)
        {
            log::error!("commit refused: current step repeats an earlier guess");
            return Err(CommitError::RepeatedStep);
        }

        if self.model.steps_taken() as u32 >= self.model.max_steps() {
            log::error!("commit refused: step budget exhausted");
            return Err(CommitError::StepOverflow);
        }

        let feedback = Feedback::between(self.model.target(), &record);
        let index = self.model.steps_taken();
        self.model.push_step(ScoredStep::new(record, feedback));
        self.events.push(RoundEvent::MoveCommitted { index, feedback });

        let cleared = self.model.current_mut().clear();
        for slot in cleared {
            self.events.push(RoundEvent::SlotChanged { slot, color: None });
        }

        self.publish_derived();

        // The over/win predicate is re-evaluated exactly once per commit,
        // against the freshly appended history.
        if let Some(outcome) = self.model.outcome() {
            self.events.push(RoundEvent::RoundOver(outcome));
        }

        Ok(feedback)
    }

    /// Take the pending notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        std::mem::take(&mut self.events)
    }

    fn publish_derived(&mut self) {
        if let Some(state) = self.tracker.recompute(&self.model) {
            self.events.push(RoundEvent::DerivedStateChanged(state));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StepRecord;
    use crate::round::RoundOutcome;

    const TARGET: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Brown];

    fn controller(max_steps: u32) -> RoundController {
        RoundController::new(RoundModel::with_target(StepRecord::new(TARGET), max_steps))
    }

    fn enter(controller: &mut RoundController, colors: [Color; 4]) {
        for (slot, color) in Slot::ALL.into_iter().zip(colors) {
            controller.set_slot_color(slot, Some(color));
        }
    }

    #[test]
    fn test_commit_requires_complete_step() {
        let mut game = controller(6);
        game.set_slot_color(Slot::new(1), Some(Color::Red));

        assert_eq!(game.commit_move(), Err(CommitError::IncompleteStep));
        assert_eq!(game.model().steps_taken(), 0);
        assert_eq!(game.slot_color(Slot::new(1)), Some(Color::Red)); // untouched
    }

    #[test]
    fn test_commit_scores_and_resets() {
        let mut game = controller(6);
        enter(&mut game, [Color::Green, Color::Red, Color::Brown, Color::Black]);

        let feedback = game.commit_move().expect("move is legal");
        assert_eq!(feedback, Feedback { guess: 3, correct: 0 });

        assert_eq!(game.model().steps_taken(), 1);
        assert_eq!(game.model().current().slots(), [None; 4]);
        assert_eq!(game.model().last_step().unwrap().feedback(), feedback);
        assert_eq!(game.model().outcome(), None);
    }

    #[test]
    fn test_commit_refuses_repeated_guess() {
        let mut game = controller(6);
        let guess = [Color::Green, Color::Red, Color::Brown, Color::Black];

        enter(&mut game, guess);
        game.commit_move().expect("first commit");

        enter(&mut game, guess);
        assert_eq!(game.commit_move(), Err(CommitError::RepeatedStep));
        assert_eq!(game.model().steps_taken(), 1);
        // The refused draft is left as entered.
        assert_eq!(game.slot_color(Slot::new(1)), Some(Color::Green));
    }

    #[test]
    fn test_commit_refuses_after_win() {
        let mut game = controller(6);
        enter(&mut game, TARGET);
        game.commit_move().expect("winning move");
        assert_eq!(game.model().outcome(), Some(RoundOutcome::Win));

        enter(&mut game, [Color::Green, Color::Red, Color::Brown, Color::Black]);
        assert_eq!(game.commit_move(), Err(CommitError::RoundOver));
        assert_eq!(game.model().steps_taken(), 1);
    }

    #[test]
    fn test_commit_refuses_after_budget_spent() {
        let mut game = controller(1);
        enter(&mut game, [Color::Green, Color::Red, Color::Brown, Color::Black]);
        game.commit_move().expect("only move");
        assert_eq!(game.model().outcome(), Some(RoundOutcome::Loss));

        enter(&mut game, [Color::Red, Color::Green, Color::Blue, Color::Brown]);
        assert_eq!(game.commit_move(), Err(CommitError::RoundOver));
    }

    #[test]
    fn test_win_on_final_step() {
        let mut game = controller(2);
        enter(&mut game, [Color::Green, Color::Red, Color::Brown, Color::Black]);
        game.commit_move().expect("first move");

        enter(&mut game, TARGET);
        let feedback = game.commit_move().expect("winning move on last step");

        assert!(feedback.is_exact());
        assert_eq!(game.model().outcome(), Some(RoundOutcome::Win));
    }

    #[test]
    fn test_duplicate_color_evicts_other_slot() {
        let mut game = controller(6);
        game.set_slot_color(Slot::new(1), Some(Color::Red));
        game.set_slot_color(Slot::new(2), Some(Color::Red));

        assert_eq!(game.slot_color(Slot::new(1)), None);
        assert_eq!(game.slot_color(Slot::new(2)), Some(Color::Red));
    }

    #[test]
    fn test_event_flow_for_edit_burst() {
        let mut game = controller(6);
        game.drain_events();

        game.set_slot_color(Slot::new(1), Some(Color::Red));
        game.set_slot_color(Slot::new(2), Some(Color::Red));

        let events = game.drain_events();
        assert_eq!(
            events,
            vec![
                RoundEvent::SlotChanged { slot: Slot::new(1), color: Some(Color::Red) },
                RoundEvent::SlotChanged { slot: Slot::new(1), color: None },
                RoundEvent::SlotChanged { slot: Slot::new(2), color: Some(Color::Red) },
            ]
        );
    }

    #[test]
    fn test_event_flow_for_commit() {
        let mut game = controller(6);
        enter(&mut game, [Color::Green, Color::Red, Color::Brown, Color::Black]);
        game.drain_events();

        let feedback = game.commit_move().expect("move is legal");
        let events = game.drain_events();

        assert_eq!(events[0], RoundEvent::MoveCommitted { index: 0, feedback });
        // Four reset notifications follow, then the ready flag drops.
        assert_eq!(
            &events[1..5],
            &[
                RoundEvent::SlotChanged { slot: Slot::new(1), color: None },
                RoundEvent::SlotChanged { slot: Slot::new(2), color: None },
                RoundEvent::SlotChanged { slot: Slot::new(3), color: None },
                RoundEvent::SlotChanged { slot: Slot::new(4), color: None },
            ]
        );
        match events[5] {
            RoundEvent::DerivedStateChanged(state) => assert!(!state.ready_to_move),
            ref other => panic!("expected derived-state event, got {other:?}"),
        }
        assert_eq!(events.len(), 6);
    }

    #[test]
    fn test_round_over_event_on_win() {
        let mut game = controller(6);
        enter(&mut game, TARGET);
        game.drain_events();

        game.commit_move().expect("winning move");
        let events = game.drain_events();

        assert_eq!(events.last(), Some(&RoundEvent::RoundOver(RoundOutcome::Win)));
    }

    #[test]
    fn test_derived_event_tracks_ready_flag() {
        let mut game = controller(6);
        enter(&mut game, [Color::Green, Color::Red, Color::Brown, Color::Black]);

        let ready_states: Vec<_> = game
            .drain_events()
            .into_iter()
            .filter_map(|event| match event {
                RoundEvent::DerivedStateChanged(state) => Some(state.ready_to_move),
                _ => None,
            })
            .collect();

        // Flags move exactly once during the burst: when the draft completes.
        assert_eq!(ready_states, vec![true]);
        assert!(game.derived().ready_to_move);
    }

    #[test]
    fn test_from_config_uses_effective_budget() {
        let mut rng = RoundRng::new(42);
        let config = RoundConfig::new().max_steps(5).bonus_step(true);

        let game = RoundController::from_config(&config, &mut rng);
        assert_eq!(game.model().max_steps(), 6);
    }
}
