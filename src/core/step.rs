//! Step records: slot positions, in-progress drafts, finalized guesses,
//! and scoring feedback.
//!
//! A step is a 4-slot color assignment. Two representations exist:
//!
//! - [`Draft`] — the editable in-progress step. Slots may be empty and the
//!   type enforces that no two occupied slots share a color.
//! - [`StepRecord`] — a finalized step: four pairwise-distinct colors,
//!   immutable once built. The hidden target and every history entry are
//!   `StepRecord`s; history entries additionally carry their [`Feedback`]
//!   as a [`ScoredStep`].
//!
//! Equality on records is slot-for-slot color equality; feedback never
//! participates.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::palette::{Color, ColorSet};

/// Number of slots in a step.
pub const SLOT_COUNT: usize = 4;

/// One of the four ordered slot positions, numbered 1 through 4.
///
/// Construction outside `1..=4` is a programming error and panics; user
/// input never reaches `Slot::new` unvalidated because presentation maps
/// fixed UI positions to slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot(u8);

impl Slot {
    /// All slots in position order.
    pub const ALL: [Slot; SLOT_COUNT] = [Slot(1), Slot(2), Slot(3), Slot(4)];

    /// Create a slot from its 1-based position number.
    ///
    /// # Panics
    ///
    /// Panics if `number` is not in `1..=4`.
    #[must_use]
    pub fn new(number: u8) -> Self {
        assert!(
            (1..=SLOT_COUNT as u8).contains(&number),
            "Slot number must be 1..=4, got {number}"
        );
        Self(number)
    }

    /// The 1-based position number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// The 0-based array index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot {}", self.0)
    }
}

/// Score for one committed step.
///
/// `correct` counts slots whose color matches the target in place;
/// `guess` counts colors shared with the target but sitting in the wrong
/// slot. Both components are symmetric in the two records compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback {
    /// Shared colors in the wrong slot.
    pub guess: u8,
    /// Slot-for-slot matches.
    pub correct: u8,
}

impl Feedback {
    /// Score two records against each other.
    ///
    /// Positional matches are counted directly. Shared colors come from the
    /// mask intersection: records are pairwise-distinct, so the popcount of
    /// the intersection is exactly the number of colors present in both.
    ///
    /// ```
    /// use codebreak::core::{Color, Feedback, StepRecord};
    ///
    /// let target = StepRecord::new([Color::Red, Color::Green, Color::Blue, Color::Brown]);
    /// let guess = StepRecord::new([Color::Green, Color::Red, Color::Brown, Color::Black]);
    ///
    /// assert_eq!(Feedback::between(&target, &guess), Feedback { guess: 3, correct: 0 });
    /// ```
    #[must_use]
    pub fn between(a: &StepRecord, b: &StepRecord) -> Self {
        let correct = a
            .colors()
            .iter()
            .zip(b.colors())
            .filter(|(x, y)| *x == y)
            .count() as u8;
        let shared = a.color_set().intersection(b.color_set()).len() as u8;

        Self {
            guess: shared - correct,
            correct,
        }
    }

    /// Check for an exact match (all four slots correct).
    #[must_use]
    pub const fn is_exact(self) -> bool {
        self.correct == SLOT_COUNT as u8
    }
}

/// A finalized step: four pairwise-distinct colors, one per slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepRecord {
    colors: [Color; SLOT_COUNT],
}

impl StepRecord {
    /// Create a record from four colors.
    ///
    /// # Panics
    ///
    /// Panics if any color repeats. Records are only ever produced from a
    /// completeness-checked draft or a without-replacement draw, so a repeat
    /// is a programming error.
    #[must_use]
    pub fn new(colors: [Color; SLOT_COUNT]) -> Self {
        let distinct: ColorSet = colors.into_iter().collect();
        assert_eq!(
            distinct.len() as usize,
            SLOT_COUNT,
            "Step colors must be pairwise distinct"
        );
        Self { colors }
    }

    /// The colors, in slot order.
    #[must_use]
    pub const fn colors(&self) -> [Color; SLOT_COUNT] {
        self.colors
    }

    /// The color in the given slot.
    #[must_use]
    pub fn color(&self, slot: Slot) -> Color {
        self.colors[slot.index()]
    }

    /// The set of colors used by this record.
    #[must_use]
    pub fn color_set(&self) -> ColorSet {
        self.colors.into_iter().collect()
    }
}

impl std::fmt::Display for StepRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c1, c2, c3, c4] = self.colors;
        write!(f, "[{c1}], [{c2}], [{c3}], [{c4}]")
    }
}

/// A history entry: a finalized step together with its score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredStep {
    record: StepRecord,
    feedback: Feedback,
}

impl ScoredStep {
    /// Pair a record with its feedback.
    #[must_use]
    pub const fn new(record: StepRecord, feedback: Feedback) -> Self {
        Self { record, feedback }
    }

    /// The guessed colors.
    #[must_use]
    pub const fn record(&self) -> &StepRecord {
        &self.record
    }

    /// The score this step earned.
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }
}

impl std::fmt::Display for ScoredStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}/{})",
            self.record, self.feedback.guess, self.feedback.correct
        )
    }
}

/// The editable in-progress step.
///
/// Slots start empty. [`Draft::set`] keeps the draft free of duplicate
/// colors at all times: assigning a color already held by another slot
/// evicts it from that slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    slots: [Option<Color>; SLOT_COUNT],
}

impl Draft {
    /// Create an all-empty draft.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; SLOT_COUNT],
        }
    }

    /// The slot contents, in order.
    #[must_use]
    pub const fn slots(&self) -> [Option<Color>; SLOT_COUNT] {
        self.slots
    }

    /// The content of one slot.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<Color> {
        self.slots[slot.index()]
    }

    /// Assign a slot, `None` clearing it.
    ///
    /// If `color` is already held by a different slot, that slot is reset
    /// to empty in the same call. Returns the changes actually applied in
    /// slot order; a no-op assignment returns an empty list.
    pub fn set(&mut self, slot: Slot, color: Option<Color>) -> SmallVec<[(Slot, Option<Color>); 2]> {
        let mut changes = SmallVec::new();

        for position in Slot::ALL {
            let current = &mut self.slots[position.index()];
            let next = if position == slot {
                color
            } else if color.is_some() && *current == color {
                None
            } else {
                continue;
            };

            if *current != next {
                *current = next;
                changes.push((position, next));
            }
        }

        changes
    }

    /// Reset every slot to empty. Returns the slots that were occupied.
    pub fn clear(&mut self) -> SmallVec<[Slot; SLOT_COUNT]> {
        let mut cleared = SmallVec::new();

        for position in Slot::ALL {
            if self.slots[position.index()].take().is_some() {
                cleared.push(position);
            }
        }

        cleared
    }

    /// The completeness check: finalize the draft if every slot holds a
    /// color and no color repeats.
    ///
    /// A single pass accumulates the color mask, failing on the first empty
    /// slot or already-seen bit. Duplicates cannot normally arise (see
    /// [`Draft::set`]) but the commit path still refuses them here rather
    /// than trusting the editing history.
    #[must_use]
    pub fn complete(&self) -> Option<StepRecord> {
        let mut seen = ColorSet::new();
        let mut colors = [Color::Red; SLOT_COUNT];

        for (index, slot) in self.slots.iter().enumerate() {
            let color = (*slot)?;
            if !seen.insert(color) {
                return None;
            }
            colors[index] = color;
        }

        Some(StepRecord { colors })
    }
}
