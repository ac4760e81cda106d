//! Round configuration.
//!
//! Hosts configure a round at startup: the base step budget and whether the
//! player holds a bonus-step entitlement. The engine only ever sees the
//! effective budget; granting, storing, and spending entitlements is host
//! bookkeeping.

use serde::{Deserialize, Serialize};

/// Configuration for one round.
///
/// ```
/// use codebreak::core::RoundConfig;
///
/// let config = RoundConfig::new().bonus_step(true);
/// assert_eq!(config.effective_max_steps(), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Base number of steps available in a round.
    pub max_steps: u32,

    /// Whether the player holds a one-extra-step entitlement for this round.
    pub bonus_step: bool,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            max_steps: 6,
            bonus_step: false,
        }
    }
}

impl RoundConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base step budget.
    #[must_use]
    pub fn max_steps(mut self, max_steps: u32) -> Self {
        assert!(max_steps > 0, "Step budget must be positive");
        self.max_steps = max_steps;
        self
    }

    /// Set the bonus-step entitlement.
    #[must_use]
    pub fn bonus_step(mut self, bonus_step: bool) -> Self {
        self.bonus_step = bonus_step;
        self
    }

    /// The step budget handed to the round: base plus bonus, if held.
    #[must_use]
    pub fn effective_max_steps(&self) -> u32 {
        self.max_steps + u32::from(self.bonus_step)
    }
}
