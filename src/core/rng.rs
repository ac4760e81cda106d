//! Deterministic random number generation for target draws.
//!
//! The engine never touches a process-global generator. Hosts construct a
//! [`RoundRng`] from a seed and pass it in wherever randomness is needed,
//! which makes target generation reproducible in tests and replays.
//!
//! A host that runs many rounds from one session seed forks a fresh
//! generator per round:
//!
//! ```
//! use codebreak::core::RoundRng;
//!
//! let mut session = RoundRng::new(42);
//! let round_a = session.fork();
//! let round_b = session.fork();
//! // round_a and round_b draw independent but reproducible sequences
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG handed to the engine by the host.
///
/// ChaCha8 keeps draws fast while staying deterministic across platforms.
#[derive(Clone, Debug)]
pub struct RoundRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl RoundRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence, so a
    /// session generator can hand every round its own stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut RoundRng) -> Vec<u32> {
        let mut data: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut data);
        data
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = RoundRng::new(42);
        let mut rng2 = RoundRng::new(42);

        assert_eq!(shuffled(&mut rng1), shuffled(&mut rng2));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = RoundRng::new(1);
        let mut rng2 = RoundRng::new(2);

        assert_ne!(shuffled(&mut rng1), shuffled(&mut rng2));
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = RoundRng::new(42);
        let mut forked = rng.fork();

        assert_ne!(shuffled(&mut rng), shuffled(&mut forked));
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = RoundRng::new(42);
        let mut rng2 = RoundRng::new(42);

        let mut forked1 = rng1.fork();
        let mut forked2 = rng2.fork();

        assert_eq!(shuffled(&mut forked1), shuffled(&mut forked2));
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut rng = RoundRng::new(7);
        let mut data = shuffled(&mut rng);

        data.sort_unstable();
        assert_eq!(data, (0..20).collect::<Vec<_>>());
    }
}
