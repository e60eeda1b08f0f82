use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, COLS};

use super::agent::Agent;

/// An agent that selects uniformly at random from the legal columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded variant for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn get_move(&mut self, board: &Board) -> usize {
        let legal: Vec<usize> = (0..COLS).filter(|&c| board.is_valid_move(c)).collect();
        assert!(!legal.is_empty(), "no legal moves available");
        let idx = self.rng.random_range(0..legal.len());
        legal[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }
}
