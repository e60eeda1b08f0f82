use std::ops::RangeInclusive;

use rand::Rng;

use crate::error::BenchmarkError;
use crate::game::{Board, GameState};

/// Deal `count` mid-game boards by playing a sampled number of uniformly
/// random legal moves from the initial position. A sample whose game ends
/// early is useless as a search position, so it is discarded and redrawn;
/// after ten failed attempts per requested board the whole call gives up
/// with [`BenchmarkError::BoardGeneration`].
pub fn generate_boards(
    count: usize,
    moves: RangeInclusive<usize>,
    rng: &mut impl Rng,
) -> Result<Vec<Board>, BenchmarkError> {
    let max_attempts = count.saturating_mul(10).max(10);
    let mut boards = Vec::with_capacity(count);
    let mut attempts = 0;

    while boards.len() < count {
        if attempts >= max_attempts {
            return Err(BenchmarkError::BoardGeneration {
                requested: count,
                attempts,
            });
        }
        attempts += 1;

        let num_moves = rng.random_range(moves.clone());
        let mut state = GameState::initial();
        for _ in 0..num_moves {
            let legal = state.legal_actions();
            let col = legal[rng.random_range(0..legal.len())];
            state.apply_move_mut(col).unwrap();
            if state.is_terminal() {
                break;
            }
        }

        if state.is_terminal() {
            continue;
        }
        boards.push(*state.board());
    }

    Ok(boards)
}
