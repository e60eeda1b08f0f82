use crate::game::{Board, Player, COLS};

use super::agent::Agent;
use super::heuristic::{terminal_score, Heuristic, WindowHeuristic};
use super::MoveOrdering;

/// Depth-limited minimax without pruning. Visits the complete game tree
/// down to `depth` plies and counts every visited node, which makes it the
/// baseline the pruned variant is measured against.
pub struct MinimaxAgent {
    player: Player,
    depth: usize,
    ordering: MoveOrdering,
    heuristic: Box<dyn Heuristic>,
    nodes: u64,
}

impl MinimaxAgent {
    pub fn new(player: Player, depth: usize) -> Self {
        MinimaxAgent {
            player,
            depth,
            ordering: MoveOrdering::default(),
            heuristic: Box::new(WindowHeuristic),
            nodes: 0,
        }
    }

    pub fn with_ordering(player: Player, depth: usize, ordering: MoveOrdering) -> Self {
        MinimaxAgent {
            ordering,
            ..Self::new(player, depth)
        }
    }

    pub fn with_heuristic(player: Player, depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent {
            player,
            depth,
            ordering: MoveOrdering::default(),
            heuristic,
            nodes: 0,
        }
    }

    /// Nodes visited since the last reset: one per recursive search call,
    /// leaves included. Accumulates across `get_move` calls.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn reset_nodes(&mut self) {
        self.nodes = 0;
    }

    /// Search the root and return the chosen column with its score. Ties
    /// go to the column encountered first in the exploration order.
    pub fn search(&mut self, board: &Board) -> (usize, i32) {
        let legal: Vec<usize> = (0..COLS).filter(|&c| board.is_valid_move(c)).collect();
        assert!(!legal.is_empty(), "no legal moves available");

        let mut scratch = *board;
        let mut best_col = legal[0];
        let mut best_score = i32::MIN;

        for col in self.ordering.columns() {
            if !scratch.is_valid_move(col) {
                continue;
            }
            scratch.make_move(col, self.player).unwrap();
            let score = self.minimax(&mut scratch, self.depth.saturating_sub(1), false);
            scratch.undo_move(col);
            if score > best_score {
                best_score = score;
                best_col = col;
            }
        }

        (best_col, best_score)
    }

    fn minimax(&mut self, board: &mut Board, depth: usize, maximizing: bool) -> i32 {
        self.nodes += 1;

        if let Some(outcome) = board.check_winner() {
            return terminal_score(outcome, self.player, depth);
        }

        if depth == 0 {
            return self.heuristic.evaluate(board, self.player);
        }

        let mover = if maximizing {
            self.player
        } else {
            self.player.other()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for col in self.ordering.columns() {
            if !board.is_valid_move(col) {
                continue;
            }
            board.make_move(col, mover).unwrap();
            let score = self.minimax(board, depth - 1, !maximizing);
            board.undo_move(col);

            if maximizing {
                best = best.max(score);
            } else {
                best = best.min(score);
            }
        }

        best
    }
}

impl Agent for MinimaxAgent {
    fn get_move(&mut self, board: &Board) -> usize {
        self.search(board).0
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
