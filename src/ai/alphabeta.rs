use crate::game::{Board, Player, COLS};

use super::agent::Agent;
use super::heuristic::{terminal_score, Heuristic, WindowHeuristic};
use super::MoveOrdering;

/// Depth-limited minimax with alpha-beta pruning. Given the same board,
/// depth and exploration order it returns exactly the column and score the
/// unpruned [`MinimaxAgent`](super::MinimaxAgent) returns, while visiting
/// a subset of its nodes.
pub struct AlphaBetaAgent {
    player: Player,
    depth: usize,
    ordering: MoveOrdering,
    heuristic: Box<dyn Heuristic>,
    nodes: u64,
}

impl AlphaBetaAgent {
    pub fn new(player: Player, depth: usize) -> Self {
        AlphaBetaAgent {
            player,
            depth,
            ordering: MoveOrdering::default(),
            heuristic: Box::new(WindowHeuristic),
            nodes: 0,
        }
    }

    pub fn with_ordering(player: Player, depth: usize, ordering: MoveOrdering) -> Self {
        AlphaBetaAgent {
            ordering,
            ..Self::new(player, depth)
        }
    }

    pub fn with_heuristic(player: Player, depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        AlphaBetaAgent {
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

    /// Search the root and return the chosen column with its score. The
    /// window starts at its widest; alpha is raised as root children
    /// resolve, so later siblings are searched with a tighter bound.
    pub fn search(&mut self, board: &Board) -> (usize, i32) {
        let legal: Vec<usize> = (0..COLS).filter(|&c| board.is_valid_move(c)).collect();
        assert!(!legal.is_empty(), "no legal moves available");

        let mut scratch = *board;
        let mut best_col = legal[0];
        let mut best_score = i32::MIN;
        let mut alpha = i32::MIN;

        for col in self.ordering.columns() {
            if !scratch.is_valid_move(col) {
                continue;
            }
            scratch.make_move(col, self.player).unwrap();
            let score =
                self.alphabeta(&mut scratch, self.depth.saturating_sub(1), alpha, i32::MAX, false);
            scratch.undo_move(col);
            if score > best_score {
                best_score = score;
                best_col = col;
            }
            alpha = alpha.max(score);
        }

        (best_col, best_score)
    }

    fn alphabeta(
        &mut self,
        board: &mut Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
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
            let score = self.alphabeta(board, depth - 1, alpha, beta, !maximizing);
            // Restore before the cutoff check so every return path leaves
            // the board as it was received.
            board.undo_move(col);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if alpha >= beta {
                break;
            }
        }

        best
    }
}

impl Agent for AlphaBetaAgent {
    fn get_move(&mut self, board: &Board) -> usize {
        self.search(board).0
    }

    fn name(&self) -> &str {
        "AlphaBeta"
    }
}
