use crate::game::{Board, GameOutcome, Player, COLS, ROWS};

use super::agent::Agent;
use super::MoveOrdering;

/// Score magnitude of a finished game. The largest sum the window weights
/// can produce is a few thousand, so completed lines always outrank any
/// combination of partial alignments.
pub const WIN_SCORE: i32 = 1_000_000;

/// Score for a finished game from `player`'s perspective. The remaining
/// search depth is added on top so nearer wins (and more distant losses)
/// win ties between lines that all end in the same outcome.
pub fn terminal_score(outcome: GameOutcome, player: Player, remaining: usize) -> i32 {
    match outcome {
        GameOutcome::Winner(p) if p == player => WIN_SCORE + remaining as i32,
        GameOutcome::Winner(_) => -(WIN_SCORE + remaining as i32),
        GameOutcome::Draw => 0,
    }
}

/// Trait for evaluating a board position from a player's perspective.
/// Implementations must be deterministic and side-effect free.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Default heuristic that scans all 4-cell windows and scores threats,
/// plus a small bonus per token in the center column.
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn score_window(own: usize, opp: usize, empty: usize) -> i32 {
        if own == 4 {
            WIN_SCORE
        } else if opp == 4 {
            -WIN_SCORE
        } else if own == 3 && empty == 1 {
            50
        } else if own == 2 && empty == 2 {
            10
        } else if opp == 3 && empty == 1 {
            -80
        } else if opp == 2 && empty == 2 {
            -10
        } else {
            0
        }
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let mut score = 0;

        // Center column bonus
        for row in 0..ROWS {
            let cell = board.get(row, COLS / 2);
            if cell == own_cell {
                score += 3;
            } else if cell == opp_cell {
                score -= 3;
            }
        }

        // Scan all 4-cell windows

        // Horizontal
        for row in 0..ROWS {
            for col in 0..COLS - 3 {
                let mut own = 0;
                let mut opp = 0;
                let mut empty = 0;
                for i in 0..4 {
                    match board.get(row, col + i) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => empty += 1,
                    }
                }
                score += Self::score_window(own, opp, empty);
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..ROWS - 3 {
                let mut own = 0;
                let mut opp = 0;
                let mut empty = 0;
                for i in 0..4 {
                    match board.get(row + i, col) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => empty += 1,
                    }
                }
                score += Self::score_window(own, opp, empty);
            }
        }

        // Diagonal (top-left to bottom-right)
        for row in 0..ROWS - 3 {
            for col in 0..COLS - 3 {
                let mut own = 0;
                let mut opp = 0;
                let mut empty = 0;
                for i in 0..4 {
                    match board.get(row + i, col + i) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => empty += 1,
                    }
                }
                score += Self::score_window(own, opp, empty);
            }
        }

        // Diagonal (bottom-left to top-right)
        for row in 3..ROWS {
            for col in 0..COLS - 3 {
                let mut own = 0;
                let mut opp = 0;
                let mut empty = 0;
                for i in 0..4 {
                    match board.get(row - i, col + i) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => empty += 1,
                    }
                }
                score += Self::score_window(own, opp, empty);
            }
        }

        score
    }
}

/// One-ply greedy agent: tries every legal move and keeps the one whose
/// resulting position evaluates best. No lookahead beyond the move itself.
pub struct HeuristicAgent {
    player: Player,
    ordering: MoveOrdering,
    heuristic: Box<dyn Heuristic>,
}

impl HeuristicAgent {
    pub fn new(player: Player) -> Self {
        HeuristicAgent {
            player,
            ordering: MoveOrdering::default(),
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(player: Player, heuristic: Box<dyn Heuristic>) -> Self {
        HeuristicAgent {
            player,
            ordering: MoveOrdering::default(),
            heuristic,
        }
    }
}

impl Agent for HeuristicAgent {
    fn get_move(&mut self, board: &Board) -> usize {
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
            let score = match scratch.check_winner() {
                Some(outcome) => terminal_score(outcome, self.player, 0),
                None => self.heuristic.evaluate(&scratch, self.player),
            };
            scratch.undo_move(col);
            if score > best_score {
                best_score = score;
                best_col = col;
            }
        }

        best_col
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}
