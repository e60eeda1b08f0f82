use super::board::{Board, GameOutcome, MoveError, COLS};
use super::player::Player;

/// Headless game state: the board plus whose turn it is and whether the
/// game has already ended. The outcome is maintained incrementally from
/// the last move, so callers never rescan the board between plies. Used
/// by the benchmark board generator and by self-play tests; the search
/// engines work on the bare `Board`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state; Red moves first
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Red,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (empty once the game is over)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| self.board.is_valid_move(col))
            .collect()
    }

    /// Apply a move and return the new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply a move in place
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self.board.make_move(column, self.current_player)?;

        if self.board.check_win(row, column) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.other();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_apply_move_alternates_players() {
        let state = GameState::initial();
        let next = state.apply_move(3).unwrap();

        assert_eq!(next.current_player(), Player::Yellow);
        assert_eq!(next.board().get(5, 3), Cell::Red);
        // The original state is untouched
        assert_eq!(state.board().get(5, 3), Cell::Empty);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Red builds the bottom row left to right, Yellow stacks on top
        for col in 0..4 {
            state.apply_move_mut(col).unwrap(); // Red
            if col < 3 {
                state.apply_move_mut(col).unwrap(); // Yellow
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
        assert!(state.legal_actions().is_empty());
    }

    #[test]
    fn test_move_after_game_over_is_rejected() {
        let mut state = GameState::initial();
        for col in 0..4 {
            state.apply_move_mut(col).unwrap();
            if col < 3 {
                state.apply_move_mut(col).unwrap();
            }
        }
        assert!(state.is_terminal());
        assert_eq!(state.apply_move(6).unwrap_err(), MoveError::GameOver);
    }

    #[test]
    fn test_full_column_excluded_from_legal_actions() {
        let mut state = GameState::initial();
        for _ in 0..6 {
            state.apply_move_mut(0).unwrap();
        }
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(state.apply_move(0).unwrap_err(), MoveError::ColumnFull);
    }

    #[test]
    fn test_draw_outcome() {
        // Interleaving column pairs this way fills the board with vertical
        // two-stripes (colour of (row, col) is (col / 2 + row) % 2), which
        // caps every run at two. 42 legal moves, no winner.
        let mut moves: Vec<usize> = Vec::new();
        for (a, b) in [(2, 0), (3, 1)] {
            for _ in 0..3 {
                moves.extend([a, b, b, a]);
            }
        }
        for _ in 0..3 {
            moves.extend([6, 4, 4, 5, 5, 6]);
        }

        let mut state = GameState::initial();
        for &col in &moves {
            state.apply_move_mut(col).unwrap();
        }

        assert!(state.board().is_full());
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
        assert!(state.legal_actions().is_empty());
    }
}
