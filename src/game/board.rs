use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

/// The 6x7 grid. Row 0 is the top, row 5 the bottom; tokens fall to the
/// lowest empty cell of their column. Small enough to be `Copy`, so the
/// search engines work on a scratch copy of the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full (out-of-range columns count as full)
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Check if a column can legally receive a token
    pub fn is_valid_move(&self, col: usize) -> bool {
        !self.is_column_full(col)
    }

    /// Drop a token for `player`, returns the row where it landed.
    /// The board is left untouched when the move is rejected.
    pub fn make_move(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = player.to_cell();
                return Ok(row);
            }
        }

        unreachable!("column cannot be full if is_column_full returned false");
    }

    /// Remove the topmost token of a column. Only the search engines call
    /// this, and only on columns they just filled; an empty column is a
    /// programming error.
    pub fn undo_move(&mut self, col: usize) {
        assert!(col < COLS, "undo_move on out-of-range column {col}");
        for row in 0..ROWS {
            if self.cells[row][col] != Cell::Empty {
                self.cells[row][col] = Cell::Empty;
                return;
            }
        }
        panic!("undo_move on empty column {col}");
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Check if the game has ended in a win or a draw
    pub fn is_game_over(&self) -> bool {
        self.check_winner().is_some()
    }

    /// Scan the whole board for a finished game. Returns the winner if any
    /// four-window is filled by one colour, a draw if the board is full
    /// without one, and `None` while the game is open. The scan visits each
    /// of the 69 windows once, cheap enough to run at every search leaf.
    pub fn check_winner(&self) -> Option<GameOutcome> {
        for row in 0..ROWS {
            for col in 0..COLS {
                // Windows rooted at (row, col): rightward, downward, both
                // diagonals. Together they cover every window exactly once.
                if col + 3 < COLS {
                    if let Some(p) = self.window_owner(row, col, 0, 1) {
                        return Some(GameOutcome::Winner(p));
                    }
                }
                if row + 3 < ROWS {
                    if let Some(p) = self.window_owner(row, col, 1, 0) {
                        return Some(GameOutcome::Winner(p));
                    }
                }
                if row + 3 < ROWS && col + 3 < COLS {
                    if let Some(p) = self.window_owner(row, col, 1, 1) {
                        return Some(GameOutcome::Winner(p));
                    }
                }
                if row >= 3 && col + 3 < COLS {
                    if let Some(p) = self.window_owner(row, col, -1, 1) {
                        return Some(GameOutcome::Winner(p));
                    }
                }
            }
        }

        if self.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// The player holding all four cells of the window starting at
    /// (row, col) and stepping by (dr, dc), if any.
    fn window_owner(&self, row: usize, col: usize, dr: i32, dc: i32) -> Option<Player> {
        let first = self.cells[row][col];
        if first == Cell::Empty {
            return None;
        }
        for i in 1..4 {
            let r = (row as i32 + dr * i) as usize;
            let c = (col as i32 + dc * i) as usize;
            if self.cells[r][c] != first {
                return None;
            }
        }
        Player::from_cell(first)
    }

    /// Check if the last move at (row, col) resulted in a win
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        self.check_horizontal(row, col, cell)
            || self.check_vertical(row, col, cell)
            || self.check_diagonal_up(row, col, cell)
            || self.check_diagonal_down(row, col, cell)
    }

    /// Check horizontal win (left-right through the position)
    fn check_horizontal(&self, row: usize, col: usize, cell: Cell) -> bool {
        let mut count = 1; // Count the current piece

        // Check left
        let mut c = col as i32 - 1;
        while c >= 0 && self.cells[row][c as usize] == cell {
            count += 1;
            c -= 1;
        }

        // Check right
        let mut c = col + 1;
        while c < COLS && self.cells[row][c] == cell {
            count += 1;
            c += 1;
        }

        count >= 4
    }

    /// Check vertical win (down from the position)
    fn check_vertical(&self, row: usize, col: usize, cell: Cell) -> bool {
        let mut count = 1;

        // Only need to check downward (pieces fall down)
        let mut r = row + 1;
        while r < ROWS && self.cells[r][col] == cell {
            count += 1;
            r += 1;
        }

        count >= 4
    }

    /// Check diagonal win (bottom-left to top-right, /)
    fn check_diagonal_up(&self, row: usize, col: usize, cell: Cell) -> bool {
        let mut count = 1;

        // Check down-left
        let mut r = row as i32 + 1;
        let mut c = col as i32 - 1;
        while r < ROWS as i32 && c >= 0 && self.cells[r as usize][c as usize] == cell {
            count += 1;
            r += 1;
            c -= 1;
        }

        // Check up-right
        let mut r = row as i32 - 1;
        let mut c = col as i32 + 1;
        while r >= 0 && c < COLS as i32 && self.cells[r as usize][c as usize] == cell {
            count += 1;
            r -= 1;
            c += 1;
        }

        count >= 4
    }

    /// Check diagonal win (top-left to bottom-right, \)
    fn check_diagonal_down(&self, row: usize, col: usize, cell: Cell) -> bool {
        let mut count = 1;

        // Check up-left
        let mut r = row as i32 - 1;
        let mut c = col as i32 - 1;
        while r >= 0 && c >= 0 && self.cells[r as usize][c as usize] == cell {
            count += 1;
            r -= 1;
            c -= 1;
        }

        // Check down-right
        let mut r = row as i32 + 1;
        let mut c = col as i32 + 1;
        while r < ROWS as i32 && c < COLS as i32 && self.cells[r as usize][c as usize] == cell {
            count += 1;
            r += 1;
            c += 1;
        }

        count >= 4
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Full board with runs of at most two in every direction, so the
    /// outcome is a draw. Cell colour is ((row / 2) + col) % 2.
    fn striped_draw_board() -> Board {
        let mut board = Board::new();
        for col in 0..COLS {
            for row in (0..ROWS).rev() {
                let player = if ((row / 2) + col) % 2 == 0 {
                    Player::Red
                } else {
                    Player::Yellow
                };
                board.make_move(col, player).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.check_winner(), None);
    }

    #[test]
    fn test_make_move_stacks_from_bottom() {
        let mut board = Board::new();

        let row = board.make_move(3, Player::Red).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Cell::Red);

        let row = board.make_move(3, Player::Yellow).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Cell::Yellow);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        for _ in 0..ROWS {
            board.make_move(0, Player::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        assert!(!board.is_valid_move(0));
        assert_eq!(
            board.make_move(0, Player::Yellow),
            Err(MoveError::ColumnFull)
        );
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert!(!board.is_valid_move(7));
        assert_eq!(board.make_move(7, Player::Red), Err(MoveError::InvalidColumn));
    }

    #[test]
    fn test_rejected_move_leaves_board_unchanged() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.make_move(2, Player::Red).unwrap();
        }
        let before = board;
        assert!(board.make_move(2, Player::Yellow).is_err());
        assert!(board.make_move(9, Player::Yellow).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_undo_move_restores_board() {
        let mut board = Board::new();
        board.make_move(4, Player::Red).unwrap();
        board.make_move(4, Player::Yellow).unwrap();
        let before = board;

        board.make_move(4, Player::Red).unwrap();
        board.undo_move(4);

        assert_eq!(board, before);
        assert_eq!(board.get(3, 4), Cell::Empty);
        assert_eq!(board.get(4, 4), Cell::Yellow);
    }

    #[test]
    #[should_panic(expected = "empty column")]
    fn test_undo_move_on_empty_column_panics() {
        let mut board = Board::new();
        board.undo_move(0);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.make_move(col, Player::Red).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_horizontal_win_on_completing_move() {
        let mut board = Board::new();
        for col in 0..3 {
            board.make_move(col, Player::Red).unwrap();
            assert_eq!(board.check_winner(), None);
        }
        board.make_move(3, Player::Red).unwrap();
        assert_eq!(
            board.check_winner(),
            Some(GameOutcome::Winner(Player::Red))
        );
        assert!(board.is_game_over());
    }

    #[test]
    fn test_vertical_win_on_completing_move() {
        let mut board = Board::new();
        for _ in 0..3 {
            board.make_move(3, Player::Yellow).unwrap();
            assert_eq!(board.check_winner(), None);
        }
        let row = board.make_move(3, Player::Yellow).unwrap();
        assert!(board.check_win(row, 3));
        assert_eq!(
            board.check_winner(),
            Some(GameOutcome::Winner(Player::Yellow))
        );
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // Staircase rising to the right, red on top of each step
        board.make_move(0, Player::Red).unwrap();

        board.make_move(1, Player::Yellow).unwrap();
        board.make_move(1, Player::Red).unwrap();

        board.make_move(2, Player::Yellow).unwrap();
        board.make_move(2, Player::Yellow).unwrap();
        board.make_move(2, Player::Red).unwrap();

        board.make_move(3, Player::Yellow).unwrap();
        board.make_move(3, Player::Yellow).unwrap();
        board.make_move(3, Player::Yellow).unwrap();
        assert_eq!(board.check_winner(), None);

        let row = board.make_move(3, Player::Red).unwrap();
        assert!(board.check_win(row, 3));
        assert_eq!(
            board.check_winner(),
            Some(GameOutcome::Winner(Player::Red))
        );
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // Staircase falling to the right
        board.make_move(6, Player::Red).unwrap();

        board.make_move(5, Player::Yellow).unwrap();
        board.make_move(5, Player::Red).unwrap();

        board.make_move(4, Player::Yellow).unwrap();
        board.make_move(4, Player::Yellow).unwrap();
        board.make_move(4, Player::Red).unwrap();

        board.make_move(3, Player::Yellow).unwrap();
        board.make_move(3, Player::Yellow).unwrap();
        board.make_move(3, Player::Yellow).unwrap();
        assert_eq!(board.check_winner(), None);

        let row = board.make_move(3, Player::Red).unwrap();
        assert!(board.check_win(row, 3));
        assert_eq!(
            board.check_winner(),
            Some(GameOutcome::Winner(Player::Red))
        );
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.make_move(col, Player::Red).unwrap();
        }
        assert!(!board.check_win(5, 1));
        assert_eq!(board.check_winner(), None);
    }

    #[test]
    fn test_draw_on_full_board_without_winner() {
        let board = striped_draw_board();
        assert!(board.is_full());
        assert_eq!(board.check_winner(), Some(GameOutcome::Draw));
        assert!(board.is_game_over());
    }
}
