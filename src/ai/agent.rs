use crate::game::Board;

/// Universal interface for move providers.
///
/// `get_move` takes `&mut self` so instrumented searchers can update their
/// node counters behind the common seam. Implementations never mutate the
/// caller's board; the searchers work on a private scratch copy.
pub trait Agent {
    /// Select a column for the side this agent plays. The board must have
    /// at least one legal move.
    fn get_move(&mut self, board: &Board) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
