mod agent;
mod alphabeta;
mod heuristic;
mod minimax;
mod random;

use serde::{Deserialize, Serialize};

use crate::game::COLS;

pub use agent::Agent;
pub use alphabeta::AlphaBetaAgent;
pub use heuristic::{Heuristic, HeuristicAgent, WindowHeuristic, WIN_SCORE};
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;

/// Column exploration order shared by both search variants.
///
/// The order decides which of several equal-valued columns is returned
/// (first encountered wins) and how much alpha-beta gets to prune; it never
/// changes the search value. Both variants must use the same order for
/// their results to be comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOrdering {
    /// Left to right, column 0 first.
    Ascending,
    /// Center column first, then alternating outward.
    #[default]
    CenterOut,
}

impl MoveOrdering {
    /// Columns in exploration order.
    pub fn columns(self) -> [usize; COLS] {
        match self {
            MoveOrdering::Ascending => [0, 1, 2, 3, 4, 5, 6],
            MoveOrdering::CenterOut => [3, 2, 4, 1, 5, 0, 6],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orderings_cover_every_column() {
        for ordering in [MoveOrdering::Ascending, MoveOrdering::CenterOut] {
            let mut cols = ordering.columns();
            cols.sort_unstable();
            assert_eq!(cols, [0, 1, 2, 3, 4, 5, 6]);
        }
    }

    #[test]
    fn ordering_parses_from_snake_case() {
        #[derive(serde::Deserialize)]
        struct Wrap {
            ordering: MoveOrdering,
        }

        let wrap: Wrap = toml::from_str("ordering = \"center_out\"").unwrap();
        assert_eq!(wrap.ordering, MoveOrdering::CenterOut);
        let wrap: Wrap = toml::from_str("ordering = \"ascending\"").unwrap();
        assert_eq!(wrap.ordering, MoveOrdering::Ascending);
    }
}
