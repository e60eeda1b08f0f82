use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::ai::{Agent, AlphaBetaAgent, MinimaxAgent, MoveOrdering};
use crate::error::BenchmarkError;
use crate::game::{Board, Player};

use super::boards::generate_boards;

/// Benchmark configuration, loadable from the `[benchmark]` TOML table.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Number of random mid-game boards to deal.
    pub num_boards: usize,
    /// Fewest random moves played into a dealt board.
    pub min_random_moves: usize,
    /// Most random moves played into a dealt board.
    pub max_random_moves: usize,
    /// Search depths to compare, in plies.
    pub depths: Vec<usize>,
    /// Column exploration order shared by both variants.
    pub move_ordering: MoveOrdering,
    /// RNG seed for board generation; drawn from OS entropy when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            num_boards: 30,
            min_random_moves: 8,
            max_random_moves: 15,
            depths: vec![3, 4, 5],
            move_ordering: MoveOrdering::default(),
            seed: None,
        }
    }
}

/// Per-board averages for one search depth over the shared board set.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DepthReport {
    pub depth: usize,
    pub minimax_time_secs: f64,
    pub alphabeta_time_secs: f64,
    pub speedup: f64,
    pub minimax_nodes: f64,
    pub alphabeta_nodes: f64,
    pub nodes_saved_pct: f64,
}

/// Benchmark runner. Deals one board set up front and reuses it for every
/// depth and both variants, so the comparison is apples to apples; each
/// depth gets fresh agents whose node counters accumulate across the set.
pub struct Benchmark {
    config: BenchmarkConfig,
}

impl Benchmark {
    pub fn new(config: BenchmarkConfig) -> Self {
        Benchmark { config }
    }

    /// Run every configured depth and return one report per depth.
    pub fn run(&self) -> Result<Vec<DepthReport>, BenchmarkError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        println!(
            "Dealing {} boards with {}..={} random moves...",
            self.config.num_boards, self.config.min_random_moves, self.config.max_random_moves
        );
        let boards = generate_boards(
            self.config.num_boards,
            self.config.min_random_moves..=self.config.max_random_moves,
            &mut rng,
        )?;

        println!("-------------------------------------------");
        let mut reports = Vec::with_capacity(self.config.depths.len());
        for &depth in &self.config.depths {
            let report = self.run_depth(depth, &boards);
            println!(
                "Depth {} | minimax: {:.4}s, {:.0} nodes | alpha-beta: {:.4}s, {:.0} nodes | speedup: {:.2}x | nodes saved: {:.1}%",
                report.depth,
                report.minimax_time_secs,
                report.minimax_nodes,
                report.alphabeta_time_secs,
                report.alphabeta_nodes,
                report.speedup,
                report.nodes_saved_pct,
            );
            reports.push(report);
        }
        println!("-------------------------------------------");

        Ok(reports)
    }

    /// Time both variants over the shared boards at one depth.
    fn run_depth(&self, depth: usize, boards: &[Board]) -> DepthReport {
        let samples = boards.len().max(1) as f64;

        let mut minimax =
            MinimaxAgent::with_ordering(Player::Red, depth, self.config.move_ordering);
        let start = Instant::now();
        for board in boards {
            minimax.get_move(board);
        }
        let minimax_time_secs = start.elapsed().as_secs_f64() / samples;

        let mut alphabeta =
            AlphaBetaAgent::with_ordering(Player::Red, depth, self.config.move_ordering);
        let start = Instant::now();
        for board in boards {
            alphabeta.get_move(board);
        }
        let alphabeta_time_secs = start.elapsed().as_secs_f64() / samples;

        let minimax_nodes = minimax.nodes() as f64 / samples;
        let alphabeta_nodes = alphabeta.nodes() as f64 / samples;

        DepthReport {
            depth,
            minimax_time_secs,
            alphabeta_time_secs,
            speedup: ratio(minimax_time_secs, alphabeta_time_secs),
            minimax_nodes,
            alphabeta_nodes,
            nodes_saved_pct: percent_saved(minimax_nodes, alphabeta_nodes),
        }
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

fn percent_saved(baseline: f64, pruned: f64) -> f64 {
    if baseline == 0.0 {
        0.0
    } else {
        (baseline - pruned) / baseline * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(depths: Vec<usize>) -> BenchmarkConfig {
        BenchmarkConfig {
            num_boards: 4,
            min_random_moves: 6,
            max_random_moves: 10,
            depths,
            seed: Some(1),
            ..BenchmarkConfig::default()
        }
    }

    #[test]
    fn produces_one_report_per_depth() {
        let reports = Benchmark::new(small_config(vec![1, 2, 3])).run().unwrap();
        assert_eq!(reports.len(), 3);
        for (report, depth) in reports.iter().zip([1, 2, 3]) {
            assert_eq!(report.depth, depth);
            assert!(report.minimax_nodes > 0.0);
            assert!(report.alphabeta_nodes > 0.0);
            assert!(report.alphabeta_nodes <= report.minimax_nodes);
            assert!(report.minimax_time_secs > 0.0);
            assert!(report.alphabeta_time_secs > 0.0);
            assert!((0.0..100.0).contains(&report.nodes_saved_pct));
        }
    }

    #[test]
    fn depth_one_visits_identical_nodes() {
        // With one ply there is nothing to cut off, so the variants visit
        // exactly the same tree.
        let reports = Benchmark::new(small_config(vec![1])).run().unwrap();
        assert_eq!(reports[0].minimax_nodes, reports[0].alphabeta_nodes);
        assert_eq!(reports[0].nodes_saved_pct, 0.0);
    }

    #[test]
    fn pruning_saves_nodes_at_depth() {
        let reports = Benchmark::new(small_config(vec![4])).run().unwrap();
        assert!(
            reports[0].alphabeta_nodes < reports[0].minimax_nodes,
            "expected cutoffs at depth 4"
        );
        assert!(reports[0].nodes_saved_pct > 0.0);
    }

    #[test]
    fn seeded_runs_visit_identical_nodes() {
        let a = Benchmark::new(small_config(vec![2, 3])).run().unwrap();
        let b = Benchmark::new(small_config(vec![2, 3])).run().unwrap();
        for (ra, rb) in a.iter().zip(&b) {
            assert_eq!(ra.minimax_nodes, rb.minimax_nodes);
            assert_eq!(ra.alphabeta_nodes, rb.alphabeta_nodes);
        }
    }

    #[test]
    fn averages_divide_by_board_count() {
        let mut config = small_config(vec![1]);
        config.num_boards = 2;
        config.min_random_moves = 0;
        config.max_random_moves = 0;
        // Two empty boards at depth 1: seven root children each, so the
        // per-board average is exactly seven nodes.
        let reports = Benchmark::new(config).run().unwrap();
        assert_eq!(reports[0].minimax_nodes, 7.0);
        assert_eq!(reports[0].alphabeta_nodes, 7.0);
    }
}
