use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use connect_four_search::ai::MoveOrdering;
use connect_four_search::bench::{Benchmark, DepthReport};
use connect_four_search::config::AppConfig;

/// Benchmark plain minimax against alpha-beta pruning.
#[derive(Parser)]
#[command(name = "benchmark", about = "Benchmark Connect Four search agents")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of benchmark boards
    #[arg(long)]
    boards: Option<usize>,

    /// Override search depths (comma separated, e.g. 3,4,5)
    #[arg(long)]
    depths: Option<String>,

    /// Override board generation seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override column exploration order: ascending or center_out
    #[arg(long)]
    ordering: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(boards) = cli.boards {
        app_config.benchmark.num_boards = boards;
    }
    if let Some(depths) = &cli.depths {
        app_config.benchmark.depths = parse_depths(depths)?;
    }
    if let Some(seed) = cli.seed {
        app_config.benchmark.seed = Some(seed);
    }
    if let Some(ordering) = &cli.ordering {
        app_config.benchmark.move_ordering = match ordering.as_str() {
            "ascending" => MoveOrdering::Ascending,
            "center_out" => MoveOrdering::CenterOut,
            other => bail!("unknown ordering '{}' (expected 'ascending' or 'center_out')", other),
        };
    }

    // Re-validate with overrides applied
    app_config
        .validate()
        .context("validating benchmark configuration")?;

    let reports = Benchmark::new(app_config.benchmark).run()?;
    print_table(&reports);

    Ok(())
}

fn parse_depths(raw: &str) -> Result<Vec<usize>> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .with_context(|| format!("invalid depth '{}'", part.trim()))
        })
        .collect()
}

fn print_table(reports: &[DepthReport]) {
    println!();
    println!(
        "{:<6} {:>12} {:>14} {:>9} {:>14} {:>16} {:>11}",
        "Depth",
        "Minimax (s)",
        "AlphaBeta (s)",
        "Speedup",
        "Minimax nodes",
        "AlphaBeta nodes",
        "Saved (%)"
    );
    for r in reports {
        println!(
            "{:<6} {:>12.4} {:>14.4} {:>8.2}x {:>14.1} {:>16.1} {:>11.1}",
            r.depth,
            r.minimax_time_secs,
            r.alphabeta_time_secs,
            r.speedup,
            r.minimax_nodes,
            r.alphabeta_nodes,
            r.nodes_saved_pct,
        );
    }
}
