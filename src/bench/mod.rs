//! Minimax vs alpha-beta benchmark: deals a shared set of random mid-game
//! boards, then times both search variants over the identical set at each
//! configured depth.

mod boards;
mod harness;

pub use boards::generate_boards;
pub use harness::{Benchmark, BenchmarkConfig, DepthReport};
