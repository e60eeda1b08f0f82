//! # Connect Four Search
//!
//! Classic adversarial search for Connect Four: a plain depth-limited
//! minimax and an alpha-beta-pruned variant behind one agent interface,
//! plus a benchmark harness that measures what pruning actually saves on
//! randomly dealt mid-game boards. Both variants count visited nodes and
//! are guaranteed to pick the same move with the same score.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win/draw detection
//! - [`ai`] — Agent trait, heuristic evaluator, the two search variants
//! - [`bench`] — Board dealing and the timing/node-count benchmark
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod bench;
pub mod config;
pub mod error;
pub mod game;
