//! Command implementations

pub mod benchmark;
pub mod compare;
pub mod solve;

pub use benchmark::{BenchmarkResult, StrategySummary, run_benchmark};
pub use compare::{CompareResult, run_compare};
pub use solve::{GameResult, GuessStep, run_game};
