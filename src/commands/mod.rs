//! Command implementations

pub mod check;
pub mod generate;
pub mod play;
pub mod simple;
pub mod solve;

pub use check::{CheckResult, check_word};
pub use generate::{GenerateResult, run_generate};
pub use play::start_game;
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_puzzle};
