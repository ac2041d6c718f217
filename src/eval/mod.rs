//! Position evaluation: line-pattern matching plus positional weighting

pub mod heuristic;
pub mod patterns;

pub use heuristic::Evaluator;
pub use patterns::PatternScore;
