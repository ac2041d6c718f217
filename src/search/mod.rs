//! Adversarial search: transposition caching and alpha-beta with
//! iterative deepening

pub mod alphabeta;
pub mod cache;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
pub use cache::{Bound, CacheEntry, TranspositionCache};
