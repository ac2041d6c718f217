//! Top-level engine: the single entry point the game loop calls
//!
//! Wraps the searcher with a depth limit and a per-move wall-clock budget.
//! One engine corresponds to one search session: its transposition cache
//! grows without eviction until the engine is dropped or cleared.
//!
//! # Example
//!
//! ```
//! use caro::{Board, Engine, Mark, Pos};
//!
//! let mut board = Board::default();
//! assert!(board.apply_move(Pos::new(3, 3), Mark::X));
//!
//! let mut engine = Engine::with_config(2, 0);
//! if let Some(reply) = engine.find_best_move(&mut board, Mark::O) {
//!     assert!(board.apply_move(reply, Mark::O));
//! }
//! ```

use std::time::{Duration, Instant};

use tracing::info;

use crate::board::{Board, Mark, Pos};
use crate::search::{SearchStats, Searcher};

/// Default maximum search depth.
pub const DEFAULT_DEPTH: u8 = 6;

/// Default per-move wall-clock budget in milliseconds.
pub const DEFAULT_TIME_MS: u64 = 2_000;

/// Outcome of one move decision.
#[derive(Debug, Clone, Copy)]
pub struct MoveResult {
    /// Chosen move; `None` iff the board has no legal moves
    pub best_move: Option<Pos>,
    /// Score of the chosen move, from the engine's perspective
    pub score: i32,
    /// Deepest completed search iteration
    pub depth: u8,
    /// Nodes visited
    pub nodes: u64,
    /// Wall-clock time spent
    pub time_ms: u64,
    pub stats: SearchStats,
}

/// Game engine: iterative-deepening alpha-beta behind a two-method API.
pub struct Engine {
    searcher: Searcher,
    max_depth: u8,
    time_limit: Option<Duration>,
}

impl Engine {
    /// Engine with the default depth limit and time budget.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DEPTH, DEFAULT_TIME_MS)
    }

    /// Engine with a custom depth limit and per-move budget.
    ///
    /// A `time_limit_ms` of 0 disables the budget; the search then always
    /// runs to the full depth limit.
    #[must_use]
    pub fn with_config(max_depth: u8, time_limit_ms: u64) -> Self {
        Self {
            searcher: Searcher::new(),
            max_depth,
            time_limit: (time_limit_ms > 0).then(|| Duration::from_millis(time_limit_ms)),
        }
    }

    /// Best move for `side`, or `None` if the board has no legal moves
    /// (the caller treats that as a terminal state, not an error).
    pub fn find_best_move(&mut self, board: &mut Board, side: Mark) -> Option<Pos> {
        self.find_best_move_with_stats(board, side).best_move
    }

    /// Like [`find_best_move`], with full search statistics.
    ///
    /// [`find_best_move`]: Engine::find_best_move
    pub fn find_best_move_with_stats(&mut self, board: &mut Board, side: Mark) -> MoveResult {
        let start = Instant::now();
        let result = self
            .searcher
            .search(board, side, self.max_depth, self.time_limit);
        let time_ms = start.elapsed().as_millis() as u64;

        info!(
            side = %side,
            best = ?result.best_move,
            score = result.score,
            depth = result.depth,
            nodes = result.nodes,
            time_ms,
            "move decided"
        );

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            nodes: result.nodes,
            time_ms,
            stats: result.stats,
        }
    }

    /// Cached positions accumulated this session.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.searcher.cache_len()
    }

    /// Reset the transposition cache, starting a fresh session.
    pub fn clear_cache(&mut self) {
        self.searcher.clear_cache();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
