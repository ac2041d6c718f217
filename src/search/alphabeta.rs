//! Alpha-beta minimax with move ordering, transposition caching, and
//! iterative deepening
//!
//! The searcher owns the transposition cache and a node counter; the board
//! is borrowed mutably for the duration of one search and used as scratch
//! space, with every applied move undone on every exit path.
//!
//! Evaluation is always from the AI's perspective, and the defense bias
//! makes it asymmetric, so the search is written as explicit max/min
//! branches rather than a negamax.
//!
//! # Example
//!
//! ```
//! use caro::board::{Board, Mark, Pos};
//! use caro::search::Searcher;
//!
//! let mut board = Board::default();
//! assert!(board.apply_move(Pos::new(3, 3), Mark::X));
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&mut board, Mark::O, 2, None);
//! assert!(result.best_move.is_some());
//! ```

use std::cmp::Reverse;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::board::{Board, Mark, Pos};
use crate::eval::{Evaluator, PatternScore};

use super::cache::{Bound, TranspositionCache};

/// Infinity for alpha-beta windows; comfortably above any evaluation.
const INF: i32 = i32::MAX / 2;

/// Iterative deepening stops once a depth reports a score this high: the
/// win is already in hand and deeper search cannot improve on it.
const WIN_THRESHOLD: i32 = PatternScore::FOUR / 2;

/// Move-ordering bonus per occupied neighboring cell.
const NEIGHBOR_BONUS: i32 = 24;

/// Move-ordering weight per ring step toward the center.
const RING_WEIGHT: i32 = 16;

/// Search diagnostics for one invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Nodes cut off by the alpha-beta window
    pub cutoffs: u64,
    /// Transposition cache probes
    pub cache_probes: u64,
    /// Probes that returned a usable score
    pub cache_hits: u64,
}

/// Result of one search invocation.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// Best move found; `None` iff the board has no legal moves
    pub best_move: Option<Pos>,
    /// Score of the best move, from the AI's perspective
    pub score: i32,
    /// Deepest completed iteration
    pub depth: u8,
    /// Nodes visited
    pub nodes: u64,
    pub stats: SearchStats,
}

/// Alpha-beta searcher with a per-session transposition cache.
///
/// The cache has no eviction and persists across calls for the searcher's
/// lifetime; construct a fresh searcher (or [`clear_cache`]) per game
/// session to bound its growth.
///
/// [`clear_cache`]: Searcher::clear_cache
#[derive(Debug, Default)]
pub struct Searcher {
    cache: TranspositionCache,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterative-deepening search for the best move for `ai`.
    ///
    /// Runs depths `1..=depth_limit`, keeping the best completed result.
    /// The wall-clock `budget` is checked only between depth iterations,
    /// so the caller always gets at least the depth-1 answer and at most
    /// one in-progress depth of overrun.
    ///
    /// The board is scratch space: it is returned bit-identical to how it
    /// was received.
    pub fn search(
        &mut self,
        board: &mut Board,
        ai: Mark,
        depth_limit: u8,
        budget: Option<Duration>,
    ) -> SearchResult {
        debug_assert!(ai != Mark::Empty);
        self.nodes = 0;
        self.stats = SearchStats::default();

        let evaluator = Evaluator::new(ai);
        let start = Instant::now();
        let mut best = SearchResult {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            stats: SearchStats::default(),
        };

        for depth in 1..=depth_limit {
            if depth > 1 {
                if let Some(limit) = budget {
                    if start.elapsed() >= limit {
                        break;
                    }
                }
            }

            let result = self.search_root(board, &evaluator, depth);
            debug!(
                depth,
                score = result.score,
                nodes = self.nodes,
                best = ?result.best_move,
                "search depth completed"
            );
            best = result;

            if best.best_move.is_none() {
                break;
            }
            if best.score >= WIN_THRESHOLD {
                break;
            }
        }

        best.nodes = self.nodes;
        best.stats = self.stats;
        best
    }

    /// Cached positions accumulated so far.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop all cached positions.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Root search with a full window. Ties in score keep the move that
    /// ordering produced first, so results are stable across runs.
    fn search_root(&mut self, board: &mut Board, evaluator: &Evaluator, depth: u8) -> SearchResult {
        let ai = evaluator.ai_side();
        let fingerprint = board.fingerprint();
        let mut alpha = -INF;
        let mut best_move = None;
        let mut best_score = -INF;

        for pos in self.ordered_moves(board, ai) {
            let applied = board.apply_move(pos, ai);
            debug_assert!(applied);
            let score = self.alpha_beta(board, evaluator, ai.opponent(), depth - 1, alpha, INF);
            board.undo_move(pos);

            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
            alpha = alpha.max(best_score);
        }

        if best_move.is_some() {
            self.cache
                .store(fingerprint, ai, depth, best_score, Bound::Exact, best_move);
        }

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            depth,
            nodes: self.nodes,
            stats: self.stats,
        }
    }

    /// Recursive alpha-beta. `to_move` alternates each ply; the AI side is
    /// always the maximizer.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        evaluator: &Evaluator,
        to_move: Mark,
        depth_left: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;
        let ai = evaluator.ai_side();

        // Leaf: depth exhausted or terminal board.
        if depth_left == 0
            || board.is_full()
            || board.has_four_in_a_row(ai)
            || board.has_four_in_a_row(ai.opponent())
        {
            return evaluator.evaluate(board);
        }

        let fingerprint = board.fingerprint();
        self.stats.cache_probes += 1;
        if let Some(score) = self.cache.probe(fingerprint, to_move, depth_left, alpha, beta) {
            self.stats.cache_hits += 1;
            return score;
        }

        let maximizing = to_move == ai;
        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move = None;
        let mut bound = if maximizing { Bound::Upper } else { Bound::Lower };

        for pos in self.ordered_moves(board, to_move) {
            let applied = board.apply_move(pos, to_move);
            debug_assert!(applied);
            let score =
                self.alpha_beta(board, evaluator, to_move.opponent(), depth_left - 1, alpha, beta);
            board.undo_move(pos);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(pos);
                }
                if best_score >= beta {
                    self.stats.cutoffs += 1;
                    bound = Bound::Lower;
                    break;
                }
                if best_score > alpha {
                    alpha = best_score;
                    bound = Bound::Exact;
                }
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(pos);
                }
                if best_score <= alpha {
                    self.stats.cutoffs += 1;
                    bound = Bound::Upper;
                    break;
                }
                if best_score < beta {
                    beta = best_score;
                    bound = Bound::Exact;
                }
            }
        }

        self.cache
            .store(fingerprint, to_move, depth_left, best_score, bound, best_move);
        best_score
    }

    /// Candidate moves, most promising first.
    ///
    /// Every empty cell is a candidate; with no filtering, pruning can
    /// never change the result, only the cost. Ordering is a cheap proxy: the
    /// cached best move leads, then center proximity and adjacency to
    /// existing marks. The sort is stable, so equal scores keep row-major
    /// order and the whole search is deterministic.
    fn ordered_moves(&self, board: &Board, to_move: Mark) -> Vec<Pos> {
        let cache_move = self.cache.best_move(board.fingerprint(), to_move);
        let mut scored: Vec<(i32, Pos)> = board
            .empty_cells()
            .map(|pos| (order_score(board, pos, cache_move), pos))
            .collect();
        scored.sort_by_key(|&(score, _)| Reverse(score));
        scored.into_iter().map(|(_, pos)| pos).collect()
    }
}

/// Cheap one-cell ordering proxy.
fn order_score(board: &Board, pos: Pos, cache_move: Option<Pos>) -> i32 {
    if cache_move == Some(pos) {
        return i32::MAX;
    }
    let n = board.size() as i32;
    let (r, c) = (i32::from(pos.row), i32::from(pos.col));

    let ring = r.min(c).min(n - 1 - r).min(n - 1 - c);
    let mut score = ring * RING_WEIGHT;

    for dr in -1..=1 {
        for dc in -1..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            if board.contains(r + dr, c + dc)
                && board.get(Pos::new((r + dr) as u8, (c + dc) as u8)) != Mark::Empty
            {
                score += NEIGHBOR_BONUS;
            }
        }
    }
    score
}
