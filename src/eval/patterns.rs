//! Pattern weights for line evaluation
//!
//! Lines are translated into a 3-symbol alphabet and matched against the
//! fixed table below, counting every overlapping occurrence. With a win run
//! of four, a three with one open extension is a one-shot completion threat
//! and a three with both ends open cannot be stopped by a single reply, so
//! those two classes sit just under the win weight. Weights are spaced so
//! that each class dominates everything below it combined.

/// Line symbols: the evaluated player's mark, an empty cell, and everything
/// else (opponent mark or the virtual blocker beyond the board edge).
pub const SELF: u8 = 0;
pub const EMPTY: u8 = 1;
pub const OTHER: u8 = 2;

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Four in a row - the game is won
    pub const FOUR: i32 = 1_000_000;
    /// Open three: _XXX_ (two completion cells, unstoppable)
    pub const OPEN_THREE: i32 = 100_000;
    /// Three with one open extension: XXX_ or _XXX (one move from four)
    pub const THREE: i32 = 50_000;
    /// Gapped three: XX_X or X_XX (one move from four, but blockable)
    pub const BROKEN_THREE: i32 = 40_000;
    /// Open two: _XX_ (grows into an open three)
    pub const OPEN_TWO: i32 = 5_000;
    /// Two with one open side: XX__ or __XX
    pub const TWO: i32 = 500;
    /// Lone mark with room around it
    pub const ONE: i32 = 50;
}

/// The ranked sub-pattern table, matched over every window of each line.
///
/// Windows are symbol slices; a window matches only if every cell agrees,
/// so any opponent mark or board edge inside the window rules it out.
pub const PATTERNS: &[(&[u8], i32)] = &[
    (&[SELF, SELF, SELF, SELF], PatternScore::FOUR),
    (&[EMPTY, SELF, SELF, SELF, EMPTY], PatternScore::OPEN_THREE),
    (&[EMPTY, SELF, SELF, SELF], PatternScore::THREE),
    (&[SELF, SELF, SELF, EMPTY], PatternScore::THREE),
    (&[SELF, SELF, EMPTY, SELF], PatternScore::BROKEN_THREE),
    (&[SELF, EMPTY, SELF, SELF], PatternScore::BROKEN_THREE),
    (&[EMPTY, SELF, SELF, EMPTY], PatternScore::OPEN_TWO),
    (&[SELF, SELF, EMPTY, EMPTY], PatternScore::TWO),
    (&[EMPTY, EMPTY, SELF, SELF], PatternScore::TWO),
    (&[SELF, EMPTY, EMPTY, EMPTY], PatternScore::ONE),
    (&[EMPTY, SELF, EMPTY, EMPTY], PatternScore::ONE),
    (&[EMPTY, EMPTY, SELF, EMPTY], PatternScore::ONE),
    (&[EMPTY, EMPTY, EMPTY, SELF], PatternScore::ONE),
];
