//! Mutable grid with in-place apply/undo and an incremental fingerprint
//!
//! The search treats the board as a scratch workspace: every move it applies
//! is undone before returning, on every exit path. Apply and undo are strict
//! mirrors of each other so the fingerprint round-trips bit-for-bit.

use super::zobrist::ZobristKeys;
use super::{BoardSizeError, Mark, Pos, MAX_SIZE, MIN_SIZE};

/// Game board: an N x N grid of [`Mark`]s, N fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
    /// Occupied cell count; equals moves applied minus moves undone
    occupied: usize,
    keys: ZobristKeys,
    hash: u64,
}

impl Board {
    /// Create an empty board of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSizeError`] if `size` is outside
    /// [`MIN_SIZE`]..=[`MAX_SIZE`].
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardSizeError(size));
        }
        Ok(Self {
            size,
            cells: vec![Mark::Empty; size * size],
            occupied: 0,
            keys: ZobristKeys::new(size),
            hash: 0,
        })
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// True iff `(row, col)` lies on the board.
    #[inline]
    #[must_use]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.size && col >= 0 && (col as usize) < self.size
    }

    /// Get the mark at a position.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.to_index(self.size)]
    }

    /// True iff the position is in range and the cell is empty.
    #[inline]
    #[must_use]
    pub fn is_valid_move(&self, pos: Pos) -> bool {
        self.contains(i32::from(pos.row), i32::from(pos.col))
            && self.cells[pos.to_index(self.size)] == Mark::Empty
    }

    /// Write `mark` into the cell if the move is valid.
    ///
    /// Returns `false` with no mutation otherwise. The only side effects of
    /// a successful apply are the single cell write and the matching
    /// fingerprint/occupancy updates.
    #[must_use = "an invalid move leaves the board unchanged"]
    pub fn apply_move(&mut self, pos: Pos, mark: Mark) -> bool {
        if mark == Mark::Empty || !self.is_valid_move(pos) {
            return false;
        }
        self.cells[pos.to_index(self.size)] = mark;
        self.occupied += 1;
        self.hash ^= self.keys.key(pos, mark);
        true
    }

    /// Reset the cell to empty, reversing a prior successful [`apply_move`]
    /// on the same cell.
    ///
    /// Calling this on a cell that was never applied is a contract
    /// violation; it is asserted in debug builds and left unchecked in
    /// release builds.
    ///
    /// [`apply_move`]: Board::apply_move
    pub fn undo_move(&mut self, pos: Pos) {
        let idx = pos.to_index(self.size);
        let mark = self.cells[idx];
        debug_assert!(mark != Mark::Empty, "undo of an empty cell at {pos:?}");
        if mark != Mark::Empty {
            self.cells[idx] = Mark::Empty;
            self.occupied -= 1;
            self.hash ^= self.keys.key(pos, mark);
        }
    }

    /// Occupied cell count.
    #[inline]
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied == self.size * self.size
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Content fingerprint: equal cell contents give equal fingerprints,
    /// and any single-cell change flips it with overwhelming probability.
    ///
    /// Maintained incrementally by [`apply_move`]/[`undo_move`], so reading
    /// it is free. Used as the transposition-cache key.
    ///
    /// [`apply_move`]: Board::apply_move
    /// [`undo_move`]: Board::undo_move
    #[inline]
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        self.hash
    }

    /// Iterate over all empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &m)| m == Mark::Empty)
            .map(|(idx, _)| Pos::from_index(idx, self.size))
    }

    /// Row `r` as a contiguous slice of the grid.
    #[inline]
    pub(crate) fn row(&self, r: usize) -> &[Mark] {
        &self.cells[r * self.size..(r + 1) * self.size]
    }
}

impl Default for Board {
    /// The standard 8x8 board.
    fn default() -> Self {
        Self::new(super::DEFAULT_SIZE).expect("default size is in range")
    }
}
