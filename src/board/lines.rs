//! Line extraction and win detection
//!
//! A line is a maximal row, column, or diagonal of length >= [`WIN_RUN`].
//! Lines are produced fresh on every visit, oriented consistently
//! (left-to-right, top-to-bottom), and never outlive the visitor callback:
//! rows borrow the grid directly, the other directions go through a fixed
//! stack buffer, so a full sweep allocates nothing and touches each cell a
//! constant number of times (O(N^2) total).

use super::{Board, Mark, Pos, MAX_SIZE, WIN_RUN};

/// The four scan directions: horizontal, vertical, diagonal down-right,
/// diagonal down-left. Each line is visited once, so a single orientation
/// per direction suffices.
pub const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

impl Board {
    /// Visit every row, column, and diagonal of length >= [`WIN_RUN`].
    ///
    /// The slice passed to `f` is only valid for the duration of the call.
    /// This sweep is the dominant per-node cost of the search, so it stays
    /// linear in the cell count.
    pub fn for_each_line<F: FnMut(&[Mark])>(&self, mut f: F) {
        let n = self.size();
        let mut buf = [Mark::Empty; MAX_SIZE];

        // Rows: contiguous in the grid, borrowed directly.
        for r in 0..n {
            f(self.row(r));
        }

        // Columns, top to bottom.
        for c in 0..n {
            for r in 0..n {
                buf[r] = self.get(Pos::new(r as u8, c as u8));
            }
            f(&buf[..n]);
        }

        // Down-right diagonals, from each top-edge and left-edge start.
        for (start_r, start_c) in (0..n).map(|c| (0, c)).chain((1..n).map(|r| (r, 0))) {
            let len = n - start_r.max(start_c);
            if len < WIN_RUN {
                continue;
            }
            for i in 0..len {
                buf[i] = self.get(Pos::new((start_r + i) as u8, (start_c + i) as u8));
            }
            f(&buf[..len]);
        }

        // Down-left diagonals, from each top-edge and right-edge start.
        for (start_r, start_c) in (0..n).map(|c| (0, c)).chain((1..n).map(|r| (r, n - 1))) {
            let len = (start_c + 1).min(n - start_r);
            if len < WIN_RUN {
                continue;
            }
            for i in 0..len {
                buf[i] = self.get(Pos::new((start_r + i) as u8, (start_c - i) as u8));
            }
            f(&buf[..len]);
        }
    }

    /// True iff `mark` has [`WIN_RUN`] consecutive cells in any direction.
    ///
    /// Scans outward from each cell holding `mark`; only run starts are
    /// checked, so each run is examined once.
    #[must_use]
    pub fn has_four_in_a_row(&self, mark: Mark) -> bool {
        if mark == Mark::Empty {
            return false;
        }
        let n = self.size() as i32;
        for pos in self.occupied_cells(mark) {
            let (r0, c0) = (i32::from(pos.row), i32::from(pos.col));
            for (dr, dc) in DIRECTIONS {
                // Skip unless this cell starts the run in this direction.
                if self.contains(r0 - dr, c0 - dc)
                    && self.get(Pos::new((r0 - dr) as u8, (c0 - dc) as u8)) == mark
                {
                    continue;
                }
                let mut run = 1;
                let (mut r, mut c) = (r0 + dr, c0 + dc);
                while r >= 0 && r < n && c >= 0 && c < n {
                    if self.get(Pos::new(r as u8, c as u8)) != mark {
                        break;
                    }
                    run += 1;
                    if run >= WIN_RUN {
                        return true;
                    }
                    r += dr;
                    c += dc;
                }
            }
        }
        false
    }

    /// Iterate over all cells holding `mark` in row-major order.
    pub fn occupied_cells(&self, mark: Mark) -> impl Iterator<Item = Pos> + '_ {
        let n = self.size();
        (0..n * n)
            .map(move |idx| Pos::from_index(idx, n))
            .filter(move |&p| self.get(p) == mark)
    }
}
