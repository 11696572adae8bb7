//! Randomized construction of a 26x26 Latin square.
//!
//! The search always fills the empty cell with the most excluded values next
//! (first such cell in row major order on ties) and tries the remaining values
//! in random order. Backtracking uses an explicit stack of frames instead of
//! recursion, row and column occupancy is kept in `u32` bitsets.

use log::debug;

use super::alphabet::ALPHABET_LEN;
use crate::prng::Rng;

const N: usize = ALPHABET_LEN as usize;
const CELLS: usize = N * N;

/// Dead ends tolerated before a search is abandoned and started over.
const RESTART_AFTER: usize = 50_000;

/// A Latin square over the values `1..=26`.
#[derive(Clone, PartialEq, Eq)]
pub struct LatinSquare {
    rows: [[u8; N]; N],
    /// `inverse[r][v - 1]` is the column of value `v` in row `r`
    inverse: [[u8; N]; N],
}

impl std::fmt::Debug for LatinSquare {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.rows.iter()).finish()
    }
}

impl LatinSquare {
    /// Builds a square, consuming randomness from `rng`.
    ///
    /// # Panics
    /// Panics if the search space is exhausted without a solution, which
    /// cannot happen for an empty grid.
    pub fn generate(rng: &mut Rng) -> Self {
        let mut attempt = 1;
        loop {
            match Search::new().run(rng) {
                Outcome::Complete(square) => return square,
                Outcome::Restart => {
                    debug!("latin square search hit {RESTART_AFTER} dead ends, restart #{attempt}");
                    attempt += 1;
                }
                Outcome::Exhausted => {
                    unreachable!("an empty latin square is always completable")
                }
            }
        }
    }

    /// The value `1..=26` at `(row, column)`.
    #[inline]
    pub fn get(&self, row: u8, column: u8) -> u8 {
        self.rows[row as usize][column as usize]
    }

    /// The column that holds `value` in `row`.
    #[inline]
    pub fn column_of(&self, row: u8, value: u8) -> u8 {
        self.inverse[row as usize][(value - 1) as usize]
    }

    pub fn rows(&self) -> &[[u8; N]; N] {
        &self.rows
    }

    /// True when every row and column is a permutation of `1..=26`.
    pub fn is_valid(&self) -> bool {
        const FULL: u32 = (1 << N) - 1;
        (0..N).all(|i| {
            let row = (0..N).fold(0u32, |seen, j| seen | bit(self.rows[i][j]));
            let column = (0..N).fold(0u32, |seen, j| seen | bit(self.rows[j][i]));
            row == FULL && column == FULL
        })
    }
}

#[inline]
fn bit(value: u8) -> u32 {
    match value {
        1..=26 => 1 << (value - 1),
        _ => 0,
    }
}

enum Outcome {
    Complete(LatinSquare),
    Restart,
    Exhausted,
}

struct Frame {
    row: usize,
    column: usize,
    candidates: Vec<u8>,
    next: usize,
}

struct Search {
    grid: [[u8; N]; N],
    row_sets: [u32; N],
    column_sets: [u32; N],
    filled: usize,
    stack: Vec<Frame>,
}

impl Search {
    fn new() -> Self {
        Self {
            grid: [[0; N]; N],
            row_sets: [0; N],
            column_sets: [0; N],
            filled: 0,
            stack: Vec::with_capacity(CELLS),
        }
    }

    fn run(mut self, rng: &mut Rng) -> Outcome {
        let mut dead_ends = 0;
        self.push_frame(rng);

        loop {
            if self.filled == CELLS {
                return Outcome::Complete(self.into_square());
            }
            let Some(frame) = self.stack.last_mut() else {
                return Outcome::Exhausted;
            };
            let (row, column) = (frame.row, frame.column);
            let value = frame.candidates.get(frame.next).copied();
            frame.next += 1;

            self.clear(row, column);
            match value {
                Some(value) => {
                    self.place(row, column, value);
                    if self.filled < CELLS {
                        self.push_frame(rng);
                    }
                }
                None => {
                    self.stack.pop();
                    dead_ends += 1;
                    if dead_ends >= RESTART_AFTER {
                        return Outcome::Restart;
                    }
                }
            }
        }
    }

    fn push_frame(&mut self, rng: &mut Rng) {
        let Some((row, column)) = self.most_constrained_cell() else {
            return;
        };
        let taken = self.row_sets[row] | self.column_sets[column];
        let mut candidates: Vec<u8> = (1..=ALPHABET_LEN).filter(|&v| (taken & bit(v)) == 0).collect();
        rng.shuffle(&mut candidates);

        self.stack.push(Frame {
            row,
            column,
            candidates,
            next: 0,
        });
    }

    fn most_constrained_cell(&self) -> Option<(usize, usize)> {
        let mut best: Option<((usize, usize), u32)> = None;
        for row in 0..N {
            for column in 0..N {
                if self.grid[row][column] != 0 {
                    continue;
                }
                let excluded = (self.row_sets[row] | self.column_sets[column]).count_ones();
                if best.map_or(true, |(_, most)| excluded > most) {
                    best = Some(((row, column), excluded));
                }
            }
        }
        best.map(|(cell, _)| cell)
    }

    fn place(&mut self, row: usize, column: usize, value: u8) {
        self.grid[row][column] = value;
        self.row_sets[row] |= bit(value);
        self.column_sets[column] |= bit(value);
        self.filled += 1;
    }

    fn clear(&mut self, row: usize, column: usize) {
        let value = self.grid[row][column];
        if value == 0 {
            return;
        }
        self.grid[row][column] = 0;
        self.row_sets[row] &= !bit(value);
        self.column_sets[column] &= !bit(value);
        self.filled -= 1;
    }

    fn into_square(self) -> LatinSquare {
        let mut inverse = [[0u8; N]; N];
        for (row, values) in self.grid.iter().enumerate() {
            for (column, &value) in values.iter().enumerate() {
                inverse[row][(value - 1) as usize] = column as u8;
            }
        }

        LatinSquare {
            rows: self.grid,
            inverse,
        }
    }
}
