//! Board module - the 4x4 grid and move resolution
//!
//! The board is a flat, row-major array of 16 cell values. 0 marks an empty
//! cell, anything else is a power of two >= 2. Boards built from outside
//! values take tiles up to `MAX_TILE` only. The board knows nothing about
//! score, history or rendering: it slides, merges, spawns and answers whether
//! any move is left.

use arrayvec::ArrayVec;
use tracing::trace;

use crate::line::{groups, merge_line};
use crate::rng::{spawn_value, RandomSource};
use crate::types::{is_valid_cell, Cell, Direction, InvalidArgument, BOARD_SIZE, CELL_COUNT};

/// At most two merges per group, four groups per move
pub const MAX_MERGES: usize = 2 * BOARD_SIZE;

/// Outcome of sliding the board in one direction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether any cell value differs from before the move
    pub changed: bool,
    /// Sum of every value produced by a merge
    pub score_gained: u32,
    /// Indices of cells holding a freshly merged tile, ascending.
    /// Only meant as an animation hint.
    pub merged: ArrayVec<usize, MAX_MERGES>,
}

/// The game board - 4x4 cells using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * BOARD_SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a board from row-major values, rejecting malformed input
    pub fn from_values(values: &[Cell]) -> Result<Self, InvalidArgument> {
        Ok(Self {
            cells: validate(values)?,
        })
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(row * BOARD_SIZE + col)
    }

    /// Get cell at (row, col). Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> Cell {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values
    pub fn sum(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [0; CELL_COUNT];
    }

    /// Place one random tile in a uniformly chosen empty cell.
    ///
    /// Returns false, leaving the board untouched, when no cell is empty.
    pub fn spawn_tile(&mut self, rng: &mut impl RandomSource) -> bool {
        let empty: ArrayVec<usize, CELL_COUNT> = self
            .cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(i, _)| i)
            .collect();
        if empty.is_empty() {
            return false;
        }

        let idx = empty[rng.next_range(empty.len() as u32) as usize];
        let value = spawn_value(rng);
        self.cells[idx] = value;
        trace!(idx, value, "spawned tile");
        true
    }

    /// Slide every tile in `direction`, merging equal neighbours once.
    pub fn slide(&mut self, direction: Direction) -> MoveOutcome {
        let mut outcome = MoveOutcome::default();

        for group in groups(direction) {
            let before = group.map(|idx| self.cells[idx]);
            let line = merge_line(before);

            for (pos, &idx) in group.iter().enumerate() {
                if line.values[pos] != before[pos] {
                    outcome.changed = true;
                }
                self.cells[idx] = line.values[pos];
                if line.merged[pos] {
                    outcome.merged.push(idx);
                }
            }
            outcome.score_gained += line.gained;
        }

        outcome.merged.sort_unstable();
        outcome
    }

    /// Whether sliding in `direction` would change the board
    pub fn can_slide(&self, direction: Direction) -> bool {
        self.clone().slide(direction).changed
    }

    /// True when the board is full and no two neighbours share a value.
    pub fn is_terminal(&self) -> bool {
        if self.cells.contains(&0) {
            return false;
        }

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let value = self.cells[row * BOARD_SIZE + col];
                if col + 1 < BOARD_SIZE && self.cells[row * BOARD_SIZE + col + 1] == value {
                    return false;
                }
                if row + 1 < BOARD_SIZE && self.cells[(row + 1) * BOARD_SIZE + col] == value {
                    return false;
                }
            }
        }

        true
    }

    /// Copy of the current cell values
    pub fn snapshot_values(&self) -> [Cell; CELL_COUNT] {
        self.cells
    }

    /// Overwrite every cell. On error the board is left as it was.
    pub fn restore(&mut self, values: &[Cell]) -> Result<(), InvalidArgument> {
        self.cells = validate(values)?;
        Ok(())
    }

    /// Write cells into a 2D grid (for snapshots)
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_SIZE]; BOARD_SIZE]) {
        for (row, chunk) in out.iter_mut().zip(self.cells.chunks_exact(BOARD_SIZE)) {
            row.copy_from_slice(chunk);
        }
    }

    /// Restore from a snapshot this crate took itself
    pub(crate) fn restore_snapshot(&mut self, values: [Cell; CELL_COUNT]) {
        self.cells = values;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(values: &[Cell]) -> Result<[Cell; CELL_COUNT], InvalidArgument> {
    let cells: [Cell; CELL_COUNT] =
        values
            .try_into()
            .map_err(|_| InvalidArgument::WrongLength {
                expected: CELL_COUNT,
                actual: values.len(),
            })?;
    if let Some((index, &value)) = cells.iter().enumerate().find(|&(_, &v)| !is_valid_cell(v)) {
        return Err(InvalidArgument::InvalidTileValue { index, value });
    }
    Ok(cells)
}
