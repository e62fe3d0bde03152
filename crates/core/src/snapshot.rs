use arrayvec::ArrayVec;

use crate::board::MAX_MERGES;
use crate::types::{Cell, BOARD_SIZE};

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub score: u32,
    pub best_tile: Cell,
    pub moves: u32,
    pub episode_id: u32,
    pub game_over: bool,
    pub can_undo: bool,
    /// Cells merged by the most recent move (animation hint)
    pub merged: ArrayVec<usize, MAX_MERGES>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0; BOARD_SIZE]; BOARD_SIZE];
        self.score = 0;
        self.best_tile = 0;
        self.moves = 0;
        self.episode_id = 0;
        self.game_over = false;
        self.can_undo = false;
        self.merged.clear();
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Whether the cell at (row, col) was produced by a merge on the last move
    pub fn is_merged(&self, row: usize, col: usize) -> bool {
        self.merged.contains(&(row * BOARD_SIZE + col))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; BOARD_SIZE]; BOARD_SIZE],
            score: 0,
            best_tile: 0,
            moves: 0,
            episode_id: 0,
            game_over: false,
            can_undo: false,
            merged: ArrayVec::new(),
        }
    }
}
