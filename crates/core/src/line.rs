//! Group derivation and the compact-and-merge pass for a single line.
//!
//! A group is the four cell indices of one row or column, ordered so that
//! position 0 is the edge tiles travel toward. Resolving a move is the same
//! operation on every group, regardless of direction.

use crate::types::{Cell, Direction, BOARD_SIZE};

/// Cell indices of one group, in order of travel
pub type Group = [usize; BOARD_SIZE];

/// Result of resolving one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMerge {
    /// Output values, zero-padded
    pub values: [Cell; BOARD_SIZE],
    /// Sum of every value produced by a merge
    pub gained: u32,
    /// `merged[i]` is true when output position `i` was produced by a merge
    pub merged: [bool; BOARD_SIZE],
}

/// Derive the group at `index` for a move in `direction`.
///
/// Up/down groups are columns (`index` = column), left/right groups are rows
/// (`index` = row). Down and right reverse the inner order.
pub fn group_indices(direction: Direction, index: usize) -> Group {
    debug_assert!(index < BOARD_SIZE);
    let mut group = [0usize; BOARD_SIZE];
    for (j, slot) in group.iter_mut().enumerate() {
        *slot = if direction.is_vertical() {
            j * BOARD_SIZE + index
        } else {
            index * BOARD_SIZE + j
        };
    }
    if direction.is_reversed() {
        group.reverse();
    }
    group
}

/// All groups for a move in `direction`
pub fn groups(direction: Direction) -> [Group; BOARD_SIZE] {
    let mut out = [[0usize; BOARD_SIZE]; BOARD_SIZE];
    for (i, group) in out.iter_mut().enumerate() {
        *group = group_indices(direction, i);
    }
    out
}

/// Compact and merge one line toward position 0.
///
/// Source values are scanned once. A value equal to the last placed output
/// doubles that output in place, unless that output is itself the product of
/// a merge in this pass.
pub fn merge_line(values: [Cell; BOARD_SIZE]) -> LineMerge {
    let mut out = [0 as Cell; BOARD_SIZE];
    let mut merged = [false; BOARD_SIZE];
    let mut len = 0usize;
    let mut gained = 0u32;

    for value in values.into_iter().filter(|&v| v != 0) {
        if len > 0 && !merged[len - 1] && out[len - 1] == value {
            out[len - 1] *= 2;
            merged[len - 1] = true;
            gained += out[len - 1];
        } else {
            out[len] = value;
            len += 1;
        }
    }

    LineMerge {
        values: out,
        gained,
        merged,
    }
}
