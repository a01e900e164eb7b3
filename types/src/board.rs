//! Board snapshots.
//!
//! A [`BoardState`] is an immutable observation of the 16 cells, stored as a
//! bitmask with bit `i` set when cell `i = row * 4 + col` carries a stamp.

use std::fmt;

use crate::{BOARD_SIDE, CELL_COUNT, STAMP_TOTAL};

/// Bitmask with every cell set.
pub const FULL_MASK: u16 = u16::MAX;

/// Immutable 16-cell board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoardState {
    mask: u16,
}

impl BoardState {
    /// Board with no stamps placed.
    pub const EMPTY: Self = Self { mask: 0 };

    #[must_use]
    pub const fn from_mask(mask: u16) -> Self {
        Self { mask }
    }

    /// Build a snapshot from 16 row-major cells.
    #[must_use]
    pub fn from_cells(cells: [bool; CELL_COUNT]) -> Self {
        let mask = cells
            .iter()
            .enumerate()
            .filter(|(_, marked)| **marked)
            .fold(0u16, |mask, (i, _)| mask | (1 << i));
        Self { mask }
    }

    /// Build a snapshot from marked cell indices. Indices outside the board are ignored.
    #[must_use]
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        let mask = indices
            .into_iter()
            .filter(|&i| i < CELL_COUNT)
            .fold(0u16, |mask, i| mask | (1 << i));
        Self { mask }
    }

    #[inline]
    #[must_use]
    pub const fn mask(self) -> u16 {
        self.mask
    }

    #[inline]
    #[must_use]
    pub const fn is_marked(self, index: usize) -> bool {
        index < CELL_COUNT && self.mask & (1 << index) != 0
    }

    #[must_use]
    pub const fn is_marked_at(self, row: usize, col: usize) -> bool {
        row < BOARD_SIDE && col < BOARD_SIDE && self.is_marked(row * BOARD_SIDE + col)
    }

    #[must_use]
    pub fn cells(self) -> [bool; CELL_COUNT] {
        std::array::from_fn(|i| self.is_marked(i))
    }

    #[inline]
    #[must_use]
    pub const fn marked_count(self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Indices of the cells still open, ascending.
    pub fn unmarked_indices(self) -> impl Iterator<Item = usize> {
        (0..CELL_COUNT).filter(move |&i| !self.is_marked(i))
    }

    /// An empty or fully stamped board only shows up while the host is loading.
    #[must_use]
    pub const fn is_loading_artifact(self) -> bool {
        self.mask == 0 || self.mask == FULL_MASK
    }

    /// More stamps than a cycle can hand out.
    #[must_use]
    pub const fn exceeds_stamp_total(self) -> bool {
        self.marked_count() > STAMP_TOTAL
    }

    /// Stamps left to place this cycle, or `None` when the board is out of range.
    #[must_use]
    pub const fn remaining_stamps(self) -> Option<usize> {
        STAMP_TOTAL.checked_sub(self.marked_count())
    }

    /// Whether this observation differs from `previous`.
    ///
    /// The first observation (no previous snapshot) always counts as a change.
    #[must_use]
    pub fn changed_from(self, previous: Option<&Self>) -> bool {
        previous.is_none_or(|prev| prev.mask != self.mask)
    }
}

/// `changed = compare(prev, curr)`.
#[must_use]
pub fn compare(previous: Option<&BoardState>, current: &BoardState) -> bool {
    current.changed_from(previous)
}

impl From<[bool; CELL_COUNT]> for BoardState {
    fn from(cells: [bool; CELL_COUNT]) -> Self {
        Self::from_cells(cells)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIDE {
            if row > 0 {
                f.write_str("/")?;
            }
            for col in 0..BOARD_SIDE {
                f.write_str(if self.is_marked_at(row, col) { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}
