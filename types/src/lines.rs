//! The fixed catalog of winning lines.

use std::fmt;

use crate::{BOARD_SIDE, LINE_COUNT};

/// Which of the ten lines a mask describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Row(u8),
    Column(u8),
    /// `{0, 5, 10, 15}`
    Diagonal,
    /// `{3, 6, 9, 12}`
    AntiDiagonal,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineKind::Row(r) => write!(f, "row {r}"),
            LineKind::Column(c) => write!(f, "column {c}"),
            LineKind::Diagonal => f.write_str("diagonal"),
            LineKind::AntiDiagonal => f.write_str("anti-diagonal"),
        }
    }
}

/// One winning line: four cells, held as a board mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    kind: LineKind,
    mask: u16,
}

impl Line {
    #[must_use]
    pub const fn kind(self) -> LineKind {
        self.kind
    }

    #[must_use]
    pub const fn mask(self) -> u16 {
        self.mask
    }

    /// Cell indices on this line, ascending.
    pub fn cells(self) -> impl Iterator<Item = usize> {
        (0..16).filter(move |&i| self.mask & (1 << i) != 0)
    }

    #[inline]
    #[must_use]
    pub const fn is_complete(self, board_mask: u16) -> bool {
        board_mask & self.mask == self.mask
    }
}

const fn row_mask(row: usize) -> u16 {
    0b1111 << (row * BOARD_SIDE)
}

const fn column_mask(col: usize) -> u16 {
    0x1111 << col
}

const DIAGONAL_MASK: u16 = (1 << 0) | (1 << 5) | (1 << 10) | (1 << 15);
const ANTI_DIAGONAL_MASK: u16 = (1 << 3) | (1 << 6) | (1 << 9) | (1 << 12);

/// All ten lines: four rows, four columns, then both diagonals.
pub const LINES: [Line; LINE_COUNT] = [
    Line { kind: LineKind::Row(0), mask: row_mask(0) },
    Line { kind: LineKind::Row(1), mask: row_mask(1) },
    Line { kind: LineKind::Row(2), mask: row_mask(2) },
    Line { kind: LineKind::Row(3), mask: row_mask(3) },
    Line { kind: LineKind::Column(0), mask: column_mask(0) },
    Line { kind: LineKind::Column(1), mask: column_mask(1) },
    Line { kind: LineKind::Column(2), mask: column_mask(2) },
    Line { kind: LineKind::Column(3), mask: column_mask(3) },
    Line { kind: LineKind::Diagonal, mask: DIAGONAL_MASK },
    Line { kind: LineKind::AntiDiagonal, mask: ANTI_DIAGONAL_MASK },
];

/// Lookup over [`LINES`].
pub struct LineCatalog;

impl LineCatalog {
    #[must_use]
    pub const fn lines() -> &'static [Line; LINE_COUNT] {
        &LINES
    }

    /// Number of lines fully covered by `board_mask`.
    #[inline]
    #[must_use]
    pub fn completed(board_mask: u16) -> usize {
        LINES.iter().filter(|line| line.is_complete(board_mask)).count()
    }

    pub fn completed_lines(board_mask: u16) -> impl Iterator<Item = Line> {
        LINES.into_iter().filter(move |line| line.is_complete(board_mask))
    }
}
