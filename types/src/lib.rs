//! Core domain types for the sticker board odds engine.
//!
//! This crate contains pure domain types with no IO and minimal dependencies:
//! board snapshots, the fixed line catalog, threshold probabilities,
//! categories and resolved annotation settings.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod board;
mod category;
mod chances;
mod lines;
pub mod settings;

pub use board::{BoardState, FULL_MASK, compare};
pub use category::{CAUTION_MARGIN, Category};
pub use chances::{LineChances, ProbabilityResult, ReferenceSample, THRESHOLD_COUNT, Threshold};
pub use lines::{LINES, Line, LineCatalog, LineKind};
pub use settings::{AnnotationSettings, SegmentStyle, SettingsError};

/// Cells per board side.
pub const BOARD_SIDE: usize = 4;

/// Cells on the board, row-major: `i = row * 4 + col`.
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// Winning lines: 4 rows, 4 columns, 2 diagonals.
pub const LINE_COUNT: usize = 10;

/// Stamps handed out per cycle.
pub const STAMP_TOTAL: usize = 9;
