//! Collaborators supplied by the host application.
//!
//! The core never touches host memory directly; everything it observes or
//! writes goes through these two traits.

use tails_types::{BoardState, CELL_COUNT};

use crate::BufferError;

/// Live view of the sticker board.
pub trait BoardSource {
    /// Whether the board UI is loaded and its cells can be trusted.
    fn is_ready(&self) -> bool;

    /// The 16 cells in row-major order, `true` where a stamp sits.
    ///
    /// Each call is one instantaneous observation.
    fn snapshot(&self) -> [bool; CELL_COUNT];

    fn capture(&self) -> BoardState {
        BoardState::from_cells(self.snapshot())
    }
}

/// The host-owned text buffer that carries the annotation.
///
/// Content is opaque bytes (it may hold host rich-text payloads).
pub trait ExistingText {
    fn read(&self) -> Result<Vec<u8>, BufferError>;

    /// Replace the buffer wholesale.
    fn write(&mut self, content: Vec<u8>) -> Result<(), BufferError>;
}

impl<T: BoardSource + ?Sized> BoardSource for &T {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn snapshot(&self) -> [bool; CELL_COUNT] {
        (**self).snapshot()
    }
}

impl<T: ExistingText + ?Sized> ExistingText for &mut T {
    fn read(&self) -> Result<Vec<u8>, BufferError> {
        (**self).read()
    }

    fn write(&mut self, content: Vec<u8>) -> Result<(), BufferError> {
        (**self).write(content)
    }
}
