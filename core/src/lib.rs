//! Annotation synchronization for the sticker board.
//!
//! The host supplies a [`BoardSource`] and an [`ExistingText`] buffer and
//! calls [`DisplaySynchronizer::on_tick`] once per refresh. Everything else
//! (solving, composing, patching the buffer) happens inside that call.

pub mod compose;
mod error;
pub mod host;
mod marker;
mod sync;

pub use compose::{Annotation, AnnotationComposer, Layout, Segment, format_percent};
pub use error::BufferError;
pub use host::{BoardSource, ExistingText};
pub use marker::MarkerScanner;
pub use sync::{DisplaySynchronizer, TickOutcome};
