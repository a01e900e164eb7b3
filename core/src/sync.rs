//! Per-tick driver keeping the annotation in the host buffer current.
//!
//! One synchronizer owns one buffer. Each call to [`DisplaySynchronizer::on_tick`]
//! runs to completion synchronously:
//!
//! 1. Not ready: forget the remembered annotation and the previous
//!    snapshot, do nothing.
//! 2. Capture the board and compare it with the previous snapshot.
//! 3. Changed: discard loading artifacts and out-of-range boards, otherwise
//!    strip the old annotation at the marker and write a fresh one.
//! 4. Unchanged: if the marker vanished from the buffer, append the
//!    remembered annotation again.

use tails_solver::{reference_sample, solve};
use tails_types::{AnnotationSettings, BoardState};

use crate::compose::{Annotation, AnnotationComposer};
use crate::host::{BoardSource, ExistingText};
use crate::marker::MarkerScanner;

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The board source was not ready.
    NotReady,
    /// The board changed into a transient or unsolvable state.
    Discarded,
    /// Nothing to do.
    Unchanged,
    /// A fresh annotation was written after a board change.
    Written,
    /// The remembered annotation was appended after it went missing.
    Restored,
    /// A read or write failed, or readiness was lost before writing.
    Skipped,
}

/// Owns the previous snapshot and the remembered annotation for one buffer.
#[derive(Debug, Clone)]
pub struct DisplaySynchronizer {
    composer: AnnotationComposer,
    scanner: MarkerScanner,
    previous: Option<BoardState>,
    remembered: Option<Annotation>,
}

impl Default for DisplaySynchronizer {
    fn default() -> Self {
        Self::new(AnnotationSettings::default())
    }
}

impl DisplaySynchronizer {
    #[must_use]
    pub fn new(settings: AnnotationSettings) -> Self {
        Self {
            scanner: MarkerScanner::new(&settings),
            composer: AnnotationComposer::new(settings),
            previous: None,
            remembered: None,
        }
    }

    /// Synchronizer using the settings from the default config file.
    #[must_use]
    pub fn from_config() -> Self {
        Self::new(tails_config::load_settings())
    }

    #[must_use]
    pub fn previous(&self) -> Option<&BoardState> {
        self.previous.as_ref()
    }

    #[must_use]
    pub fn remembered(&self) -> Option<&Annotation> {
        self.remembered.as_ref()
    }

    #[must_use]
    pub fn composer(&self) -> &AnnotationComposer {
        &self.composer
    }

    /// Run one poll tick against `source` and `text`.
    pub fn on_tick<S, T>(&mut self, source: &S, text: &mut T) -> TickOutcome
    where
        S: BoardSource + ?Sized,
        T: ExistingText + ?Sized,
    {
        if !source.is_ready() {
            if self.remembered.take().is_some() {
                tracing::debug!("board source not ready; dropped remembered annotation");
            }
            // The first trusted observation after this re-derives the annotation.
            self.previous = None;
            return TickOutcome::NotReady;
        }

        let current = source.capture();
        let changed = current.changed_from(self.previous.as_ref());
        self.previous = Some(current);

        if changed {
            self.on_change(current, source, text)
        } else {
            self.on_steady(source, text)
        }
    }

    fn on_change<S, T>(&mut self, board: BoardState, source: &S, text: &mut T) -> TickOutcome
    where
        S: BoardSource + ?Sized,
        T: ExistingText + ?Sized,
    {
        if board.is_loading_artifact() || board.exceeds_stamp_total() {
            tracing::debug!(board = %board, marked = board.marked_count(), "discarding transient board");
            self.remembered = None;
            return TickOutcome::Discarded;
        }

        let content = match text.read() {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(error = %e, "buffer read failed; retrying next tick");
                self.previous = None;
                return TickOutcome::Skipped;
            }
        };
        let prefix = self.scanner.strip(&content);

        let annotation = self.compose_for(board, prefix);
        let patched = annotation.patch(prefix);
        self.remembered = Some(annotation);

        if patched == content {
            tracing::trace!(board = %board, "annotation already current");
            return TickOutcome::Unchanged;
        }
        self.write(source, text, patched, TickOutcome::Written)
    }

    fn on_steady<S, T>(&mut self, source: &S, text: &mut T) -> TickOutcome
    where
        S: BoardSource + ?Sized,
        T: ExistingText + ?Sized,
    {
        let Some(annotation) = &self.remembered else {
            return TickOutcome::Unchanged;
        };
        let content = match text.read() {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(error = %e, "buffer read failed; skipping restore check");
                return TickOutcome::Skipped;
            }
        };
        match self.scanner.locate(&content) {
            Ok(Some(_)) => {
                tracing::trace!("annotation intact");
                TickOutcome::Unchanged
            }
            Ok(None) => {
                let restored = annotation.patch(&content);
                tracing::debug!("marker missing from buffer; restoring annotation");
                self.write(source, text, restored, TickOutcome::Restored)
            }
            Err(e) => {
                // Not treated as a missing marker: appending on every tick
                // that fails the search would grow the buffer without bound.
                tracing::warn!(error = %e, "marker search failed; skipping restore check");
                TickOutcome::Skipped
            }
        }
    }

    fn compose_for(&self, board: BoardState, prefix: &[u8]) -> Annotation {
        let result = solve(&board);
        let sample = reference_sample(board.marked_count());
        let line_breaks = self.scanner.line_breaks(prefix);
        self.composer.compose(&result, sample.as_ref(), line_breaks)
    }

    fn write<S, T>(
        &mut self,
        source: &S,
        text: &mut T,
        content: Vec<u8>,
        outcome: TickOutcome,
    ) -> TickOutcome
    where
        S: BoardSource + ?Sized,
        T: ExistingText + ?Sized,
    {
        if !source.is_ready() {
            tracing::debug!("board source went away mid-tick; abandoning write");
            self.remembered = None;
            self.previous = None;
            return TickOutcome::Skipped;
        }
        match text.write(content) {
            Ok(()) => {
                tracing::debug!(?outcome, "annotation written");
                outcome
            }
            Err(e) => {
                tracing::warn!(error = %e, ?outcome, "buffer write failed");
                // A failed fresh write is retried as a change; a failed
                // restore is retried by the next steady tick.
                if outcome == TickOutcome::Written {
                    self.previous = None;
                }
                TickOutcome::Skipped
            }
        }
    }
}
