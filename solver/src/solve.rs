//! Exhaustive enumeration of the remaining stamp placements.
//!
//! The remaining `T - M` stamps land uniformly at random, without
//! replacement, on the `16 - M` open cells. Every completion is equally
//! likely, so each threshold probability is a ratio of counts over all
//! `C(16 - M, T - M)` completions (at most `C(16, 9) = 11440`).

use tails_types::{
    BoardState, CELL_COUNT, LINE_COUNT, LineCatalog, LineChances, ProbabilityResult, STAMP_TOTAL, Threshold,
};

use crate::combinations::{Combinations, binomial};

/// Completions of one board, bucketed by how many lines they finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineHistogram {
    counts: [u64; LINE_COUNT + 1],
    completions: u64,
}

impl LineHistogram {
    /// Completions that finish exactly `lines` lines.
    #[must_use]
    pub fn exactly(&self, lines: usize) -> u64 {
        self.counts.get(lines).copied().unwrap_or(0)
    }

    /// Completions that finish `lines` lines or more.
    #[must_use]
    pub fn at_least(&self, lines: usize) -> u64 {
        self.counts.iter().skip(lines).sum()
    }

    #[must_use]
    pub fn completions(&self) -> u64 {
        self.completions
    }

    #[must_use]
    pub fn counts(&self) -> &[u64; LINE_COUNT + 1] {
        &self.counts
    }

    #[must_use]
    pub fn probability(&self, threshold: Threshold) -> f64 {
        if self.completions == 0 {
            return 0.0;
        }
        self.at_least(threshold.lines()) as f64 / self.completions as f64
    }

    #[must_use]
    pub fn chances(&self) -> LineChances {
        LineChances::new(
            self.probability(Threshold::One),
            self.probability(Threshold::Two),
            self.probability(Threshold::Three),
        )
    }
}

/// Histogram over every completion of `board`, or `None` when more than
/// [`STAMP_TOTAL`] cells are already marked.
#[must_use]
pub fn histogram(board: &BoardState) -> Option<LineHistogram> {
    let remaining = board.remaining_stamps()?;
    let marked = board.mask();

    let mut counts = [0u64; LINE_COUNT + 1];
    let mut completions = 0u64;
    for extension in Combinations::new(board.unmarked_indices(), remaining) {
        counts[LineCatalog::completed(marked | extension)] += 1;
        completions += 1;
    }
    debug_assert_eq!(
        completions,
        binomial(CELL_COUNT - board.marked_count(), remaining)
    );

    tracing::debug!(
        marked = board.marked_count(),
        completions,
        board = %board,
        "enumerated completions"
    );
    Some(LineHistogram {
        counts,
        completions,
    })
}

/// Probability of finishing at least 1, 2 and 3 lines once every stamp is placed.
///
/// Boards with more than [`STAMP_TOTAL`] marks are [`ProbabilityResult::Unavailable`].
#[must_use]
pub fn solve(board: &BoardState) -> ProbabilityResult {
    match histogram(board) {
        Some(histogram) => ProbabilityResult::Computed(histogram.chances()),
        None => {
            tracing::debug!(
                marked = board.marked_count(),
                limit = STAMP_TOTAL,
                "board out of solvable range"
            );
            ProbabilityResult::Unavailable
        }
    }
}
