//! Baseline odds for comparison against a live board.
//!
//! Each row is what a player can expect on average when the placed stamps
//! are shuffled onto random cells: the mean solver output over every board
//! with that many marks. Shuffling then completing at random is a uniform
//! draw of 9 cells, so every row equals the a priori odds of an empty
//! board, `(6688, 1208, 24) / 11440`.

use tails_types::ReferenceSample;

/// Smallest marked count with a baseline.
pub const MIN_SAMPLE_MARKS: usize = 1;
/// Largest marked count with a baseline.
pub const MAX_SAMPLE_MARKS: usize = 7;

const PRIOR_COMPLETIONS: f64 = 11_440.0;
const PRIOR: ReferenceSample = ReferenceSample::new(
    6_688.0 / PRIOR_COMPLETIONS,
    1_208.0 / PRIOR_COMPLETIONS,
    24.0 / PRIOR_COMPLETIONS,
);

/// Baselines for marked counts `1..=7`, in order.
pub const REFERENCE_SAMPLES: [ReferenceSample; MAX_SAMPLE_MARKS - MIN_SAMPLE_MARKS + 1] =
    [PRIOR, PRIOR, PRIOR, PRIOR, PRIOR, PRIOR, PRIOR];

/// Baseline for `marked` stamps, defined only for `1..=7`.
#[must_use]
pub fn reference_sample(marked: usize) -> Option<ReferenceSample> {
    if !(MIN_SAMPLE_MARKS..=MAX_SAMPLE_MARKS).contains(&marked) {
        return None;
    }
    REFERENCE_SAMPLES.get(marked - MIN_SAMPLE_MARKS).copied()
}
