//! Line-completion odds for the sticker board.
//!
//! - **`solve`**: exact threshold probabilities by exhaustive enumeration
//! - **`reference`**: constant shuffle baselines used for categorizing results

mod combinations;
pub mod reference;
mod solve;

pub use combinations::{Combinations, binomial};
pub use reference::{MAX_SAMPLE_MARKS, MIN_SAMPLE_MARKS, REFERENCE_SAMPLES, reference_sample};
pub use solve::{LineHistogram, histogram, solve};
