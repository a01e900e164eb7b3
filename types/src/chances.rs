//! Threshold probabilities and the solver's result type.

use std::fmt;

/// Number of thresholds reported: at least 1, 2 and 3 lines.
pub const THRESHOLD_COUNT: usize = 3;

/// "At least `k` lines" for `k` in `1..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Threshold {
    One,
    Two,
    Three,
}

impl Threshold {
    pub const ALL: [Threshold; THRESHOLD_COUNT] = [Threshold::One, Threshold::Two, Threshold::Three];

    /// Minimum number of completed lines this threshold asks for.
    #[must_use]
    pub const fn lines(self) -> usize {
        match self {
            Threshold::One => 1,
            Threshold::Two => 2,
            Threshold::Three => 3,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.lines() - 1
    }
}

/// Three probabilities `(p1, p2, p3)`, one per [`Threshold`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineChances([f64; THRESHOLD_COUNT]);

impl LineChances {
    #[must_use]
    pub const fn new(p1: f64, p2: f64, p3: f64) -> Self {
        Self([p1, p2, p3])
    }

    #[must_use]
    pub const fn get(&self, threshold: Threshold) -> f64 {
        self.0[threshold.index()]
    }

    #[must_use]
    pub const fn as_array(&self) -> [f64; THRESHOLD_COUNT] {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Threshold, f64)> + '_ {
        Threshold::ALL.into_iter().map(|t| (t, self.get(t)))
    }

    /// Every value in `[0, 1]` and `p1 >= p2 >= p3`.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let [p1, p2, p3] = self.0;
        self.0.iter().all(|p| (0.0..=1.0).contains(p)) && p1 >= p2 && p2 >= p3
    }
}

impl fmt::Display for LineChances {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [p1, p2, p3] = self.0;
        write!(f, "({p1:.4}, {p2:.4}, {p3:.4})")
    }
}

/// Outcome of a solver run.
///
/// `Unavailable` is the explicit sentinel for boards outside the solvable
/// range; it is a value, never an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProbabilityResult {
    Computed(LineChances),
    Unavailable,
}

impl ProbabilityResult {
    #[must_use]
    pub const fn chances(&self) -> Option<LineChances> {
        match self {
            ProbabilityResult::Computed(chances) => Some(*chances),
            ProbabilityResult::Unavailable => None,
        }
    }

    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, ProbabilityResult::Unavailable)
    }
}

/// Baseline `(s1, s2, s3)` to compare solver output against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceSample(LineChances);

impl ReferenceSample {
    #[must_use]
    pub const fn new(s1: f64, s2: f64, s3: f64) -> Self {
        Self(LineChances::new(s1, s2, s3))
    }

    #[must_use]
    pub const fn chances(&self) -> LineChances {
        self.0
    }

    #[must_use]
    pub const fn get(&self, threshold: Threshold) -> f64 {
        self.0.get(threshold)
    }
}
