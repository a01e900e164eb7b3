//! Categorizing a threshold probability against its reference baseline.

use serde::Deserialize;

/// Margin below the baseline that still counts as [`Category::Neutral`].
pub const CAUTION_MARGIN: f64 = 0.05;

/// How a threshold probability compares to the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// `p == 1`
    Guaranteed,
    /// At or above the baseline.
    Favorable,
    /// Below the baseline, but within [`CAUTION_MARGIN`] of it.
    Neutral,
    /// More than [`CAUTION_MARGIN`] below the baseline, still possible.
    Unfavorable,
    /// `p == 0`, or no value could be computed.
    Lost,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Guaranteed,
        Category::Favorable,
        Category::Neutral,
        Category::Unfavorable,
        Category::Lost,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Guaranteed => "guaranteed",
            Category::Favorable => "favorable",
            Category::Neutral => "neutral",
            Category::Unfavorable => "unfavorable",
            Category::Lost => "lost",
        }
    }

    /// Categorize `p` against the optional baseline `s`.
    ///
    /// Exhaustive over `[0, 1]` for every `s` in `[0, 1]`. The point
    /// `p == s - margin` falls to `Unfavorable`. Without a baseline every
    /// open probability is `Neutral`.
    #[must_use]
    pub fn classify(p: f64, baseline: Option<f64>) -> Self {
        if p >= 1.0 {
            return Category::Guaranteed;
        }
        if p <= 0.0 || p.is_nan() {
            return Category::Lost;
        }
        let Some(s) = baseline else {
            return Category::Neutral;
        };
        if p >= s {
            return Category::Favorable;
        }
        let floor = (s - CAUTION_MARGIN).clamp(0.0, 1.0);
        if p > floor {
            Category::Neutral
        } else {
            Category::Unfavorable
        }
    }
}
