//! Turning solver output into the annotation block.
//!
//! Layout of a rendered block (every line ends in `\n`):
//!
//! ```text
//! <marker>
//! 1 Line: 58.46%
//! 2 Lines: 10.56%
//! 3 Lines: 0.21%
//! Shuffle Average: 58.46%   10.56%   0.21%
//! ```
//!
//! The short form replaces the three threshold lines with
//! `Line Chances: p1   p2   p3`.

use tails_types::{
    AnnotationSettings, Category, ProbabilityResult, ReferenceSample, THRESHOLD_COUNT, Threshold,
};

const ERROR_TOKEN: &str = "error";
const VALUE_SEPARATOR: &[u8] = b"   ";
const SHORT_LABEL: &[u8] = b"Line Chances: ";
const REFERENCE_LABEL: &[u8] = b"Shuffle Average: ";
/// Byte following the marker in every rendered annotation.
pub(crate) const MARKER_TERMINATOR: &[u8] = b"\n";

/// Render a probability as `XX.XX%`.
#[must_use]
pub fn format_percent(p: f64) -> String {
    format!("{:.2}%", p * 100.0)
}

/// Which of the two contract shapes a block uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One `Line Chances:` line, for prefixes that already span several lines.
    Short,
    /// One line per threshold.
    Long,
}

impl Layout {
    /// Short once the preserved prefix has more than `short_form_after` line breaks.
    #[must_use]
    pub fn for_prefix(line_breaks: usize, short_form_after: usize) -> Self {
        if line_breaks > short_form_after {
            Layout::Short
        } else {
            Layout::Long
        }
    }
}

/// One threshold's value and how it compares to the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    threshold: Threshold,
    value: Option<f64>,
    category: Category,
}

impl Segment {
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// `None` when the solver could not compute this board.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// `XX.XX%`, or `error` without a value.
    #[must_use]
    pub fn token(&self) -> String {
        self.value
            .map_or_else(|| ERROR_TOKEN.to_string(), format_percent)
    }

    fn long_label(&self) -> &'static [u8] {
        match self.threshold {
            Threshold::One => b"1 Line: ",
            Threshold::Two => b"2 Lines: ",
            Threshold::Three => b"3 Lines: ",
        }
    }
}

/// A composed annotation: its segments and the exact bytes written after the prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    layout: Layout,
    segments: [Segment; THRESHOLD_COUNT],
    reference: Option<ReferenceSample>,
    bytes: Vec<u8>,
}

impl Annotation {
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment; THRESHOLD_COUNT] {
        &self.segments
    }

    #[must_use]
    pub fn reference(&self) -> Option<ReferenceSample> {
        self.reference
    }

    /// Marker plus body, exactly as appended to the buffer.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// `prefix ++ annotation`.
    #[must_use]
    pub fn patch(&self, prefix: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(prefix.len() + self.bytes.len());
        out.extend_from_slice(prefix);
        out.extend_from_slice(&self.bytes);
        out
    }
}

/// Builds annotations from solver output.
#[derive(Debug, Clone, Default)]
pub struct AnnotationComposer {
    settings: AnnotationSettings,
}

impl AnnotationComposer {
    #[must_use]
    pub fn new(settings: AnnotationSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &AnnotationSettings {
        &self.settings
    }

    /// Compose a block for `result`, categorized against `sample`.
    ///
    /// `prefix_line_breaks` is the number of line-break tokens in the
    /// preserved prefix; it picks the layout.
    #[must_use]
    pub fn compose(
        &self,
        result: &ProbabilityResult,
        sample: Option<&ReferenceSample>,
        prefix_line_breaks: usize,
    ) -> Annotation {
        let segments = Threshold::ALL.map(|threshold| match result {
            ProbabilityResult::Computed(chances) => {
                let p = chances.get(threshold);
                Segment {
                    threshold,
                    value: Some(p),
                    category: Category::classify(p, sample.map(|s| s.get(threshold))),
                }
            }
            ProbabilityResult::Unavailable => Segment {
                threshold,
                value: None,
                category: Category::Lost,
            },
        });
        let layout = Layout::for_prefix(prefix_line_breaks, self.settings.short_form_after());
        let reference = sample.copied().filter(|_| self.settings.show_reference());
        let bytes = self.render(layout, &segments, reference.as_ref());
        Annotation {
            layout,
            segments,
            reference,
            bytes,
        }
    }

    fn render(
        &self,
        layout: Layout,
        segments: &[Segment; THRESHOLD_COUNT],
        reference: Option<&ReferenceSample>,
    ) -> Vec<u8> {
        let mut out = Vec::with_capacity(128);
        out.extend_from_slice(self.settings.marker());
        out.extend_from_slice(MARKER_TERMINATOR);

        match layout {
            Layout::Short => {
                out.extend_from_slice(SHORT_LABEL);
                for (i, segment) in segments.iter().enumerate() {
                    if i > 0 {
                        out.extend_from_slice(VALUE_SEPARATOR);
                    }
                    self.push_value(&mut out, segment);
                }
                out.push(b'\n');
            }
            Layout::Long => {
                for segment in segments {
                    out.extend_from_slice(segment.long_label());
                    self.push_value(&mut out, segment);
                    out.push(b'\n');
                }
            }
        }

        if let Some(sample) = reference {
            out.extend_from_slice(REFERENCE_LABEL);
            for (i, threshold) in Threshold::ALL.into_iter().enumerate() {
                if i > 0 {
                    out.extend_from_slice(VALUE_SEPARATOR);
                }
                out.extend_from_slice(format_percent(sample.get(threshold)).as_bytes());
            }
            out.push(b'\n');
        }
        out
    }

    fn push_value(&self, out: &mut Vec<u8>, segment: &Segment) {
        let style = self.settings.style(segment.category);
        if let Some(style) = style {
            out.extend_from_slice(style.open());
        }
        out.extend_from_slice(segment.token().as_bytes());
        if let Some(style) = style {
            out.extend_from_slice(style.close());
        }
    }
}
