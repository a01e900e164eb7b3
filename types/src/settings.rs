//! Resolved annotation settings.
//!
//! These are fully validated. Raw TOML structs with `Option` fields stay
//! private in `tails-config`, which resolves them into these types at the
//! parse boundary.

use std::collections::HashMap;

use crate::Category;

/// Six spaces, as the host never emits that run in its own text.
pub const DEFAULT_MARKER: &str = "      ";
pub const DEFAULT_LINE_BREAK: &str = "\n";
/// Short form once the preserved prefix holds more line breaks than this.
pub const DEFAULT_SHORT_FORM_AFTER: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("marker must not be empty")]
    EmptyMarker,
    #[error("line break token must not be empty")]
    EmptyLineBreak,
    #[error("marker must not contain the line break token")]
    MarkerContainsLineBreak,
}

/// Opaque bytes wrapped around a segment's value token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentStyle {
    open: Vec<u8>,
    close: Vec<u8>,
}

impl SegmentStyle {
    #[must_use]
    pub fn new(open: impl Into<Vec<u8>>, close: impl Into<Vec<u8>>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    #[must_use]
    pub fn open(&self) -> &[u8] {
        &self.open
    }

    #[must_use]
    pub fn close(&self) -> &[u8] {
        &self.close
    }
}

/// Validated settings for composing and locating annotations.
///
/// Invariant: `marker` and `line_break` are non-empty and the marker never
/// contains the line break, so stripping at the marker cannot cut a line
/// break in half.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationSettings {
    marker: Vec<u8>,
    line_break: Vec<u8>,
    short_form_after: usize,
    show_reference: bool,
    styles: HashMap<Category, SegmentStyle>,
}

impl AnnotationSettings {
    pub fn new(
        marker: impl Into<Vec<u8>>,
        line_break: impl Into<Vec<u8>>,
        short_form_after: usize,
        show_reference: bool,
        styles: HashMap<Category, SegmentStyle>,
    ) -> Result<Self, SettingsError> {
        let marker = marker.into();
        let line_break = line_break.into();
        if marker.is_empty() {
            return Err(SettingsError::EmptyMarker);
        }
        if line_break.is_empty() {
            return Err(SettingsError::EmptyLineBreak);
        }
        if marker
            .windows(line_break.len())
            .any(|window| window == line_break.as_slice())
        {
            return Err(SettingsError::MarkerContainsLineBreak);
        }
        Ok(Self {
            marker,
            line_break,
            short_form_after,
            show_reference,
            styles,
        })
    }

    #[must_use]
    pub fn marker(&self) -> &[u8] {
        &self.marker
    }

    #[must_use]
    pub fn line_break(&self) -> &[u8] {
        &self.line_break
    }

    #[must_use]
    pub fn short_form_after(&self) -> usize {
        self.short_form_after
    }

    #[must_use]
    pub fn show_reference(&self) -> bool {
        self.show_reference
    }

    #[must_use]
    pub fn style(&self, category: Category) -> Option<&SegmentStyle> {
        self.styles.get(&category)
    }
}

impl Default for AnnotationSettings {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.as_bytes().to_vec(),
            line_break: DEFAULT_LINE_BREAK.as_bytes().to_vec(),
            short_form_after: DEFAULT_SHORT_FORM_AFTER,
            show_reference: true,
            styles: HashMap::new(),
        }
    }
}
