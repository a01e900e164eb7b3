//! Locating the marker token and counting line breaks in buffer content.
//!
//! Content before the marker is opaque: the scanner only reports where the
//! marker starts and how many line-break tokens precede it. The marker is
//! matched together with the newline that follows it in a written
//! annotation, so marker bytes at the end of the host's own text stay
//! part of the prefix.

use aho_corasick::AhoCorasick;
use tails_types::AnnotationSettings;

use crate::BufferError;

/// Byte-pattern search for one token.
#[derive(Debug, Clone)]
struct TokenSearch {
    token: Vec<u8>,
    automaton: Option<AhoCorasick>,
}

impl TokenSearch {
    fn new(token: &[u8], what: &'static str) -> Self {
        let automaton = match AhoCorasick::new([token]) {
            Ok(ac) => Some(ac),
            Err(e) => {
                tracing::warn!(token = what, "automaton build failed; using fallback search ({e})");
                None
            }
        };
        Self {
            token: token.to_vec(),
            automaton,
        }
    }

    fn find(&self, haystack: &[u8]) -> Result<Option<usize>, BufferError> {
        if let Some(ac) = &self.automaton {
            return Ok(ac.try_find(haystack)?.map(|m| m.start()));
        }
        Ok(haystack
            .windows(self.token.len())
            .position(|window| window == self.token.as_slice()))
    }

    fn count(&self, haystack: &[u8]) -> Result<usize, BufferError> {
        if let Some(ac) = &self.automaton {
            return Ok(ac.try_find_iter(haystack)?.count());
        }
        let mut count = 0;
        let mut rest = haystack;
        while let Some(pos) = rest
            .windows(self.token.len())
            .position(|window| window == self.token.as_slice())
        {
            count += 1;
            rest = &rest[pos + self.token.len()..];
        }
        Ok(count)
    }
}

/// Finds the annotation marker and counts host line breaks.
#[derive(Debug, Clone)]
pub struct MarkerScanner {
    head: TokenSearch,
    line_break: TokenSearch,
}

impl MarkerScanner {
    #[must_use]
    pub fn new(settings: &AnnotationSettings) -> Self {
        let head = [settings.marker(), crate::compose::MARKER_TERMINATOR].concat();
        let scanner = Self {
            head: TokenSearch::new(&head, "marker"),
            line_break: TokenSearch::new(settings.line_break(), "line_break"),
        };
        tracing::debug!(marker_len = settings.marker().len(), "MarkerScanner initialized");
        scanner
    }

    /// Byte offset of the first marker that opens an annotation, if any.
    pub fn locate(&self, content: &[u8]) -> Result<Option<usize>, BufferError> {
        self.head.find(content)
    }

    /// Content up to the marker. Content without a marker, or content the
    /// scanner fails on, is returned whole.
    #[must_use]
    pub fn strip<'a>(&self, content: &'a [u8]) -> &'a [u8] {
        match self.locate(content) {
            Ok(Some(pos)) => &content[..pos],
            Ok(None) => content,
            Err(e) => {
                tracing::warn!(error = %e, "marker search failed; treating as no annotation");
                content
            }
        }
    }

    /// Line-break tokens in `prefix`. A failed search counts as none.
    #[must_use]
    pub fn line_breaks(&self, prefix: &[u8]) -> usize {
        self.line_break.count(prefix).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "line break search failed");
            0
        })
    }
}
