//! # Public API
//!
//! Entry points a presentation layer calls to turn chord sheet text into a
//! renderer-agnostic description.
//!
//! ## Functions
//!
//! - [`describe_line()`] - One line with the given display options
//! - [`describe_section()`] - A block of lines (a verse, a chorus)
//! - [`LineDescriber`] - Same, reusing one transpose map across many calls
//!
//! ## Typical Usage
//!
//! ```rust
//! use chordsheet::{Annotation, DisplayOptions, LineDescriber, LineKind};
//!
//! let options = DisplayOptions {
//!     key: Some("G".to_string()),
//!     transpose_to: Some("A".to_string()),
//!     ..Default::default()
//! };
//! let describer = LineDescriber::new(options);
//!
//! let view = describer.describe_line("[G]Amazing [G/B]grace");
//! assert_eq!(view.kind, LineKind::Both);
//! assert_eq!(view.segments[0].annotation, Some(Annotation::Chord("A".to_string())));
//! assert_eq!(view.segments[1].annotation, Some(Annotation::Chord("A/C#".to_string())));
//! ```

use crate::layout::{layout, Annotation, Segment};
use crate::lexer::tokenize;
use crate::options::DisplayOptions;
use crate::token::LineKind;
use crate::transpose::{transpose_chord_or_original, TransposeMap};
use serde::Serialize;

/// Description of one line, ready to be laid out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineView {
    pub kind: LineKind,
    pub segments: Vec<Segment>,
    /// A chords-only line while chords are hidden
    pub hidden: bool,
}

/// Description of a block of lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    pub lines: Vec<LineView>,
    /// At least one line has chords
    pub has_chords: bool,
    /// Every non-blank line is chords only
    pub chords_only: bool,
}

/// Describes lines under one set of display options.
///
/// The transpose map is built once, when the describer is created, and
/// shared by every line described with it.
#[derive(Debug, Clone)]
pub struct LineDescriber {
    options: DisplayOptions,
    map: Option<TransposeMap>,
}

impl LineDescriber {
    pub fn new(options: DisplayOptions) -> Self {
        let map = options.transpose_map();
        Self { options, map }
    }

    /// Describe with an externally owned map, e.g. one handed out by
    /// [`KeySelection`](crate::KeySelection).
    pub fn with_map(options: DisplayOptions, map: Option<TransposeMap>) -> Self {
        Self { options, map }
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    pub fn describe_line(&self, line: &str) -> LineView {
        let tokenized = tokenize(line);
        let kind = tokenized.kind();

        let segments = layout(&tokenized)
            .into_iter()
            .map(|segment| self.annotate(segment))
            .collect();

        LineView {
            kind,
            segments,
            hidden: kind == LineKind::Chords && !self.options.show_chords,
        }
    }

    /// Describe a block of text, one view per line.
    pub fn describe_section(&self, text: &str) -> SectionView {
        let mut lines = Vec::new();
        let mut has_chords = false;
        let mut filled = 0;
        let mut chord_lines = 0;

        for line in text.lines() {
            let view = self.describe_line(line);
            has_chords |= view.kind != LineKind::Lyrics;
            if !line.trim().is_empty() {
                filled += 1;
                if view.kind == LineKind::Chords {
                    chord_lines += 1;
                }
            }
            lines.push(view);
        }

        SectionView {
            lines,
            has_chords,
            chords_only: filled > 0 && chord_lines == filled,
        }
    }

    fn annotate(&self, mut segment: Segment) -> Segment {
        segment.annotation = match segment.annotation.take() {
            Some(Annotation::Chord(_)) if !self.options.show_chords => None,
            Some(Annotation::Chord(chord)) => Some(Annotation::Chord(match &self.map {
                Some(map) => transpose_chord_or_original(&chord, map),
                None => chord,
            })),
            other => other,
        };
        segment
    }
}

/// Describe a single line.
///
/// Builds the transpose map for this call only; use [`LineDescriber`] when
/// describing many lines with the same options.
///
/// # Example
/// ```rust
/// use chordsheet::{describe_line, DisplayOptions, LineKind};
///
/// let view = describe_line("{comment:Slowly}", &DisplayOptions::default());
/// assert_eq!(view.kind, LineKind::Lyrics);
/// assert_eq!(view.segments.len(), 1);
/// ```
pub fn describe_line(line: &str, options: &DisplayOptions) -> LineView {
    LineDescriber::new(options.clone()).describe_line(line)
}

/// Describe a block of lines.
///
/// # Example
/// ```rust
/// use chordsheet::{describe_section, DisplayOptions};
///
/// let view = describe_section("[G] [C] [D]\n[G]", &DisplayOptions::default());
/// assert!(view.chords_only);
/// ```
pub fn describe_section(text: &str, options: &DisplayOptions) -> SectionView {
    LineDescriber::new(options.clone()).describe_section(text)
}
