//! # Line Layout
//!
//! Groups a tokenized line into segments for the "chord raised above the
//! lyric" style: each chord or comment is paired with the lyric text that
//! follows it, up to the next chord or comment.
//!
//! ```text
//! "[C]Amazing [G]grace"
//!   Segment { Chord("C"), "Amazing ", InWord }
//!   Segment { Chord("G"), "grace",    InWord }
//!
//! "Oh [D] Lord"
//!   Segment { -,          "Oh ",      InWord }
//!   Segment { Chord("D"), " Lord",    InSpace }
//! ```

use crate::token::{TokenKind, TokenPair, TokenizedLine};
use serde::Serialize;

/// Chord or comment shown above the lyric
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "lowercase")]
pub enum Annotation {
    Chord(String),
    Comment(String),
}

impl Annotation {
    pub fn text(&self) -> &str {
        match self {
            Annotation::Chord(text) | Annotation::Comment(text) => text,
        }
    }
}

/// Where an annotation sits relative to the lyric text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Directly before a space: the annotation gets room of its own
    InSpace,
    /// Attached to a word (or nothing follows)
    #[default]
    InWord,
}

/// An annotation and the lyric text it sits above
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub annotation: Option<Annotation>,
    pub lyric: String,
    pub placement: Placement,
}

impl Segment {
    fn starting_at(pair: &TokenPair<'_>) -> Self {
        let annotation = match pair.current.kind {
            TokenKind::Chord => Some(Annotation::Chord(pair.current.text.clone())),
            TokenKind::Comment => Some(Annotation::Comment(pair.current.text.clone())),
            _ => None,
        };
        let placement = match pair.next {
            Some(next) if next.kind == TokenKind::Space => Placement::InSpace,
            Some(next) if next.kind == TokenKind::Hyphen && next.text.starts_with(' ') => {
                Placement::InSpace
            }
            _ => Placement::InWord,
        };
        Self {
            annotation,
            lyric: String::new(),
            placement,
        }
    }
}

/// Split a tokenized line into segments.
///
/// Text before the first annotation becomes a segment without annotation.
/// Adjacent annotations each get their own segment with an empty lyric.
pub fn layout(line: &TokenizedLine) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();

    for pair in line.pairs() {
        if pair.current.is_annotation() {
            segments.push(Segment::starting_at(&pair));
            continue;
        }

        match segments.last_mut() {
            Some(segment) => segment.lyric.push_str(&pair.current.text),
            None => segments.push(Segment {
                annotation: None,
                lyric: pair.current.text.clone(),
                placement: Placement::InWord,
            }),
        }
    }

    segments
}
