//! # Token Model
//!
//! Types produced by the line tokenizer.
//!
//! ## Type Hierarchy
//! ```text
//! TokenizedLine
//!   ├── kind: LineKind (Lyrics | Chords | Both)
//!   └── Vec<Token>
//!         ├── kind: TokenKind (Chord | Comment | Hyphen | Lyric | Space)
//!         ├── text: value with [ ] / { directive: } stripped
//!         └── span: byte range in the source line
//!
//! TokenPair (borrowed, produced by TokenizedLine::pairs)
//!   ├── current: &Token
//!   └── next: Option<&Token>
//! ```
//!
//! Tokens partition the line: their spans are contiguous and together cover
//! every byte of the source.

use serde::Serialize;
use std::ops::Range;

/// Token kinds for a chord sheet line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Chord,   // [G]
    Comment, // {comment:Slowly}
    Hyphen,  // " - ", "- ", " -"
    Lyric,
    Space, // one or more ' '
}

/// A token with its value and its position in the source line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    #[serde(skip)]
    pub span: Range<usize>,
}

impl Token {
    /// The source text this token was read from, markup included.
    pub fn raw<'a>(&self, line: &'a str) -> &'a str {
        &line[self.span.clone()]
    }

    /// Directive name of a comment token (`comment` in `{comment:Slowly}`).
    ///
    /// `None` for every other kind of token.
    pub fn directive<'a>(&self, line: &'a str) -> Option<&'a str> {
        if self.kind != TokenKind::Comment {
            return None;
        }
        let raw = self.raw(line);
        let interior = &raw[1..raw.len() - 1];
        Some(interior.split_once(':').map_or(interior, |(directive, _)| directive))
    }

    pub fn is_annotation(&self) -> bool {
        matches!(self.kind, TokenKind::Chord | TokenKind::Comment)
    }
}

/// A token and the one after it, for one token of lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenPair<'a> {
    pub current: &'a Token,
    pub next: Option<&'a Token>,
}

/// What a line holds, as far as chords are concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// No chord tokens
    #[default]
    Lyrics,
    /// Chord tokens and no lyric tokens
    Chords,
    /// Chord tokens and lyric tokens
    Both,
}

/// Result of tokenizing one line
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TokenizedLine {
    pub(crate) kind: LineKind,
    pub(crate) tokens: Vec<Token>,
}

impl TokenizedLine {
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// One pair per token: `(t0, t1), (t1, t2), ..., (tn-1, None)`.
    ///
    /// The last pair always has `next == None`; an empty line has no pairs.
    pub fn pairs(&self) -> impl Iterator<Item = TokenPair<'_>> + '_ {
        self.tokens.iter().enumerate().map(move |(i, current)| TokenPair {
            current,
            next: self.tokens.get(i + 1),
        })
    }
}
