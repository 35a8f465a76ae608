use crate::token::{LineKind, Token, TokenKind, TokenizedLine};

/// Hyphen separators, tried in this order
const HYPHENS: [&str; 3] = [" - ", "- ", " -"];

/// Lexer for one line of chord sheet text
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    lyric_start: Option<usize>,
    chords: usize,
    lyrics: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            lyric_start: None,
            chords: 0,
            lyrics: 0,
        }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// End of a `open`...`close` marker starting at the current position.
    ///
    /// The interior must hold at least one character and the marker ends at
    /// the first `close` after it. Markers never span a line break.
    fn check_marker(&self, open: char, close: char) -> Option<usize> {
        let remaining = self.remaining();
        let mut chars = remaining.char_indices();
        match chars.next() {
            Some((_, c)) if c == open => {}
            _ => return None,
        }
        match chars.next() {
            Some((_, '\n')) | None => return None,
            Some(_) => {}
        }
        for (i, c) in chars {
            if c == '\n' {
                return None;
            }
            if c == close {
                return Some(self.position + i + c.len_utf8());
            }
        }
        None
    }

    fn check_hyphen(&self) -> Option<usize> {
        let remaining = self.remaining();
        HYPHENS
            .iter()
            .find(|h| remaining.starts_with(*h))
            .map(|h| self.position + h.len())
    }

    fn check_spaces(&self) -> Option<usize> {
        let run = self.remaining().len() - self.remaining().trim_start_matches(' ').len();
        (run > 0).then(|| self.position + run)
    }

    fn flush_lyric(&mut self, tokens: &mut Vec<Token>) {
        if let Some(start) = self.lyric_start.take() {
            self.lyrics += 1;
            tokens.push(Token {
                kind: TokenKind::Lyric,
                text: self.input[start..self.position].to_string(),
                span: start..self.position,
            });
        }
    }

    fn emit(&mut self, tokens: &mut Vec<Token>, kind: TokenKind, end: usize) {
        self.flush_lyric(tokens);

        let input = self.input;
        let raw = &input[self.position..end];
        let text = match kind {
            TokenKind::Chord => {
                self.chords += 1;
                raw[1..raw.len() - 1].to_string()
            }
            TokenKind::Comment => {
                let interior = &raw[1..raw.len() - 1];
                interior
                    .split_once(':')
                    .map(|(_, text)| text.to_string())
                    .unwrap_or_default()
            }
            _ => raw.to_string(),
        };

        tokens.push(Token {
            kind,
            text,
            span: self.position..end,
        });
        self.position = end;
    }

    pub fn tokenize(mut self) -> TokenizedLine {
        let mut tokens = Vec::new();

        while let Some(c) = self.remaining().chars().next() {
            if let Some(end) = self.check_marker('[', ']') {
                self.emit(&mut tokens, TokenKind::Chord, end);
                continue;
            }
            if let Some(end) = self.check_marker('{', '}') {
                self.emit(&mut tokens, TokenKind::Comment, end);
                continue;
            }
            if let Some(end) = self.check_hyphen() {
                self.emit(&mut tokens, TokenKind::Hyphen, end);
                continue;
            }
            if let Some(end) = self.check_spaces() {
                self.emit(&mut tokens, TokenKind::Space, end);
                continue;
            }

            // Anything else is lyric text, including unmatched brackets
            self.lyric_start.get_or_insert(self.position);
            self.position += c.len_utf8();
        }
        self.flush_lyric(&mut tokens);

        let kind = match (self.chords, self.lyrics) {
            (0, _) => LineKind::Lyrics,
            (_, 0) => LineKind::Chords,
            _ => LineKind::Both,
        };

        TokenizedLine { kind, tokens }
    }
}

/// Tokenize one line of chord sheet text and classify it.
///
/// ```
/// use chordsheet::{tokenize, LineKind, TokenKind};
///
/// let line = tokenize("[C]Amazing [G]grace");
/// assert_eq!(line.kind(), LineKind::Both);
/// let kinds: Vec<_> = line.tokens().iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Chord,
///         TokenKind::Lyric,
///         TokenKind::Space,
///         TokenKind::Chord,
///         TokenKind::Lyric,
///     ]
/// );
/// ```
pub fn tokenize(line: &str) -> TokenizedLine {
    Lexer::new(line).tokenize()
}
