//! # Chord Symbols
//!
//! Splits a chord symbol into the pieces transposition needs to touch.
//!
//! ```text
//! "(Bbm7/Ab)"
//!   prefix   "("
//!   root     Bb
//!   suffix   "m7"
//!   bass     Ab
//!   trailing ")"
//! ```
//!
//! Only the root and bass are notes; everything else is carried through
//! verbatim. `N.C.` ("no chord") is recognized separately by [`is_no_chord`].

use crate::error::ChordsheetError;
use crate::note::Note;
use std::fmt;

/// A decomposed chord symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordSymbol {
    pub prefix: String,
    pub root: Note,
    pub suffix: String,
    pub bass: Option<Note>,
    pub trailing: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Prefix,
    Suffix,
    Trailing,
}

impl ChordSymbol {
    /// Decompose a chord symbol in a single pass over its characters.
    ///
    /// - prefix: everything before the first letter `A`-`G`
    /// - root: that letter plus an optional `#`/`b`
    /// - suffix: everything up to a `/` that is followed by a note
    /// - bass: the note after that `/`
    /// - trailing: whatever follows the bass
    ///
    /// A `/` not followed by a note (`C6/9`) stays part of the suffix.
    ///
    /// # Errors
    /// [`ChordsheetError::ChordParse`] when there is no root letter at all.
    pub fn parse(chord: &str) -> Result<Self, ChordsheetError> {
        let mut state = State::Prefix;
        let mut prefix = String::new();
        let mut root = None;
        let mut suffix = String::new();
        let mut bass = None;
        let mut trailing = String::new();

        let mut position = 0;
        while position < chord.len() {
            let rest = &chord[position..];
            let Some(c) = rest.chars().next() else {
                break;
            };

            match state {
                State::Prefix => {
                    if let Some((note, len)) = Note::read(rest) {
                        root = Some(note);
                        position += len;
                        state = State::Suffix;
                        continue;
                    }
                    prefix.push(c);
                }
                State::Suffix => {
                    if c == '/' {
                        if let Some((note, len)) = Note::read(&rest[1..]) {
                            bass = Some(note);
                            position += 1 + len;
                            state = State::Trailing;
                            continue;
                        }
                    }
                    suffix.push(c);
                }
                State::Trailing => trailing.push(c),
            }
            position += c.len_utf8();
        }

        let root = root.ok_or_else(|| ChordsheetError::ChordParse {
            chord: chord.to_string(),
        })?;

        Ok(Self {
            prefix,
            root,
            suffix,
            bass,
            trailing,
        })
    }
}

impl fmt::Display for ChordSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, self.root, self.suffix)?;
        if let Some(bass) = self.bass {
            write!(f, "/{}", bass)?;
        }
        write!(f, "{}", self.trailing)
    }
}

/// Is this the "no chord" marker (`NC`, `N.C.`, `n.c.`, `N.C. (tacet)`...)?
///
/// Dots count as separators, so `N.C` and `N C` are the same marker. The
/// marker must be followed by the end of the text or a non-alphanumeric
/// character: `NCm` is not a marker.
///
/// ```
/// use chordsheet::chord::is_no_chord;
///
/// assert!(is_no_chord("N.C."));
/// assert!(is_no_chord("nc"));
/// assert!(!is_no_chord("C"));
/// ```
pub fn is_no_chord(chord: &str) -> bool {
    let normalized = chord.replace('.', " ").to_ascii_uppercase();
    let mut chars = normalized.trim_start().chars().peekable();

    if chars.next() != Some('N') {
        return false;
    }
    if chars.peek() == Some(&' ') {
        chars.next();
    }
    if chars.next() != Some('C') {
        return false;
    }
    match chars.next() {
        None => true,
        Some(c) => !c.is_alphanumeric(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::{Accidental, NoteName};

    #[test]
    fn test_plain_chord() {
        let chord = ChordSymbol::parse("C").unwrap();
        assert_eq!(chord.prefix, "");
        assert_eq!(chord.root.name, NoteName::C);
        assert_eq!(chord.suffix, "");
        assert_eq!(chord.bass, None);
        assert_eq!(chord.trailing, "");
    }

    #[test]
    fn test_suffix_and_bass() {
        let chord = ChordSymbol::parse("Bbm7/Ab").unwrap();
        assert_eq!(chord.root.name, NoteName::B);
        assert_eq!(chord.root.accidental, Accidental::Flat);
        assert_eq!(chord.suffix, "m7");
        let bass = chord.bass.unwrap();
        assert_eq!(bass.name, NoteName::A);
        assert_eq!(bass.accidental, Accidental::Flat);
    }

    #[test]
    fn test_prefix_and_trailing() {
        let chord = ChordSymbol::parse("(G/B)").unwrap();
        assert_eq!(chord.prefix, "(");
        assert_eq!(chord.root.name, NoteName::G);
        assert_eq!(chord.suffix, "");
        assert_eq!(chord.bass.unwrap().name, NoteName::B);
        assert_eq!(chord.trailing, ")");
    }

    #[test]
    fn test_slash_without_bass_stays_in_suffix() {
        let chord = ChordSymbol::parse("C6/9").unwrap();
        assert_eq!(chord.suffix, "6/9");
        assert_eq!(chord.bass, None);
    }

    #[test]
    fn test_uppercase_letters_in_suffix_are_not_notes() {
        let chord = ChordSymbol::parse("CMaj7").unwrap();
        assert_eq!(chord.root.name, NoteName::C);
        assert_eq!(chord.suffix, "Maj7");
    }

    #[test]
    fn test_display_reassembles() {
        for text in ["C", "F#m7", "(Bbm7/Ab)", "Dsus4", "C6/9", "G/B*", "E♭"] {
            let chord = ChordSymbol::parse(text).unwrap();
            let expected = text.replace('♭', "b");
            assert_eq!(chord.to_string(), expected);
        }
    }

    #[test]
    fn test_no_root_is_an_error() {
        for text in ["", "|", "x", "%", "(riff)"] {
            let err = ChordSymbol::parse(text).unwrap_err();
            assert_eq!(
                err,
                ChordsheetError::ChordParse {
                    chord: text.to_string()
                }
            );
        }
    }

    #[test]
    fn test_no_chord_marker() {
        assert!(is_no_chord("NC"));
        assert!(is_no_chord("N.C."));
        assert!(is_no_chord("N.C"));
        assert!(is_no_chord("n.c."));
        assert!(is_no_chord(" N C"));
        assert!(is_no_chord("N.C. (tacet)"));
        assert!(!is_no_chord("NCm"));
        assert!(!is_no_chord("N"));
        assert!(!is_no_chord("Cm"));
        assert!(!is_no_chord(""));
    }
}
