//! # Notes and Alphabets
//!
//! Pitch spellings used by chord symbols and key names, and the two fixed
//! 12-note alphabets (sharp and flat) that transposition spells its output in.
//!
//! Pitch classes are counted in semitones from C: `0=C, 1=C#/Db, ... 11=B`.

use std::fmt;

/// Note letters A through G
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteName {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            _ => None,
        }
    }

    fn semitone(self) -> u8 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }

    fn as_char(self) -> char {
        match self {
            NoteName::C => 'C',
            NoteName::D => 'D',
            NoteName::E => 'E',
            NoteName::F => 'F',
            NoteName::G => 'G',
            NoteName::A => 'A',
            NoteName::B => 'B',
        }
    }
}

/// Accidental written after a note letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp, // # or ♯
    Flat,  // b or ♭
}

impl Accidental {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' | '♯' => Some(Accidental::Sharp),
            'b' | '♭' => Some(Accidental::Flat),
            _ => None,
        }
    }
}

/// A spelled note: letter plus accidental, e.g. `Bb` or `F#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    pub name: NoteName,
    pub accidental: Accidental,
}

impl Note {
    /// Read a note spelling from the start of `text`.
    ///
    /// Returns the note and the number of bytes it occupies, or `None` when
    /// `text` does not start with an uppercase letter `A`-`G`.
    ///
    /// ```
    /// use chordsheet::note::{Accidental, Note, NoteName};
    ///
    /// let (note, len) = Note::read("Bbm7").unwrap();
    /// assert_eq!(note.name, NoteName::B);
    /// assert_eq!(note.accidental, Accidental::Flat);
    /// assert_eq!(len, 2);
    /// assert!(Note::read("m7").is_none());
    /// ```
    pub fn read(text: &str) -> Option<(Note, usize)> {
        let mut chars = text.chars();
        let letter = chars.next()?;
        let name = NoteName::from_char(letter)?;
        let mut len = letter.len_utf8();

        let next = chars.next().and_then(|c| Some((c, Accidental::from_char(c)?)));
        let accidental = match next {
            Some((c, accidental)) => {
                len += c.len_utf8();
                accidental
            }
            None => Accidental::Natural,
        };

        Some((Note { name, accidental }, len))
    }

    /// Semitones above C, in `0..12`.
    pub fn pitch_class(&self) -> u8 {
        let acc: i8 = match self.accidental {
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
        };
        (self.name.semitone() as i8 + acc).rem_euclid(12) as u8
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name.as_char())?;
        match self.accidental {
            Accidental::Sharp => write!(f, "#"),
            Accidental::Flat => write!(f, "b"),
            Accidental::Natural => Ok(()),
        }
    }
}

// Indexed by pitch class
const SHARP_NOTES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];
const FLAT_NOTES: [&str; 12] = ["C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B"];

/// Which spelling a key uses for the five black-key pitch classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alphabet {
    #[default]
    Sharp,
    Flat,
}

impl Alphabet {
    /// The 12 spellings of this alphabet, indexed by pitch class.
    pub fn notes(self) -> &'static [&'static str; 12] {
        match self {
            Alphabet::Sharp => &SHARP_NOTES,
            Alphabet::Flat => &FLAT_NOTES,
        }
    }

    /// Spell a pitch class; values outside `0..12` wrap around.
    pub fn spell(self, pitch_class: u8) -> &'static str {
        self.notes()[(pitch_class % 12) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_natural_and_accidentals() {
        let (c, len) = Note::read("C").unwrap();
        assert_eq!(c.pitch_class(), 0);
        assert_eq!(len, 1);

        let (fs, len) = Note::read("F#m").unwrap();
        assert_eq!(fs.pitch_class(), 6);
        assert_eq!(len, 2);

        let (eb, _) = Note::read("Eb").unwrap();
        assert_eq!(eb.pitch_class(), 3);
    }

    #[test]
    fn test_read_unicode_accidentals() {
        let (bb, len) = Note::read("B♭7").unwrap();
        assert_eq!(bb.pitch_class(), 10);
        assert_eq!(len, 1 + '♭'.len_utf8());
        assert_eq!(bb.to_string(), "Bb");

        let (cs, _) = Note::read("C♯").unwrap();
        assert_eq!(cs.to_string(), "C#");
    }

    #[test]
    fn test_pitch_class_wraps() {
        assert_eq!(Note::read("Cb").unwrap().0.pitch_class(), 11);
        assert_eq!(Note::read("B#").unwrap().0.pitch_class(), 0);
    }

    #[test]
    fn test_read_rejects_non_notes() {
        assert!(Note::read("").is_none());
        assert!(Note::read("c").is_none());
        assert!(Note::read("H").is_none());
        assert!(Note::read("(G)").is_none());
    }

    #[test]
    fn test_alphabets_cover_every_pitch_class() {
        for pc in 0..12u8 {
            let sharp = Note::read(Alphabet::Sharp.spell(pc)).unwrap().0;
            let flat = Note::read(Alphabet::Flat.spell(pc)).unwrap().0;
            assert_eq!(sharp.pitch_class(), pc);
            assert_eq!(flat.pitch_class(), pc);
        }
        assert_eq!(Alphabet::Flat.spell(13), "Db");
    }
}
