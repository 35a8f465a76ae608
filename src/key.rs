//! # Keys
//!
//! Key names like `G`, `Bb` or `F#m` as chosen by a performer, and the rule
//! deciding whether a key is spelled with sharps or flats.

use crate::note::{Alphabet, Note};

/// Keys conventionally written with flats (the flat side of the circle of
/// fifths, major and relative minor). Every other key name uses sharps.
pub const FLAT_KEYS: [&str; 14] = [
    "F", "Bb", "Eb", "Ab", "Db", "Gb", "Cb", // major
    "Dm", "Gm", "Cm", "Fm", "Bbm", "Ebm", "Abm", // minor
];

/// Key names offered by a key picker, in chromatic order from A.
pub const KEY_NAMES: [&str; 17] = [
    "A", "A#", "Bb", "B", "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab",
];

/// Mode of a key, read from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Major,
    Minor,
}

/// A parsed key name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub tonic: Note,
    pub mode: Mode,
}

impl Key {
    /// Parse a key name such as `"C"`, `"Bb"`, `"F#m"` or `"Ebmin"`.
    ///
    /// `♯`/`♭` are accepted in place of `#`/`b`. Returns `None` for anything
    /// that is not a note letter optionally followed by a minor marker.
    pub fn parse(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        let (tonic, len) = Note::read(trimmed)?;
        let mode = match &trimmed[len..] {
            "" | "maj" | "major" => Mode::Major,
            "m" | "min" | "minor" => Mode::Minor,
            _ => return None,
        };
        Some(Self { tonic, mode })
    }

    /// Canonical ASCII name, e.g. `B♭m` becomes `Bbm`.
    pub fn name(&self) -> String {
        match self.mode {
            Mode::Major => self.tonic.to_string(),
            Mode::Minor => format!("{}m", self.tonic),
        }
    }
}

/// Alphabet a key name is spelled in.
///
/// Unknown names fall back to the sharp alphabet.
///
/// ```
/// use chordsheet::key::alphabet_for;
/// use chordsheet::note::Alphabet;
///
/// assert_eq!(alphabet_for("Eb"), Alphabet::Flat);
/// assert_eq!(alphabet_for("Dm"), Alphabet::Flat);
/// assert_eq!(alphabet_for("D"), Alphabet::Sharp);
/// assert_eq!(alphabet_for("not a key"), Alphabet::Sharp);
/// ```
pub fn alphabet_for(key_name: &str) -> Alphabet {
    let canonical = match Key::parse(key_name) {
        Some(key) => key.name(),
        None => return Alphabet::Sharp,
    };
    if FLAT_KEYS.contains(&canonical.as_str()) {
        Alphabet::Flat
    } else {
        Alphabet::Sharp
    }
}
