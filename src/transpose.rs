//! # Transposition
//!
//! Moves chord symbols from the key a song is written in to the key a
//! performer selected.
//!
//! A [`TransposeMap`] is built once per (source key, destination key) pair
//! and then applied to every chord on the sheet with [`transpose_chord`].
//!
//! ```rust
//! use chordsheet::{build_transpose_map, transpose_chord};
//!
//! let map = build_transpose_map("G", "A");
//! assert_eq!(transpose_chord("G/B", &map)?, "A/C#");
//! assert_eq!(transpose_chord("Em7", &map)?, "F#m7");
//! # Ok::<(), chordsheet::ChordsheetError>(())
//! ```

use crate::chord::{is_no_chord, ChordSymbol};
use crate::error::ChordsheetError;
use crate::key::{alphabet_for, Key};
use crate::note::{Alphabet, Note};
use std::sync::Arc;

/// Note translation table for one source/destination key pair.
///
/// Holds an entry for each of the 12 spellings of the source alphabet. Notes
/// spelled outside that alphabet (`Db` when the source uses sharps) resolve
/// through their pitch class, so every spelling has a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransposeMap {
    shift: u8,
    source: Alphabet,
    target: Alphabet,
    identity: bool,
}

impl TransposeMap {
    /// The map that leaves every note exactly as written.
    pub fn identity() -> Self {
        Self {
            shift: 0,
            source: Alphabet::Sharp,
            target: Alphabet::Sharp,
            identity: true,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.identity
    }

    /// Upward shift in semitones, in `0..12`.
    pub fn shift(&self) -> u8 {
        self.shift
    }

    pub fn source_alphabet(&self) -> Alphabet {
        self.source
    }

    pub fn target_alphabet(&self) -> Alphabet {
        self.target
    }

    /// Look up a spelling of the source alphabet, e.g. `map.get("A#")`.
    pub fn get(&self, spelling: &str) -> Option<&'static str> {
        let index = self.source.notes().iter().position(|&n| n == spelling)?;
        Some(self.target.spell(index as u8 + self.shift))
    }

    /// All 12 entries as `(source spelling, destination spelling)`.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.source
            .notes()
            .iter()
            .enumerate()
            .map(move |(i, &from)| (from, self.target.spell(i as u8 + self.shift)))
    }

    /// Translate any spelled note.
    pub fn translate(&self, note: Note) -> String {
        if self.identity {
            return note.to_string();
        }
        self.target.spell(note.pitch_class() + self.shift).to_string()
    }
}

impl Default for TransposeMap {
    fn default() -> Self {
        Self::identity()
    }
}

/// Build the translation table from `source` key to `dest` key.
///
/// Each side is spelled in its own alphabet (see [`alphabet_for`]), and the
/// shift is the distance between the two tonics. Never fails: identical key
/// names give the identity map, and a key whose tonic cannot be read gives
/// the identity map with a warning.
///
/// ```
/// use chordsheet::build_transpose_map;
///
/// let map = build_transpose_map("C", "F");
/// assert_eq!(map.get("C"), Some("F"));
/// assert_eq!(map.get("F"), Some("Bb"));
/// ```
pub fn build_transpose_map(source: &str, dest: &str) -> TransposeMap {
    if source == dest {
        return TransposeMap::identity();
    }

    let (from, to) = match (Key::parse(source), Key::parse(dest)) {
        (Some(from), Some(to)) => (from, to),
        _ => {
            log::warn!(
                "Cannot transpose from key '{}' to '{}', leaving chords as written",
                source,
                dest
            );
            return TransposeMap::identity();
        }
    };

    // +12 keeps a downward shift positive
    let shift = (12 + to.tonic.pitch_class() - from.tonic.pitch_class()) % 12;

    TransposeMap {
        shift,
        source: alphabet_for(source),
        target: alphabet_for(dest),
        identity: false,
    }
}

/// Transpose a single chord symbol through `map`.
///
/// The root and the optional bass note are translated; prefix, quality and
/// trailing text are kept. The "no chord" marker is returned unchanged, and
/// so is every chord under the identity map, spelling included (`B♭` stays
/// `B♭`).
///
/// # Errors
/// [`ChordsheetError::ChordParse`] when the chord has no root note.
pub fn transpose_chord(chord: &str, map: &TransposeMap) -> Result<String, ChordsheetError> {
    if is_no_chord(chord) {
        return Ok(chord.to_string());
    }

    let symbol = ChordSymbol::parse(chord)?;
    if map.is_identity() {
        return Ok(chord.to_string());
    }

    let mut out = String::with_capacity(chord.len() + 2);
    out.push_str(&symbol.prefix);
    out.push_str(&map.translate(symbol.root));
    out.push_str(&symbol.suffix);
    if let Some(bass) = symbol.bass {
        out.push('/');
        out.push_str(&map.translate(bass));
    }
    out.push_str(&symbol.trailing);
    Ok(out)
}

/// Transpose a chord for display: a chord that cannot be parsed (a bar line
/// `|`, a stray word) is shown exactly as written.
pub fn transpose_chord_or_original(chord: &str, map: &TransposeMap) -> String {
    match transpose_chord(chord, map) {
        Ok(transposed) => transposed,
        Err(e) => {
            log::debug!("{}", e);
            chord.to_string()
        }
    }
}

/// The key a song is shown in.
///
/// Owns the current [`TransposeMap`]. Selecting a key replaces the map as a
/// whole, so readers holding the previous `Arc` keep a consistent table.
#[derive(Debug, Clone)]
pub struct KeySelection {
    original: String,
    selected: Option<String>,
    map: Option<Arc<TransposeMap>>,
}

impl KeySelection {
    /// Start in the key the song is written in.
    pub fn new(original: &str) -> Self {
        Self {
            original: original.to_string(),
            selected: None,
            map: None,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    /// Key currently displayed.
    pub fn current(&self) -> &str {
        self.selected.as_deref().unwrap_or(&self.original)
    }

    /// Show the song in `key`. Selecting the original key is the same as
    /// [`reset`](Self::reset).
    pub fn select(&mut self, key: &str) {
        if key == self.original {
            self.reset();
            return;
        }
        self.map = Some(Arc::new(build_transpose_map(&self.original, key)));
        self.selected = Some(key.to_string());
    }

    /// Go back to the original key, discarding the map.
    pub fn reset(&mut self) {
        self.selected = None;
        self.map = None;
    }

    /// Map for the current selection, `None` while in the original key.
    pub fn map(&self) -> Option<Arc<TransposeMap>> {
        self.map.clone()
    }

    /// Transpose a chord into the selected key, keeping unparseable chords.
    pub fn transpose(&self, chord: &str) -> String {
        match &self.map {
            Some(map) => transpose_chord_or_original(chord, map),
            None => chord.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_when_keys_match() {
        let map = build_transpose_map("Bb", "Bb");
        assert!(map.is_identity());
        assert_eq!(transpose_chord("A#m", &map).unwrap(), "A#m");
        assert_eq!(transpose_chord("Dbmaj7/F", &map).unwrap(), "Dbmaj7/F");
    }

    #[test]
    fn test_identity_keeps_unicode_accidentals() {
        let map = build_transpose_map("Bb", "Bb");
        assert_eq!(transpose_chord("B♭m7/E♭", &map).unwrap(), "B♭m7/E♭");
        assert_eq!(transpose_chord("(F♯7)", &map).unwrap(), "(F♯7)");
        assert!(transpose_chord("|", &map).is_err());
    }

    #[test]
    fn test_unicode_accidentals_transpose() {
        let map = build_transpose_map("Bb", "C");
        assert_eq!(transpose_chord("B♭m7/E♭", &map).unwrap(), "Cm7/F");
    }

    #[test]
    fn test_shift_up_and_down() {
        assert_eq!(build_transpose_map("C", "D").shift(), 2);
        // A below C is a shift of +9
        assert_eq!(build_transpose_map("C", "A").shift(), 9);
        assert_eq!(build_transpose_map("D", "C").shift(), 10);
    }

    #[test]
    fn test_alphabet_selection() {
        let map = build_transpose_map("C", "Eb");
        assert_eq!(map.source_alphabet(), Alphabet::Sharp);
        assert_eq!(map.target_alphabet(), Alphabet::Flat);
        assert_eq!(map.get("C"), Some("Eb"));
        assert_eq!(map.get("G"), Some("Bb"));
        assert_eq!(map.get("Bb"), None);

        let map = build_transpose_map("Eb", "E");
        assert_eq!(map.get("Eb"), Some("E"));
        assert_eq!(map.get("Ab"), Some("A"));
        assert_eq!(map.get("Bb"), Some("B"));
        assert_eq!(map.get("Db"), Some("D"));
    }

    #[test]
    fn test_map_is_a_bijection() {
        for (src, dst) in [("C", "D"), ("G", "Bb"), ("Eb", "F#"), ("Am", "Dm")] {
            let map = build_transpose_map(src, dst);
            let mut targets: Vec<_> = map
                .entries()
                .map(|(_, to)| Note::read(to).unwrap().0.pitch_class())
                .collect();
            targets.sort();
            targets.dedup();
            assert_eq!(targets.len(), 12, "{} -> {}", src, dst);
        }
    }

    #[test]
    fn test_enharmonic_spelling_resolves() {
        // Db is not in the sharp alphabet used for G
        let map = build_transpose_map("G", "A");
        assert_eq!(transpose_chord("Db", &map).unwrap(), "D#");
    }

    #[test]
    fn test_unknown_key_is_identity() {
        let map = build_transpose_map("C", "H");
        assert!(map.is_identity());
        assert_eq!(transpose_chord("F#m", &map).unwrap(), "F#m");
    }

    #[test]
    fn test_transpose_compound_chords() {
        let map = build_transpose_map("D", "E");
        assert_eq!(transpose_chord("D", &map).unwrap(), "E");
        assert_eq!(transpose_chord("Bm7", &map).unwrap(), "C#m7");
        assert_eq!(transpose_chord("A/C#", &map).unwrap(), "B/D#");
        assert_eq!(transpose_chord("(Gsus2)", &map).unwrap(), "(Asus2)");
        assert_eq!(transpose_chord("D6/9", &map).unwrap(), "E6/9");
    }

    #[test]
    fn test_no_chord_passes_through() {
        let map = build_transpose_map("C", "Ab");
        assert_eq!(transpose_chord("N.C.", &map).unwrap(), "N.C.");
        assert_eq!(transpose_chord("nc", &map).unwrap(), "nc");
    }

    #[test]
    fn test_unparseable_chord() {
        let map = build_transpose_map("C", "D");
        assert!(matches!(
            transpose_chord("|", &map),
            Err(ChordsheetError::ChordParse { .. })
        ));
        assert_eq!(transpose_chord_or_original("|", &map), "|");
        assert_eq!(transpose_chord_or_original("x", &map), "x");
    }

    #[test]
    fn test_key_selection_replaces_map() {
        let mut selection = KeySelection::new("G");
        assert_eq!(selection.current(), "G");
        assert!(selection.map().is_none());
        assert_eq!(selection.transpose("G/B"), "G/B");

        selection.select("A");
        let first = selection.map().unwrap();
        assert_eq!(selection.current(), "A");
        assert_eq!(selection.transpose("G/B"), "A/C#");

        selection.select("F");
        // earlier readers keep their table
        assert_eq!(first.get("G"), Some("A"));
        assert_eq!(selection.transpose("G"), "F");

        selection.select("G");
        assert!(selection.map().is_none());
        assert_eq!(selection.current(), "G");
    }
}
