//! # Error Types
//!
//! This module defines the error type shared by the chord sheet core.
//!
//! Most of the core never fails: malformed markup degrades to lyric text and
//! unknown key names fall back to the sharp alphabet. Only two conditions are
//! surfaced as errors.
//!
//! ## Error Types
//! - `ChordParse` - a chord symbol with no recognizable root note
//! - `InvalidOptions` - display options that could not be deserialized
//!
//! ## Usage
//! ```rust
//! use chordsheet::{build_transpose_map, transpose_chord, ChordsheetError};
//!
//! let map = build_transpose_map("C", "D");
//! match transpose_chord("x7", &map) {
//!     Ok(chord) => println!("{}", chord),
//!     Err(ChordsheetError::ChordParse { chord }) => {
//!         eprintln!("no root note in '{}', showing it as written", chord);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChordsheetError {
    /// Chord symbol without a root note.
    ///
    /// Occurs when no letter `A` to `G` can be found in the chord text, so
    /// there is nothing to transpose.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::ChordsheetError;
    /// let err = ChordsheetError::ChordParse { chord: "|".to_string() };
    /// assert_eq!(err.to_string(), "Cannot parse chord '|': no root note found");
    /// ```
    #[error("Cannot parse chord '{chord}': no root note found")]
    ChordParse { chord: String },

    /// Display options could not be read.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::ChordsheetError;
    /// let err = ChordsheetError::InvalidOptions("show-chords: expected a boolean".to_string());
    /// assert_eq!(err.to_string(), "Invalid display options: show-chords: expected a boolean");
    /// ```
    #[error("Invalid display options: {0}")]
    InvalidOptions(String),
}
