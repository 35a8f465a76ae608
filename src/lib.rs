//! Chord sheet core: tokenizes ChordPro-style lines (`[G]Amazing {comment:Slowly}`),
//! classifies them, pairs chords with the lyrics they sit above, and
//! transposes chord symbols between keys.

pub mod api;
pub mod chord;
pub mod error;
pub mod key;
pub mod layout;
pub mod lexer;
pub mod note;
pub mod options;
pub mod token;
pub mod transpose;

pub use api::{describe_line, describe_section, LineDescriber, LineView, SectionView};
pub use chord::{is_no_chord, ChordSymbol};
pub use error::*;
pub use key::{Key, KEY_NAMES};
pub use layout::{layout, Annotation, Placement, Segment};
pub use lexer::tokenize;
pub use options::DisplayOptions;
pub use token::{LineKind, Token, TokenKind, TokenPair, TokenizedLine};
pub use transpose::{
    build_transpose_map, transpose_chord, transpose_chord_or_original, KeySelection, TransposeMap,
};
