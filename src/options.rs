//! # Display Options
//!
//! Settings a presentation layer passes in with each line or section: chord
//! visibility and the key change to apply.
//!
//! Options can be written as YAML with kebab-case keys; missing keys take
//! their defaults.
//!
//! ```yaml
//! show-chords: true
//! key: G
//! transpose-to: A
//! ```

use crate::error::ChordsheetError;
use crate::transpose::{build_transpose_map, TransposeMap};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default)]
pub struct DisplayOptions {
    /// Show chord annotations (comments are always shown)
    pub show_chords: bool,
    /// Key the song is written in
    pub key: Option<String>,
    /// Key to show the song in
    pub transpose_to: Option<String>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_chords: true,
            key: None,
            transpose_to: None,
        }
    }
}

impl DisplayOptions {
    /// Read options from YAML. An empty document gives the defaults.
    ///
    /// ```
    /// use chordsheet::DisplayOptions;
    ///
    /// let options = DisplayOptions::from_yaml("key: G\ntranspose-to: A\n")?;
    /// assert!(options.show_chords);
    /// assert_eq!(options.transpose_to.as_deref(), Some("A"));
    /// # Ok::<(), chordsheet::ChordsheetError>(())
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, ChordsheetError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| ChordsheetError::InvalidOptions(e.to_string()))
    }

    /// Transposition to apply, if the options ask for a real key change.
    pub fn transpose_map(&self) -> Option<TransposeMap> {
        let from = self.key.as_deref()?;
        let to = self.transpose_to.as_deref()?;
        if from == to {
            return None;
        }
        Some(build_transpose_map(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DisplayOptions::default();
        assert!(options.show_chords);
        assert_eq!(options.key, None);
        assert!(options.transpose_map().is_none());
        assert_eq!(DisplayOptions::from_yaml("").unwrap(), options);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = "show-chords: false\nkey: Bb\ntranspose-to: C\n";
        let options = DisplayOptions::from_yaml(yaml).unwrap();
        assert!(!options.show_chords);
        assert_eq!(options.key.as_deref(), Some("Bb"));
        let map = options.transpose_map().unwrap();
        assert_eq!(map.shift(), 2);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let options = DisplayOptions::from_yaml("key: D").unwrap();
        assert!(options.show_chords);
        assert!(options.transpose_map().is_none());
    }

    #[test]
    fn test_same_key_means_no_map() {
        let options = DisplayOptions {
            key: Some("E".to_string()),
            transpose_to: Some("E".to_string()),
            ..Default::default()
        };
        assert!(options.transpose_map().is_none());
    }

    #[test]
    fn test_invalid_yaml() {
        let err = DisplayOptions::from_yaml("show-chords: [1, 2]").unwrap_err();
        assert!(matches!(err, ChordsheetError::InvalidOptions(_)));
    }
}
