//! Built-in game modes.
//!
//! Each mode names a data file relative to the data directory.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Game mode options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    Katakana,
    KatakanaFancy,
    KatakanaTranscription,
}

impl GameMode {
    /// Every mode, in the order shown by usage output.
    pub const ALL: [GameMode; 3] = [
        Self::Katakana,
        Self::KatakanaFancy,
        Self::KatakanaTranscription,
    ];

    /// Get the mode name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Katakana => "katakana",
            Self::KatakanaFancy => "katakana-fancy",
            Self::KatakanaTranscription => "katakana-transcription",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Katakana => "basic katakana quiz",
            Self::KatakanaFancy => "fancy katakana quiz",
            Self::KatakanaTranscription => "katakana to romaji transcription quiz",
        }
    }

    /// Data file path relative to the data directory.
    pub fn data_path(&self) -> &'static str {
        match self {
            Self::Katakana => "data/katakana-simple.quiz",
            Self::KatakanaFancy => "data/katakana-fancy.quiz",
            Self::KatakanaTranscription => "data/katakana-transcription.csv",
        }
    }

    pub fn resolve_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.data_path())
    }

    /// Look up a mode by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_ignores_case() {
        assert_eq!(GameMode::from_name("katakana"), Some(GameMode::Katakana));
        assert_eq!(
            GameMode::from_name("KATAKANA-Fancy"),
            Some(GameMode::KatakanaFancy)
        );
        assert_eq!(GameMode::from_name("hiragana"), None);
        assert_eq!(GameMode::from_name(""), None);
    }

    #[test]
    fn names_round_trip() {
        for mode in GameMode::ALL {
            assert_eq!(GameMode::from_name(mode.name()), Some(mode));
        }
    }

    #[test]
    fn resolve_path_joins_data_dir() {
        let path = GameMode::KatakanaTranscription.resolve_path(Path::new("/opt/katacant"));
        assert_eq!(
            path,
            PathBuf::from("/opt/katacant/data/katakana-transcription.csv")
        );
    }
}
