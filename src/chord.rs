//! A chord: a root spelling plus a quality.
//!
//! Chords come from two places, the command line (`ROOT[:QUALITY]` tokens)
//! and preset files (`{ root: A, quality: m }` mappings). Both go through the
//! closed [`NoteSpelling`] and [`ChordQuality`] enums, so an invalid root or
//! quality is rejected before any transposition is attempted.

use crate::error::TransposeError;
use crate::pitch::NoteSpelling;
use crate::quality::ChordQuality;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Chord {
    pub root: NoteSpelling,
    #[serde(default)]
    pub quality: ChordQuality,
}

impl Chord {
    pub fn new(root: NoteSpelling, quality: ChordQuality) -> Self {
        Self { root, quality }
    }

    /// Build a chord from unchecked root and quality strings.
    ///
    /// ```
    /// use chord_transposer::{Chord, TransposeError};
    ///
    /// let chord = Chord::from_parts("Bb", "maj7")?;
    /// assert_eq!(chord.display(), "Bbmaj7");
    ///
    /// assert!(matches!(Chord::from_parts("H", ""), Err(TransposeError::InvalidKey(_))));
    /// # Ok::<(), TransposeError>(())
    /// ```
    pub fn from_parts(root: &str, quality: &str) -> Result<Self, TransposeError> {
        Ok(Self {
            root: root.parse()?,
            quality: quality.parse()?,
        })
    }

    /// Root spelling followed by the quality suffix, e.g. `"A#7"`.
    pub fn display(&self) -> String {
        format!("{}{}", self.root.as_str(), self.quality.suffix())
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root.as_str(), self.quality.suffix())
    }
}

/// Parses the `ROOT[:QUALITY]` token form used on the command line.
///
/// The colon keeps root and quality apart so no chord-symbol parsing is
/// needed: `A:m7`, `F#:dim7`, `C` (major), `C:` (also major).
impl FromStr for Chord {
    type Err = TransposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(TransposeError::InvalidChordToken(s.to_string()));
        }

        let (root, quality) = match token.split_once(':') {
            Some((root, quality)) => {
                if quality.contains(':') {
                    return Err(TransposeError::InvalidChordToken(s.to_string()));
                }
                (root, quality)
            }
            None => (token, ""),
        };

        Chord::from_parts(root, quality)
    }
}
