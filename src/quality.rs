//! Chord qualities.
//!
//! A quality is carried through transposition untouched and appended to the
//! transposed root, so the only behaviour here is mapping between the enum
//! and its suffix token.

use crate::error::TransposeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of chord quality suffixes. `Major` is the empty suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChordQuality {
    #[default]
    #[serde(rename = "")]
    Major,
    #[serde(rename = "m")]
    Minor,
    #[serde(rename = "dim")]
    Diminished,
    #[serde(rename = "aug")]
    Augmented,
    #[serde(rename = "sus2")]
    Sus2,
    #[serde(rename = "sus4")]
    Sus4,
    #[serde(rename = "7")]
    Dominant7,
    #[serde(rename = "maj7")]
    Major7,
    #[serde(rename = "m7")]
    Minor7,
    #[serde(rename = "dim7")]
    Diminished7,
    #[serde(rename = "aug7")]
    Augmented7,
    #[serde(rename = "m7b5")]
    HalfDiminished7,
    #[serde(rename = "6")]
    Sixth,
    #[serde(rename = "m6")]
    Minor6,
    #[serde(rename = "add9")]
    Add9,
    #[serde(rename = "madd9")]
    MinorAdd9,
    #[serde(rename = "9")]
    Dominant9,
    #[serde(rename = "maj9")]
    Major9,
    #[serde(rename = "m9")]
    Minor9,
    #[serde(rename = "11")]
    Dominant11,
    #[serde(rename = "maj11")]
    Major11,
    #[serde(rename = "m11")]
    Minor11,
    #[serde(rename = "13")]
    Dominant13,
    #[serde(rename = "maj13")]
    Major13,
    #[serde(rename = "m13")]
    Minor13,
}

impl ChordQuality {
    pub const ALL: [ChordQuality; 25] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Diminished,
        ChordQuality::Augmented,
        ChordQuality::Sus2,
        ChordQuality::Sus4,
        ChordQuality::Dominant7,
        ChordQuality::Major7,
        ChordQuality::Minor7,
        ChordQuality::Diminished7,
        ChordQuality::Augmented7,
        ChordQuality::HalfDiminished7,
        ChordQuality::Sixth,
        ChordQuality::Minor6,
        ChordQuality::Add9,
        ChordQuality::MinorAdd9,
        ChordQuality::Dominant9,
        ChordQuality::Major9,
        ChordQuality::Minor9,
        ChordQuality::Dominant11,
        ChordQuality::Major11,
        ChordQuality::Minor11,
        ChordQuality::Dominant13,
        ChordQuality::Major13,
        ChordQuality::Minor13,
    ];

    /// The token appended to a root name, e.g. `"m7"` for `Minor7`.
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "aug",
            ChordQuality::Sus2 => "sus2",
            ChordQuality::Sus4 => "sus4",
            ChordQuality::Dominant7 => "7",
            ChordQuality::Major7 => "maj7",
            ChordQuality::Minor7 => "m7",
            ChordQuality::Diminished7 => "dim7",
            ChordQuality::Augmented7 => "aug7",
            ChordQuality::HalfDiminished7 => "m7b5",
            ChordQuality::Sixth => "6",
            ChordQuality::Minor6 => "m6",
            ChordQuality::Add9 => "add9",
            ChordQuality::MinorAdd9 => "madd9",
            ChordQuality::Dominant9 => "9",
            ChordQuality::Major9 => "maj9",
            ChordQuality::Minor9 => "m9",
            ChordQuality::Dominant11 => "11",
            ChordQuality::Major11 => "maj11",
            ChordQuality::Minor11 => "m11",
            ChordQuality::Dominant13 => "13",
            ChordQuality::Major13 => "maj13",
            ChordQuality::Minor13 => "m13",
        }
    }

    /// Label for listings. Same as the suffix except for the empty major suffix.
    pub fn label(self) -> &'static str {
        match self {
            ChordQuality::Major => "Major",
            other => other.suffix(),
        }
    }
}

impl FromStr for ChordQuality {
    type Err = TransposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChordQuality::ALL
            .iter()
            .copied()
            .find(|quality| quality.suffix() == s)
            .ok_or_else(|| TransposeError::InvalidQuality(s.to_string()))
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
