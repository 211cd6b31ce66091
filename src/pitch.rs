//! # Pitch Classes and Note Spellings
//!
//! The two constant tables every transposition is answered from:
//!
//! - **Note spelling** (17 entries): note name -> pitch class. Enharmonic
//!   names share a pitch class (`C#` and `Db` are both 1).
//! - **Canonical key names** (12 entries): pitch class -> display string.
//!   Black keys are shown as a slash-joined pair (`C#/Db`).
//!
//! ```text
//! pitch class  0  1      2  3      4  5  6      7  8      9  10     11
//! canonical    C  C#/Db  D  D#/Eb  E  F  F#/Gb  G  G#/Ab  A  A#/Bb  B
//! ```
//!
//! Both tables are `const` data; nothing here is mutable.

use crate::error::TransposeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display names for the 12 pitch classes, indexed by pitch class.
pub const CANONICAL_KEY_NAMES: [&str; 12] = [
    "C", "C#/Db", "D", "D#/Eb", "E", "F", "F#/Gb", "G", "G#/Ab", "A", "A#/Bb", "B",
];

/// One of the 12 equal-tempered chromatic steps, 0 = C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const COUNT: usize = 12;

    /// Fold any integer into `[0, 11]`.
    ///
    /// Equivalent to `((n % 12) + 12) % 12`, so negative and oversized
    /// inputs wrap around the octave.
    ///
    /// ```
    /// use chord_transposer::PitchClass;
    ///
    /// assert_eq!(PitchClass::normalize(7).index(), 7);
    /// assert_eq!(PitchClass::normalize(19).index(), 7);
    /// assert_eq!(PitchClass::normalize(-5).index(), 7);
    /// ```
    pub fn normalize(n: i64) -> Self {
        PitchClass(n.rem_euclid(12) as u8)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn canonical_name(self) -> &'static str {
        CANONICAL_KEY_NAMES[self.index()]
    }

    /// All 12 pitch classes in ascending order from C.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..12u8).map(PitchClass)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// A root note name, one of the 17 accepted spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteSpelling {
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C#")]
    CSharp,
    #[serde(rename = "Db")]
    DFlat,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D#")]
    DSharp,
    #[serde(rename = "Eb")]
    EFlat,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "F")]
    F,
    #[serde(rename = "F#")]
    FSharp,
    #[serde(rename = "Gb")]
    GFlat,
    #[serde(rename = "G")]
    G,
    #[serde(rename = "G#")]
    GSharp,
    #[serde(rename = "Ab")]
    AFlat,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A#")]
    ASharp,
    #[serde(rename = "Bb")]
    BFlat,
    #[serde(rename = "B")]
    B,
}

impl NoteSpelling {
    /// Every spelling, in the order a root selector lists them.
    pub const ALL: [NoteSpelling; 17] = [
        NoteSpelling::C,
        NoteSpelling::CSharp,
        NoteSpelling::DFlat,
        NoteSpelling::D,
        NoteSpelling::DSharp,
        NoteSpelling::EFlat,
        NoteSpelling::E,
        NoteSpelling::F,
        NoteSpelling::FSharp,
        NoteSpelling::GFlat,
        NoteSpelling::G,
        NoteSpelling::GSharp,
        NoteSpelling::AFlat,
        NoteSpelling::A,
        NoteSpelling::ASharp,
        NoteSpelling::BFlat,
        NoteSpelling::B,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NoteSpelling::C => "C",
            NoteSpelling::CSharp => "C#",
            NoteSpelling::DFlat => "Db",
            NoteSpelling::D => "D",
            NoteSpelling::DSharp => "D#",
            NoteSpelling::EFlat => "Eb",
            NoteSpelling::E => "E",
            NoteSpelling::F => "F",
            NoteSpelling::FSharp => "F#",
            NoteSpelling::GFlat => "Gb",
            NoteSpelling::G => "G",
            NoteSpelling::GSharp => "G#",
            NoteSpelling::AFlat => "Ab",
            NoteSpelling::A => "A",
            NoteSpelling::ASharp => "A#",
            NoteSpelling::BFlat => "Bb",
            NoteSpelling::B => "B",
        }
    }

    pub fn pitch_class(self) -> PitchClass {
        let index = match self {
            NoteSpelling::C => 0,
            NoteSpelling::CSharp | NoteSpelling::DFlat => 1,
            NoteSpelling::D => 2,
            NoteSpelling::DSharp | NoteSpelling::EFlat => 3,
            NoteSpelling::E => 4,
            NoteSpelling::F => 5,
            NoteSpelling::FSharp | NoteSpelling::GFlat => 6,
            NoteSpelling::G => 7,
            NoteSpelling::GSharp | NoteSpelling::AFlat => 8,
            NoteSpelling::A => 9,
            NoteSpelling::ASharp | NoteSpelling::BFlat => 10,
            NoteSpelling::B => 11,
        };
        PitchClass(index)
    }
}

impl FromStr for NoteSpelling {
    type Err = TransposeError;

    /// Exact, case-sensitive match against the 17 spellings. Surrounding
    /// whitespace is not stripped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteSpelling::ALL
            .iter()
            .copied()
            .find(|spelling| spelling.as_str() == s)
            .ok_or_else(|| TransposeError::InvalidKey(s.to_string()))
    }
}

impl fmt::Display for NoteSpelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spelling_table_matches_pitch_classes() {
        let expected = [0, 1, 1, 2, 3, 3, 4, 5, 6, 6, 7, 8, 8, 9, 10, 10, 11];
        for (spelling, pc) in NoteSpelling::ALL.iter().zip(expected) {
            assert_eq!(spelling.pitch_class().index(), pc, "{}", spelling);
        }
    }

    #[test]
    fn test_parse_round_trips_every_spelling() {
        for spelling in NoteSpelling::ALL {
            assert_eq!(spelling.as_str().parse::<NoteSpelling>(), Ok(spelling));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        for bad in ["H", "c", "Cb", "E#", "", "C##", "Bbb", " C", "C ", "Bb\n"] {
            assert_eq!(
                bad.parse::<NoteSpelling>(),
                Err(TransposeError::InvalidKey(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_normalize_wraps_negative_and_large_values() {
        assert_eq!(PitchClass::normalize(0).index(), 0);
        assert_eq!(PitchClass::normalize(12).index(), 0);
        assert_eq!(PitchClass::normalize(-1).index(), 11);
        assert_eq!(PitchClass::normalize(-12).index(), 0);
        assert_eq!(PitchClass::normalize(-13).index(), 11);
        assert_eq!(PitchClass::normalize(i64::MAX).index(), (i64::MAX % 12) as usize);
        assert!(PitchClass::normalize(i64::MIN).index() < 12);
    }

    #[test]
    fn test_canonical_names() {
        let names: Vec<&str> = PitchClass::all().map(|pc| pc.canonical_name()).collect();
        assert_eq!(names, CANONICAL_KEY_NAMES.to_vec());
        assert_eq!(PitchClass::normalize(1).to_string(), "C#/Db");
    }
}
