//! # Transposition
//!
//! Answers one question: for a chord rooted at `root`, what key name goes in
//! row `target` of the transposition table?
//!
//! The computation goes through the semitone distance from the root to the
//! target row and back:
//!
//! ```text
//! original   = spelling(root)                    // 0..=11
//! distance   = (target - original + 12) % 12     // semitones root -> row
//! transposed = (original + distance) % 12        // == target
//! ```
//!
//! `transposed` always equals `target`, so a row shows the canonical name of
//! that row's pitch class whatever the chord's root was. Only the quality
//! distinguishes one column from another. Tables built by earlier versions
//! of this tool depend on that layout; do not turn this into "root + fixed
//! interval".

use crate::chord::Chord;
use crate::error::TransposeError;
use crate::pitch::{NoteSpelling, PitchClass};

/// Transpose a root name to the canonical key name for `target_pitch_class`.
///
/// `target_pitch_class` may be any integer; it is folded into `[0, 11]`
/// first. An unknown `root_name` is reported as
/// [`TransposeError::InvalidKey`].
///
/// ```
/// use chord_transposer::transpose;
///
/// assert_eq!(transpose("C", 7)?, "G");
/// assert_eq!(transpose("F#", 1)?, "C#/Db");
/// assert_eq!(transpose("Bb", -1)?, "B");
/// assert!(transpose("H", 0).is_err());
/// # Ok::<(), chord_transposer::TransposeError>(())
/// ```
pub fn transpose(root_name: &str, target_pitch_class: i64) -> Result<&'static str, TransposeError> {
    let root: NoteSpelling = root_name.parse()?;
    Ok(transpose_note(root, target_pitch_class))
}

/// Typed form of [`transpose`]; total because the root is already validated.
pub fn transpose_note(root: NoteSpelling, target_pitch_class: i64) -> &'static str {
    let target = PitchClass::normalize(target_pitch_class).index() as i64;
    let original = root.pitch_class().index() as i64;

    let distance = (target - original + 12) % 12;
    PitchClass::normalize(original + distance).canonical_name()
}

/// Transposed root plus the chord's own quality suffix, e.g. `"D#/Ebm7"`.
pub fn transpose_chord(chord: &Chord, target_pitch_class: i64) -> String {
    let mut cell = String::from(transpose_note(chord.root, target_pitch_class));
    cell.push_str(chord.quality.suffix());
    cell
}
