//! # chord-transposer
//!
//! Transposes a list of chords into all twelve keys.
//!
//! ```rust
//! use chord_transposer::{render_text, transpose_all, Chord};
//!
//! let chords: Vec<Chord> = ["D:m7", "G:7", "C:maj7"]
//!     .iter()
//!     .map(|t| t.parse::<Chord>())
//!     .collect::<Result<_, _>>()?;
//!
//! let table = transpose_all(&chords)?;
//! assert_eq!(table.cell(2, 0), Some("Dm7"));
//! println!("{}", render_text(&table));
//! # Ok::<(), chord_transposer::TransposeError>(())
//! ```

pub mod chord;
pub mod config;
pub mod error;
pub mod pitch;
pub mod presets;
pub mod quality;
pub mod render;
pub mod table;
pub mod transpose;

pub use chord::Chord;
pub use config::ChordTransposerConfig;
pub use error::*;
pub use pitch::{NoteSpelling, PitchClass, CANONICAL_KEY_NAMES};
pub use presets::{Preset, PresetCatalog};
pub use quality::ChordQuality;
pub use render::{render, render_html, render_text, render_yaml, OutputFormat};
pub use table::{TableRow, TranspositionTable, MAX_CHORDS};
pub use transpose::{transpose, transpose_chord, transpose_note};

/// Build the transposition table for a chord list.
pub fn transpose_all(chords: &[Chord]) -> Result<TranspositionTable, TransposeError> {
    TranspositionTable::build(chords)
}

/// Build the transposition table for a named preset.
pub fn transpose_preset(
    catalog: &PresetCatalog,
    id: &str,
) -> Result<TranspositionTable, TransposeError> {
    let preset = catalog.get(id)?;
    TranspositionTable::build(&preset.chords)
}
