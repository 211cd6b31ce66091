//! # Transposition Table
//!
//! Builds the 12-row grid: one row per canonical key, one column per input
//! chord.
//!
//! ```text
//! Key    | Dm7     | G7     | Cmaj7
//! -------+---------+--------+---------
//! C      | Cm7     | C7     | Cmaj7
//! C#/Db  | C#/Dbm7 | C#/Db7 | C#/Dbmaj7
//! ...      (12 rows in canonical order)
//! ```
//!
//! Cells are produced by [`transpose_chord`]; the table itself knows nothing
//! about note spellings.

use crate::chord::Chord;
use crate::error::TransposeError;
use crate::pitch::PitchClass;
use crate::transpose::transpose_chord;
use serde::Serialize;

/// Label of the key column.
pub const KEY_HEADER: &str = "Key";

/// Longest progression a table is built for.
pub const MAX_CHORDS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub key: &'static str,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranspositionTable {
    chords: Vec<Chord>,
    headers: Vec<String>,
    rows: Vec<TableRow>,
}

impl TranspositionTable {
    /// Build the table for `chords`, kept in input order (duplicates included).
    ///
    /// # Errors
    /// [`TransposeError::EmptyProgression`] if `chords` is empty,
    /// [`TransposeError::TooManyChords`] if it has more than [`MAX_CHORDS`].
    pub fn build(chords: &[Chord]) -> Result<Self, TransposeError> {
        if chords.is_empty() {
            return Err(TransposeError::EmptyProgression);
        }
        if chords.len() > MAX_CHORDS {
            return Err(TransposeError::TooManyChords {
                max: MAX_CHORDS,
                got: chords.len(),
            });
        }

        let mut headers = Vec::with_capacity(chords.len() + 1);
        headers.push(KEY_HEADER.to_string());
        headers.extend(chords.iter().map(Chord::display));

        let rows: Vec<TableRow> = PitchClass::all()
            .map(|pc| TableRow {
                key: pc.canonical_name(),
                cells: chords
                    .iter()
                    .map(|chord| transpose_chord(chord, pc.index() as i64))
                    .collect(),
            })
            .collect();

        log::debug!(
            "Built transposition table: {} chord(s) x {} keys",
            chords.len(),
            rows.len()
        );

        Ok(Self {
            chords: chords.to_vec(),
            headers,
            rows,
        })
    }

    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    /// `"Key"` followed by each chord's display name.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.cells.get(col))
            .map(String::as_str)
    }

    /// All 12 cells for one chord, top to bottom.
    pub fn column(&self, col: usize) -> Option<Vec<&str>> {
        if col >= self.chords.len() {
            return None;
        }
        Some(self.rows.iter().map(|r| r.cells[col].as_str()).collect())
    }
}
