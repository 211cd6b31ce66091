//! # Error Types
//!
//! Every fallible operation in the crate returns [`TransposeError`].
//!
//! ## Error Types
//! - `InvalidKey` - a root name outside the 17 accepted spellings
//! - `InvalidQuality` - a chord quality suffix outside the fixed set
//! - `InvalidChordToken` - a malformed `ROOT[:QUALITY]` token
//! - `EmptyProgression` / `TooManyChords` - chord count outside 1..=20
//! - `UnknownPreset` / `Preset` - preset lookup and preset file errors
//! - `Config` / `Io` - configuration and file access errors
//! - `Render` - a table could not be serialized
//!
//! ## Usage
//! ```rust
//! use chord_transposer::{transpose, TransposeError};
//!
//! match transpose("H", 0) {
//!     Ok(name) => println!("{}", name),
//!     Err(TransposeError::InvalidKey(key)) => eprintln!("not a key: {}", key),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransposeError {
    /// Root name is not one of the 17 accepted note spellings.
    ///
    /// # Example
    /// ```
    /// # use chord_transposer::TransposeError;
    /// let err = TransposeError::InvalidKey("H".to_string());
    /// assert_eq!(err.to_string(), "Invalid key: 'H' is not a recognised note name");
    /// ```
    #[error("Invalid key: '{0}' is not a recognised note name")]
    InvalidKey(String),

    /// Quality suffix is not in the fixed set of chord qualities.
    #[error("Invalid chord quality: '{0}'")]
    InvalidQuality(String),

    /// A `ROOT[:QUALITY]` token could not be split into a root and quality.
    #[error("Invalid chord '{0}': expected ROOT or ROOT:QUALITY (e.g. A:m7)")]
    InvalidChordToken(String),

    #[error("Please enter at least one chord")]
    EmptyProgression,

    #[error("Maximum {max} chords allowed (got {got})")]
    TooManyChords { max: usize, got: usize },

    #[error("Unknown preset: '{0}'")]
    UnknownPreset(String),

    /// Preset file could not be parsed or contains an invalid entry.
    #[error("Invalid preset data: {0}")]
    Preset(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Table serialization failed.
    ///
    /// # Example
    /// ```
    /// # use chord_transposer::TransposeError;
    /// let err = TransposeError::Render("unexpected end of stream".to_string());
    /// assert_eq!(err.to_string(), "Cannot render table: unexpected end of stream");
    /// ```
    #[error("Cannot render table: {0}")]
    Render(String),

    #[error("Cannot read '{path}': {message}")]
    Io { path: String, message: String },
}
