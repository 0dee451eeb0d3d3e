//! # Error Types
//!
//! This module defines all error types for the song converter.
//!
//! Every error carries the 1-based line number in the source document so a
//! broken song can be fixed without guessing. Errors are local to the document
//! being converted; nothing here is retryable.
//!
//! ## Error Types
//! - `MalformedTag` - a bracketed line that is not a recognised section tag
//! - `ChordAlignment` - a chord token could not be located in its chord line
//! - `StructuralMismatch` - a chords-and-lyrics section with an unpaired line
//! - `UntaggedContent` - text before the first section tag
//! - `ConfigError` - invalid YAML options
//!
//! ## Usage
//! ```rust,ignore
//! use songtex::{compile, Options, SongError};
//!
//! match compile(source, &Options::default()) {
//!     Ok(tex) => println!("{}", tex),
//!     Err(SongError::MalformedTag { line, tag }) => {
//!         eprintln!("Bad tag {} on line {}", tag, line);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SongError {
    /// A line shaped like `[...]` whose content is not a plain, `*`-suffixed,
    /// `&`-suffixed or `Info` tag.
    ///
    /// # Example
    /// ```
    /// # use songtex::SongError;
    /// let err = SongError::MalformedTag { line: 3, tag: "[???]".to_string() };
    /// assert_eq!(err.to_string(), "Malformed tag [???] at line 3");
    /// ```
    #[error("Malformed tag {tag} at line {line}")]
    MalformedTag { line: usize, tag: String },

    /// A chord token that cannot be found at or after the scan cursor of its
    /// chord line.
    ///
    /// # Example
    /// ```
    /// # use songtex::SongError;
    /// let err = SongError::ChordAlignment {
    ///     tag: "Verse".to_string(),
    ///     line: 4,
    ///     chord: "G".to_string(),
    ///     content: "C  D".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Chord 'G' in section Verse cannot be aligned at line 4: \"C  D\""
    /// );
    /// ```
    #[error("Chord '{chord}' in section {tag} cannot be aligned at line {line}: {content:?}")]
    ChordAlignment {
        tag: String,
        line: usize,
        chord: String,
        content: String,
    },

    /// A chords-and-lyrics section whose non-empty lines do not pair up.
    ///
    /// `line` points at the section's tag.
    #[error("Section {tag} at line {line} has {count} chord/lyric lines; expected an even number")]
    StructuralMismatch {
        tag: String,
        line: usize,
        count: usize,
    },

    /// Non-blank text found before the first section tag.
    #[error("Text at line {line} does not belong to any section")]
    UntaggedContent { line: usize },

    /// Invalid options file.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
