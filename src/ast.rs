//! # Song Types
//!
//! This module defines the data model a song document is parsed into.
//!
//! ## Type Hierarchy
//! ```text
//! Song
//!   └── Vec<Section>
//!         ├── tag: Tag
//!         │     ├── name: String      (brackets and suffix removed)
//!         │     └── kind: SectionKind (Info | ChordsAndLyrics | ChordsOnly | LyricsOnly)
//!         ├── line: usize             (line of the tag itself)
//!         └── body: Vec<SourceLine>   (every line up to the next tag)
//! ```
//!
//! ## Key Concepts
//!
//! ### Section kinds
//! The kind is decided by the tag alone:
//! - `[Info]` (any case) - song header fields
//! - `[Verse]` - alternating chord and lyric lines, chord line first
//! - `[Intro*]` - chords only, rendered inline
//! - `[Chorus&]` - lyrics only, passed through
//!
//! ### Columns
//! Chord columns are counted in characters, not bytes, so lyrics with
//! accented letters line up the same way they do in a text editor.
//!
//! ## Related Modules
//! - `parser` - creates these types from the raw document
//! - `info` - fills `SongInfo` from an `Info` section
//! - `latex` - renders a `Song` to LaTeX

/// How a section's body lines are to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Info,
    ChordsAndLyrics,
    ChordsOnly,
    LyricsOnly,
}

/// A parsed section tag such as `[Pre-Chorus]` or `[Intro*]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Tag name without brackets or kind suffix.
    pub name: String,
    pub kind: SectionKind,
}

impl Tag {
    /// Heading shown above the section: `pre-chorus` becomes `Pre-Chorus`.
    pub fn heading(&self) -> String {
        title_case(&self.name)
    }
}

/// Upper-case the first letter of every run of letters, lower-case the rest.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }
    result
}

/// A line of the source document with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

impl SourceLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// One tagged section of a song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub tag: Tag,
    /// Line number of the tag.
    pub line: usize,
    pub body: Vec<SourceLine>,
}

impl Section {
    /// Body lines that carry content.
    pub fn content_lines(&self) -> impl Iterator<Item = &SourceLine> {
        self.body.iter().filter(|l| !l.is_blank())
    }

    /// Whole body as text, trimmed at both ends.
    pub fn text(&self) -> String {
        let joined: Vec<&str> = self.body.iter().map(|l| l.text.as_str()).collect();
        joined.join("\n").trim().to_string()
    }
}

/// A parsed song document: its sections in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Song {
    pub sections: Vec<Section>,
}

/// A chord token and the character column where it starts in its chord line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedChord {
    pub chord: String,
    pub column: usize,
}

impl PlacedChord {
    pub fn new(chord: impl Into<String>, column: usize) -> Self {
        Self {
            chord: chord.into(),
            column,
        }
    }
}

/// Whether a chord-line token is a parenthetical annotation like `(x2)`
/// rather than a playable chord.
pub fn is_annotation(token: &str) -> bool {
    token.starts_with('(') && token[1..].contains(')')
}

/// One `Strumming:` line of the info section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrummingEntry {
    /// Trailing parenthetical, kept with its parentheses, e.g. `(chorus)`.
    pub note: Option<String>,
    /// Pattern already formatted as LaTeX tables.
    pub pattern: String,
}

/// Header fields read from the `[Info]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongInfo {
    pub title: String,
    pub by: String,
    pub capo: Option<String>,
    pub strumming: Vec<StrummingEntry>,
    pub note: Option<String>,
}
