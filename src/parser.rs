//! # Section Parser
//!
//! Splits a song document into tagged sections.
//!
//! A tag is a bracketed name alone on its line. Everything up to the next
//! tag (or the end of the document) is that section's body:
//!
//! ```text
//! [Info]
//! Title: Example
//! [Intro*]
//! C G Am
//! [Verse]
//! C       G   D
//! hello world today
//! [Chorus&]
//! la la la
//! ```
//!
//! The suffix of the tag name picks the section kind: `*` for chords only,
//! `&` for lyrics only, none for alternating chord/lyric lines. `Info` in any
//! letter case is the song header.
//!
//! ## Errors
//! - a bracketed line with any other shape is a `MalformedTag`
//! - text before the first tag is `UntaggedContent`
//! - a chords-and-lyrics section with an odd number of non-blank lines is a
//!   `StructuralMismatch`

use tracing::debug;

use crate::ast::*;
use crate::error::SongError;

/// Parse a song document into its sections.
pub fn parse(source: &str) -> Result<Song, SongError> {
    let mut sections = Vec::new();
    let mut current: Option<Section> = None;
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    for (index, text) in source.lines().enumerate() {
        let number = index + 1;

        if let Some(raw) = tag_line(text) {
            let tag = classify_tag(raw, number)?;
            debug!(line = number, name = %tag.name, kind = ?tag.kind, "section");
            if let Some(section) = current.take() {
                sections.push(section);
            }
            current = Some(Section {
                tag,
                line: number,
                body: Vec::new(),
            });
            continue;
        }

        match current.as_mut() {
            Some(section) => section.body.push(SourceLine::new(number, text)),
            None if text.trim().is_empty() => {}
            None => return Err(SongError::UntaggedContent { line: number }),
        }
    }

    if let Some(section) = current {
        sections.push(section);
    }

    for section in &sections {
        check_pairs(section)?;
    }

    debug!(
        "Found {} section{}",
        sections.len(),
        if sections.len() == 1 { "" } else { "s" }
    );

    Ok(Song { sections })
}

/// Return the trimmed line if it has the shape of a tag, `[...]`.
fn tag_line(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('[') && trimmed.ends_with(']') {
        Some(trimmed)
    } else {
        None
    }
}

/// Decide the kind of a bracketed tag such as `[Pre-Chorus]` or `[Outro*]`.
pub fn classify_tag(raw: &str, line: usize) -> Result<Tag, SongError> {
    let malformed = || SongError::MalformedTag {
        line,
        tag: raw.to_string(),
    };

    let inner = raw
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(malformed)?;

    if inner.eq_ignore_ascii_case("info") {
        return Ok(Tag {
            name: inner.to_string(),
            kind: SectionKind::Info,
        });
    }

    let (name, kind) = if let Some(name) = inner.strip_suffix('*') {
        (name, SectionKind::ChordsOnly)
    } else if let Some(name) = inner.strip_suffix('&') {
        (name, SectionKind::LyricsOnly)
    } else {
        (inner, SectionKind::ChordsAndLyrics)
    };

    if name.is_empty() || !name.chars().all(is_name_char) {
        return Err(malformed());
    }

    Ok(Tag {
        name: name.to_string(),
        kind,
    })
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Chord and lyric lines must come in pairs.
fn check_pairs(section: &Section) -> Result<(), SongError> {
    if section.tag.kind != SectionKind::ChordsAndLyrics {
        return Ok(());
    }
    let count = section.content_lines().count();
    if count % 2 != 0 {
        return Err(SongError::StructuralMismatch {
            tag: section.tag.name.clone(),
            line: section.line,
            count,
        });
    }
    Ok(())
}
