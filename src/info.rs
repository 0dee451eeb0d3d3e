//! # Song Info Header
//!
//! Reads the `[Info]` section and renders the song header.
//!
//! ## Recognised fields
//! ```text
//! Title: Wonderwall
//! By: Oasis
//! Capo: 2
//! Strumming: d-du-udu (verse)
//! Strumming: dd-u-udu
//! Note: Let the last chord ring.
//! ```
//!
//! Every field is optional; `Strumming:` may appear any number of times and
//! keeps its order. Lines matching none of the fields are ignored.
//!
//! ## Rendering
//! Title and author are always shown. Capo, strumming and note are shown only
//! when present in the song *and* switched on in [`Options`]. Each shown
//! field ends with a `\\[1ex]` spacer; the spacer after the last one is
//! dropped so nothing dangles before the next block.

use tracing::debug;

use crate::ast::{SongInfo, SourceLine, StrummingEntry};
use crate::config::Options;
use crate::strumming::{is_pattern_char, strumming_pattern};

/// Collect header fields from the lines of an `[Info]` section.
pub fn parse_song_info(lines: &[SourceLine]) -> SongInfo {
    let mut info = SongInfo::default();

    for line in lines {
        let text = line.text.as_str();
        if let Some(title) = field(text, "Title:") {
            info.title = title.to_string();
        } else if let Some(by) = field(text, "By:") {
            info.by = by.to_string();
        } else if let Some(capo) = field(text, "Capo:") {
            info.capo = non_empty(capo);
        } else if let Some(strum) = field(text, "Strumming:") {
            if strum.is_empty() {
                debug!(line = line.number, "ignoring empty strumming line");
            } else {
                info.strumming.push(parse_strumming(strum));
            }
        } else if let Some(note) = field(text, "Note:") {
            info.note = non_empty(note);
        } else if !line.is_blank() {
            debug!(line = line.number, "ignoring unrecognised info line");
        }
    }

    info
}

fn field<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.strip_prefix(prefix).map(str::trim)
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Split `d-du-udu (chorus)` into the formatted pattern and its note.
fn parse_strumming(value: &str) -> StrummingEntry {
    let end = value
        .find(|c: char| !is_pattern_char(c))
        .unwrap_or(value.len());
    let (pattern, rest) = value.split_at(end);

    let note = if rest.starts_with('(') {
        rest.rfind(')')
            .filter(|&close| close > 0)
            .map(|close| rest[..=close].to_string())
    } else {
        None
    };

    StrummingEntry {
        note,
        pattern: strumming_pattern(pattern),
    }
}

/// Render the song header.
pub fn render_song_info(info: &SongInfo, options: &Options) -> String {
    let mut formatted = format!("\\addcontentsline{{toc}}{{section}}{{{}}}\n", info.title);
    formatted.push_str(&format!(
        "{{\\Large\\bfseries {}}}~{{\\large\\bfseries\\itshape ({})}}",
        info.title, info.by
    ));

    if options.shows_details() {
        formatted.push_str("\\\\[3ex]\n");
    }

    if options.capo {
        if let Some(capo) = &info.capo {
            formatted.push_str(&format!("\\textbf{{Capo}}: {}\\\\[1ex]\n", capo));
        }
    }

    if options.strumming {
        for entry in &info.strumming {
            let note = entry
                .note
                .as_ref()
                .map(|n| format!(" {}", n))
                .unwrap_or_default();
            formatted.push_str(&format!(
                "\\textbf{{Strumming}}{}:\\\\[1ex]\n{}\\\\[1ex]\n",
                note, entry.pattern
            ));
        }
    }

    if options.note {
        if let Some(note) = &info.note {
            formatted.push_str(&format!("\\textbf{{Note}}: {}\\\\[1ex]\n", note));
        }
    }

    trim_trailing_spacer(&mut formatted);
    formatted
}

/// Replace a final `\\[Nex]\n` spacer with a paragraph break.
fn trim_trailing_spacer(text: &mut String) {
    const SPACER_LEN: usize = "\\\\[1ex]\n".len();

    let Some(start) = text.len().checked_sub(SPACER_LEN) else {
        return;
    };
    if !text.is_char_boundary(start) {
        return;
    }

    let tail = text[start..].as_bytes();
    let is_spacer = tail.starts_with(b"\\\\[")
        && tail[3].is_ascii_digit()
        && tail.ends_with(b"ex]\n");
    if is_spacer {
        text.truncate(start);
        text.push_str("\n\n");
    }
}
