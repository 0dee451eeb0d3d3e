use tracing::debug;

use crate::ast::*;
use crate::config::Options;
use crate::error::SongError;
use crate::info::{parse_song_info, render_song_info};
use crate::inject::{inject_line, inline_chord_line};
use crate::scanner::chord_positions;
use crate::vocabulary::ChordVocabulary;

/// Section name reported in errors for untagged documents.
const PLAIN_TAG: &str = "(plain)";

/// Convert a Song to LaTeX songbook markup.
///
/// The chord vocabulary is collected over the whole song first so the
/// `\chordlist` under the header lists chords from later sections too.
pub fn to_latex(song: &Song, options: &Options) -> Result<String, SongError> {
    let vocabulary = ChordVocabulary::from_song(song);
    debug!("{} distinct chords", vocabulary.len());

    let mut tex = String::new();

    for section in &song.sections {
        match section.tag.kind {
            SectionKind::Info => {
                let info = parse_song_info(&section.body);
                tex.push_str(&render_song_info(&info, options));
                tex.push_str("\n\\bigskip\n");
                tex.push_str(&format!("\n\\chordlist{{{}}}\\\\\n", vocabulary.render()));
            }
            SectionKind::ChordsOnly => {
                tex.push_str(&heading(&section.tag, options));
                tex.push_str(&format!(
                    "{{\\sffamily {}}}\n\\\\\n",
                    inline_chord_line(&section.text())
                ));
            }
            SectionKind::ChordsAndLyrics => {
                let body = chords_and_lyrics(section)?;
                tex.push_str(&heading(&section.tag, options));
                tex.push_str(&format!("{{\\sffamily {}}}\n", body));
            }
            SectionKind::LyricsOnly => {
                tex.push_str(&heading(&section.tag, options));
                tex.push_str(&format!("{{\\sffamily {}}}\n", lyrics_only(section)));
            }
        }
    }

    Ok(tex)
}

/// Section heading; compact layout keeps the content on the same line.
fn heading(tag: &Tag, options: &Options) -> String {
    if options.compact {
        format!("\n\\textbf{{{}}}:~", tag.heading())
    } else {
        format!("\n\\textbf{{{}}}:\\\\[1ex]\n", tag.heading())
    }
}

fn chords_and_lyrics(section: &Section) -> Result<String, SongError> {
    let lines: Vec<&SourceLine> = section.content_lines().collect();
    let mut parsed = String::new();

    for pair in lines.chunks_exact(2) {
        let (chords, lyric) = (pair[0], pair[1]);
        let placed = chord_positions(&chords.text, &section.tag.name, chords.number)?;
        parsed.push_str(&inject_line(&lyric.text, &placed));
        parsed.push_str("\\\\\n");
    }

    Ok(parsed.replace(' ', "~"))
}

fn lyrics_only(section: &Section) -> String {
    let lines: Vec<&str> = section.content_lines().map(|l| l.text.as_str()).collect();
    let mut parsed = lines.join("\\\\\n");
    parsed.push_str("\\\\\n");
    parsed.replace(' ', "~")
}

/// Inject an untagged document of alternating chord and lyric lines, one
/// output line per pair.
pub fn to_latex_plain(source: &str) -> Result<String, SongError> {
    let lines: Vec<SourceLine> = source
        .strip_prefix('\u{feff}')
        .unwrap_or(source)
        .lines()
        .enumerate()
        .map(|(i, text)| SourceLine::new(i + 1, text))
        .filter(|line| !line.is_blank())
        .collect();

    if lines.len() % 2 != 0 {
        return Err(SongError::StructuralMismatch {
            tag: PLAIN_TAG.to_string(),
            line: 1,
            count: lines.len(),
        });
    }

    let mut tex = String::new();
    for pair in lines.chunks_exact(2) {
        let placed = chord_positions(&pair[0].text, PLAIN_TAG, pair[0].number)?;
        tex.push_str(&inject_line(&pair[1].text, &placed));
        tex.push_str("\\\\\n");
    }
    Ok(tex)
}
