//! Chord injection into lyric lines, and inline chord lines.

use std::borrow::Cow;
use tracing::debug;

use crate::ast::{is_annotation, PlacedChord};

/// Width, in `N` glyphs, of the invisible filler placed before a chord that
/// hangs past the end of its lyric line.
const HANGING_FILLER: usize = 4;

/// Extra filler when the hanging chord directly follows real lyric text.
const HANGING_FILLER_AFTER_TEXT: usize = 2;

/// Separator between inline chords (two non-breaking spaces).
const INLINE_SEPARATOR: &str = "~~";

/// Splice `\chord{..}` markers into `line` at the columns in `chords`.
///
/// Annotations such as `(x2)` are copied verbatim and do not move the
/// cursor. A chord whose column lies past the end of the lyric gets a
/// `\phantom{N..}` filler in front of it so consecutive hanging chords
/// stay apart.
pub fn inject_line(line: &str, chords: &[PlacedChord]) -> String {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();
    let mut injected = String::with_capacity(line.len() + chords.len() * 8);
    let mut last = 0;

    for placed in chords {
        if is_annotation(&placed.chord) {
            injected.push_str(&placed.chord);
            continue;
        }

        if len >= placed.column {
            push_columns(&mut injected, &chars, last, placed.column);
        } else {
            let width = if last < len {
                push_columns(&mut injected, &chars, last, placed.column);
                (HANGING_FILLER + HANGING_FILLER_AFTER_TEXT).saturating_sub(len - last)
            } else {
                HANGING_FILLER
            };
            debug!(chord = %placed.chord, column = placed.column, width, "hanging chord");
            injected.push_str("\\phantom{");
            injected.extend(std::iter::repeat('N').take(width));
            injected.push('}');
        }

        injected.push_str("\\chord{");
        injected.push_str(&placed.chord);
        injected.push('}');
        last = placed.column;
    }

    push_columns(&mut injected, &chars, last, len);
    escape_tex(&injected).into_owned()
}

/// Render a chords-only line as `\inlinechord{..}` markers joined by `~~`.
pub fn inline_chord_line(line: &str) -> String {
    let chords: Vec<Cow<'_, str>> = line
        .split_whitespace()
        .map(|token| {
            if is_annotation(token) {
                Cow::Borrowed(token)
            } else {
                Cow::Owned(format!("\\inlinechord{{{}}}", token))
            }
        })
        .collect();
    escape_tex(&chords.join(INLINE_SEPARATOR)).into_owned()
}

/// Minimal TeX escaping: `#` becomes `\#`.
pub fn escape_tex(content: &str) -> Cow<'_, str> {
    if content.contains('#') {
        Cow::Owned(content.replace('#', "\\#"))
    } else {
        Cow::Borrowed(content)
    }
}

/// Append the characters in columns `from..to`, clamped to the line.
fn push_columns(out: &mut String, chars: &[char], from: usize, to: usize) {
    let to = to.min(chars.len());
    if from < to {
        out.extend(&chars[from..to]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::chord_positions;

    fn inject(chord_line: &str, lyric: &str) -> String {
        inject_line(lyric, &chord_positions(chord_line, "Verse", 1).unwrap())
    }

    /// Remove markers and fillers, keeping annotations out as well.
    fn strip_markers(injected: &str) -> String {
        let mut out = String::new();
        let mut rest = injected;
        while let Some(start) = rest.find('\\') {
            out.push_str(&rest[..start]);
            let after = &rest[start..];
            if after.starts_with("\\chord{") || after.starts_with("\\phantom{") {
                let end = after.find('}').unwrap();
                rest = &after[end + 1..];
            } else {
                out.push('\\');
                rest = &after[1..];
            }
        }
        out.push_str(rest);
        out
    }

    #[test]
    fn test_chords_over_lyric() {
        assert_eq!(
            inject("C       G   D", "hello world today"),
            "\\chord{C}hello wo\\chord{G}rld \\chord{D}today"
        );
    }

    #[test]
    fn test_chord_at_line_end_needs_no_filler() {
        assert_eq!(inject("     G", "hello"), "hello\\chord{G}");
    }

    #[test]
    fn test_hanging_chord_after_text() {
        assert_eq!(
            inject("C       G", "hello"),
            "\\chord{C}hello\\phantom{N}\\chord{G}"
        );
    }

    #[test]
    fn test_consecutive_hanging_chords() {
        assert_eq!(
            inject("C   G   D", "hi"),
            "\\chord{C}hi\\phantom{NNNN}\\chord{G}\\phantom{NNNN}\\chord{D}"
        );
    }

    #[test]
    fn test_filler_never_negative() {
        // Nine characters of text before the hanging chord: no filler glyphs.
        assert_eq!(
            inject("C          G", "some text"),
            "\\chord{C}some text\\phantom{}\\chord{G}"
        );
    }

    #[test]
    fn test_annotation_passes_through() {
        assert_eq!(
            inject("C   (x2)", "la la la"),
            "\\chord{C}(x2)la la la"
        );
    }

    #[test]
    fn test_sharp_is_escaped() {
        assert_eq!(inject("F#", "go"), "\\chord{F\\#}go");
    }

    #[test]
    fn test_unicode_lyrics_split_on_characters() {
        assert_eq!(inject("  G", "ñandú"), "ña\\chord{G}ndú");
    }

    #[test]
    fn test_every_chord_appears_in_order() {
        let chord_line = "Am    F     C   G  Am";
        let injected = inject(chord_line, "walking down the lonely road tonight");
        let mut from = 0;
        for chord in chord_line.split_whitespace() {
            let marker = format!("\\chord{{{}}}", chord);
            let found = injected[from..].find(&marker).expect("marker missing");
            from += found + marker.len();
        }
    }

    #[test]
    fn test_stripping_markers_restores_lyric_words() {
        let lyric = "and the stars are shining bright";
        let injected = inject("D    A      Bm      G       D     A", lyric);
        let restored = strip_markers(&injected);
        let words: Vec<&str> = restored.split_whitespace().collect();
        assert_eq!(words, lyric.split_whitespace().collect::<Vec<_>>());
    }

    #[test]
    fn test_trailing_text_kept_after_hanging_chord() {
        let injected = inject("C              G", "short");
        assert!(injected.contains("short"));
        assert!(injected.ends_with("\\chord{G}"));
    }

    #[test]
    fn test_inline_chord_line() {
        assert_eq!(
            inline_chord_line("C G Am"),
            "\\inlinechord{C}~~\\inlinechord{G}~~\\inlinechord{Am}"
        );
    }

    #[test]
    fn test_inline_chord_line_annotation_and_sharp() {
        assert_eq!(
            inline_chord_line("  F#  (x4)\n C "),
            "\\inlinechord{F\\#}~~(x4)~~\\inlinechord{C}"
        );
    }

    #[test]
    fn test_escape_tex_borrows_without_sharp() {
        assert!(matches!(escape_tex("Am7"), Cow::Borrowed(_)));
        assert!(matches!(escape_tex("C#"), Cow::Owned(_)));
    }
}
