//! Chord vocabulary: the set of distinct chords a song uses.

use std::collections::BTreeSet;

use crate::ast::{SectionKind, Song};

/// Distinct chords of a song, kept sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChordVocabulary {
    chords: BTreeSet<String>,
}

impl ChordVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gather chords from every chord-bearing line of `song`: the whole body
    /// of chords-only sections and every other content line (starting with
    /// the first) of chords-and-lyrics sections.
    pub fn from_song(song: &Song) -> Self {
        let mut vocabulary = Self::new();
        for section in &song.sections {
            match section.tag.kind {
                SectionKind::ChordsOnly => {
                    for line in &section.body {
                        vocabulary.add_line(&line.text);
                    }
                }
                SectionKind::ChordsAndLyrics => {
                    for line in section.content_lines().step_by(2) {
                        vocabulary.add_line(&line.text);
                    }
                }
                SectionKind::LyricsOnly | SectionKind::Info => {}
            }
        }
        vocabulary
    }

    /// Normalize the chords of one chord line and add them.
    pub fn add_line(&mut self, text: &str) {
        self.chords.extend(normalize_chords(text));
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn contains(&self, chord: &str) -> bool {
        self.chords.contains(chord)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.chords.iter().map(String::as_str)
    }

    /// Comma-separated list for `\chordlist{..}`. `#` cannot appear inside
    /// that macro's argument, so it is written as `+`.
    pub fn render(&self) -> String {
        let chords: Vec<String> = self.chords.iter().map(|c| c.replace('#', "+")).collect();
        chords.join(", ")
    }
}

fn is_chord_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '/' | '#' | '(' | ')') || c.is_whitespace()
}

/// Split a chord line into normalized chord names.
///
/// Characters outside `A-Z a-z 0-9 / # ( )` separate chords; parenthetical
/// annotations are dropped entirely.
pub fn normalize_chords(text: &str) -> Vec<String> {
    let cleaned: Vec<char> = text
        .chars()
        .map(|c| if is_chord_char(c) { c } else { ' ' })
        .collect();

    let mut stripped = String::with_capacity(cleaned.len());
    let mut i = 0;
    while i < cleaned.len() {
        if cleaned[i] == '(' {
            if let Some(close) = cleaned[i + 1..].iter().position(|&c| c == ')') {
                stripped.push(' ');
                i += close + 2;
                continue;
            }
        }
        stripped.push(cleaned[i]);
        i += 1;
    }

    stripped.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_normalize_plain_chords() {
        assert_eq!(normalize_chords("C   G  Am7"), vec!["C", "G", "Am7"]);
    }

    #[test]
    fn test_normalize_drops_annotations() {
        assert_eq!(normalize_chords("C (x2) G"), vec!["C", "G"]);
        assert_eq!(normalize_chords("C(let ring) D"), vec!["C", "D"]);
    }

    #[test]
    fn test_normalize_splits_on_disallowed() {
        assert_eq!(normalize_chords("C*  D-E  F#m/C#"), vec!["C", "D", "E", "F#m/C#"]);
    }

    #[test]
    fn test_normalize_keeps_unclosed_parenthesis() {
        assert_eq!(normalize_chords("(Am G"), vec!["(Am", "G"]);
    }

    #[test]
    fn test_vocabulary_deduplicates_and_sorts() {
        let mut vocabulary = ChordVocabulary::new();
        vocabulary.add_line("G C G D");
        vocabulary.add_line("Em C");
        let chords: Vec<&str> = vocabulary.iter().collect();
        assert_eq!(chords, vec!["C", "D", "Em", "G"]);
    }

    #[test]
    fn test_render_replaces_sharp() {
        let mut vocabulary = ChordVocabulary::new();
        vocabulary.add_line("F#m A");
        assert_eq!(vocabulary.render(), "A, F+m");
    }

    #[test]
    fn test_normalizing_is_idempotent() {
        let mut first = ChordVocabulary::new();
        first.add_line("C#m7 (x2) G/B  E* Asus4 G/B");
        let mut second = ChordVocabulary::new();
        for chord in first.iter() {
            second.add_line(chord);
        }
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_song_uses_chord_lines_only() {
        let song = parse(
            "[Info]\nTitle: X\n[Intro*]\nC G Am\n[Verse]\nD     A\nhello world\n\nE\nBm lyrics here\n[Chorus&]\nF lyrics\n",
        )
        .unwrap();
        let vocabulary = ChordVocabulary::from_song(&song);
        let chords: Vec<&str> = vocabulary.iter().collect();
        assert_eq!(chords, vec!["A", "Am", "C", "D", "E", "G"]);
        assert!(!vocabulary.contains("F"));
        assert!(!vocabulary.contains("Bm"));
    }
}
