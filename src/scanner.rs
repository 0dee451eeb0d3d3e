//! Chord-position scanner.
//!
//! Splits a chord line on whitespace and records where each token starts.
//! The search for every token resumes where the previous one ended, so a
//! chord written twice on one line resolves to its second occurrence.

use crate::ast::PlacedChord;
use crate::error::SongError;

/// Return each chord token of `line` with its starting character column.
///
/// `tag` and `line_number` are only used for error reporting.
pub fn chord_positions(
    line: &str,
    tag: &str,
    line_number: usize,
) -> Result<Vec<PlacedChord>, SongError> {
    let mut placed = Vec::new();
    // Byte cursor into `line`, plus the character column it corresponds to.
    let mut cursor = 0;
    let mut column = 0;

    for token in line.split_whitespace() {
        let offset = line[cursor..]
            .find(token)
            .ok_or_else(|| SongError::ChordAlignment {
                tag: tag.to_string(),
                line: line_number,
                chord: token.to_string(),
                content: line.to_string(),
            })?;

        let start = cursor + offset;
        column += line[cursor..start].chars().count();
        placed.push(PlacedChord::new(token, column));

        cursor = start + token.len();
        column += token.chars().count();
    }

    Ok(placed)
}
