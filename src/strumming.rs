//! Strumming pattern tables.
//!
//! A pattern is written as bars separated by whitespace, one character per
//! eighth-note slot:
//!
//! | Code | Stroke          |
//! |------|-----------------|
//! | `d`  | down            |
//! | `u`  | up              |
//! | `x`  | muted           |
//! | `y`  | crossed down    |
//! | `z`  | crossed up      |
//! | else | nothing (pause) |
//!
//! Each bar becomes a two-row `tabular`: the stroke glyphs, then the count
//! `1 - 2 - ...` where the dashes are the "and" slots.

/// Characters a `Strumming:` pattern may consist of.
pub fn is_pattern_char(c: char) -> bool {
    matches!(c, 'd' | 'u' | 'x' | 'y' | 'z' | '-') || c.is_whitespace()
}

fn glyph(code: char) -> &'static str {
    match code {
        'd' => "$\\downarrow$",
        'u' => "$\\uparrow$",
        'x' => "$\\times$",
        'y' => "$\\downarrowcrossed$",
        'z' => "$\\uparrowcrossed$",
        _ => "",
    }
}

/// Format every bar of `pattern` as a LaTeX table, one table per bar,
/// joined by newlines.
pub fn strumming_pattern(pattern: &str) -> String {
    let mut formatted = Vec::new();

    for bar in pattern.split_whitespace() {
        let codes: Vec<char> = bar.chars().collect();

        formatted.push(format!("\\begin{{tabular}}{{@{{}} {} @{{}}}}", column_spec(codes.len())));

        let glyphs: Vec<&str> = codes.iter().map(|&c| glyph(c)).collect();
        formatted.push(format!("{}\\\\", glyphs.join(" & ")));

        let counts: Vec<String> = (0..codes.len())
            .map(|i| {
                if i % 2 == 0 {
                    (i / 2 + 1).to_string()
                } else {
                    "-".to_string()
                }
            })
            .collect();
        formatted.push(format!("{}\\\\", counts.join(" & ")));

        formatted.push("\\end{tabular}".to_string());
    }

    formatted.join("\n")
}

/// Column spec for `columns` slots: each beat is a `c@{}c` pair with no
/// inner padding; an odd trailing slot gets a single `c`.
fn column_spec(columns: usize) -> String {
    let mut groups = vec!["c@{}c"; columns / 2];
    if columns % 2 == 1 {
        groups.push("c");
    }
    groups.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_bar() {
        let table = strumming_pattern("du-x");
        let rows: Vec<&str> = table.lines().collect();
        assert_eq!(
            rows,
            vec![
                "\\begin{tabular}{@{} c@{}c c@{}c @{}}",
                "$\\downarrow$ & $\\uparrow$ &  & $\\times$\\\\",
                "1 & - & 2 & -\\\\",
                "\\end{tabular}",
            ]
        );
    }

    #[test]
    fn test_two_bars() {
        let table = strumming_pattern("d-du-udu dduu");
        assert_eq!(table.matches("\\begin{tabular}").count(), 2);
        assert_eq!(table.matches("\\end{tabular}").count(), 2);
        assert!(table.contains("1 & - & 2 & - & 3 & - & 4 & -\\\\"));
        assert!(table.contains("1 & - & 2 & -\\\\"));
    }

    #[test]
    fn test_crossed_strokes() {
        let table = strumming_pattern("yz");
        assert!(table.contains("$\\downarrowcrossed$ & $\\uparrowcrossed$\\\\"));
    }

    #[test]
    fn test_odd_bar_keeps_every_slot() {
        let table = strumming_pattern("dud");
        assert!(table.starts_with("\\begin{tabular}{@{} c@{}c c @{}}"));
        assert!(table.contains("1 & - & 2\\\\"));
    }

    #[test]
    fn test_empty_pattern() {
        assert_eq!(strumming_pattern("   "), "");
    }

    #[test]
    fn test_pattern_chars() {
        assert!("du-x yz".chars().all(is_pattern_char));
        assert!(!is_pattern_char('('));
        assert!(!is_pattern_char('D'));
    }
}
