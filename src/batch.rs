//! Reading song files and writing their LaTeX counterparts.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::config::Options;

/// Suffix appended to the input file name to form the output name.
pub const OUTPUT_SUFFIX: &str = ".tex";

/// Every `*.txt` file directly inside `dir`, sorted by name.
pub fn discover_songs<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read song directory: {:?}", dir))?;

    let mut songs = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list song directory: {:?}", dir))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            songs.push(path);
        }
    }
    songs.sort();
    Ok(songs)
}

/// `out_dir/<input file name>.tex`, e.g. `songs_tex/wonderwall.txt.tex`.
pub fn output_path(input: &Path, out_dir: &Path) -> PathBuf {
    let mut name = input
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(OUTPUT_SUFFIX);
    out_dir.join(name)
}

/// Convert one song file and write the result into `out_dir`, creating the
/// directory if needed. Returns the path written.
pub fn convert_file(input: &Path, out_dir: &Path, options: &Options) -> Result<PathBuf> {
    info!("Preprocessing song {}", input.display());

    let source = fs::read_to_string(input)
        .with_context(|| format!("Failed to read song: {:?}", input))?;
    let tex = crate::compile(&source, options)
        .with_context(|| format!("Failed to convert song: {:?}", input))?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", out_dir))?;
    let target = output_path(input, out_dir);
    fs::write(&target, tex).with_context(|| format!("Failed to write: {:?}", target))?;

    Ok(target)
}

/// Convert every input, continuing past failures. Each input is paired with
/// its outcome, in input order.
pub fn convert_all(
    inputs: &[PathBuf],
    out_dir: &Path,
    options: &Options,
) -> Vec<(PathBuf, Result<PathBuf>)> {
    inputs
        .iter()
        .map(|input| {
            let outcome = convert_file(input, out_dir, options);
            if let Err(e) = &outcome {
                error!("{:#}", e);
            }
            (input.clone(), outcome)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SONG: &str = "[Info]\nTitle: Test\nBy: Me\n[Verse]\nC   G\nla la la\n";

    #[test]
    fn test_output_path_appends_suffix() {
        assert_eq!(
            output_path(Path::new("songs_txt/wonderwall.txt"), Path::new("songs_tex")),
            PathBuf::from("songs_tex/wonderwall.txt.tex")
        );
    }

    #[test]
    fn test_discover_songs_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), SONG).unwrap();
        fs::write(dir.path().join("a.txt"), SONG).unwrap();
        fs::write(dir.path().join("notes.md"), "ignore").unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let songs = discover_songs(dir.path()).unwrap();
        let names: Vec<_> = songs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_discover_songs_missing_directory() {
        assert!(discover_songs("/nonexistent/songs_txt").is_err());
    }

    #[test]
    fn test_convert_file_creates_output_directory() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("song.txt");
        fs::write(&input, SONG).unwrap();
        let out_dir = dir.path().join("out").join("tex");

        let written = convert_file(&input, &out_dir, &Options::default()).unwrap();

        assert_eq!(written, out_dir.join("song.txt.tex"));
        let tex = fs::read_to_string(written).unwrap();
        assert!(tex.contains("\\chordlist{C, G}"));
    }

    #[test]
    fn test_convert_all_continues_after_failure() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.txt");
        let good = dir.path().join("good.txt");
        fs::write(&bad, "[???]\n").unwrap();
        fs::write(&good, SONG).unwrap();
        let out_dir = dir.path().join("out");

        let report = convert_all(&[bad.clone(), good.clone()], &out_dir, &Options::default());

        assert_eq!(report.len(), 2);
        let message = format!("{:#}", report[0].1.as_ref().unwrap_err());
        assert!(message.contains("bad.txt"));
        assert!(message.contains("Malformed tag [???] at line 1"));
        assert!(report[1].1.is_ok());
        assert!(!out_dir.join("bad.txt.tex").exists());
    }
}
