pub mod ast;
pub mod batch;
pub mod config;
pub mod error;
pub mod info;
pub mod inject;
pub mod latex;
pub mod parser;
pub mod scanner;
pub mod strumming;
pub mod vocabulary;

pub use ast::*;
pub use config::Options;
pub use error::*;
pub use latex::{to_latex, to_latex_plain};
pub use parser::parse;
pub use vocabulary::ChordVocabulary;

/// Convert a tagged song document to LaTeX.
/// This is the main entry point for the library.
pub fn compile(source: &str, options: &Options) -> Result<String, SongError> {
    let song = parse(source)?;
    to_latex(&song, options)
}

/// Convert an untagged document of alternating chord and lyric lines.
pub fn compile_plain(source: &str) -> Result<String, SongError> {
    to_latex_plain(source)
}
