use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use songtex::batch::{convert_all, discover_songs};
use songtex::Options;

#[derive(Parser)]
#[command(name = "songtex")]
#[command(about = "Convert plain-text chord sheets into LaTeX songbook markup")]
struct Args {
    /// Song file, or directory of *.txt songs
    #[arg(default_value = "songs_txt")]
    input: PathBuf,

    /// Directory the .tex files are written to
    #[arg(short, long, default_value = "songs_tex")]
    output: PathBuf,

    /// YAML file with display options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show the capo position in the song header
    #[arg(long)]
    capo: bool,

    /// Show the song note in the song header
    #[arg(long)]
    note: bool,

    /// Show strumming patterns in the song header
    #[arg(long)]
    strumming: bool,

    /// Keep section headings on the same line as their content
    #[arg(long)]
    compact: bool,

    /// Read untagged alternating chord/lyric lines and print to stdout
    #[arg(long)]
    plain: bool,

    /// Log debugging detail
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn options(&self) -> Result<Options> {
        let flags = Options {
            capo: self.capo,
            note: self.note,
            strumming: self.strumming,
            compact: self.compact,
        };
        let file = match &self.config {
            Some(path) => Options::load(path)?,
            None => Options::default(),
        };
        Ok(file.merge(flags))
    }
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = if args.plain { run_plain(&args.input) } else { run(&args) };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let options = args.options()?;

    let inputs = if args.input.is_dir() {
        discover_songs(&args.input)?
    } else {
        vec![args.input.clone()]
    };
    if inputs.is_empty() {
        warn!("No songs found in {}", args.input.display());
    }

    let report = convert_all(&inputs, &args.output, &options);
    let failed = report.iter().filter(|(_, outcome)| outcome.is_err()).count();
    info!("Converted {} of {} songs", report.len() - failed, report.len());

    if failed > 0 {
        anyhow::bail!("{} song{} failed", failed, if failed == 1 { "" } else { "s" });
    }
    Ok(())
}

fn run_plain(input: &Path) -> Result<()> {
    let source =
        fs::read_to_string(input).with_context(|| format!("Failed to read song: {:?}", input))?;
    let tex = songtex::compile_plain(&source)
        .with_context(|| format!("Failed to convert song: {:?}", input))?;
    print!("{}", tex);
    Ok(())
}
