//! ansicat CLI - feed an ANSI stream through a virtual terminal and
//! write the rendered final screen back out.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use ansicat::{Error as TerminalError, Terminal};

/// Version string with git hash and build date (dev builds) or a clean
/// version (release builds).
fn version_string() -> &'static str {
    static VERSION: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    VERSION.get_or_init(|| {
        let version = env!("CARGO_PKG_VERSION");
        let date = env!("ANSICAT_BUILD_DATE");
        match option_env!("VERGEN_GIT_SHA") {
            Some(sha) if sha != "unknown" => {
                format!("{} ({} {})", version, &sha[..sha.len().min(7)], date)
            }
            _ => format!("{} ({})", version, date),
        }
    })
}

#[derive(Parser)]
#[command(
    name = "ansicat",
    about = "Render an ANSI/ECMA-48 byte stream (ANSI art, console dumps) to its final screen state",
    version = version_string()
)]
struct Cli {
    /// Input file (defaults to standard input)
    file: Option<PathBuf>,

    /// Write the rendered screen to FILE instead of standard output
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Skip unrecognized escape commands instead of aborting
    #[arg(long)]
    lenient: bool,
}

/// Read the whole input stream (file argument or standard input).
fn read_input(cli: &Cli) -> Result<Vec<u8>> {
    match &cli.file {
        Some(path) => fs::read(path).with_context(|| format!("Failed to read {}", path.display())),
        None => {
            if atty::is(atty::Stream::Stdin) {
                bail!("No input file given and standard input is a terminal.\nPipe a stream in or pass a file: ansicat FILE");
            }
            let mut bytes = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .context("Failed to read standard input")?;
            Ok(bytes)
        }
    }
}

/// Feed the stream into the terminal under the selected error policy.
fn feed(term: &mut Terminal, input: &[u8], lenient: bool) -> Result<()> {
    for &byte in input {
        match term.feed_byte(byte) {
            Ok(()) => {}
            Err(err @ TerminalError::UnrecognizedCommand { .. }) if lenient => {
                tracing::warn!("skipping escape sequence: {err}");
            }
            Err(err) => return Err(err).context("Invalid ANSI stream"),
        }
    }
    Ok(())
}

/// Render the terminal to the output file or standard output.
fn write_output(term: &Terminal, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            term.render_to(&mut writer)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            term.render_to(&mut writer)
                .context("Failed to write standard output")?;
            writer.flush()?;
        }
    }
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();

    let input = read_input(&cli)?;
    let mut term = Terminal::new();
    feed(&mut term, &input, cli.lenient)?;
    write_output(&term, cli.output.as_ref())
}
