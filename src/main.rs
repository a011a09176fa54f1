//! Style Mark Tool
//!
//! Marks the style of a single Python source file with Rees' method and
//! prints the raw measures, the mark for each measure and the overall mark.

use clap::Parser;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use colored::*;
use reesmark::{analyze, MarkScheme, StyleError, StyleResult};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Rees style mark for a Python source file",
    long_about = "Measures line length, comments, indentation, blank lines, embedded spaces, module length, keyword variety and identifier length, converts each into a mark and sums them into a style mark out of 100."
)]
struct Args {
    /// Python source file to mark
    path: PathBuf,

    /// Print the line and token counts behind the measures to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(err) = run_with_args(env::args_os(), &mut io::stdout()) {
        match err {
            StyleError::Usage(usage) => usage.exit(),
            other => {
                eprintln!("{}", other);
                process::exit(other.exit_code());
            }
        }
    }
}

fn run_with_args<I, T, W>(args: I, out: &mut W) -> StyleResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let args = Args::try_parse_from(args)?;
    run_cli(&args, out)
}

fn run_cli<W: Write>(args: &Args, out: &mut W) -> StyleResult<()> {
    let bytes = fs::read(&args.path).map_err(|err| StyleError::file(&args.path, err))?;
    let text = String::from_utf8_lossy(&bytes);
    let report = analyze(&text, &MarkScheme::default());

    if report.is_empty() {
        eprintln!(
            "{}: {} contains no lines",
            "Warning".red().bold(),
            args.path.display()
        );
    }
    if args.verbose {
        eprintln!("File: {}", args.path.display());
        eprint!("{}", report.render_profile());
        eprintln!();
    }

    // The report is rendered in full before anything is written.
    out.write_all(report.render().as_bytes())
        .map_err(StyleError::Output)?;
    out.flush().map_err(StyleError::Output)
}
