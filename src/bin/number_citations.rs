//! number_citations - turn AsciiDoc `<<key>>` cross references into numbered
//! `[n]` citations and renumber the `== References` list to match.

use std::path::PathBuf;

use clap::Parser;

use citation_fixups::cli::{self, AppError};
use citation_fixups::number_citations;

/// Number AsciiDoc citations in reference-list order
#[derive(Parser)]
#[command(name = "number_citations")]
#[command(version)]
#[command(after_help = "\
The transformed document is written to stdout; the input is never modified.

Examples:
  number_citations paper.adoc > paper.numbered.adoc
  cat paper.adoc | number_citations - > paper.numbered.adoc

Citation syntax: <<key>> or <<key1>>, <<key2>> in the body,
* [[key]] Author, Title, ... under '== References'")]
struct Cli {
    /// Input AsciiDoc file (omit or use '-' for stdin)
    input: Option<PathBuf>,
}

fn main() {
    cli::exit_on_error(run());
}

fn run() -> Result<(), AppError> {
    let args: Cli = cli::parse_args()?;
    cli::init_logging();

    let text = cli::read_input(args.input.as_deref())?;
    cli::write_stdout(&number_citations(&text))
}
