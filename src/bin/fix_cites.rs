//! fix_cites - repair escaped `\cite{}` macros in a LaTeX file, in place.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use citation_fixups::cli::{self, AppError};
use citation_fixups::{count_escaped_cites, fix_cites};

/// Rewrite `\textbackslash cite{key}` and `\textbackslash\cite{key}` into `\cite{key}`
#[derive(Parser)]
#[command(name = "fix_cites")]
#[command(version)]
#[command(after_help = "\
The file is overwritten in place; no backup is made.

Example:
  fix_cites build/paper.tex")]
struct Cli {
    /// LaTeX file to rewrite
    path: PathBuf,
}

fn main() {
    cli::exit_on_error(run());
}

fn run() -> Result<(), AppError> {
    let args: Cli = cli::parse_args()?;
    cli::init_logging();

    let text = cli::read_file(&args.path)?;
    let rewrites = count_escaped_cites(&text);
    let fixed = fix_cites(&text);
    cli::write_file(&args.path, &fixed)?;

    info!(path = %args.path.display(), rewrites, "fixed escaped citations");
    Ok(())
}
