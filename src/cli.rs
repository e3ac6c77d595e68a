//! Plumbing shared by the `fix_cites` and `number_citations` binaries.
//!
//! Argument parsing policy, input/output helpers, and the run-level error
//! type with its exit codes.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Run-level failures, each mapped to a distinct exit code.
#[derive(Error, Debug)]
pub enum AppError {
    /// Exit 1: wrong number of arguments. Holds clap's rendered message,
    /// which already carries the usage line.
    #[error("{0}")]
    Usage(String),

    /// Exit 10: input file or stdin unreadable.
    #[error("{origin}: {source}\n  hint: verify the file path is correct and the file is UTF-8 text")]
    InputFile { origin: String, source: io::Error },

    /// Exit 15: cannot write the output file or stdout.
    #[error("{target}: {source}\n  hint: check that the file exists and is writable")]
    OutputFile { target: String, source: io::Error },
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(_) => 1,
            AppError::InputFile { .. } => 10,
            AppError::OutputFile { .. } => 15,
        }
    }
}

/// Parses the command line.
///
/// `--help` and `--version` print and exit 0 as usual. Every other parse
/// failure becomes [`AppError::Usage`] instead of clap's default exit 2.
pub fn parse_args<P: Parser>() -> Result<P, AppError> {
    P::try_parse().or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => Err(AppError::Usage(e.render().to_string())),
    })
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the default
/// `warn` level, so successful runs stay silent.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .without_time()
        .init();
}

/// True when `path` names standard input (`-`).
pub fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

/// Reads the whole input: stdin for `None` or `-`, the named file otherwise.
pub fn read_input(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) if !is_stdin(path) => read_file(path),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| AppError::InputFile {
                    origin: "failed to read from stdin".to_string(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

pub fn read_file(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|source| AppError::InputFile {
        origin: format!("'{}'", path.display()),
        source,
    })
}

/// Overwrites `path` with `contents`.
pub fn write_file(path: &Path, contents: &str) -> Result<(), AppError> {
    fs::write(path, contents).map_err(|source| AppError::OutputFile {
        target: format!("'{}'", path.display()),
        source,
    })
}

/// Writes `contents` to stdout and flushes.
pub fn write_stdout(contents: &str) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(contents.as_bytes())
        .and_then(|_| handle.flush())
        .map_err(|source| AppError::OutputFile {
            target: "stdout".to_string(),
            source,
        })
}

/// Reports a failed run on stderr and exits with its code.
pub fn exit_on_error(result: Result<(), AppError>) {
    if let Err(e) = result {
        match &e {
            AppError::Usage(_) => eprint!("{}", e),
            _ => eprintln!("Error: {}", e),
        }
        process::exit(e.exit_code());
    }
}
