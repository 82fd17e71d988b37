//! Command-line entry point: classifies the lines of a `.feature` file.
//!
//! ```text
//! gherkin-i18n <file.feature> [--workspace <dir>]
//! ```
//!
//! Writes one `line<TAB>type<TAB>text` row per classified line to stdout.
//! Settings are read from `.gherkin-i18n.json` in the workspace directory
//! (the current directory by default).

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use gherkin_i18n::config::{
    SettingsError,
    SettingsManager,
};
use gherkin_i18n::syntax::classify_document;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors reported by the command line
#[derive(Error, Debug)]
enum CliError {
    /// Invalid arguments
    #[error("{0}\nusage: gherkin-i18n <file.feature> [--workspace <dir>]")]
    Usage(String),

    /// Reading the document or writing the output failed
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// File or stream involved
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Settings could not be loaded
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// The catalog could not serve the document language
    #[error(transparent)]
    Catalog(#[from] gherkin_i18n::CatalogError),
}

/// Parsed command-line arguments
#[derive(Debug)]
struct Args {
    /// Feature file to classify
    document: PathBuf,
    /// Directory holding `.gherkin-i18n.json`
    workspace: Option<PathBuf>,
}

impl Args {
    /// Parses arguments (without the program name)
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, CliError> {
        let mut document = None;
        let mut workspace = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--workspace" => {
                    let dir = args
                        .next()
                        .ok_or_else(|| CliError::Usage("--workspace needs a directory".to_string()))?;
                    workspace = Some(PathBuf::from(dir));
                }
                flag if flag.starts_with("--") => {
                    return Err(CliError::Usage(format!("unknown option '{flag}'")));
                }
                _ if document.is_some() => {
                    return Err(CliError::Usage(format!("unexpected argument '{arg}'")));
                }
                _ => document = Some(PathBuf::from(arg)),
            }
        }

        let document =
            document.ok_or_else(|| CliError::Usage("missing feature file".to_string()))?;
        Ok(Self { document, workspace })
    }
}

/// Loads settings, classifies the document and writes the rows
fn run(args: Args) -> Result<(), CliError> {
    let workspace = match args.workspace {
        Some(dir) => dir,
        None => std::env::current_dir()
            .map_err(|source| CliError::Io { path: ".".to_string(), source })?,
    };

    let mut settings = SettingsManager::new();
    settings.load_settings(&workspace)?;
    let catalog = settings.catalog();

    let document = std::fs::read_to_string(&args.document).map_err(|source| CliError::Io {
        path: args.document.display().to_string(),
        source,
    })?;
    let classified = classify_document(&catalog, &document)?;
    tracing::info!(
        language = %classified.language,
        lines = classified.lines.len(),
        "Classified {}",
        args.document.display()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in &classified.lines {
        writeln!(out, "{}\t{}\t{}", line.line_number, line.kind, line.text)
            .map_err(|source| CliError::Io { path: "stdout".to_string(), source })?;
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match Args::parse(std::env::args().skip(1)).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
