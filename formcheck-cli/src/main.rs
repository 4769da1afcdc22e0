mod args;

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use formcheck::{ConfigError, Settings, SpecSet, ValidationResult, Validator};
use formdom::{Document, Element};
use log::{LevelFilter, debug, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};
use thiserror::Error;

use args::Args;

/// Errors that stop the run before validation.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read form {}: {source}", path.display())]
    FormIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid form snapshot {}: {source}", path.display())]
    Form {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode report: {0}")]
    Report(#[from] serde_json::Error),
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let result = match std::env::var_os("FORMCHECK_LOG") {
        Some(path) => match File::create(&path) {
            Ok(file) => WriteLogger::init(LevelFilter::Debug, Config::default(), file),
            Err(e) => {
                eprintln!("Failed to create log file: {e}");
                TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
            }
        },
        None => TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto),
    };

    if let Err(e) = result {
        eprintln!("Failed to initialize logger: {e}");
    }
}

fn load_form(path: &Path) -> Result<Document, CliError> {
    let json = fs::read_to_string(path).map_err(|source| CliError::FormIo {
        path: path.to_path_buf(),
        source,
    })?;
    let root: Element = serde_json::from_str(&json).map_err(|source| CliError::Form {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Document::new(root))
}

fn run(args: &Args) -> Result<ValidationResult, CliError> {
    let settings = match &args.settings {
        Some(path) => Settings::from_json_file(path)?,
        None => Settings::default(),
    };
    let specs = SpecSet::from_json_file(&args.specs)?;
    let form = load_form(&args.form)?;
    debug!(
        "validating {} specs against {} elements with {} patterns",
        specs.len(),
        form.len(),
        settings.len()
    );

    Ok(Validator::new(settings).validate(&form, specs))
}

fn report(args: &Args, result: &ValidationResult) -> Result<(), CliError> {
    match result {
        ValidationResult::Valid(specs) => {
            if args.json {
                println!("[]");
            } else {
                println!("ok: {} specs passed", specs.len());
            }
        }
        ValidationResult::Invalid(errors) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(errors)?);
            } else {
                for error in errors {
                    println!("{error}");
                }
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    // Usage errors exit with status 2, help and version with 0.
    let args = Args::parse();

    init_logging(args.verbose);

    let result = match run(&args) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };

    if let Err(e) = report(&args, &result) {
        eprintln!("Error: {e}");
        return ExitCode::from(2);
    }

    info!("{} failed selectors", result.errors().len());
    if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
