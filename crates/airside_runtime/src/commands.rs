//! Command execution.
//!
//! Every command writes its result to the given writer and returns on the
//! first error; nothing is printed for a command that fails part way.

use std::fs::File;
use std::io::{BufWriter, Write};

use airside_campus::render::{write_json, write_tree};
use airside_campus::{DeriveOptions, Deriver};
use airside_foundation::Error;
use airside_lookup::compile::{compile, write_json as write_dataset};
use airside_lookup::{
    DateMatch, Gallery, Gate, LookupKind, LookupRecord, LookupSource, LookupUri, Terminal, When,
};
use airside_storage::{Cancellation, Catalog, DirectorySource};
use tracing::info;

use crate::cli::{CliConfig, CliError, Command, OutputMode};

/// Default lookup URI.
pub const DEFAULT_LOOKUP_URI: &str = "gates://";

/// Runs the configured command.
///
/// # Errors
///
/// Returns a usage error when no command is given, otherwise the first
/// error of the command.
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<(), CliError> {
    match config.command {
        Some(Command::Complex) => run_complex(config, out),
        Some(Command::Lookup) => run_lookup(config, out),
        Some(Command::Compile) => run_compile(config, out),
        None => Err(CliError::Usage("no command given (try --help)".to_string())),
    }
}

/// Indexes the source repositories, derives the complex, and renders it.
///
/// # Errors
///
/// Returns an error if no source is given, a repository cannot be read, or
/// derivation fails.
pub fn run_complex<W: Write>(config: &CliConfig, out: &mut W) -> Result<(), CliError> {
    let sources = config.sources();
    if sources.is_empty() {
        return Err(CliError::Usage("complex requires at least one SOURCE".to_string()));
    }

    let catalog = Catalog::from_source(&DirectorySource::new(sources))?;
    info!(records = catalog.len(), "indexed sources");

    // Historic complexes legitimately carry non-current flags.
    let options = if config.complex_id.is_some() {
        DeriveOptions::quiet()
    } else {
        DeriveOptions::default()
    };
    let deriver = Deriver::with_options(&catalog, &catalog, options);
    let complex = deriver.derive_complex(config.complex_id)?;

    match config.output_mode {
        OutputMode::Json => write_json(&complex, &mut *out, true)?,
        OutputMode::Tree => write_tree(&complex, &catalog, &mut *out)?,
    }
    Ok(())
}

/// Resolves every code through the configured lookup.
///
/// Without `--current` or `--date` every candidate is printed, one per
/// line; otherwise the single resolved record is.
///
/// # Errors
///
/// Returns an error if the URI is invalid, the index cannot be built, or a
/// code does not resolve.
pub fn run_lookup<W: Write>(config: &CliConfig, out: &mut W) -> Result<(), CliError> {
    if config.args.is_empty() {
        return Err(CliError::Usage("lookup requires at least one CODE".to_string()));
    }
    let uri: LookupUri = config
        .lookup_uri
        .as_deref()
        .unwrap_or(DEFAULT_LOOKUP_URI)
        .parse()?;

    match uri.kind {
        LookupKind::Gates => lookup_codes::<Gate, W>(&uri.source, config, out),
        LookupKind::Galleries => lookup_codes::<Gallery, W>(&uri.source, config, out),
        LookupKind::Terminals => lookup_codes::<Terminal, W>(&uri.source, config, out),
    }
}

fn lookup_codes<R: LookupRecord, W: Write>(
    source: &LookupSource,
    config: &CliConfig,
    out: &mut W,
) -> Result<(), CliError> {
    let index = source.build::<R>()?;
    let when = match (&config.date, config.current) {
        (Some(date), _) => Some(When::date(date)?),
        (None, true) => Some(When::Current),
        (None, false) => None,
    };
    let matching = if config.strict {
        DateMatch::Strict
    } else {
        DateMatch::FirstMatch
    };

    for code in &config.args {
        match when {
            Some(when) => writeln!(out, "{}", index.resolve(code, when, matching)?)?,
            None => {
                for record in index.candidates(code)? {
                    writeln!(out, "{record}")?;
                }
            }
        }
    }
    Ok(())
}

/// Compiles a dataset from the source repositories.
///
/// # Errors
///
/// Returns an error if `--kind` or the sources are missing, or compilation
/// or writing fails.
pub fn run_compile<W: Write>(config: &CliConfig, out: &mut W) -> Result<(), CliError> {
    let kind = config
        .kind
        .ok_or_else(|| CliError::Usage("compile requires --kind".to_string()))?;
    let sources = config.sources();
    if sources.is_empty() {
        return Err(CliError::Usage("compile requires at least one SOURCE".to_string()));
    }
    let source = DirectorySource::new(sources);

    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|err| Error::io(format!("failed to create {}: {err}", path.display())))?;
            let mut writer = BufWriter::new(file);
            compile_kind(kind, &source, &mut writer)?;
            writer.flush()?;
            info!(path = %path.display(), "wrote dataset");
            Ok(())
        }
        None => compile_kind(kind, &source, out),
    }
}

fn compile_kind<W: Write>(kind: LookupKind, source: &DirectorySource, out: &mut W) -> Result<(), CliError> {
    match kind {
        LookupKind::Gates => compile_to::<Gate, W>(source, out),
        LookupKind::Galleries => compile_to::<Gallery, W>(source, out),
        LookupKind::Terminals => compile_to::<Terminal, W>(source, out),
    }
}

fn compile_to<R: LookupRecord, W: Write>(source: &DirectorySource, out: &mut W) -> Result<(), CliError> {
    let records: Vec<R> = compile(source, &Cancellation::new())?;
    write_dataset(&records, out, true)?;
    Ok(())
}
