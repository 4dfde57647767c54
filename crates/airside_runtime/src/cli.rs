//! Command-line parsing.

use std::path::PathBuf;
use std::str::FromStr;

use airside_foundation::RecordId;
use airside_lookup::LookupKind;
use thiserror::Error;

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// The command line could not be understood.
    #[error("{0}")]
    Usage(String),

    /// A library operation failed.
    #[error(transparent)]
    Airside(#[from] airside_foundation::Error),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The log subscriber could not be installed.
    #[error("logging: {0}")]
    Logging(String),
}

impl CliError {
    fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}

/// The subcommand to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Derive and render a terminal complex.
    Complex,
    /// Resolve codes through a lookup index.
    Lookup,
    /// Write a precompiled lookup dataset.
    Compile,
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "complex" => Ok(Self::Complex),
            "lookup" => Ok(Self::Lookup),
            "compile" => Ok(Self::Compile),
            other => Err(CliError::usage(format!("unknown command: {other}"))),
        }
    }
}

/// How a derived complex is printed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Nested JSON.
    #[default]
    Json,
    /// Tab-indented outline.
    Tree,
}

impl FromStr for OutputMode {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "tree" => Ok(Self::Tree),
            other => Err(CliError::usage(format!("invalid --output-mode value: {other}"))),
        }
    }
}

/// CLI configuration parsed from arguments.
#[derive(Clone, Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct CliConfig {
    /// The subcommand, if one was given.
    pub command: Option<Command>,
    /// Positional arguments after the subcommand: sources or codes.
    pub args: Vec<String>,
    /// Explicit complex to derive (`--complex-id`).
    pub complex_id: Option<RecordId>,
    /// Output format of `complex` (`--output-mode`).
    pub output_mode: OutputMode,
    /// Lookup URI (`--lookup-uri`).
    pub lookup_uri: Option<String>,
    /// Resolve as of this date (`--date`).
    pub date: Option<String>,
    /// Resolve the current record (`--current`).
    pub current: bool,
    /// Fail on overlapping validity windows (`--strict`).
    pub strict: bool,
    /// Dataset kind of `compile` (`--kind`).
    pub kind: Option<LookupKind>,
    /// Output file of `compile` (`--output`).
    pub output: Option<PathBuf>,
    /// Debug logging (`--verbose`).
    pub verbose: bool,
    /// Print help and exit.
    pub show_help: bool,
    /// Print the version and exit.
    pub show_version: bool,
}

impl CliConfig {
    /// The positional arguments read as source paths.
    #[must_use]
    pub fn sources(&self) -> Vec<PathBuf> {
        self.args.iter().map(PathBuf::from).collect()
    }
}

/// Parses `args`, program name first.
///
/// # Errors
///
/// Returns [`CliError::Usage`] for unknown options, missing or malformed
/// option values, and unknown commands.
pub fn parse_args(args: &[String]) -> Result<CliConfig, CliError> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-v" | "--verbose" => config.verbose = true,
            "--current" => config.current = true,
            "--strict" => config.strict = true,
            "--complex-id" => {
                let value = value_of(args, &mut i)?;
                config.complex_id = Some(
                    value
                        .parse()
                        .map_err(|_| CliError::usage(format!("invalid --complex-id value: {value}")))?,
                );
            }
            "--output-mode" => config.output_mode = value_of(args, &mut i)?.parse()?,
            "--lookup-uri" => config.lookup_uri = Some(value_of(args, &mut i)?.to_string()),
            "--date" => config.date = Some(value_of(args, &mut i)?.to_string()),
            "--kind" => {
                let value = value_of(args, &mut i)?;
                config.kind = Some(
                    value
                        .parse()
                        .map_err(|_| CliError::usage(format!("invalid --kind value: {value}")))?,
                );
            }
            "--output" => config.output = Some(PathBuf::from(value_of(args, &mut i)?)),
            arg if arg.starts_with('-') => {
                return Err(CliError::usage(format!("unknown option: {arg}")));
            }
            arg if config.command.is_none() => config.command = Some(arg.parse()?),
            arg => config.args.push(arg.to_string()),
        }
        i += 1;
    }

    if config.current && config.date.is_some() {
        return Err(CliError::usage("--current and --date are mutually exclusive"));
    }

    Ok(config)
}

fn value_of<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, CliError> {
    let option = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| CliError::usage(format!("{option} requires a value")))
}

/// Prints usage to stdout.
pub fn print_help() {
    println!(
        "\x1b[1mAirside\x1b[0m - Versioned catalog of airport spaces

\x1b[1mUSAGE:\x1b[0m
    airside complex [OPTIONS] SOURCE...
    airside lookup [OPTIONS] CODE...
    airside compile --kind KIND [OPTIONS] SOURCE...

\x1b[1mCOMMANDS:\x1b[0m
    complex     Derive the terminal complex from repositories and print it
    lookup      Print the records registered under each code
    compile     Write a precompiled lookup dataset

\x1b[1mOPTIONS:\x1b[0m
    -h, --help             Print help information
    -V, --version          Print version information
    -v, --verbose          Log every derivation step

\x1b[1mCOMPLEX OPTIONS:\x1b[0m
    --complex-id N         Derive this complex instead of the current one
    --output-mode MODE     json (default) or tree

\x1b[1mLOOKUP OPTIONS:\x1b[0m
    --lookup-uri URI       gates://, galleries://, terminals:// (default gates://)
                           <kind>://github, <kind>://iterator?source=DIR
    --current              Print only the current record
    --date DATE            Print the record in effect on DATE (EDTF)
    --strict               With --date, fail when several records match

\x1b[1mCOMPILE OPTIONS:\x1b[0m
    --kind KIND            gates, galleries, or terminals
    --output PATH          Write to PATH instead of stdout

\x1b[1mEXAMPLES:\x1b[0m
    airside complex --output-mode tree ./sfomuseum-data-architecture
    airside lookup --lookup-uri galleries:// 2D
    airside lookup --lookup-uri terminals:// --date 2023 T2
    airside compile --kind gates --output gates.json ./sfomuseum-data-architecture

Log filtering honours RUST_LOG."
    );
}
