//! Airside CLI entry point.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use airside_runtime::{CliError, logging, parse_args, print_help, run};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &[String]) -> Result<(), CliError> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("airside {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(config.verbose)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)?;
    out.flush()?;
    Ok(())
}
