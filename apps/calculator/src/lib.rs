//! # Fee Calculator Library
//!
//! Core library for the progressive fee calculator application.
//! This is the entry point that parses the command line and runs commands.
//!
//! ## Module Organization
//! ```text
//! fee_calculator_lib/
//! ├── lib.rs          ◄─── You are here (setup & run)
//! ├── cli.rs          ◄─── clap definitions
//! ├── statement.rs    ◄─── Commission statement document
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── form.rs     ◄─── Form fields + result
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── calculate.rs◄─── Fee calculation
//! │   ├── statement.rs◄─── Statement export
//! │   ├── form.rs     ◄─── Interactive form
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! 1. Parse the command line
//! 2. Initialize tracing (stderr)
//! 3. Load configuration (defaults → file → `FEE_*` env); failures are
//!    reported as `CONFIG_ERROR`
//! 4. Run the selected command against a fresh `FormState`

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;
pub mod statement;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{CalculateArgs, Cli, Command, ExportArgs, FormArgs, OutputFormat};
use error::{ApiError, ErrorCode};
use state::{ConfigState, FormState};

/// Runs the calculator application.
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let code = execute(
        cli,
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
    .context("failed to write to the terminal")?;

    Ok(ExitCode::from(code))
}

/// Loads configuration and runs the parsed command.
///
/// A configuration that cannot be loaded is reported like any other command
/// error: as a JSON document when `calculate --format json` was requested,
/// on `err` otherwise.
///
/// ## Returns
/// The process exit code
pub fn execute<I, O, E>(cli: Cli, input: I, out: &mut O, err: &mut E) -> io::Result<u8>
where
    I: io::BufRead,
    O: Write,
    E: Write,
{
    let config = match commands::config::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(api_error) => {
            report_error(&api_error, None, cli.command.output_format(), out, err)?;
            return Ok(api_error.exit_code());
        }
    };
    info!(
        currency = %config.currency_symbol,
        report_dir = %config.report_dir.display(),
        "Configuration loaded"
    );

    match cli.command {
        Command::Calculate(args) => execute_calculate(args, &config, out, err),
        Command::Form(args) => execute_form(args, &config, input, out, err),
        Command::Config => {
            let config = commands::config::get_config(&config);
            writeln!(out, "{}", to_json(&config)?)?;
            Ok(0)
        }
    }
}

/// Runs `calculate` and prints the outcome.
///
/// ## Returns
/// The process exit code: 0 on success, 2 for input notices, 1 otherwise
pub fn execute_calculate<O, E>(
    args: CalculateArgs,
    config: &ConfigState,
    out: &mut O,
    err: &mut E,
) -> io::Result<u8>
where
    O: Write,
    E: Write,
{
    let mut form = FormState::with_fields(args.fields.into());

    let response = match commands::calculate::calculate(&mut form, config) {
        Ok(response) => response,
        Err(api_error) => {
            report_error(&api_error, form.result_line(config), args.format, out, err)?;
            return Ok(api_error.exit_code());
        }
    };

    match args.format {
        OutputFormat::Text => {
            writeln!(out, "{}", response.display)?;
            write_warnings(&response.warnings, err)?;
        }
        OutputFormat::Json => writeln!(out, "{}", to_json(&response)?)?,
    }

    export_if_requested(&form, config, &args.export, err)
}

/// Runs the interactive form and optionally exports the result.
pub fn execute_form<I, O, E>(
    args: FormArgs,
    config: &ConfigState,
    input: I,
    out: &mut O,
    err: &mut E,
) -> io::Result<u8>
where
    I: io::BufRead,
    O: Write,
    E: Write,
{
    let mut form = FormState::new();

    match commands::form::run_form(input, &mut *out, &mut form, config) {
        Ok(response) => {
            write_warnings(&response.warnings, err)?;
            export_if_requested(&form, config, &args.export, err)
        }
        // Input and range errors were already shown as the form's result line
        Err(api_error) => {
            if api_error.code == ErrorCode::Internal {
                writeln!(err, "{}", api_error.message)?;
            }
            Ok(api_error.exit_code())
        }
    }
}

fn write_warnings<E: Write>(warnings: &[String], err: &mut E) -> io::Result<()> {
    for warning in warnings {
        writeln!(err, "Warning: {}", warning)?;
    }
    Ok(())
}

fn export_if_requested<E: Write>(
    form: &FormState,
    config: &ConfigState,
    export: &ExportArgs,
    err: &mut E,
) -> io::Result<u8> {
    if !export.export {
        return Ok(0);
    }

    match commands::statement::export_statement(
        form,
        config,
        export.statement_format,
        export.out_dir.as_deref(),
    ) {
        Ok(path) => {
            writeln!(err, "Statement written to {}", path.display())?;
            Ok(0)
        }
        Err(api_error) => {
            writeln!(err, "{}", api_error.message)?;
            Ok(api_error.exit_code())
        }
    }
}

/// Text mode: rejection lines go to stdout like a result, notices to stderr.
/// JSON mode: the error document goes to stdout.
fn report_error<O: Write, E: Write>(
    api_error: &ApiError,
    result_line: Option<String>,
    format: OutputFormat,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", to_json(api_error)?),
        OutputFormat::Text => match result_line {
            Some(line) => writeln!(out, "{}", line),
            None => writeln!(err, "{}", api_error.message),
        },
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> io::Result<String> {
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=fee_core=trace` - Trace the core crate only
/// - Default: warnings only, so stdout/stderr stay clean for scripts
/// - `--verbose`: debug from the calculator crates, info elsewhere
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "info,fee_calculator_lib=debug,fee_core=debug"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
