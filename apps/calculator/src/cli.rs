//! Command-line definition for the `fee-calculator` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use fee_core::RawFeeInputs;

use crate::statement::StatementFormat;

/// Progressive Scale Real Estate Agent Fee Calculator
#[derive(Parser, Debug)]
#[command(name = "fee-calculator", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true, env = "FEE_CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG still wins)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate a commission from flags
    Calculate(CalculateArgs),

    /// Fill in the form interactively
    Form(FormArgs),

    /// Print the effective configuration as JSON
    Config,
}

impl Command {
    /// How errors outside the command itself (configuration) are printed.
    pub fn output_format(&self) -> OutputFormat {
        match self {
            Command::Calculate(args) => args.format,
            Command::Form(_) | Command::Config => OutputFormat::Text,
        }
    }
}

/// The four form fields, taken as raw text.
///
/// Missing or non-numeric values are reported the way the form reports
/// them, so these are deliberately not typed as numbers.
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    /// Minimum Sales Price
    #[arg(long = "minimum", value_name = "AMOUNT", allow_hyphen_values = true)]
    pub minimum_allowed: Option<String>,

    /// Final Purchase Price
    #[arg(long = "final", value_name = "AMOUNT", allow_hyphen_values = true)]
    pub final_purchase_price: Option<String>,

    /// Fixed Amount Agent Gets Regardless of Sales Price
    #[arg(long = "constant", value_name = "AMOUNT", allow_hyphen_values = true)]
    pub constant_amount: Option<String>,

    /// Progressive scale ratio (0 to 1)
    #[arg(long, value_name = "RATIO", allow_hyphen_values = true)]
    pub ratio: Option<String>,
}

impl From<FieldArgs> for RawFeeInputs {
    fn from(args: FieldArgs) -> Self {
        RawFeeInputs {
            minimum_allowed: args.minimum_allowed,
            final_purchase_price: args.final_purchase_price,
            constant_amount: args.constant_amount,
            ratio: args.ratio,
        }
    }
}

/// Statement export options shared by `calculate` and `form`.
#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Write a commission statement after a successful calculation
    #[arg(long)]
    pub export: bool,

    /// Statement format
    #[arg(long, value_enum, default_value_t = StatementFormat::Text)]
    pub statement_format: StatementFormat,

    /// Statement directory (defaults to the configured report_dir)
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CalculateArgs {
    #[command(flatten)]
    pub fields: FieldArgs,

    /// Output format for the result
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(Args, Debug, Clone)]
pub struct FormArgs {
    #[command(flatten)]
    pub export: ExportArgs,
}

/// How results and errors are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,

    /// One JSON document on stdout
    Json,
}
