//! # Fee Calculator Entry Point
//!
//! ## Usage
//! ```bash
//! # One-shot calculation
//! fee-calculator calculate --minimum 100000 --final 150000 --constant 2000 --ratio 0.1
//!
//! # Same, as JSON, with a statement written to ./out
//! fee-calculator calculate --minimum 100000 --final 150000 --constant 2000 --ratio 0.1 \
//!     --format json --export --out-dir ./out
//!
//! # Fill in the form field by field
//! fee-calculator form
//!
//! # Show the effective configuration
//! fee-calculator config
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match fee_calculator_lib::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
