//! # Interactive Form
//!
//! A line-oriented rendition of the calculator form.
//!
//! ```text
//! Progressive Scale Real Estate Agent Fee Calculator
//!
//! Minimum Sales Price: 100000
//! Final Purchase Price: 150000
//! Fixed Amount Agent Gets Regardless of Sales Price: 2000
//! Progressive scale ratio (0 to 1): 0.1
//!
//! Selling Agent Commission: $7000
//! ```

use std::io::{BufRead, Write};

use fee_core::FeeField;

use crate::commands::calculate::{calculate, CalculateResponse};
use crate::error::ApiError;
use crate::state::{ConfigState, FormState};

/// Prompts for the four fields, then runs the calculation.
///
/// End of input counts as an empty field. The notice or result line is
/// written to `output` either way; the returned error only tells the caller
/// which exit code to use.
pub fn run_form<R, W>(
    mut input: R,
    mut output: W,
    form: &mut FormState,
    config: &ConfigState,
) -> Result<CalculateResponse, ApiError>
where
    R: BufRead,
    W: Write,
{
    let io_error = |e: std::io::Error| ApiError::internal(format!("Terminal I/O failed: {}", e));

    writeln!(output, "{}", config.title).map_err(io_error)?;
    writeln!(output).map_err(io_error)?;
    writeln!(output, "{}", config.intro).map_err(io_error)?;
    writeln!(output).map_err(io_error)?;

    for field in FeeField::ALL {
        write!(output, "{}: ", field.label()).map_err(io_error)?;
        output.flush().map_err(io_error)?;

        let mut line = String::new();
        input.read_line(&mut line).map_err(io_error)?;
        form.set_field(field, line.trim());
    }

    writeln!(output).map_err(io_error)?;

    let result = calculate(form, config);
    let line = match &result {
        Ok(response) => response.display.clone(),
        Err(err) => form
            .result_line(config)
            .unwrap_or_else(|| err.message.clone()),
    };
    writeln!(output, "{}", line).map_err(io_error)?;

    result
}
