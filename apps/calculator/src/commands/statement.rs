//! # Statement Commands
//!
//! Export of the current result as a commission statement.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, FormState};
use crate::statement::{CommissionStatement, StatementFormat};

/// Writes a statement for the form's last successful calculation.
///
/// ## Arguments
/// * `dir` - Target directory; `config.report_dir` when `None`
///
/// ## Returns
/// Path of the written file
pub fn export_statement(
    form: &FormState,
    config: &ConfigState,
    format: StatementFormat,
    dir: Option<&Path>,
) -> Result<PathBuf, ApiError> {
    debug!(?format, "export_statement command");

    let quote = form
        .quote()
        .ok_or_else(|| ApiError::export("Nothing to export: calculate a commission first"))?;

    let statement = CommissionStatement::new(*quote, config);
    let dir = dir.unwrap_or(config.report_dir.as_path());
    let path = statement.write_to(dir, format, config)?;

    info!(id = %statement.id, path = %path.display(), "Statement exported");
    Ok(path)
}
