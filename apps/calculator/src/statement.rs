//! # Commission Statement
//!
//! A printable document built from a computed quote.
//!
//! The statement only reproduces what the calculator already decided: the
//! four inputs and the resulting commission, plus the breakdown.
//!
//! ## Text Layout (48 columns)
//! ```text
//! ================================================
//!   Progressive Scale Real Estate Agent Fee
//!                  Calculator
//! ================================================
//! Statement  7b0f0c9e-...
//! Generated                  2026-10-19 09:30 UTC
//! ------------------------------------------------
//! Minimum Sales Price                      $100000
//! Final Purchase Price                     $150000
//! Fixed Amount Agent Gets Regardless of Sales
//! Price
//!                                            $2000
//! Progressive scale ratio (0 to 1)             0.1
//! ------------------------------------------------
//! Tier                                 progressive
//! Surplus over minimum                      $50000
//! Progressive share                          $5000
//! ------------------------------------------------
//! Selling Agent Commission                   $7000
//! ================================================
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use fee_core::{FeeField, FeeQuote};

use crate::state::ConfigState;

/// Output format of an exported statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StatementFormat {
    /// Fixed-width plain text
    #[default]
    Text,

    /// Pretty-printed JSON
    Json,
}

impl StatementFormat {
    pub const fn extension(&self) -> &'static str {
        match self {
            StatementFormat::Text => "txt",
            StatementFormat::Json => "json",
        }
    }
}

/// Statement export failures.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write statement to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize statement: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A commission statement.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionStatement {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub title: String,
    pub currency_symbol: String,
    pub quote: FeeQuote,
}

impl CommissionStatement {
    /// Builds a statement for a quote, stamped now.
    pub fn new(quote: FeeQuote, config: &ConfigState) -> Self {
        CommissionStatement {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            title: config.title.clone(),
            currency_symbol: config.currency_symbol.clone(),
            quote,
        }
    }

    /// File name the statement is written under.
    pub fn file_name(&self, format: StatementFormat) -> String {
        format!("commission-{}.{}", self.id, format.extension())
    }

    /// Renders the fixed-width text layout.
    pub fn render_text(&self, config: &ConfigState) -> String {
        let width = usize::from(config.paper_width);
        let inputs = &self.quote.inputs;
        let mut out = Vec::new();

        out.push("=".repeat(width));
        for line in wrap(&self.title, width) {
            out.push(center(&line, width));
        }
        out.push("=".repeat(width));
        out.extend(label_value("Statement", &self.id.to_string(), width));
        out.extend(label_value(
            "Generated",
            &self.generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            width,
        ));
        out.push("-".repeat(width));

        for field in FeeField::ALL {
            let value = match field {
                FeeField::Ratio => inputs.ratio.to_string(),
                _ => config.format_amount(inputs.get(field)),
            };
            out.extend(label_value(field.label(), &value, width));
        }

        out.push("-".repeat(width));
        out.extend(label_value("Tier", &self.quote.tier.to_string(), width));
        out.extend(label_value(
            "Surplus over minimum",
            &config.format_amount(self.quote.surplus),
            width,
        ));
        out.extend(label_value(
            "Progressive share",
            &config.format_amount(self.quote.progressive_share),
            width,
        ));
        out.push("-".repeat(width));
        out.extend(label_value(
            "Selling Agent Commission",
            &config.format_amount(self.quote.agent_fee),
            width,
        ));
        out.push("=".repeat(width));

        let mut text = out.join("\n");
        text.push('\n');
        text
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the statement into `dir`, creating it if needed.
    pub fn write_to(
        &self,
        dir: &Path,
        format: StatementFormat,
        config: &ConfigState,
    ) -> Result<PathBuf, ExportError> {
        let body = match format {
            StatementFormat::Text => self.render_text(config),
            StatementFormat::Json => self.to_json()?,
        };

        fs::create_dir_all(dir).map_err(|source| ExportError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(self.file_name(format));
        fs::write(&path, body).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}

// =============================================================================
// Layout Helpers
// =============================================================================

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    format!("{}{}", " ".repeat(left), text).trim_end().to_string()
}

/// Label on the left, value flush right. Labels that do not fit next to the
/// value are wrapped and the value gets its own line.
fn label_value(label: &str, value: &str, width: usize) -> Vec<String> {
    let label_len = label.chars().count();
    let value_len = value.chars().count();

    if label_len + 1 + value_len <= width {
        let gap = width - label_len - value_len;
        return vec![format!("{}{}{}", label, " ".repeat(gap), value)];
    }

    let mut lines = wrap(label, width);
    let pad = width.saturating_sub(value_len);
    lines.push(format!("{}{}", " ".repeat(pad), value));
    lines
}
