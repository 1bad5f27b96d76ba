//! # Form State
//!
//! The four input fields and the result field of the calculator form.
//!
//! ## Form Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Form State Operations                                │
//! │                                                                         │
//! │  User Action              Method                 State Change           │
//! │  ───────────              ──────                 ────────────           │
//! │                                                                         │
//! │  Type in a field ───────► set_field() ─────────► fields[f] = text      │
//! │                                                  result = None         │
//! │                                                                         │
//! │  Click Calculate ───────► calculate() ─────────► result = Fee/Rejected │
//! │                            (empty field? notice, result untouched)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use fee_core::{FeeError, FeeField, FeeQuote, RawFeeInputs};

use crate::error::ApiError;
use crate::state::ConfigState;

/// What the result field currently shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum FormResult {
    /// A computed commission
    Fee { quote: FeeQuote },

    /// The calculator refused the inputs
    Rejected { message: String },
}

/// Form state: raw field text plus the last result.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: RawFeeInputs,
    result: Option<FormResult>,
}

impl FormState {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form pre-filled with raw text.
    pub fn with_fields(fields: RawFeeInputs) -> Self {
        FormState {
            fields,
            result: None,
        }
    }

    /// Raw text of one field.
    pub fn field(&self, field: FeeField) -> Option<&str> {
        self.fields.get(field)
    }

    /// Updates one field; any shown result is stale afterwards.
    pub fn set_field(&mut self, field: FeeField, text: impl Into<String>) {
        self.fields.set(field, text);
        self.result = None;
    }

    pub fn result(&self) -> Option<&FormResult> {
        self.result.as_ref()
    }

    /// The last successful quote, if the result field holds one.
    pub fn quote(&self) -> Option<&FeeQuote> {
        match &self.result {
            Some(FormResult::Fee { quote }) => Some(quote),
            _ => None,
        }
    }

    /// Runs the calculator on the current fields.
    ///
    /// ## Behavior
    /// - Any empty field: returns the missing-input notice without
    ///   invoking the calculator; the result field is left alone
    /// - Unparseable field: validation error, result cleared
    /// - `final < minimum`: result holds the rejection, error returned
    pub fn calculate(&mut self) -> Result<FeeQuote, ApiError> {
        let missing = self.fields.missing_fields();
        if !missing.is_empty() {
            debug!(?missing, "Form submitted with empty fields");
            return Err(ApiError::missing_input(missing));
        }

        let inputs = match self.fields.parse() {
            Ok(inputs) => inputs,
            Err(e) => {
                self.result = None;
                return Err(e.into());
            }
        };

        match inputs.quote() {
            Ok(quote) => {
                self.result = Some(FormResult::Fee { quote });
                Ok(quote)
            }
            Err(e @ FeeError::InvalidPriceRange { .. }) => {
                self.result = Some(FormResult::Rejected {
                    message: e.to_string(),
                });
                Err(e.into())
            }
            Err(e) => {
                self.result = None;
                Err(e.into())
            }
        }
    }

    /// The line the result field displays, or `None` before a calculation.
    pub fn result_line(&self, config: &ConfigState) -> Option<String> {
        self.result.as_ref().map(|result| match result {
            FormResult::Fee { quote } => format!(
                "Selling Agent Commission: {}",
                config.format_amount(quote.agent_fee)
            ),
            FormResult::Rejected { message } => format!("Error: {}", message),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn filled_form(minimum: &str, final_price: &str, constant: &str, ratio: &str) -> FormState {
        FormState::with_fields(RawFeeInputs::new(minimum, final_price, constant, ratio))
    }

    #[test]
    fn test_calculate_stores_fee() {
        let mut form = filled_form("100000", "150000", "2000", "0.1");

        let quote = form.calculate().unwrap();

        assert_eq!(quote.agent_fee, 7000.0);
        assert_eq!(form.quote(), Some(&quote));
        assert_eq!(
            form.result_line(&ConfigState::default()).as_deref(),
            Some("Selling Agent Commission: $7000")
        );
    }

    #[test]
    fn test_empty_field_does_not_touch_result() {
        let mut form = filled_form("100000", "100000", "2000", "0.1");
        form.calculate().unwrap();

        // Re-editing then blanking a field clears the stale result
        form.set_field(FeeField::Ratio, "");
        assert!(form.result().is_none());

        let err = form.calculate().unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingInput);
        assert_eq!(err.message, "Please fill in all fields.");
        assert_eq!(err.fields, vec![FeeField::Ratio]);
        assert!(form.result().is_none());
    }

    #[test]
    fn test_rejection_is_not_a_number() {
        let mut form = filled_form("100000", "90000", "2000", "0.1");

        let err = form.calculate().unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidPriceRange);
        assert!(form.quote().is_none());
        assert!(matches!(form.result(), Some(FormResult::Rejected { .. })));
        let line = form.result_line(&ConfigState::default()).unwrap();
        assert!(line.starts_with("Error: Final purchase price cannot be less"));
    }

    #[test]
    fn test_non_numeric_field() {
        let mut form = filled_form("100000", "150000", "two thousand", "0.1");

        let err = form.calculate().unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.fields, vec![FeeField::ConstantAmount]);
        assert!(form.result().is_none());
    }

    #[test]
    fn test_set_field() {
        let mut form = FormState::new();
        form.set_field(FeeField::MinimumAllowed, "0");
        assert_eq!(form.field(FeeField::MinimumAllowed), Some("0"));
        assert_eq!(form.field(FeeField::Ratio), None);
    }
}
