//! # Calculate Command
//!
//! Runs the commission formula on the current form.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User clicks "Calculate Commission"                                    │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Any field empty? → "Please fill in all fields."            │    │
//! │  │  2. Parse the four fields                                      │    │
//! │  │  3. fee_core::compute (via FeeInputs::quote)                   │    │
//! │  │  4. Store result in FormState                                  │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  "Selling Agent Commission: $7000"                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, info, warn};

use fee_core::validation::is_nominal_ratio;
use fee_core::FeeQuote;

use crate::error::ApiError;
use crate::state::{ConfigState, FormState};

/// Calculation response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub quote: FeeQuote,

    /// The result line as the form shows it
    pub display: String,

    /// True when the ratio lies outside 0 to 1 (accepted anyway)
    pub unusual_ratio: bool,

    /// Advisory notes for the user; empty unless something looked odd
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

const UNUSUAL_RATIO_WARNING: &str = "Ratio is outside the 0 to 1 range; computing anyway";

/// Calculates the commission for the form's current fields.
///
/// ## Returns
/// The quote and its display line, or the reason no commission was computed
pub fn calculate(
    form: &mut FormState,
    config: &ConfigState,
) -> Result<CalculateResponse, ApiError> {
    debug!("calculate command");

    let quote = form.calculate()?;

    let unusual_ratio = !is_nominal_ratio(quote.inputs.ratio);
    let mut warnings = Vec::new();
    if unusual_ratio && config.warn_on_unusual_ratio {
        warn!(ratio = quote.inputs.ratio, "{}", UNUSUAL_RATIO_WARNING);
        warnings.push(UNUSUAL_RATIO_WARNING.to_string());
    }

    info!(
        agent_fee = quote.agent_fee,
        tier = %quote.tier,
        "Commission calculated"
    );

    let display = form
        .result_line(config)
        .ok_or_else(|| ApiError::internal("Result missing after calculation"))?;

    Ok(CalculateResponse {
        quote,
        display,
        unusual_ratio,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use fee_core::RawFeeInputs;

    fn run(
        minimum: &str,
        final_price: &str,
        constant: &str,
        ratio: &str,
    ) -> Result<CalculateResponse, ApiError> {
        run_with(minimum, final_price, constant, ratio, &ConfigState::default())
    }

    fn run_with(
        minimum: &str,
        final_price: &str,
        constant: &str,
        ratio: &str,
        config: &ConfigState,
    ) -> Result<CalculateResponse, ApiError> {
        let mut form =
            FormState::with_fields(RawFeeInputs::new(minimum, final_price, constant, ratio));
        calculate(&mut form, config)
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(run("100000", "100000", "2000", "0.1").unwrap().quote.agent_fee, 2000.0);
        assert_eq!(run("100000", "150000", "2000", "0.1").unwrap().quote.agent_fee, 7000.0);
        assert_eq!(
            run("100000", "90000", "2000", "0.1").unwrap_err().code,
            ErrorCode::InvalidPriceRange
        );
        assert_eq!(run("0", "0", "0", "0").unwrap().quote.agent_fee, 0.0);
        assert_eq!(run("100000", "200000", "0", "1").unwrap().quote.agent_fee, 100000.0);
    }

    #[test]
    fn test_display_line() {
        let response = run("100000", "150000", "2000", "0.1").unwrap();
        assert_eq!(response.display, "Selling Agent Commission: $7000");
        assert!(!response.unusual_ratio);
        assert!(response.warnings.is_empty());
    }

    #[test]
    fn test_unusual_ratio_is_flagged_not_rejected() {
        let response = run("100", "110", "5", "2").unwrap();
        assert_eq!(response.quote.agent_fee, 25.0);
        assert!(response.unusual_ratio);
        assert_eq!(response.warnings, vec![UNUSUAL_RATIO_WARNING.to_string()]);
    }

    #[test]
    fn test_unusual_ratio_warning_can_be_disabled() {
        let config = ConfigState {
            warn_on_unusual_ratio: false,
            ..ConfigState::default()
        };

        let response = run_with("100", "110", "5", "2", &config).unwrap();

        assert_eq!(response.quote.agent_fee, 25.0);
        assert!(response.unusual_ratio);
        assert!(response.warnings.is_empty());
    }
}
