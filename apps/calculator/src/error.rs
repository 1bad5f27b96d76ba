//! # API Error Type
//!
//! Unified error type for calculator commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Calculator                         │
//! │                                                                         │
//! │  Command Function: Result<T, ApiError>                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Empty field? ───────── MISSING_INPUT ("Please fill in all fields.")   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Not a number? ──────── ValidationError ──────► VALIDATION_ERROR       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  final < minimum? ───── FeeError ─────────────► INVALID_PRICE_RANGE    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Success ──────────────────────────────────────► FeeQuote               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! JSON output includes both a machine-readable `code` and a human-readable
//! `message`.

use serde::Serialize;

use fee_core::{FeeError, FeeField, ValidationError, MISSING_INPUT_NOTICE};

use crate::state::ConfigError;
use crate::statement::ExportError;

/// API error returned from calculator commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INVALID_PRICE_RANGE",
///   "message": "Final purchase price cannot be less than the minimum allowed (final 90000, minimum 100000)"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Fields the error refers to, in form order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FeeField>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// One or more form fields left empty
    MissingInput,

    /// Field text is not a usable number
    ValidationError,

    /// Final purchase price below the minimum allowed
    InvalidPriceRange,

    /// Statement could not be written
    ExportError,

    /// Configuration could not be loaded
    ConfigError,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Creates the "fill in all fields" notice.
    pub fn missing_input(fields: Vec<FeeField>) -> Self {
        ApiError {
            code: ErrorCode::MissingInput,
            message: MISSING_INPUT_NOTICE.to_string(),
            fields,
        }
    }

    /// Creates an export error.
    pub fn export(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ExportError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Process exit code for this error.
    ///
    /// Input problems exit with 2, everything else with 1.
    pub fn exit_code(&self) -> u8 {
        match self.code {
            ErrorCode::MissingInput | ErrorCode::ValidationError => 2,
            _ => 1,
        }
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        if err.is_missing() {
            return ApiError::missing_input(vec![err.field()]);
        }

        ApiError {
            code: ErrorCode::ValidationError,
            fields: vec![err.field()],
            message: err.to_string(),
        }
    }
}

/// Converts core errors to API errors.
impl From<FeeError> for ApiError {
    fn from(err: FeeError) -> Self {
        match err {
            FeeError::InvalidPriceRange { .. } => ApiError {
                code: ErrorCode::InvalidPriceRange,
                message: err.to_string(),
                fields: vec![FeeField::MinimumAllowed, FeeField::FinalPurchasePrice],
            },
            FeeError::Validation(e) => e.into(),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        tracing::error!("Statement export failed: {}", err);
        ApiError::export(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::error!("Configuration failed: {}", err);
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_maps_to_its_own_code() {
        let err: ApiError = FeeError::InvalidPriceRange {
            final_purchase_price: 90000.0,
            minimum_allowed: 100000.0,
        }
        .into();
        assert_eq!(err.code, ErrorCode::InvalidPriceRange);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_required_maps_to_missing_input() {
        let err: ApiError = ValidationError::Required {
            field: FeeField::Ratio,
        }
        .into();
        assert_eq!(err.code, ErrorCode::MissingInput);
        assert_eq!(err.message, "Please fill in all fields.");
        assert_eq!(err.fields, vec![FeeField::Ratio]);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_json_shape() {
        let err = ApiError::missing_input(vec![FeeField::FinalPurchasePrice]);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "MISSING_INPUT");
        assert_eq!(json["fields"][0], "finalPurchasePrice");

        let json = serde_json::to_value(ApiError::internal("boom")).unwrap();
        assert!(json.get("fields").is_none());
    }
}
