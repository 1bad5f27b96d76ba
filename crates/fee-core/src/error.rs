//! # Error Types
//!
//! Domain-specific error types for fee-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fee-core errors (this file)                                           │
//! │  ├── FeeError         - Domain errors from the calculator              │
//! │  └── ValidationError  - Raw form input that cannot become a number     │
//! │                                                                         │
//! │  calculator app errors (apps/calculator)                               │
//! │  └── ApiError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → FeeError → ApiError → Terminal / JSON         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending values in the message
//! 3. Errors are enum variants, never String
//! 4. An error never travels on the numeric success path

use thiserror::Error;

use crate::types::FeeField;

// =============================================================================
// Fee Error
// =============================================================================

/// Errors produced by the commission calculation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeeError {
    /// The final purchase price is below the minimum allowed price.
    ///
    /// ## When This Occurs
    /// ```text
    /// Minimum Sales Price:   100000
    /// Final Purchase Price:   90000   ◄── below the floor
    ///      │
    ///      ▼
    /// InvalidPriceRange { final_purchase_price: 90000, minimum_allowed: 100000 }
    ///      │
    ///      ▼
    /// UI shows: "Final purchase price cannot be less than the minimum allowed"
    /// ```
    #[error(
        "Final purchase price cannot be less than the minimum allowed \
         (final {final_purchase_price}, minimum {minimum_allowed})"
    )]
    InvalidPriceRange {
        final_purchase_price: f64,
        minimum_allowed: f64,
    },

    /// Raw input failed caller-side validation (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Raw input validation errors.
///
/// These occur before the calculator is invoked, while turning form text
/// into numbers. The calculator itself never returns them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: FeeField },

    /// Field text does not parse as a number.
    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: FeeField, value: String },

    /// Field parsed, but to NaN or infinity.
    #[error("{field} must be a finite number")]
    NotFinite { field: FeeField },
}

impl ValidationError {
    /// The form field that failed.
    pub fn field(&self) -> FeeField {
        match self {
            ValidationError::Required { field }
            | ValidationError::NotANumber { field, .. }
            | ValidationError::NotFinite { field } => *field,
        }
    }

    /// True when the field was left empty.
    pub fn is_missing(&self) -> bool {
        matches!(self, ValidationError::Required { .. })
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with FeeError.
pub type FeeResult<T> = Result<T, FeeError>;

// =============================================================================
// Unit Tests
// =============================================================================
