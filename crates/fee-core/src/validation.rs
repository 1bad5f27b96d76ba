//! # Validation Module
//!
//! Caller-side checks that turn raw form text into [`FeeInputs`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form                                                          │
//! │  ├── Any field empty? → "Please fill in all fields."                   │
//! │  └── Calculator is NOT invoked                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Text → f64 (trimmed)                                              │
//! │  └── Rejects non-numbers, NaN and infinity                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: compute_fee                                                   │
//! │  └── Only domain rule: final >= minimum                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fee_core::validation::RawFeeInputs;
//!
//! let raw = RawFeeInputs::new("100000", "150000", "2000", "0.1");
//! let inputs = raw.parse().unwrap();
//! assert_eq!(inputs.compute().unwrap(), 7000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::{FeeField, FeeInputs};
use crate::{NOMINAL_RATIO_MAX, NOMINAL_RATIO_MIN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Parsing
// =============================================================================

/// Parses the text of one field into a finite number.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Empty text is `Required`
/// - Text that is not a number is `NotANumber`
/// - `NaN`, `inf` and overflowing literals are `NotFinite`
///
/// ## Example
/// ```rust
/// use fee_core::validation::parse_field;
/// use fee_core::FeeField;
///
/// assert_eq!(parse_field(FeeField::Ratio, " 0.25 ").unwrap(), 0.25);
/// assert!(parse_field(FeeField::Ratio, "").is_err());
/// assert!(parse_field(FeeField::Ratio, "a quarter").is_err());
/// ```
pub fn parse_field(field: FeeField, raw: &str) -> ValidationResult<f64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required { field });
    }

    let value: f64 = raw.parse().map_err(|_| ValidationError::NotANumber {
        field,
        value: raw.to_string(),
    })?;

    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }

    Ok(value)
}

/// Whether a ratio lies inside the advertised "0 to 1" range.
///
/// Advisory only: the calculator accepts any finite ratio.
pub fn is_nominal_ratio(ratio: f64) -> bool {
    (NOMINAL_RATIO_MIN..=NOMINAL_RATIO_MAX).contains(&ratio)
}

// =============================================================================
// Raw Form Inputs
// =============================================================================

/// The four form fields exactly as the user typed them.
///
/// `None` and blank text are both treated as "not filled in".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFeeInputs {
    pub minimum_allowed: Option<String>,
    pub final_purchase_price: Option<String>,
    pub constant_amount: Option<String>,
    pub ratio: Option<String>,
}

impl RawFeeInputs {
    /// Builds raw inputs with every field filled in.
    pub fn new(
        minimum_allowed: impl Into<String>,
        final_purchase_price: impl Into<String>,
        constant_amount: impl Into<String>,
        ratio: impl Into<String>,
    ) -> Self {
        RawFeeInputs {
            minimum_allowed: Some(minimum_allowed.into()),
            final_purchase_price: Some(final_purchase_price.into()),
            constant_amount: Some(constant_amount.into()),
            ratio: Some(ratio.into()),
        }
    }

    /// Raw text of one field, if any.
    pub fn get(&self, field: FeeField) -> Option<&str> {
        match field {
            FeeField::MinimumAllowed => self.minimum_allowed.as_deref(),
            FeeField::FinalPurchasePrice => self.final_purchase_price.as_deref(),
            FeeField::ConstantAmount => self.constant_amount.as_deref(),
            FeeField::Ratio => self.ratio.as_deref(),
        }
    }

    /// Replaces the raw text of one field.
    pub fn set(&mut self, field: FeeField, text: impl Into<String>) {
        let slot = match field {
            FeeField::MinimumAllowed => &mut self.minimum_allowed,
            FeeField::FinalPurchasePrice => &mut self.final_purchase_price,
            FeeField::ConstantAmount => &mut self.constant_amount,
            FeeField::Ratio => &mut self.ratio,
        };
        *slot = Some(text.into());
    }

    /// Every field that is absent or blank, in form order.
    pub fn missing_fields(&self) -> Vec<FeeField> {
        FeeField::ALL
            .into_iter()
            .filter(|field| self.get(*field).map_or(true, |text| text.trim().is_empty()))
            .collect()
    }

    /// Parses all four fields.
    ///
    /// Fields are checked in form order and the first failure is returned.
    pub fn parse(&self) -> ValidationResult<FeeInputs> {
        let value = |field: FeeField| parse_field(field, self.get(field).unwrap_or(""));

        Ok(FeeInputs {
            minimum_allowed: value(FeeField::MinimumAllowed)?,
            final_purchase_price: value(FeeField::FinalPurchasePrice)?,
            constant_amount: value(FeeField::ConstantAmount)?,
            ratio: value(FeeField::Ratio)?,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
