//! # fee-core: Pure Commission Logic
//!
//! This crate is the **heart** of the progressive fee calculator. It contains
//! the commission formula and the input checks that guard it, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Progressive Fee Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Form (browser UI or `fee-calculator form`)         │   │
//! │  │    Minimum ──► Final ──► Constant ──► Ratio ──► [Calculate]     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw text                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ fee-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐   ┌─────────────┐   ┌────────────┐            │   │
//! │  │   │ validation │──►│ calculator  │──►│   types    │            │   │
//! │  │   │ parse text │   │ compute_fee │   │  FeeQuote  │            │   │
//! │  │   └────────────┘   └─────────────┘   └────────────┘            │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Result<f64, FeeError>                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │         apps/calculator (display + statement export)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - The commission formula
//! - [`types`] - Domain types (FeeInputs, FeeQuote, FeeField, FeeTier)
//! - [`error`] - Domain error types
//! - [`validation`] - Caller-side parsing of raw form text
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same four inputs, same output
//! 2. **No I/O**: printing, files and config belong to the app
//! 3. **Raw Floats**: no rounding or currency precision is applied
//! 4. **Explicit Errors**: an invalid price range is a typed error, never a
//!    string on the success path
//!
//! ## Example Usage
//!
//! ```rust
//! use fee_core::{compute_fee, FeeError};
//!
//! // $150,000 sale, $100,000 floor, $2,000 fixed, 10% of the surplus
//! let fee = compute_fee(150_000.0, 100_000.0, 2_000.0, 0.1).unwrap();
//! assert_eq!(fee, 7_000.0);
//!
//! // Selling below the floor is not a valid scenario
//! let err = compute_fee(90_000.0, 100_000.0, 2_000.0, 0.1).unwrap_err();
//! assert!(matches!(err, FeeError::InvalidPriceRange { .. }));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::compute_fee;
pub use error::{FeeError, FeeResult, ValidationError};
pub use types::*;
pub use validation::RawFeeInputs;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Lower edge of the ratio range the form advertises ("0 to 1").
///
/// The calculator does not enforce it; see [`validation::is_nominal_ratio`].
pub const NOMINAL_RATIO_MIN: f64 = 0.0;

/// Upper edge of the ratio range the form advertises.
pub const NOMINAL_RATIO_MAX: f64 = 1.0;

/// Notice shown when the form is submitted with an empty field.
pub const MISSING_INPUT_NOTICE: &str = "Please fill in all fields.";
