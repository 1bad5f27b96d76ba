//! # Domain Types
//!
//! Core domain types used throughout the calculator.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────────┐          │
//! │  │      FeeInputs       │        │        FeeQuote          │          │
//! │  │  ──────────────────  │        │  ──────────────────────  │          │
//! │  │  minimum_allowed     │──────► │  inputs                  │          │
//! │  │  final_purchase_price│ quote()│  surplus                 │          │
//! │  │  constant_amount     │        │  progressive_share       │          │
//! │  │  ratio               │        │  agent_fee               │          │
//! │  └──────────────────────┘        │  tier                    │          │
//! │                                  └──────────────────────────┘          │
//! │  ┌──────────────────────┐        ┌──────────────────────────┐          │
//! │  │      FeeField        │        │         FeeTier          │          │
//! │  │  MinimumAllowed      │        │  ConstantOnly            │          │
//! │  │  FinalPurchasePrice  │        │  Progressive             │          │
//! │  │  ConstantAmount      │        └──────────────────────────┘          │
//! │  │  Ratio               │                                              │
//! │  └──────────────────────┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Fee Field
// =============================================================================

/// One of the four form inputs.
///
/// Ordered as the form presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum FeeField {
    MinimumAllowed,
    FinalPurchasePrice,
    ConstantAmount,
    Ratio,
}

impl FeeField {
    /// All fields in form order.
    pub const ALL: [FeeField; 4] = [
        FeeField::MinimumAllowed,
        FeeField::FinalPurchasePrice,
        FeeField::ConstantAmount,
        FeeField::Ratio,
    ];

    /// Label shown next to the input.
    pub const fn label(&self) -> &'static str {
        match self {
            FeeField::MinimumAllowed => "Minimum Sales Price",
            FeeField::FinalPurchasePrice => "Final Purchase Price",
            FeeField::ConstantAmount => "Fixed Amount Agent Gets Regardless of Sales Price",
            FeeField::Ratio => "Progressive scale ratio (0 to 1)",
        }
    }

    /// Machine key, matching the serialized field names of [`FeeInputs`].
    pub const fn key(&self) -> &'static str {
        match self {
            FeeField::MinimumAllowed => "minimumAllowed",
            FeeField::FinalPurchasePrice => "finalPurchasePrice",
            FeeField::ConstantAmount => "constantAmount",
            FeeField::Ratio => "ratio",
        }
    }
}

impl fmt::Display for FeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Fee Inputs
// =============================================================================

/// The four numbers the commission is computed from.
///
/// Values are already parsed; turning form text into a `FeeInputs` is the
/// job of [`crate::validation::RawFeeInputs::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FeeInputs {
    /// Floor price below which the scenario is invalid.
    pub minimum_allowed: f64,

    /// Price the property actually sold for.
    pub final_purchase_price: f64,

    /// Fixed amount the agent gets regardless of sales price.
    pub constant_amount: f64,

    /// Share of the surplus above the floor paid to the agent.
    /// Intended range is 0 to 1 but nothing enforces it.
    pub ratio: f64,
}

impl FeeInputs {
    pub const fn new(
        minimum_allowed: f64,
        final_purchase_price: f64,
        constant_amount: f64,
        ratio: f64,
    ) -> Self {
        FeeInputs {
            minimum_allowed,
            final_purchase_price,
            constant_amount,
            ratio,
        }
    }

    /// Returns the value of one field.
    pub const fn get(&self, field: FeeField) -> f64 {
        match field {
            FeeField::MinimumAllowed => self.minimum_allowed,
            FeeField::FinalPurchasePrice => self.final_purchase_price,
            FeeField::ConstantAmount => self.constant_amount,
            FeeField::Ratio => self.ratio,
        }
    }
}

// =============================================================================
// Fee Tier
// =============================================================================

/// Which branch of the formula produced the fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum FeeTier {
    /// Sold exactly at the floor: the agent gets the constant only.
    ConstantOnly,

    /// Sold above the floor: constant plus a ratio of the surplus.
    Progressive,
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeTier::ConstantOnly => f.write_str("constant only"),
            FeeTier::Progressive => f.write_str("progressive"),
        }
    }
}

// =============================================================================
// Fee Quote
// =============================================================================

/// A successful calculation together with its breakdown.
///
/// `agent_fee` is exactly what [`crate::compute_fee`] returns for `inputs`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FeeQuote {
    pub inputs: FeeInputs,

    /// `final_purchase_price - minimum_allowed` (zero on the floor).
    pub surplus: f64,

    /// `surplus * ratio` (zero on the floor).
    pub progressive_share: f64,

    /// The commission.
    pub agent_fee: f64,

    pub tier: FeeTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_and_keys() {
        let keys: Vec<&str> = FeeField::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            vec!["minimumAllowed", "finalPurchasePrice", "constantAmount", "ratio"]
        );
    }

    #[test]
    fn test_inputs_serialize_camel_case() {
        let inputs = FeeInputs::new(100000.0, 150000.0, 2000.0, 0.1);
        let json = serde_json::to_value(inputs).unwrap();

        for field in FeeField::ALL {
            assert_eq!(json[field.key()].as_f64(), Some(inputs.get(field)));
        }
    }

    #[test]
    fn test_tier_serializes_camel_case() {
        let json = serde_json::to_string(&FeeTier::ConstantOnly).unwrap();
        assert_eq!(json, "\"constantOnly\"");
    }
}
