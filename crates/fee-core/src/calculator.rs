//! # Calculator Module
//!
//! The progressive-scale commission formula.
//!
//! ## The Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PROGRESSIVE SCALE COMMISSION                                           │
//! │                                                                         │
//! │  final == minimum  →  fee = constant                                   │
//! │  final >  minimum  →  fee = constant + (final - minimum) × ratio       │
//! │  final <  minimum  →  InvalidPriceRange                                │
//! │                                                                         │
//! │  fee                                                                    │
//! │   ▲                          ╱ slope = ratio                           │
//! │   │                       ╱                                             │
//! │   │                    ╱                                                │
//! │   │ constant ───────●                                                   │
//! │   │     (invalid)   │                                                   │
//! │   └─────────────────┴──────────────────────► final purchase price      │
//! │                  minimum                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No rounding is applied and the ratio is not range-checked here.

use crate::error::{FeeError, FeeResult};
use crate::types::{FeeInputs, FeeQuote, FeeTier};

/// Computes the agent commission.
///
/// ## Example
/// ```rust
/// use fee_core::compute_fee;
///
/// // Sold at the floor: constant only
/// assert_eq!(compute_fee(100_000.0, 100_000.0, 2_000.0, 0.1).unwrap(), 2_000.0);
///
/// // Sold $50,000 above the floor at 10%
/// assert_eq!(compute_fee(150_000.0, 100_000.0, 2_000.0, 0.1).unwrap(), 7_000.0);
///
/// // Sold below the floor
/// assert!(compute_fee(90_000.0, 100_000.0, 2_000.0, 0.1).is_err());
/// ```
pub fn compute_fee(
    final_purchase_price: f64,
    minimum_allowed: f64,
    constant_amount: f64,
    ratio: f64,
) -> FeeResult<f64> {
    if final_purchase_price == minimum_allowed {
        Ok(constant_amount)
    } else if final_purchase_price > minimum_allowed {
        let difference = final_purchase_price - minimum_allowed;
        Ok(constant_amount + difference * ratio)
    } else {
        Err(FeeError::InvalidPriceRange {
            final_purchase_price,
            minimum_allowed,
        })
    }
}

impl FeeInputs {
    /// Computes the commission for these inputs.
    pub fn compute(&self) -> FeeResult<f64> {
        compute_fee(
            self.final_purchase_price,
            self.minimum_allowed,
            self.constant_amount,
            self.ratio,
        )
    }

    /// Computes the commission and its breakdown.
    ///
    /// ## Example
    /// ```rust
    /// use fee_core::{FeeInputs, FeeTier};
    ///
    /// let quote = FeeInputs::new(100_000.0, 150_000.0, 2_000.0, 0.1).quote().unwrap();
    /// assert_eq!(quote.surplus, 50_000.0);
    /// assert_eq!(quote.progressive_share, 5_000.0);
    /// assert_eq!(quote.agent_fee, 7_000.0);
    /// assert_eq!(quote.tier, FeeTier::Progressive);
    /// ```
    pub fn quote(&self) -> FeeResult<FeeQuote> {
        let agent_fee = self.compute()?;

        let (surplus, progressive_share, tier) =
            if self.final_purchase_price == self.minimum_allowed {
                (0.0, 0.0, FeeTier::ConstantOnly)
            } else {
                let surplus = self.final_purchase_price - self.minimum_allowed;
                (surplus, surplus * self.ratio, FeeTier::Progressive)
            };

        Ok(FeeQuote {
            inputs: *self,
            surplus,
            progressive_share,
            agent_fee,
            tier,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
