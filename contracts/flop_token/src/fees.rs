//! Fee schedule and the three-way split applied to every fee-bearing transfer.
//!
//! ```text
//! total_pct = burn + prediction_pool + buyback
//! fee       = (amount × total_pct + 50) / 100        (round half up)
//! net       = amount − fee
//!
//! burn      = fee × burn_pct / total_pct
//! pool      = fee × prediction_pool_pct / total_pct
//! buyback   = fee − burn − pool                       (absorbs the remainder)
//! ```
//!
//! `net + burn + pool + buyback == amount` for every accepted input.

use crate::constants::*;
use crate::errors::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct FeeConfig {
    pub burn_fee_pct: u128,
    pub prediction_pool_fee_pct: u128,
    pub buyback_fee_pct: u128,
}

/// The outcome of applying a `FeeConfig` to one transfer amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub struct FeeSplit {
    /// Credited to the recipient.
    pub transfer_amount: u128,
    pub fee_amount: u128,
    pub burn_amount: u128,
    pub prediction_pool_amount: u128,
    pub buyback_amount: u128,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            burn_fee_pct: DEFAULT_BURN_FEE_PCT,
            prediction_pool_fee_pct: DEFAULT_PREDICTION_POOL_FEE_PCT,
            buyback_fee_pct: DEFAULT_BUYBACK_FEE_PCT,
        }
    }
}

impl FeeConfig {
    /// Build a schedule, rejecting percentages that sum above 100.
    pub fn new(
        burn_fee_pct: u128,
        prediction_pool_fee_pct: u128,
        buyback_fee_pct: u128,
    ) -> Result<Self, Error> {
        let config = Self {
            burn_fee_pct,
            prediction_pool_fee_pct,
            buyback_fee_pct,
        };
        if config.total_pct()? > PERCENT_DENOMINATOR {
            return Err(Error::InvalidFeeConfig);
        }
        Ok(config)
    }

    pub fn total_pct(&self) -> Result<u128, Error> {
        self.burn_fee_pct
            .checked_add(self.prediction_pool_fee_pct)
            .and_then(|sum| sum.checked_add(self.buyback_fee_pct))
            .ok_or(Error::Overflow)
    }

    /// Split `amount` into the recipient's share and the three fee shares.
    ///
    /// A zero total passes the whole amount through untouched.
    pub fn split(&self, amount: u128) -> Result<FeeSplit, Error> {
        let total_pct = self.total_pct()?;
        if total_pct == 0 {
            return Ok(FeeSplit::passthrough(amount));
        }

        let fee_amount = amount
            .checked_mul(total_pct)
            .and_then(|v| v.checked_add(FEE_ROUNDING_BIAS))
            .ok_or(Error::Overflow)?
            / PERCENT_DENOMINATOR;

        if fee_amount > amount {
            return Err(Error::FeeExceedsAmount);
        }
        let transfer_amount = amount - fee_amount;

        let burn_amount = share_of(fee_amount, self.burn_fee_pct, total_pct)?;
        let prediction_pool_amount =
            share_of(fee_amount, self.prediction_pool_fee_pct, total_pct)?;
        let buyback_amount = fee_amount
            .checked_sub(burn_amount)
            .and_then(|rest| rest.checked_sub(prediction_pool_amount))
            .ok_or(Error::Overflow)?;

        Ok(FeeSplit {
            transfer_amount,
            fee_amount,
            burn_amount,
            prediction_pool_amount,
            buyback_amount,
        })
    }
}

impl FeeSplit {
    pub fn passthrough(amount: u128) -> Self {
        Self {
            transfer_amount: amount,
            fee_amount: 0,
            burn_amount: 0,
            prediction_pool_amount: 0,
            buyback_amount: 0,
        }
    }
}

fn share_of(fee_amount: u128, pct: u128, total_pct: u128) -> Result<u128, Error> {
    fee_amount
        .checked_mul(pct)
        .map(|v| v / total_pct)
        .ok_or(Error::Overflow)
}
