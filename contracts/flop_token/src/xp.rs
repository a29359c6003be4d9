use crate::constants::{MAX_XP_PER_TX, XP_STAKE_BIAS, XP_STAKE_SHIFT};
use crate::errors::Error;

/// XP earned for staking `amount` on a prediction: `ceil(amount / 1024)`.
pub fn xp_for_stake(amount: u128) -> Result<u128, Error> {
    let xp = amount.checked_add(XP_STAKE_BIAS).ok_or(Error::Overflow)? >> XP_STAKE_SHIFT;
    if xp > amount {
        return Err(Error::Overflow);
    }
    Ok(xp)
}

pub fn ensure_grant_within_limit(amount: u128) -> Result<(), Error> {
    if amount > MAX_XP_PER_TX {
        return Err(Error::XpLimitExceeded);
    }
    Ok(())
}

pub fn credit(current: u128, amount: u128) -> Result<u128, Error> {
    current.checked_add(amount).ok_or(Error::Overflow)
}

pub fn debit(current: u128, amount: u128) -> Result<u128, Error> {
    current.checked_sub(amount).ok_or(Error::InsufficientXp)
}
