pub const SCALING_FACTOR: u128 = 1_000_000_000_000_000_000u128;

/// Issued to the deployer at construction.
pub const INITIAL_SUPPLY: u128 = 1_000_000_000 * SCALING_FACTOR;

pub const TOKEN_NAME: &str = "FLOP";
pub const TOKEN_SYMBOL: &str = "FLOP";
pub const TOKEN_DECIMALS: u8 = 18;

// Fee schedule, in whole percentage points.
pub const DEFAULT_BURN_FEE_PCT: u128 = 1;
pub const DEFAULT_PREDICTION_POOL_FEE_PCT: u128 = 1;
pub const DEFAULT_BUYBACK_FEE_PCT: u128 = 1;

pub const PERCENT_DENOMINATOR: u128 = 100;

/// Added before dividing by `PERCENT_DENOMINATOR` so fees round to nearest
/// rather than truncate.
pub const FEE_ROUNDING_BIAS: u128 = 50;

/// Upper bound on a single `grant_xp` call. Cumulative XP is uncapped.
pub const MAX_XP_PER_TX: u128 = 10_000;

/// One XP per started 2^10 = 1024 base units staked on a prediction.
pub const XP_STAKE_SHIFT: u32 = 10;
pub const XP_STAKE_BIAS: u128 = (1u128 << XP_STAKE_SHIFT) - 1;

pub const MAX_AIRDROP_RECIPIENTS: usize = 256;

pub const ZERO_ADDRESS: [u8; 32] = [0u8; 32];
