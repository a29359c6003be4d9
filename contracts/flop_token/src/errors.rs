#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Error {
    /// A destination or recipient is the zero address.
    InvalidAddress,
    ZeroAmount,
    InsufficientBalance,
    InsufficientAllowance,
    InsufficientXp,
    /// Caller is neither the owner nor an authorized XP caller.
    NotAuthorized,
    /// Caller is not the contract owner.
    NotOwner,
    XpSystemPaused,
    /// A single grant exceeded `MAX_XP_PER_TX`.
    XpLimitExceeded,
    BatchAlreadyProcessed,
    EmptyBatch,
    /// More recipients than `MAX_AIRDROP_RECIPIENTS`.
    BatchTooLarge,
    /// A guarded message was entered while another one was still running.
    ReentrantCall,
    /// An arithmetic operation overflowed or underflowed.
    Overflow,
    /// The computed fee was larger than the amount it was taken from.
    FeeExceedsAmount,
    /// Fee percentages would sum above 100.
    InvalidFeeConfig,
    /// A native value or foreign token transfer failed.
    TransferFailed,
}

/// Error returned by a foreign PSP22 token's `PSP22::transfer`, decoded so
/// that failures carrying a `String` payload are read in full.
#[derive(Debug, Clone, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Psp22Error {
    Custom(ink::prelude::string::String),
    InsufficientBalance,
    InsufficientAllowance,
    ZeroRecipientAddress,
    ZeroSenderAddress,
    SafeTransferCheckFailed(ink::prelude::string::String),
}
