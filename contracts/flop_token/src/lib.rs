#![cfg_attr(not(feature = "std"), no_std, no_main)]

//! # FLOP Token — Fee-Splitting Ledger & XP Engine
//!
//! **Role:** fungible ledger that taxes every ordinary transfer, routes the
//! tax three ways, distributes fee-free airdrops in idempotent batches, and
//! keeps a parallel, non-transferable XP counter per account.
//!
//! ```text
//! transfer(amount):
//!   fee = (amount × (burn + pool + buyback) + 50) / 100
//!   ├── recipient      amount − fee
//!   ├── prediction pool  fee × pool / total
//!   ├── burn             fee × burn / total       (supply shrinks)
//!   └── buyback wallet   fee − burn − pool        (takes the remainder)
//!
//! place_prediction(amount):
//!   fee-bearing transfer caller → prediction pool
//!   xp += ceil(amount / 1024)
//! ```
//!
//! XP mutation (`grant_xp`, `spend_xp`) is limited to the owner and an
//! owner-managed set of authorized callers and can be paused as a whole.
//! `airdrop_batch` and `spend_xp` run under a reentrancy lock.

pub mod constants;
pub mod errors;
pub mod fees;
pub mod xp;

pub use errors::Error;
pub use fees::{FeeConfig, FeeSplit};

#[ink::contract]
mod flop_token {
    use crate::constants::*;
    use crate::errors::{Error, Psp22Error};
    use crate::fees::{FeeConfig, FeeSplit};
    use crate::xp;
    use ink::env::call::{build_call, ExecutionInput, Selector};
    use ink::prelude::{string::String, vec::Vec};
    use ink::storage::Mapping;

    // =========================================================================
    // STORAGE
    // =========================================================================

    #[ink(storage)]
    pub struct FlopToken {
        // ── Ledger ────────────────────────────────────────────────────────
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,
        total_supply: Balance,

        // ── Access control ────────────────────────────────────────────────
        owner: AccountId,
        /// Held while `airdrop_batch` or `spend_xp` is executing.
        locked: bool,

        // ── Fee routing ───────────────────────────────────────────────────
        fee_config: FeeConfig,
        prediction_pool: AccountId,
        buyback_wallet: AccountId,

        // ── Airdrops ──────────────────────────────────────────────────────
        /// Next unused batch index.
        current_batch: u64,
        processed_batches: Mapping<u64, bool>,

        // ── XP ────────────────────────────────────────────────────────────
        xp: Mapping<AccountId, u128>,
        authorized_callers: Mapping<AccountId, bool>,
        xp_paused: bool,
    }

    /// Result of an airdrop that got as far as consuming its batch index.
    ///
    /// A failed distribution is reported as `Aborted` inside `Ok` so the
    /// consumed index is committed rather than reverted with the call.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum AirdropOutcome {
        Executed { batch: u64 },
        Aborted { batch: u64, reason: Error },
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    #[ink(event)]
    pub struct Transfer {
        #[ink(topic)]
        from: Option<AccountId>,
        #[ink(topic)]
        to: Option<AccountId>,
        value: Balance,
    }

    #[ink(event)]
    pub struct Approval {
        #[ink(topic)]
        owner: AccountId,
        #[ink(topic)]
        spender: AccountId,
        value: Balance,
    }

    #[ink(event)]
    pub struct OwnershipTransferred {
        #[ink(topic)]
        previous_owner: AccountId,
        #[ink(topic)]
        new_owner: AccountId,
    }

    /// Buyback share of a transfer fee delivered to the buyback wallet.
    #[ink(event)]
    pub struct BuybackExecuted {
        amount: Balance,
    }

    /// Burn share of a transfer fee destroyed.
    #[ink(event)]
    pub struct Burned {
        amount: Balance,
    }

    #[ink(event)]
    pub struct FeesUpdated {
        burn_fee_pct: u128,
        prediction_pool_fee_pct: u128,
        buyback_fee_pct: u128,
    }

    #[ink(event)]
    pub struct PredictionPoolUpdated {
        #[ink(topic)]
        new_pool: AccountId,
    }

    #[ink(event)]
    pub struct BuybackWalletUpdated {
        #[ink(topic)]
        new_wallet: AccountId,
    }

    #[ink(event)]
    pub struct AirdropExecuted {
        #[ink(topic)]
        batch: u64,
        recipients: u32,
        amount_per_recipient: Balance,
    }

    /// The batch index was consumed but its distribution did not complete.
    #[ink(event)]
    pub struct AirdropBatchAborted {
        #[ink(topic)]
        batch: u64,
        reason: Error,
    }

    #[ink(event)]
    pub struct XpGranted {
        #[ink(topic)]
        admin: AccountId,
        #[ink(topic)]
        user: AccountId,
        amount: u128,
    }

    #[ink(event)]
    pub struct XpSpent {
        #[ink(topic)]
        admin: AccountId,
        #[ink(topic)]
        user: AccountId,
        amount: u128,
    }

    #[ink(event)]
    pub struct XpSystemPaused {
        paused: bool,
    }

    #[ink(event)]
    pub struct CallerAuthorized {
        #[ink(topic)]
        account: AccountId,
    }

    #[ink(event)]
    pub struct CallerRevoked {
        #[ink(topic)]
        account: AccountId,
    }

    #[ink(event)]
    pub struct PredictionPlaced {
        #[ink(topic)]
        user: AccountId,
        amount: Balance,
        prediction: String,
    }

    #[ink(event)]
    pub struct FlopXpUpdated {
        #[ink(topic)]
        user: AccountId,
        new_xp: u128,
    }

    // =========================================================================
    // IMPLEMENTATION
    // =========================================================================

    impl FlopToken {
        // ---------------------------------------------------------------------
        // Constructor
        // ---------------------------------------------------------------------

        /// Deploy the ledger.
        ///
        /// Mints `INITIAL_SUPPLY` to the deployer, who becomes owner. Fees
        /// start at 1% burn, 1% prediction pool, 1% buyback.
        #[ink(constructor)]
        pub fn new(prediction_pool: AccountId, buyback_wallet: AccountId) -> Result<Self, Error> {
            ensure_non_zero(prediction_pool)?;
            ensure_non_zero(buyback_wallet)?;

            let caller = Self::env().caller();
            let mut balances = Mapping::default();
            balances.insert(caller, &INITIAL_SUPPLY);

            Self::env().emit_event(Transfer {
                from: None,
                to: Some(caller),
                value: INITIAL_SUPPLY,
            });

            Ok(Self {
                balances,
                allowances: Mapping::default(),
                total_supply: INITIAL_SUPPLY,
                owner: caller,
                locked: false,
                fee_config: FeeConfig::default(),
                prediction_pool,
                buyback_wallet,
                current_batch: 0,
                processed_batches: Mapping::default(),
                xp: Mapping::default(),
                authorized_callers: Mapping::default(),
                xp_paused: false,
            })
        }

        // =====================================================================
        // LEDGER
        // =====================================================================

        #[ink(message)]
        pub fn token_name(&self) -> String {
            String::from(TOKEN_NAME)
        }

        #[ink(message)]
        pub fn token_symbol(&self) -> String {
            String::from(TOKEN_SYMBOL)
        }

        #[ink(message)]
        pub fn token_decimals(&self) -> u8 {
            TOKEN_DECIMALS
        }

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.total_supply
        }

        #[ink(message)]
        pub fn balance_of(&self, owner: AccountId) -> Balance {
            self.balances.get(owner).unwrap_or(0)
        }

        #[ink(message)]
        pub fn allowance(&self, owner: AccountId, spender: AccountId) -> Balance {
            self.allowances.get((owner, spender)).unwrap_or(0)
        }

        #[ink(message)]
        pub fn approve(&mut self, spender: AccountId, value: Balance) -> Result<(), Error> {
            ensure_non_zero(spender)?;
            let owner = self.env().caller();
            self.allowances.insert((owner, spender), &value);
            self.env().emit_event(Approval { owner, spender, value });
            Ok(())
        }

        #[ink(message)]
        pub fn transfer(&mut self, to: AccountId, value: Balance) -> Result<(), Error> {
            let from = self.env().caller();
            self.apply_fee_transfer(from, to, value)
        }

        /// Spend `value` of the caller's allowance over `from`.
        ///
        /// The allowance drops by the full `value`; the recipient receives
        /// `value` minus fees.
        #[ink(message)]
        pub fn transfer_from(&mut self, from: AccountId, to: AccountId, value: Balance) -> Result<(), Error> {
            let spender = self.env().caller();
            let allowance = self.allowance(from, spender);
            if allowance < value {
                return Err(Error::InsufficientAllowance);
            }

            let split = self.plan_fee_transfer(from, to, value)?;
            self.allowances.insert((from, spender), &(allowance - value));
            self.execute_fee_transfer(from, to, &split)
        }

        // =====================================================================
        // FEE ENGINE
        // =====================================================================

        /// The split a transfer of `amount` would receive under the current
        /// schedule.
        #[ink(message)]
        pub fn preview_fee(&self, amount: Balance) -> Result<FeeSplit, Error> {
            self.fee_config.split(amount)
        }

        #[ink(message)]
        pub fn fee_config(&self) -> FeeConfig {
            self.fee_config
        }

        #[ink(message)]
        pub fn total_fee_pct(&self) -> Result<u128, Error> {
            self.fee_config.total_pct()
        }

        #[ink(message)]
        pub fn prediction_pool(&self) -> AccountId {
            self.prediction_pool
        }

        #[ink(message)]
        pub fn buyback_wallet(&self) -> AccountId {
            self.buyback_wallet
        }

        fn apply_fee_transfer(&mut self, from: AccountId, to: AccountId, amount: Balance) -> Result<(), Error> {
            let split = self.plan_fee_transfer(from, to, amount)?;
            self.execute_fee_transfer(from, to, &split)
        }

        /// Validate a fee-bearing transfer and compute its split. No writes.
        fn plan_fee_transfer(&self, from: AccountId, to: AccountId, amount: Balance) -> Result<FeeSplit, Error> {
            ensure_non_zero(to)?;
            if amount == 0 {
                return Err(Error::ZeroAmount);
            }
            if self.balance_of(from) < amount {
                return Err(Error::InsufficientBalance);
            }
            self.fee_config.split(amount)
        }

        fn execute_fee_transfer(&mut self, from: AccountId, to: AccountId, split: &FeeSplit) -> Result<(), Error> {
            let moved = split
                .transfer_amount
                .checked_add(split.prediction_pool_amount)
                .and_then(|v| v.checked_add(split.buyback_amount))
                .ok_or(Error::Overflow)?;
            self.debit_balance(from, moved)?;

            self.credit_balance(to, split.transfer_amount)?;
            self.env().emit_event(Transfer {
                from: Some(from),
                to: Some(to),
                value: split.transfer_amount,
            });

            if split.prediction_pool_amount > 0 {
                let pool = self.prediction_pool;
                self.credit_balance(pool, split.prediction_pool_amount)?;
                self.env().emit_event(Transfer {
                    from: Some(from),
                    to: Some(pool),
                    value: split.prediction_pool_amount,
                });
            }

            if split.buyback_amount > 0 {
                let wallet = self.buyback_wallet;
                self.credit_balance(wallet, split.buyback_amount)?;
                self.env().emit_event(Transfer {
                    from: Some(from),
                    to: Some(wallet),
                    value: split.buyback_amount,
                });
                self.env().emit_event(BuybackExecuted {
                    amount: split.buyback_amount,
                });
            }

            if split.burn_amount > 0 {
                self.burn_from(from, split.burn_amount)?;
            }

            Ok(())
        }

        // =====================================================================
        // AIRDROP BATCHER
        // =====================================================================

        /// Credit `amount_per_recipient` to every recipient, fee-free, from the
        /// owner's balance.
        ///
        /// The current batch index is consumed before any funds move. If the
        /// distribution then fails, no funds move, the call returns
        /// `Ok(AirdropOutcome::Aborted)`, the index stays marked processed and
        /// the next call uses the following index. Errors returned as `Err`
        /// (owner, lock, input shape, already processed) leave the index
        /// untouched.
        #[ink(message)]
        pub fn airdrop_batch(
            &mut self,
            recipients: Vec<AccountId>,
            amount_per_recipient: Balance,
        ) -> Result<AirdropOutcome, Error> {
            self.only_owner()?;
            self.with_lock(|token| token.run_airdrop(&recipients, amount_per_recipient))
        }

        #[ink(message)]
        pub fn current_batch(&self) -> u64 {
            self.current_batch
        }

        #[ink(message)]
        pub fn is_batch_processed(&self, batch: u64) -> bool {
            self.processed_batches.get(batch).unwrap_or(false)
        }

        fn run_airdrop(&mut self, recipients: &[AccountId], amount: Balance) -> Result<AirdropOutcome, Error> {
            if recipients.is_empty() {
                return Err(Error::EmptyBatch);
            }
            if recipients.len() > MAX_AIRDROP_RECIPIENTS {
                return Err(Error::BatchTooLarge);
            }
            if amount == 0 {
                return Err(Error::ZeroAmount);
            }
            if recipients.iter().any(|r| *r == AccountId::from(ZERO_ADDRESS)) {
                return Err(Error::InvalidAddress);
            }

            let batch = self.current_batch;
            if self.is_batch_processed(batch) {
                return Err(Error::BatchAlreadyProcessed);
            }
            self.processed_batches.insert(batch, &true);
            self.current_batch = batch.checked_add(1).ok_or(Error::Overflow)?;

            let sender = self.env().caller();
            match self.distribute(sender, recipients, amount) {
                Ok(()) => {
                    self.env().emit_event(AirdropExecuted {
                        batch,
                        recipients: recipients.len() as u32,
                        amount_per_recipient: amount,
                    });
                    Ok(AirdropOutcome::Executed { batch })
                }
                Err(reason) => {
                    ink::env::debug_println!("airdrop batch {} aborted: {:?}", batch, reason);
                    self.env().emit_event(AirdropBatchAborted { batch, reason });
                    Ok(AirdropOutcome::Aborted { batch, reason })
                }
            }
        }

        /// Checks the full total up front so a failure never leaves a partial
        /// batch behind.
        fn distribute(&mut self, sender: AccountId, recipients: &[AccountId], amount: Balance) -> Result<(), Error> {
            let total = amount
                .checked_mul(recipients.len() as u128)
                .ok_or(Error::Overflow)?;
            if self.balance_of(sender) < total {
                return Err(Error::InsufficientBalance);
            }
            for recipient in recipients {
                self.move_balance(sender, *recipient, amount)?;
            }
            Ok(())
        }

        // =====================================================================
        // XP LEDGER
        // =====================================================================

        #[ink(message)]
        pub fn get_xp(&self, user: AccountId) -> u128 {
            self.xp.get(user).unwrap_or(0)
        }

        /// Credit up to `MAX_XP_PER_TX` XP to `user`.
        #[ink(message)]
        pub fn grant_xp(&mut self, user: AccountId, amount: u128) -> Result<(), Error> {
            self.ensure_xp_active()?;
            let admin = self.ensure_xp_caller()?;
            xp::ensure_grant_within_limit(amount)?;

            let new_xp = xp::credit(self.get_xp(user), amount)?;
            self.xp.insert(user, &new_xp);
            self.env().emit_event(XpGranted { admin, user, amount });
            Ok(())
        }

        #[ink(message)]
        pub fn spend_xp(&mut self, user: AccountId, amount: u128) -> Result<(), Error> {
            self.with_lock(|token| {
                token.ensure_xp_active()?;
                let admin = token.ensure_xp_caller()?;

                let new_xp = xp::debit(token.get_xp(user), amount)?;
                token.xp.insert(user, &new_xp);
                token.env().emit_event(XpSpent { admin, user, amount });
                Ok(())
            })
        }

        #[ink(message)]
        pub fn toggle_xp_pause(&mut self) -> Result<(), Error> {
            self.only_owner()?;
            self.xp_paused = !self.xp_paused;
            self.env().emit_event(XpSystemPaused {
                paused: self.xp_paused,
            });
            Ok(())
        }

        #[ink(message)]
        pub fn is_xp_paused(&self) -> bool {
            self.xp_paused
        }

        #[ink(message)]
        pub fn authorize(&mut self, account: AccountId) -> Result<(), Error> {
            self.only_owner()?;
            self.authorized_callers.insert(account, &true);
            self.env().emit_event(CallerAuthorized { account });
            Ok(())
        }

        #[ink(message)]
        pub fn revoke(&mut self, account: AccountId) -> Result<(), Error> {
            self.only_owner()?;
            self.authorized_callers.remove(account);
            self.env().emit_event(CallerRevoked { account });
            Ok(())
        }

        #[ink(message)]
        pub fn is_authorized(&self, account: AccountId) -> bool {
            self.authorized_callers.get(account).unwrap_or(false)
        }

        fn ensure_xp_active(&self) -> Result<(), Error> {
            if self.xp_paused {
                return Err(Error::XpSystemPaused);
            }
            Ok(())
        }

        /// Returns the caller when it may mutate XP.
        fn ensure_xp_caller(&self) -> Result<AccountId, Error> {
            let caller = self.env().caller();
            if caller != self.owner && !self.is_authorized(caller) {
                return Err(Error::NotAuthorized);
            }
            Ok(caller)
        }

        // =====================================================================
        // PREDICTIONS
        // =====================================================================

        /// Stake `amount` on `prediction`.
        ///
        /// The stake is a normal fee-bearing transfer to the prediction pool;
        /// the caller earns one XP per started 1024 base units. No XP
        /// authorization is required on this path.
        #[ink(message)]
        pub fn place_prediction(&mut self, amount: Balance, prediction: String) -> Result<(), Error> {
            let user = self.env().caller();
            let pool = self.prediction_pool;

            let split = self.plan_fee_transfer(user, pool, amount)?;
            let earned = xp::xp_for_stake(amount)?;
            let new_xp = xp::credit(self.get_xp(user), earned)?;

            self.execute_fee_transfer(user, pool, &split)?;
            self.xp.insert(user, &new_xp);

            self.env().emit_event(PredictionPlaced {
                user,
                amount,
                prediction,
            });
            self.env().emit_event(FlopXpUpdated { user, new_xp });
            Ok(())
        }

        // =====================================================================
        // ADMIN
        // =====================================================================

        #[ink(message)]
        pub fn owner(&self) -> AccountId {
            self.owner
        }

        #[ink(message)]
        pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), Error> {
            self.only_owner()?;
            ensure_non_zero(new_owner)?;
            let previous_owner = self.owner;
            self.owner = new_owner;
            self.env().emit_event(OwnershipTransferred {
                previous_owner,
                new_owner,
            });
            Ok(())
        }

        /// Replace the fee schedule. Percentages summing above 100 are rejected.
        #[ink(message)]
        pub fn set_fees(
            &mut self,
            burn_fee_pct: u128,
            prediction_pool_fee_pct: u128,
            buyback_fee_pct: u128,
        ) -> Result<(), Error> {
            self.only_owner()?;
            self.fee_config = FeeConfig::new(burn_fee_pct, prediction_pool_fee_pct, buyback_fee_pct)?;
            self.env().emit_event(FeesUpdated {
                burn_fee_pct,
                prediction_pool_fee_pct,
                buyback_fee_pct,
            });
            Ok(())
        }

        #[ink(message)]
        pub fn set_prediction_pool(&mut self, pool: AccountId) -> Result<(), Error> {
            self.only_owner()?;
            ensure_non_zero(pool)?;
            self.prediction_pool = pool;
            self.env().emit_event(PredictionPoolUpdated { new_pool: pool });
            Ok(())
        }

        #[ink(message)]
        pub fn set_buyback_wallet(&mut self, wallet: AccountId) -> Result<(), Error> {
            self.only_owner()?;
            ensure_non_zero(wallet)?;
            self.buyback_wallet = wallet;
            self.env().emit_event(BuybackWalletUpdated { new_wallet: wallet });
            Ok(())
        }

        #[ink(message)]
        pub fn mint(&mut self, to: AccountId, amount: Balance) -> Result<(), Error> {
            self.only_owner()?;
            ensure_non_zero(to)?;
            if amount == 0 {
                return Err(Error::ZeroAmount);
            }
            self.mint_to(to, amount)
        }

        /// Send native value held by the contract to `to`.
        #[ink(message)]
        pub fn rescue_native(&mut self, to: AccountId, amount: Balance) -> Result<(), Error> {
            self.only_owner()?;
            ensure_non_zero(to)?;
            self.env().transfer(to, amount).map_err(|_| Error::TransferFailed)
        }

        /// Recover tokens that were sent to this contract's own account.
        ///
        /// FLOP held by the contract moves fee-free; any other `token` is
        /// treated as a PSP22 contract and asked to transfer.
        #[ink(message)]
        pub fn rescue_tokens(&mut self, token: AccountId, to: AccountId, amount: Balance) -> Result<(), Error> {
            self.only_owner()?;
            ensure_non_zero(to)?;
            if amount == 0 {
                return Err(Error::ZeroAmount);
            }

            let this = self.env().account_id();
            if token == this {
                return self.move_balance(this, to, amount);
            }

            let result = build_call::<ink::env::DefaultEnvironment>()
                .call(token)
                .exec_input(
                    ExecutionInput::new(Selector::new(ink::selector_bytes!("PSP22::transfer")))
                        .push_arg(to)
                        .push_arg(amount)
                        .push_arg(Vec::<u8>::new()),
                )
                .returns::<Result<(), Psp22Error>>()
                .try_invoke();

            match result {
                Ok(Ok(Ok(()))) => Ok(()),
                Ok(Ok(Err(err))) => {
                    ink::env::debug_println!("PSP22 transfer refused: {:?}", err);
                    Err(Error::TransferFailed)
                }
                _ => Err(Error::TransferFailed),
            }
        }

        // =====================================================================
        // INTERNAL HELPERS
        // =====================================================================

        /// Run `op` holding the reentrancy lock; the lock is released on
        /// every exit path.
        fn with_lock<T, F>(&mut self, op: F) -> Result<T, Error>
        where
            F: FnOnce(&mut Self) -> Result<T, Error>,
        {
            if self.locked {
                ink::env::debug_println!("reentrant call rejected");
                return Err(Error::ReentrantCall);
            }
            self.locked = true;
            let result = op(self);
            self.locked = false;
            result
        }

        /// Fee-free balance move.
        fn move_balance(&mut self, from: AccountId, to: AccountId, value: Balance) -> Result<(), Error> {
            self.debit_balance(from, value)?;
            self.credit_balance(to, value)?;
            self.env().emit_event(Transfer {
                from: Some(from),
                to: Some(to),
                value,
            });
            Ok(())
        }

        /// Destroy `amount` held by `account`: balance and supply both shrink.
        fn burn_from(&mut self, account: AccountId, amount: Balance) -> Result<(), Error> {
            let new_supply = self.total_supply.checked_sub(amount).ok_or(Error::Overflow)?;
            self.debit_balance(account, amount)?;
            self.total_supply = new_supply;
            self.env().emit_event(Transfer {
                from: Some(account),
                to: None,
                value: amount,
            });
            self.env().emit_event(Burned { amount });
            Ok(())
        }

        fn mint_to(&mut self, account: AccountId, amount: Balance) -> Result<(), Error> {
            let new_supply = self.total_supply.checked_add(amount).ok_or(Error::Overflow)?;
            self.credit_balance(account, amount)?;
            self.total_supply = new_supply;
            self.env().emit_event(Transfer {
                from: None,
                to: Some(account),
                value: amount,
            });
            Ok(())
        }

        fn debit_balance(&mut self, account: AccountId, amount: Balance) -> Result<(), Error> {
            let balance = self.balance_of(account);
            if balance < amount {
                return Err(Error::InsufficientBalance);
            }
            self.balances.insert(account, &(balance - amount));
            Ok(())
        }

        fn credit_balance(&mut self, account: AccountId, amount: Balance) -> Result<(), Error> {
            let balance = self.balance_of(account);
            let new_balance = balance.checked_add(amount).ok_or(Error::Overflow)?;
            self.balances.insert(account, &new_balance);
            Ok(())
        }

        fn only_owner(&self) -> Result<(), Error> {
            if self.env().caller() != self.owner {
                return Err(Error::NotOwner);
            }
            Ok(())
        }
    }

    fn ensure_non_zero(account: AccountId) -> Result<(), Error> {
        if account == AccountId::from(ZERO_ADDRESS) {
            return Err(Error::InvalidAddress);
        }
        Ok(())
    }

    // =========================================================================
    // UNIT TESTS
    // =========================================================================

}
