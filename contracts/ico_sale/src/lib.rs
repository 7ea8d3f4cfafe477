//! # ICO Sale Contract
//!
//! Capped token sale paying out in SCM. Investors pay with an accepted SEP-41
//! token, proceeds go straight to the beneficiary, and after a fixed lock each
//! investor claims `invested × CONVERSION_RATE` freshly minted SCM.
//!
//! | Phase      | Entry Point(s)                                   |
//! |------------|--------------------------------------------------|
//! | Deployment | `__constructor(beneficiary, accepted_token, reward_token)` |
//! | Funding    | [`IcoSale::invest`]                              |
//! | Settlement | [`IcoSale::claim`]                               |
//! | Queries    | `claimable_amount`, `invested_amount`, `total_raised`, `is_completed`, ... |
//!
//! ## Architecture
//!
//! Storage access is delegated to [`storage`]. The two collaborating token
//! contracts are reached through [`payment`] (the accepted token) and
//! [`reward`] (SCM). Sale parameters are constants in [`config`].

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, Address, Env};

pub mod config;
pub mod events;
mod payment;
pub mod reward;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

use config::{CAP, CONVERSION_RATE, LOCK_DURATION};
pub use types::SaleConfig;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Configuration = 1,
    CapExceeded = 2,
    TransferRejected = 3,
    NotMatured = 4,
    InvalidAmount = 5,
    Overflow = 6,
}

#[contract]
pub struct IcoSale;

#[contractimpl]
impl IcoSale {
    // ─────────────────────────────────────────────────────────
    // Deployment
    // ─────────────────────────────────────────────────────────

    /// Open the sale as part of deployment.
    ///
    /// Runs once, atomically with the deployment itself, so the beneficiary
    /// and both tokens are fixed before anyone can reach the contract. The
    /// sale starts at the current ledger timestamp and claims unlock
    /// `LOCK_DURATION` seconds later.
    ///
    /// - `accepted_token` must be a token contract other than this sale or
    ///   the reward token.
    /// - `reward_token` must have been deployed with this sale's address as
    ///   its minter.
    ///
    /// Any violated condition panics with `Error::Configuration` and the
    /// deployment fails.
    pub fn __constructor(
        env: Env,
        beneficiary: Address,
        accepted_token: Address,
        reward_token: Address,
    ) {
        let this = env.current_contract_address();
        if accepted_token == this || accepted_token == reward_token {
            panic_with_error!(&env, Error::Configuration);
        }
        if !payment::is_token_contract(&env, &accepted_token) {
            panic_with_error!(&env, Error::Configuration);
        }
        if !reward::is_bound_to(&env, &reward_token, &this) {
            panic_with_error!(&env, Error::Configuration);
        }

        let sale_start = env.ledger().timestamp();
        let unlock_at = sale_start
            .checked_add(LOCK_DURATION)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));

        let config = SaleConfig {
            beneficiary: beneficiary.clone(),
            accepted_token: accepted_token.clone(),
            reward_token: reward_token.clone(),
            sale_start,
            unlock_at,
        };
        storage::save_config(&env, &config);
        storage::set_total_raised(&env, 0);

        events::emit_sale_initialized(
            &env,
            beneficiary,
            accepted_token,
            reward_token,
            sale_start,
            unlock_at,
        );
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    /// Invest `amount` of the accepted token.
    ///
    /// The investor must have approved this contract for at least `amount`
    /// on the accepted token. Exactly `amount` is pulled and forwarded to the
    /// beneficiary in the same call; nothing is kept in escrow.
    ///
    /// - A zero amount is accepted and changes nothing.
    /// - `Error::CapExceeded` if the total would pass `CAP`. Reaching it exactly is fine.
    /// - `Error::TransferRejected` if the token refuses the withdrawal.
    pub fn invest(env: Env, investor: Address, amount: i128) {
        let config = storage::load_config(&env);
        investor.require_auth();

        if amount < 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        if amount == 0 {
            return;
        }

        let total_raised = storage::get_total_raised(&env)
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));
        if total_raised > CAP {
            panic_with_error!(&env, Error::CapExceeded);
        }
        let invested = storage::get_invested(&env, &investor)
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));

        // Ledger writes only happen once the transfer went through.
        payment::forward_to_beneficiary(
            &env,
            &config.accepted_token,
            &investor,
            &config.beneficiary,
            amount,
        );

        storage::set_total_raised(&env, total_raised);
        storage::set_invested(&env, &investor, invested);

        events::emit_invested(&env, investor, amount, total_raised);
    }

    // ─────────────────────────────────────────────────────────
    // Settlement
    // ─────────────────────────────────────────────────────────

    /// Mint the investor's SCM and clear their entitlement.
    ///
    /// Panics with `Error::NotMatured` before `unlock_at`. Afterwards it always
    /// succeeds; an investor with nothing to claim receives 0.
    ///
    /// Returns the amount of SCM minted.
    pub fn claim(env: Env, investor: Address) -> i128 {
        let config = storage::load_config(&env);
        investor.require_auth();

        if env.ledger().timestamp() < config.unlock_at {
            panic_with_error!(&env, Error::NotMatured);
        }

        // Cleared before the mint so a re-entrant claim finds nothing.
        let invested = storage::take_invested(&env, &investor);
        let amount = Self::to_reward_units(&env, invested);
        if amount > 0 {
            reward::mint(&env, &config.reward_token, &investor, amount);
        }

        events::emit_claimed(&env, investor, amount);
        amount
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// SCM `investor` would receive from `claim`, ignoring the lock.
    pub fn claimable_amount(env: Env, investor: Address) -> i128 {
        let invested = storage::get_invested(&env, &investor);
        Self::to_reward_units(&env, invested)
    }

    /// Unclaimed amount of the accepted token `investor` has put in.
    pub fn invested_amount(env: Env, investor: Address) -> i128 {
        storage::get_invested(&env, &investor)
    }

    pub fn total_raised(env: Env) -> i128 {
        storage::get_total_raised(&env)
    }

    pub fn remaining_cap(env: Env) -> i128 {
        CAP - storage::get_total_raised(&env)
    }

    pub fn cap(_env: Env) -> i128 {
        CAP
    }

    pub fn conversion_rate(_env: Env) -> i128 {
        CONVERSION_RATE
    }

    pub fn lock_duration(_env: Env) -> u64 {
        LOCK_DURATION
    }

    /// Return true once the lock has elapsed and claims are open.
    pub fn is_completed(env: Env) -> bool {
        env.ledger().timestamp() >= storage::load_config(&env).unlock_at
    }

    pub fn sale_start(env: Env) -> u64 {
        storage::load_config(&env).sale_start
    }

    pub fn unlock_at(env: Env) -> u64 {
        storage::load_config(&env).unlock_at
    }

    pub fn beneficiary(env: Env) -> Address {
        storage::load_config(&env).beneficiary
    }

    pub fn accepted_token(env: Env) -> Address {
        storage::load_config(&env).accepted_token
    }

    pub fn reward_token(env: Env) -> Address {
        storage::load_config(&env).reward_token
    }

    pub fn get_config(env: Env) -> SaleConfig {
        storage::load_config(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn to_reward_units(env: &Env, invested: i128) -> i128 {
        invested
            .checked_mul(CONVERSION_RATE)
            .unwrap_or_else(|| panic_with_error!(env, Error::Overflow))
    }
}
