//! # SCM Token Contract
//!
//! Reward token of the ICO. Units are created only through [`ScmToken::mint`],
//! and only the sale contract the token was constructed for may call it.
//!
//! | Phase      | Entry Point(s)                                   |
//! |------------|--------------------------------------------------|
//! | Deployment | `__constructor(minter)`                          |
//! | Issuance   | [`ScmToken::mint`]                               |
//! | Queries    | `balance`, `total_supply`, `minter`, metadata    |
//!
//! There is deliberately no `transfer` or `approve`: SCM only ever moves from
//! "not yet minted" to the investor that claimed it.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, Address, Env, String};

pub mod events;
mod storage;


pub const DECIMALS: u32 = 18;
pub const NAME: &str = "SCM Token";
pub const SYMBOL: &str = "SCM";

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    UnauthorizedMint = 1,
    InvalidAmount = 2,
    Overflow = 3,
}

#[contract]
pub struct ScmToken;

#[contractimpl]
impl ScmToken {
    /// Deploy the token bound to `minter`, the only address that may ever mint.
    ///
    /// The binding is written once here and has no setter.
    pub fn __constructor(env: Env, minter: Address) {
        storage::set_minter(&env, &minter);
    }

    /// Mint `amount` SCM to `to`.
    ///
    /// - `caller` must authorize. A contract calling directly authorizes itself.
    /// - `caller` must be the minter bound at construction, otherwise
    ///   `Error::UnauthorizedMint`.
    pub fn mint(env: Env, caller: Address, to: Address, amount: i128) {
        caller.require_auth();

        let minter = storage::get_minter(&env);
        if caller != minter {
            panic_with_error!(&env, Error::UnauthorizedMint);
        }
        if amount < 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        let balance = storage::get_balance(&env, &to)
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));
        let supply = storage::get_total_supply(&env)
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));

        storage::set_balance(&env, &to, balance);
        storage::set_total_supply(&env, supply);

        events::emit_mint(&env, minter, to, amount);
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::get_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    /// Return the address allowed to mint.
    pub fn minter(env: Env) -> Address {
        storage::get_minter(&env)
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }
}
