//! # Storage
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key            | Type         | Description                         |
//! |----------------|--------------|-------------------------------------|
//! | `Config`       | `SaleConfig` | Written once by the constructor     |
//! | `TotalRaised`  | `i128`       | Cumulative accepted payment         |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                  | Type   | Description                          |
//! |----------------------|--------|--------------------------------------|
//! | `Entitlement(addr)`  | `i128` | Unclaimed amount invested by `addr`  |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//! A claimed entitlement is removed rather than stored as zero.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::SaleConfig;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Sale configuration (Instance).
    Config,
    /// Cumulative accepted payment (Instance).
    TotalRaised,
    /// Unclaimed invested amount per investor (Persistent).
    Entitlement(Address),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ─────────────────────────────────────────────────────────
// Sale configuration
// ─────────────────────────────────────────────────────────

pub fn save_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

/// The constructor always writes the config, so a missing entry is unreachable.
pub fn load_config(env: &Env) -> SaleConfig {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("config is set by the constructor")
}

// ─────────────────────────────────────────────────────────
// Total raised
// ─────────────────────────────────────────────────────────

pub fn get_total_raised(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::TotalRaised)
        .unwrap_or(0)
}

pub fn set_total_raised(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalRaised, &total);
    bump_instance(env);
}

// ─────────────────────────────────────────────────────────
// Entitlements
// ─────────────────────────────────────────────────────────

/// Unclaimed amount invested by `investor`, 0 when there is no entry.
pub fn get_invested(env: &Env, investor: &Address) -> i128 {
    let key = DataKey::Entitlement(investor.clone());
    match env.storage().persistent().get(&key) {
        Some(amount) => {
            bump_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

pub fn set_invested(env: &Env, investor: &Address, amount: i128) {
    let key = DataKey::Entitlement(investor.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

/// Remove the entitlement of `investor` and return what it was.
///
/// A removed entry has no TTL left to extend, so only the instance is bumped.
pub fn take_invested(env: &Env, investor: &Address) -> i128 {
    bump_instance(env);
    let key = DataKey::Entitlement(investor.clone());
    let amount = env.storage().persistent().get(&key).unwrap_or(0);
    if amount != 0 {
        env.storage().persistent().remove(&key);
    }
    amount
}
