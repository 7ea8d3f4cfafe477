//! # Reward token
//!
//! Minimal client interface of the SCM token. The token is deployed with this
//! sale as its minter; [`is_bound_to`] checks that binding at deployment.

use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "RewardTokenClient")]
pub trait RewardToken {
    fn mint(env: Env, caller: Address, to: Address, amount: i128);
    fn minter(env: Env) -> Address;
    fn balance(env: Env, id: Address) -> i128;
}

/// `true` if `reward_token` reports `sale` as its only minter.
pub fn is_bound_to(env: &Env, reward_token: &Address, sale: &Address) -> bool {
    match RewardTokenClient::new(env, reward_token).try_minter() {
        Ok(Ok(minter)) => &minter == sale,
        _ => false,
    }
}

/// Mint `amount` SCM to `to`, authorised as the current contract.
pub fn mint(env: &Env, reward_token: &Address, to: &Address, amount: i128) {
    RewardTokenClient::new(env, reward_token).mint(&env.current_contract_address(), to, &amount);
}
