use soroban_sdk::{symbol_short, Address, Env};

/// Topic: `(mint, minter, to)`; data: the minted amount.
pub fn emit_mint(env: &Env, minter: Address, to: Address, amount: i128) {
    let topics = (symbol_short!("mint"), minter, to);
    env.events().publish(topics, amount);
}
