use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleInitialized {
    pub beneficiary: Address,
    pub accepted_token: Address,
    pub reward_token: Address,
    pub sale_start: u64,
    pub unlock_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Invested {
    pub investor: Address,
    pub amount: i128,
    pub total_raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Claimed {
    pub investor: Address,
    pub amount: i128,
}

pub fn emit_sale_initialized(
    env: &Env,
    beneficiary: Address,
    accepted_token: Address,
    reward_token: Address,
    sale_start: u64,
    unlock_at: u64,
) {
    let topics = (symbol_short!("init"), beneficiary.clone());
    let data = SaleInitialized {
        beneficiary,
        accepted_token,
        reward_token,
        sale_start,
        unlock_at,
    };
    env.events().publish(topics, data);
}

pub fn emit_invested(env: &Env, investor: Address, amount: i128, total_raised: i128) {
    let topics = (symbol_short!("invested"), investor.clone());
    let data = Invested {
        investor,
        amount,
        total_raised,
    };
    env.events().publish(topics, data);
}

pub fn emit_claimed(env: &Env, investor: Address, amount: i128) {
    let topics = (symbol_short!("claimed"), investor.clone());
    let data = Claimed { investor, amount };
    env.events().publish(topics, data);
}
