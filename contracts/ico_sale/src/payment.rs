//! # Payment token
//!
//! The accepted token is any SEP-41 contract. The sale never holds it: every
//! investment is pulled with the investor's allowance and lands directly in
//! the beneficiary's balance.

use soroban_sdk::{panic_with_error, token, Address, Env};

use crate::Error;

/// `true` if `token` answers the SEP-41 `decimals` query.
pub fn is_token_contract(env: &Env, token: &Address) -> bool {
    matches!(token::Client::new(env, token).try_decimals(), Ok(Ok(_)))
}

/// Move `amount` from `investor` to `beneficiary` using the allowance the
/// investor granted this contract.
///
/// Any rejection by the token (allowance, balance, frozen account) is
/// reported as `Error::TransferRejected`; the failed sub-call leaves no trace.
pub fn forward_to_beneficiary(
    env: &Env,
    accepted_token: &Address,
    investor: &Address,
    beneficiary: &Address,
    amount: i128,
) {
    let client = token::Client::new(env, accepted_token);
    let spender = env.current_contract_address();
    let result = client.try_transfer_from(&spender, investor, beneficiary, &amount);
    if !matches!(result, Ok(Ok(()))) {
        panic_with_error!(env, Error::TransferRejected);
    }
}
