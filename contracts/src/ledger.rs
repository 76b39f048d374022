//! Value transfers through the configured token contract.
//!
//! A failing transfer traps the token contract, which aborts and rolls back
//! the whole invocation that requested it.

use soroban_sdk::{token::TokenClient, Address, Env};

use crate::errors::ContractError;

/// Moves an entry fee from the participant into the contract
pub(crate) fn collect_fee(env: &Env, token: &Address, from: &Address, amount: i128) {
    let contract = env.current_contract_address();
    TokenClient::new(env, token).transfer(from, &contract, &amount);
}

/// Pays a prize from the contract balance
pub(crate) fn pay_out(env: &Env, token: &Address, to: &Address, amount: i128) {
    let contract = env.current_contract_address();
    TokenClient::new(env, token).transfer(&contract, to, &amount);
}

/// Equal share of the pool per winner entry, rounded down
pub fn prize_per_winner(pool: i128, entries: u32) -> Result<i128, ContractError> {
    if entries == 0 {
        return Err(ContractError::NoWinners);
    }

    pool.checked_div(i128::from(entries))
        .ok_or(ContractError::Overflow)
}
