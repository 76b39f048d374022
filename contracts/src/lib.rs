#![no_std]
//! # Guess Lottery
//!
//! Soroban contract for a repeating number-guessing lottery.
//! Participants pay a fixed fee, get two guesses at a hidden number in 1..=9,
//! and settlement splits the pool equally across every correct guess.
//!
//! ## Key Features
//! - Target drawn from the host PRNG at the start of each round
//! - Fees and prizes move through a Stellar token contract
//! - Settlement pays out and opens the next round in one invocation
//! - Checked arithmetic and named errors for every rejected call

mod contract;
mod errors;
mod events;
mod ledger;
mod randomness;
mod storage;
mod types;

#[cfg(test)]
mod tests;

pub use contract::GuessLottery;
pub use errors::ContractError;
pub use events::{GuessSubmitted, PrizesDistributed, Registered, RoundOpened, RoundReset, WinnerAdded};
pub use ledger::prize_per_winner;
pub use randomness::target_from_raw;
pub use types::{
    DataKey, ParticipantRecord, Round, MAX_ATTEMPTS, MAX_GUESS, MIN_GUESS, REGISTRATION_FEE,
};
