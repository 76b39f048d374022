//! Events published by the Guess Lottery.

use soroban_sdk::{contractevent, Address};

/// A new round accepts entries (first round only; later rounds emit `RoundReset`)
#[contractevent]
pub struct RoundOpened {
    #[topic]
    pub round_id: u32,
}

#[contractevent]
pub struct Registered {
    #[topic]
    pub participant: Address,
    #[topic]
    pub round_id: u32,
}

#[contractevent]
pub struct GuessSubmitted {
    #[topic]
    pub participant: Address,
    #[topic]
    pub round_id: u32,
    pub guess: u32,
}

#[contractevent]
pub struct WinnerAdded {
    #[topic]
    pub participant: Address,
    #[topic]
    pub round_id: u32,
}

#[contractevent]
pub struct PrizesDistributed {
    #[topic]
    pub round_id: u32,
    pub prize_per_winner: i128,
    pub winner_count: u32,
}

/// Carries the id of the round that has just opened
#[contractevent]
pub struct RoundReset {
    #[topic]
    pub round_id: u32,
}
