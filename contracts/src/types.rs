//! Type definitions for the Guess Lottery.

use soroban_sdk::{contracttype, Address, Vec};

/// Fee every participant pays to enter a round (0.02 units, in stroops)
pub const REGISTRATION_FEE: i128 = 200_000;

/// Guesses allowed per participant per round
pub const MAX_ATTEMPTS: u32 = 2;

pub const MIN_GUESS: u32 = 1;
pub const MAX_GUESS: u32 = 9;

/// Persistent storage TTL in ledgers (~30 days at 5s/ledger)
pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;

/// Storage keys for contract data
///
/// `Owner` and `Token` live in instance storage; the rest are persistent.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Token,
    ActiveRound,
    Participant(Address),
    PreviousWinners,
}

/// Per-round entry for a single participant
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct ParticipantRecord {
    pub attempts: u32,
    pub registered: bool,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Round {
    pub round_id: u32,
    pub target: u32,          // Hidden number in [MIN_GUESS, MAX_GUESS]
    pub active: bool,
    pub pool: i128,           // Accumulated fees in stroops
    pub participants: Vec<Address>,
    pub winners: Vec<Address>, // One entry per correct guess
}
