//! Contract error types for the Guess Lottery.

use soroban_sdk::contracterror;

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Owner and token not set - call initialize first
    NotInitialized = 2,
    /// The round is not accepting registrations or guesses
    RoundNotActive = 3,
    /// Paid amount differs from the registration fee
    IncorrectFee = 4,
    /// Participant is already registered in this round
    AlreadyRegistered = 5,
    /// Participant has not registered in this round
    NotRegistered = 6,
    /// Participant has used every guess for this round
    MaxAttemptsReached = 7,
    /// Guess is outside the allowed range
    GuessOutOfRange = 8,
    /// Nobody guessed the target, nothing to settle
    NoWinners = 9,
    /// Arithmetic overflow occurred
    Overflow = 10,
}
