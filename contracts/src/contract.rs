//! Core contract implementation for the Guess Lottery.

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

use crate::errors::ContractError;
use crate::events::{
    GuessSubmitted, PrizesDistributed, Registered, RoundOpened, RoundReset, WinnerAdded,
};
use crate::types::{
    DataKey, ParticipantRecord, Round, MAX_ATTEMPTS, MAX_GUESS, MIN_GUESS, REGISTRATION_FEE,
};
use crate::{ledger, randomness, storage};

#[contract]
pub struct GuessLottery;

#[contractimpl]
impl GuessLottery {
    /// Initializes the contract with its owner and fee token, and opens round 1 (one-time only)
    pub fn initialize(env: Env, owner: Address, token: Address) -> Result<(), ContractError> {
        owner.require_auth();

        if env.storage().instance().has(&DataKey::Owner) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Token, &token);

        let round = Self::_open_round(&env, 1);
        storage::set_round(&env, &round);

        log!(&env, "round opened", round.round_id);
        RoundOpened { round_id: round.round_id }.publish(&env);

        Ok(())
    }

    /// Enters `participant` into the current round for exactly `REGISTRATION_FEE`
    pub fn register(env: Env, participant: Address, amount: i128) -> Result<(), ContractError> {
        participant.require_auth();

        let token = storage::token(&env)?;
        let mut round = storage::round(&env)?;

        if !round.active {
            return Err(ContractError::RoundNotActive);
        }

        if amount != REGISTRATION_FEE {
            return Err(ContractError::IncorrectFee);
        }

        if storage::participant(&env, &participant).is_some() {
            return Err(ContractError::AlreadyRegistered);
        }

        round.pool = round.pool
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;

        ledger::collect_fee(&env, &token, &participant, amount);

        let record = ParticipantRecord {
            attempts: 0,
            registered: true,
        };
        storage::set_participant(&env, &participant, &record);

        round.participants.push_back(participant.clone());
        storage::set_round(&env, &round);

        log!(&env, "registered", participant, round.pool);
        Registered { participant, round_id: round.round_id }.publish(&env);

        Ok(())
    }

    /// Spends one of the participant's attempts on `guess`
    ///
    /// The caller is not told whether the guess hit; a hit shows up only as a
    /// `WinnerAdded` event and in the next settlement.
    pub fn submit_guess(env: Env, participant: Address, guess: u32) -> Result<(), ContractError> {
        participant.require_auth();

        let mut round = storage::round(&env)?;

        if !round.active {
            return Err(ContractError::RoundNotActive);
        }

        let mut record = match storage::participant(&env, &participant) {
            Some(record) if record.registered => record,
            _ => return Err(ContractError::NotRegistered),
        };

        if record.attempts >= MAX_ATTEMPTS {
            return Err(ContractError::MaxAttemptsReached);
        }

        if !(MIN_GUESS..=MAX_GUESS).contains(&guess) {
            return Err(ContractError::GuessOutOfRange);
        }

        record.attempts += 1;
        storage::set_participant(&env, &participant, &record);

        GuessSubmitted {
            participant: participant.clone(),
            round_id: round.round_id,
            guess,
        }
        .publish(&env);

        // Each hit adds an entry, so two hits by the same participant are paid twice.
        if guess == round.target {
            round.winners.push_back(participant.clone());
            storage::set_round(&env, &round);

            log!(&env, "winner added", participant, round.winners.len());
            WinnerAdded { participant, round_id: round.round_id }.publish(&env);
        }

        Ok(())
    }

    /// Splits the pool equally across winner entries, pays them and starts the next round
    ///
    /// Returns the number of winner entries paid. The remainder of the integer
    /// division stays in the contract balance and is not carried forward.
    pub fn settle_round(env: Env) -> Result<u32, ContractError> {
        let token = storage::token(&env)?;
        let round = storage::round(&env)?;

        if !round.active {
            return Err(ContractError::RoundNotActive);
        }

        let winner_count = round.winners.len();
        if winner_count == 0 {
            return Err(ContractError::NoWinners);
        }

        let prize_per_winner = ledger::prize_per_winner(round.pool, winner_count)?;

        for winner in round.winners.iter() {
            ledger::pay_out(&env, &token, &winner, prize_per_winner);
        }

        storage::set_previous_winners(&env, &round.winners);

        log!(&env, "prizes distributed", round.round_id, prize_per_winner, winner_count);
        PrizesDistributed {
            round_id: round.round_id,
            prize_per_winner,
            winner_count,
        }
        .publish(&env);

        Self::_reset(&env, round)?;

        Ok(winner_count)
    }

    /// Returns the winner entries of the most recent settlement
    pub fn get_previous_winners(env: Env) -> Vec<Address> {
        storage::previous_winners(&env)
    }

    pub fn get_owner(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Owner)
    }

    pub fn get_token(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Token)
    }

    pub fn registration_fee() -> i128 {
        REGISTRATION_FEE
    }

    pub fn max_attempts() -> u32 {
        MAX_ATTEMPTS
    }

    pub fn min_guess() -> u32 {
        MIN_GUESS
    }

    pub fn max_guess() -> u32 {
        MAX_GUESS
    }

    /// Returns the fees collected in the current round
    pub fn get_pool(env: Env) -> i128 {
        storage::round(&env).map(|round| round.pool).unwrap_or(0)
    }

    pub fn is_active(env: Env) -> bool {
        storage::round(&env).map(|round| round.active).unwrap_or(false)
    }

    pub fn get_round_id(env: Env) -> u32 {
        storage::round(&env).map(|round| round.round_id).unwrap_or(0)
    }

    /// Returns the current round's participants in registration order
    pub fn get_participants(env: Env) -> Vec<Address> {
        storage::round(&env)
            .map(|round| round.participants)
            .unwrap_or(Vec::new(&env))
    }

    pub fn get_winner_count(env: Env) -> u32 {
        storage::round(&env).map(|round| round.winners.len()).unwrap_or(0)
    }

    /// Returns the participant's record for the current round
    pub fn get_participant(env: Env, participant: Address) -> Option<ParticipantRecord> {
        storage::participant(&env, &participant)
    }

    fn _open_round(env: &Env, round_id: u32) -> Round {
        Round {
            round_id,
            target: randomness::draw_target(env),
            active: true,
            pool: 0,
            participants: Vec::new(env),
            winners: Vec::new(env),
        }
    }

    /// Clears every participant record and replaces the round with a fresh one
    fn _reset(env: &Env, round: Round) -> Result<(), ContractError> {
        storage::clear_participants(env, &round.participants);

        let round_id = round.round_id
            .checked_add(1)
            .ok_or(ContractError::Overflow)?;
        let next = Self::_open_round(env, round_id);
        storage::set_round(env, &next);

        log!(env, "round reset", round_id);
        RoundReset { round_id }.publish(env);

        Ok(())
    }
}
