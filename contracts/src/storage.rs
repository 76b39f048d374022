//! Storage access with TTL upkeep.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::ContractError;
use crate::types::{DataKey, ParticipantRecord, Round, PERSISTENT_BUMP_LEDGERS};

pub(crate) fn token(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(ContractError::NotInitialized)
}

pub(crate) fn round(env: &Env) -> Result<Round, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::ActiveRound)
        .ok_or(ContractError::NotInitialized)
}

pub(crate) fn set_round(env: &Env, round: &Round) {
    let key = DataKey::ActiveRound;
    env.storage().persistent().set(&key, round);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
    env.storage()
        .instance()
        .extend_ttl(PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

pub(crate) fn participant(env: &Env, user: &Address) -> Option<ParticipantRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Participant(user.clone()))
}

pub(crate) fn set_participant(env: &Env, user: &Address, record: &ParticipantRecord) {
    let key = DataKey::Participant(user.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

pub(crate) fn clear_participants(env: &Env, participants: &Vec<Address>) {
    for user in participants.iter() {
        env.storage().persistent().remove(&DataKey::Participant(user));
    }
}

pub(crate) fn previous_winners(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::PreviousWinners)
        .unwrap_or(Vec::new(env))
}

pub(crate) fn set_previous_winners(env: &Env, winners: &Vec<Address>) {
    let key = DataKey::PreviousWinners;
    env.storage().persistent().set(&key, winners);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}
