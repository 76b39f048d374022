//! Test modules for the Guess Lottery contract.


use crate::contract::{GuessLottery, GuessLotteryClient};
use crate::types::{DataKey, Round, REGISTRATION_FEE};
use soroban_sdk::{
    testutils::{Address as _, Events as _},
    token::{StellarAssetClient, TokenClient},
    Address, Env, Val, Vec,
};

/// Contract event as recorded by the host: (contract, topics, data)
pub(crate) type EventRecord = (Address, Vec<Val>, Val);

/// Deployed lottery plus the token it collects fees in
pub(crate) struct Setup<'a> {
    pub client: GuessLotteryClient<'a>,
    pub token: TokenClient<'a>,
    pub asset: StellarAssetClient<'a>,
    pub owner: Address,
}

/// Registers a token and the contract, then initializes the lottery
pub(crate) fn setup(env: &Env) -> Setup<'_> {
    env.mock_all_auths();

    let token_admin = Address::generate(env);
    let sac = env.register_stellar_asset_contract_v2(token_admin);
    let token = TokenClient::new(env, &sac.address());
    let asset = StellarAssetClient::new(env, &sac.address());

    let contract_id = env.register(GuessLottery, ());
    let client = GuessLotteryClient::new(env, &contract_id);

    let owner = Address::generate(env);
    client.initialize(&owner, &sac.address());

    Setup { client, token, asset, owner }
}

/// Creates a participant holding enough for several entries
pub(crate) fn funded_player(env: &Env, asset: &StellarAssetClient) -> Address {
    let player = Address::generate(env);
    asset.mint(&player, &(REGISTRATION_FEE * 10));
    player
}

/// Reads the stored round, target included
pub(crate) fn read_round(env: &Env, client: &GuessLotteryClient) -> Round {
    env.as_contract(&client.address, || {
        env.storage()
            .persistent()
            .get(&DataKey::ActiveRound)
            .unwrap()
    })
}

/// Overwrites the hidden target so tests can aim guesses
pub(crate) fn set_target(env: &Env, client: &GuessLotteryClient, target: u32) {
    env.as_contract(&client.address, || {
        let mut round: Round = env.storage().persistent().get(&DataKey::ActiveRound).unwrap();
        round.target = target;
        env.storage().persistent().set(&DataKey::ActiveRound, &round);
    });
}

/// A valid guess that differs from `target`
pub(crate) fn miss(target: u32) -> u32 {
    if target == 9 { 1 } else { target + 1 }
}

/// The newest `count` contract events, oldest first
pub(crate) fn last_events(env: &Env, count: u32) -> Vec<EventRecord> {
    let all = env.events().all();
    all.slice(all.len() - count..)
}
