//! Target number derivation from the host PRNG.
//!
//! The host seeds `env.prng()` per invocation from ledger data. That is
//! unpredictable enough for a small-stakes game but is not a secure source.

use soroban_sdk::Env;

use crate::types::{MAX_GUESS, MIN_GUESS};

/// Draws the hidden target for a new round
pub(crate) fn draw_target(env: &Env) -> u32 {
    let raw: u64 = env.prng().gen();
    target_from_raw(raw)
}

/// Maps a raw random value into `[MIN_GUESS, MAX_GUESS]`
pub fn target_from_raw(raw: u64) -> u32 {
    let span = u64::from(MAX_GUESS - MIN_GUESS + 1);
    (raw % span) as u32 + MIN_GUESS
}
