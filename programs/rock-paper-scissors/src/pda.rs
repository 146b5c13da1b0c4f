//! Deterministic addressing of the per-player accounts.
//!
//! Every player owns exactly one vault and one game account, found at
//! `[tag, owner]` under this program. Anyone can recompute them, so no
//! registry of players is kept on chain.

use anchor_lang::prelude::*;

use crate::constants::{GAME_SEED, VAULT_SEED};

/// Canonical program address and bump for `[tag, owner]` under `program_id`
pub fn derive_address(tag: &[u8], owner: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[tag, owner.as_ref()], program_id)
}

pub fn vault_address(owner: &Pubkey) -> (Pubkey, u8) {
    derive_address(VAULT_SEED, owner, &crate::ID)
}

pub fn game_address(owner: &Pubkey) -> (Pubkey, u8) {
    derive_address(GAME_SEED, owner, &crate::ID)
}

/// Re-derives `[tag, owner, bump]` and compares it with `address`.
///
/// Uses the stored bump instead of searching again, so the check is a single
/// hash. A seed set that does not map to a valid program address never matches.
pub fn matches(tag: &[u8], owner: &Pubkey, bump: u8, address: &Pubkey) -> bool {
    Pubkey::create_program_address(&[tag, owner.as_ref(), &[bump]], &crate::ID)
        .map(|derived| derived == *address)
        .unwrap_or(false)
}
