//! Round resolution: the house move, the outcome and the payout.
//!
//! The house move is drawn from a hash of the clock and the player key. This
//! is not secret randomness: a validator can predict it. What a round can pay
//! is bounded by the lamports deposited into the player's vault.

use anchor_lang::prelude::*;
use solana_sha256_hasher::hashv;

use crate::constants::CHEST_REWARD;
use crate::errors::RpsError;
use crate::state::Choice;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Win,
    Draw,
    Lose,
}

impl Outcome {
    /// Lamports owed to the player for this outcome
    pub fn payout(self) -> u64 {
        match self {
            Outcome::Win => CHEST_REWARD,
            Outcome::Draw | Outcome::Lose => 0,
        }
    }
}

/// Result of one resolution, computed before any lamports move
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Settlement {
    pub house: Choice,
    pub outcome: Outcome,
    pub payout: u64,
}

pub fn entropy(unix_timestamp: i64, slot: u64, player: &Pubkey) -> [u8; 32] {
    hashv(&[
        &unix_timestamp.to_le_bytes(),
        &slot.to_le_bytes(),
        player.as_ref(),
    ])
    .to_bytes()
}

pub fn house_move(entropy: &[u8; 32]) -> Choice {
    Choice::ALL[entropy[0] as usize % Choice::ALL.len()]
}

pub fn judge(player: Choice, house: Choice) -> Outcome {
    if player.beats(house) {
        Outcome::Win
    } else if house.beats(player) {
        Outcome::Lose
    } else {
        Outcome::Draw
    }
}

/// Decides the round against `house` given the vault's spendable lamports.
///
/// A win the vault cannot fully cover aborts the round instead of paying
/// part of the reward.
pub fn settle(
    answer: Choice,
    house: Choice,
    spendable: u64,
) -> std::result::Result<Settlement, RpsError> {
    let outcome = judge(answer, house);
    let payout = outcome.payout();

    if payout > spendable {
        return Err(RpsError::InsufficientVaultFunds);
    }

    Ok(Settlement {
        house,
        outcome,
        payout,
    })
}
