use anchor_lang::prelude::*;

use crate::resolution::Outcome;
use crate::state::Choice;

#[event]
pub struct GameInitialized {
    pub player: Pubkey,
    pub vault: Pubkey,
    pub game: Pubkey,
    pub answer: Choice,
}

#[event]
pub struct RewardDeposited {
    pub vault: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}

#[event]
pub struct AnswerSubmitted {
    pub player: Pubkey,
    pub previous: Choice,
    pub answer: Choice,
}

#[event]
pub struct RoundResolved {
    pub player: Pubkey,
    pub answer: Choice,
    pub house: Choice,
    pub outcome: Outcome,
    pub payout: u64,
    pub vault_balance: u64,
}
