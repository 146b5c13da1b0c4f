use anchor_lang::prelude::*;

use crate::constants::{GAME_SEED, VAULT_SEED};
use crate::errors::RpsError;
use crate::events::RoundResolved;
use crate::pda;
use crate::resolution::{self, Outcome};
use crate::state::{GameAccount, VaultAccount};
use crate::utils::transfer_from_vault;

/// Plays the stored move against a house move drawn from the clock.
///
/// Everything is decided from the accounts as they are on entry; lamports
/// only move once the settlement is known to be payable.
pub fn resolve_round(ctx: Context<ResolveRound>) -> Result<()> {
    let clock = Clock::get()?;
    let owner = ctx.accounts.owner.key();
    let answer = ctx.accounts.game.answer;

    let seed = resolution::entropy(clock.unix_timestamp, clock.slot, &owner);
    let house = resolution::house_move(&seed);

    let vault_info = ctx.accounts.vault.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(VaultAccount::LEN);
    let spendable = VaultAccount::spendable(vault_info.lamports(), rent_floor);

    let settlement = resolution::settle(answer, house, spendable)?;

    msg!("Your answer {}. House answer {}", answer, settlement.house);

    transfer_from_vault(
        &vault_info,
        &ctx.accounts.owner.to_account_info(),
        settlement.payout,
    )?;

    match settlement.outcome {
        Outcome::Win => msg!("You win! {} lamports paid out", settlement.payout),
        Outcome::Draw => msg!("Draw!"),
        Outcome::Lose => msg!("You lose!"),
    }

    emit!(RoundResolved {
        player: owner,
        answer,
        house: settlement.house,
        outcome: settlement.outcome,
        payout: settlement.payout,
        vault_balance: spendable - settlement.payout,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ResolveRound<'info> {
    /// Receives the payout
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        constraint = vault.is_owned_by(&owner.key()) @ RpsError::Unauthorized,
        constraint = pda::matches(VAULT_SEED, &vault.owner, vault.bump, &vault.key())
            @ RpsError::AddressMismatch
    )]
    pub vault: Account<'info, VaultAccount>,

    #[account(
        constraint = game.is_owned_by(&owner.key()) @ RpsError::Unauthorized,
        constraint = pda::matches(GAME_SEED, &game.owner, game.bump, &game.key())
            @ RpsError::AddressMismatch
    )]
    pub game: Account<'info, GameAccount>,
}
