use anchor_lang::prelude::*;

use crate::constants::{GAME_SEED, VAULT_SEED};
use crate::errors::RpsError;
use crate::events::GameInitialized;
use crate::state::{Choice, GameAccount, VaultAccount};

/// Creates the owner's vault and game account and records the first move.
///
/// The accounts are `init_if_needed` so an existing pair reaches the handler
/// and is rejected with `AlreadyInitialized` instead of a generic system
/// program error. A freshly created account is zeroed, so an unset owner
/// marks it as new.
pub fn initialize(ctx: Context<Initialize>, answer: String) -> Result<()> {
    let answer: Choice = answer.parse()?;

    ensure_uninitialized(&ctx.accounts.vault, &ctx.accounts.game)?;

    let owner = ctx.accounts.owner.key();

    let vault = &mut ctx.accounts.vault;
    vault.owner = owner;
    vault.bump = ctx.bumps.vault;

    let game = &mut ctx.accounts.game;
    game.owner = owner;
    game.answer = answer;
    game.bump = ctx.bumps.game;

    msg!("Game initialized for {}. Your choice: {}", owner, answer);

    emit!(GameInitialized {
        player: owner,
        vault: ctx.accounts.vault.key(),
        game: ctx.accounts.game.key(),
        answer,
    });

    Ok(())
}

/// Both accounts must still be zeroed; a stored owner on either one means
/// the pair was created before.
pub fn ensure_uninitialized(
    vault: &VaultAccount,
    game: &GameAccount,
) -> std::result::Result<(), RpsError> {
    if vault.owner != Pubkey::default() || game.owner != Pubkey::default() {
        return Err(RpsError::AlreadyInitialized);
    }
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The player; pays for both accounts
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        space = VaultAccount::LEN,
        seeds = [VAULT_SEED, owner.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, VaultAccount>,

    #[account(
        init_if_needed,
        payer = owner,
        space = GameAccount::LEN,
        seeds = [GAME_SEED, owner.key().as_ref()],
        bump
    )]
    pub game: Account<'info, GameAccount>,

    pub system_program: Program<'info, System>,
}
