use anchor_lang::prelude::*;

use crate::constants::GAME_SEED;
use crate::errors::RpsError;
use crate::events::AnswerSubmitted;
use crate::pda;
use crate::state::GameAccount;

pub fn submit_answer(ctx: Context<SubmitAnswer>, answer: String) -> Result<()> {
    let game = &mut ctx.accounts.game;
    let previous = game.submit(&answer)?;
    let answer = game.answer;

    msg!("Answer changed from {} to {}", previous, answer);

    emit!(AnswerSubmitted {
        player: game.owner,
        previous,
        answer,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SubmitAnswer<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        constraint = game.is_owned_by(&owner.key()) @ RpsError::Unauthorized,
        constraint = pda::matches(GAME_SEED, &game.owner, game.bump, &game.key())
            @ RpsError::AddressMismatch
    )]
    pub game: Account<'info, GameAccount>,
}
