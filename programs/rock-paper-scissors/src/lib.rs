use anchor_lang::prelude::*;

declare_id!("88gCkVk1HayXVtgfLvjKQp2s1aiphyNXUscKqZ4gAYyn");

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod resolution;
pub mod state;
pub mod utils;

pub use constants::*;
pub use errors::*;
pub use instructions::*;
pub use state::*;

#[program]
pub mod rock_paper_scissors {
    use super::*;

    /// Creates the caller's vault and game account and stores the first move.
    ///
    /// Both accounts live at addresses derived from the caller's key, so a
    /// player can only ever hold one pair. Calling this again fails with
    /// `AlreadyInitialized` and leaves the stored move and vault untouched.
    /// Passing any other vault or game address fails Anchor's seeds check
    /// with `ConstraintSeeds`, not `AddressMismatch`.
    pub fn initialize(ctx: Context<Initialize>, answer: String) -> Result<()> {
        instructions::initialize(ctx, answer)
    }

    /// Moves `CHEST_REWARD` lamports from the signer into a vault
    pub fn deposit_reward(ctx: Context<DepositReward>) -> Result<()> {
        instructions::deposit_reward(ctx)
    }

    /// Replaces the stored move (owner only)
    pub fn submit_answer(ctx: Context<SubmitAnswer>, answer: String) -> Result<()> {
        instructions::submit_answer(ctx, answer)
    }

    /// Plays the stored move against the house and pays out a win from the vault.
    ///
    /// Draws and losses move no lamports. A win the vault cannot cover aborts
    /// with `InsufficientVaultFunds`; the vault never drops below its rent reserve.
    pub fn resolve_round(ctx: Context<ResolveRound>) -> Result<()> {
        instructions::resolve_round(ctx)
    }
}
