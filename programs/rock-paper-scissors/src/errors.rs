use anchor_lang::prelude::*;

#[error_code]
pub enum RpsError {
    #[msg("Game or vault account is already initialized")]
    AlreadyInitialized,
    #[msg("Account address does not match its derived address")]
    AddressMismatch,
    #[msg("Available only Rock, Paper and Scissors")]
    InvalidMove,
    #[msg("Signer is not the owner of this account")]
    Unauthorized,
    #[msg("Signer balance cannot cover the reward deposit")]
    InsufficientFunds,
    #[msg("Vault balance cannot cover the payout")]
    InsufficientVaultFunds,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
