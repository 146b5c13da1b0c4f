use anchor_lang::prelude::*;

/// Namespace tag of the per-player reward vault
#[constant]
pub const VAULT_SEED: &[u8] = b"initialReward";

/// Namespace tag of the per-player game account
#[constant]
pub const GAME_SEED: &[u8] = b"initialGame";

/// Lamports moved by a single deposit and paid out on a win (3 SOL)
#[constant]
pub const CHEST_REWARD: u64 = 3_000_000_000;

/// Base fee the runtime charges a single-signature transaction.
/// Not charged by this program; clients use it to reconcile balances.
#[constant]
pub const TRANSACTION_COST: u64 = 5_000;
