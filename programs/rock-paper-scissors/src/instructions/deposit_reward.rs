use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::{CHEST_REWARD, VAULT_SEED};
use crate::errors::RpsError;
use crate::events::RewardDeposited;
use crate::pda;
use crate::state::VaultAccount;

/// Funds a vault with `CHEST_REWARD` lamports from the depositor.
///
/// Any signer may fund any vault. The runtime debits the transaction fee
/// before the program runs, so the balance checked here is what is left
/// after the fee. The depositor must end up either empty or still rent
/// exempt, otherwise the system program would refuse the transfer.
pub fn deposit_reward(ctx: Context<DepositReward>) -> Result<()> {
    let rent = Rent::get()?;
    let vault_after = plan_deposit(
        ctx.accounts.depositor.lamports(),
        rent.minimum_balance(0),
        ctx.accounts.vault.to_account_info().lamports(),
    )?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.depositor.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        CHEST_REWARD,
    )?;

    let rent_floor = rent.minimum_balance(VaultAccount::LEN);
    let vault_balance = VaultAccount::spendable(vault_after, rent_floor);

    msg!(
        "Deposited {} lamports into vault of {}. Vault balance: {}",
        CHEST_REWARD,
        ctx.accounts.vault.owner,
        vault_balance
    );

    emit!(RewardDeposited {
        vault: ctx.accounts.vault.key(),
        depositor: ctx.accounts.depositor.key(),
        amount: CHEST_REWARD,
        vault_balance,
    });

    Ok(())
}

/// Checks a deposit before anything moves and returns the vault's lamports
/// once it lands.
///
/// What stays with the depositor must be zero or at least
/// `depositor_rent_floor`.
pub fn plan_deposit(
    depositor_lamports: u64,
    depositor_rent_floor: u64,
    vault_lamports: u64,
) -> std::result::Result<u64, RpsError> {
    let left = depositor_lamports
        .checked_sub(CHEST_REWARD)
        .ok_or(RpsError::InsufficientFunds)?;
    if left != 0 && left < depositor_rent_floor {
        return Err(RpsError::InsufficientFunds);
    }
    vault_lamports
        .checked_add(CHEST_REWARD)
        .ok_or(RpsError::ArithmeticOverflow)
}

#[derive(Accounts)]
pub struct DepositReward<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        constraint = pda::matches(VAULT_SEED, &vault.owner, vault.bump, &vault.key())
            @ RpsError::AddressMismatch
    )]
    pub vault: Account<'info, VaultAccount>,

    pub system_program: Program<'info, System>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TRANSACTION_COST;

    // Rent::default() for a zero-data and a vault-sized account
    const WALLET_RENT: u64 = 890_880;
    const VAULT_RENT: u64 = 1_176_240;

    #[test]
    fn test_rent_floors_match_default_rent() {
        let rent = Rent::default();
        assert_eq!(rent.minimum_balance(0), WALLET_RENT);
        assert_eq!(rent.minimum_balance(VaultAccount::LEN), VAULT_RENT);
    }

    #[test]
    fn test_deposit_is_exact() {
        for before in [
            CHEST_REWARD + TRANSACTION_COST,
            CHEST_REWARD + TRANSACTION_COST + WALLET_RENT,
            10 * CHEST_REWARD,
            u64::MAX / 2,
        ] {
            // the runtime takes the fee first
            let after_fee = before - TRANSACTION_COST;
            let vault_after = plan_deposit(after_fee, WALLET_RENT, VAULT_RENT).unwrap();
            let depositor_after = after_fee - CHEST_REWARD;

            assert_eq!(before - CHEST_REWARD - TRANSACTION_COST, depositor_after);
            assert_eq!(vault_after, VAULT_RENT + CHEST_REWARD);
            assert_eq!(VaultAccount::spendable(vault_after, VAULT_RENT), CHEST_REWARD);
        }
    }

    #[test]
    fn test_deposits_accumulate() {
        let once = plan_deposit(u64::MAX / 2, WALLET_RENT, VAULT_RENT).unwrap();
        let twice = plan_deposit(u64::MAX / 2, WALLET_RENT, once).unwrap();
        assert_eq!(VaultAccount::spendable(twice, VAULT_RENT), 2 * CHEST_REWARD);
    }

    #[test]
    fn test_deposit_rejects_short_depositor() {
        assert!(matches!(
            plan_deposit(CHEST_REWARD - 1, WALLET_RENT, 0),
            Err(RpsError::InsufficientFunds)
        ));
        assert!(matches!(
            plan_deposit(0, WALLET_RENT, 0),
            Err(RpsError::InsufficientFunds)
        ));
    }

    #[test]
    fn test_deposit_rejects_leftover_below_rent() {
        for left in [1, WALLET_RENT / 2, WALLET_RENT - 1] {
            assert!(matches!(
                plan_deposit(CHEST_REWARD + left, WALLET_RENT, VAULT_RENT),
                Err(RpsError::InsufficientFunds)
            ));
        }
        // draining to zero or keeping the floor are both fine
        assert!(plan_deposit(CHEST_REWARD, WALLET_RENT, VAULT_RENT).is_ok());
        assert!(plan_deposit(CHEST_REWARD + WALLET_RENT, WALLET_RENT, VAULT_RENT).is_ok());
    }

    #[test]
    fn test_deposit_rejects_vault_overflow() {
        assert!(matches!(
            plan_deposit(CHEST_REWARD, WALLET_RENT, u64::MAX - CHEST_REWARD + 1),
            Err(RpsError::ArithmeticOverflow)
        ));
    }
}
