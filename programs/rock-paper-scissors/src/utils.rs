use anchor_lang::prelude::*;

use crate::errors::RpsError;

/// Moves lamports out of a program-owned vault into `to`.
///
/// The vault must be owned by this program; the runtime rejects debits from
/// anything else when the instruction finishes.
pub fn transfer_from_vault<'info>(
    vault: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    {
        let mut vault_lamports = vault.try_borrow_mut_lamports()?;
        let balance = **vault_lamports;
        **vault_lamports = balance
            .checked_sub(amount)
            .ok_or(RpsError::InsufficientVaultFunds)?;
    }

    let mut to_lamports = to.try_borrow_mut_lamports()?;
    let balance = **to_lamports;
    **to_lamports = balance
        .checked_add(amount)
        .ok_or(RpsError::ArithmeticOverflow)?;

    Ok(())
}
