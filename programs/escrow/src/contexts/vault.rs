use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TokenInterface,
    TransferChecked,
};

use crate::{constants::ESCROW_SEED, state::Escrow};

/// Empties the vault into `to` and closes it with rent going to `rent_to`,
/// both signed by the escrow PDA. Returns the amount moved.
pub fn release_vault<'info>(
    escrow: &Account<'info, Escrow>,
    vault: &InterfaceAccount<'info, TokenAccount>,
    mint: &InterfaceAccount<'info, Mint>,
    to: AccountInfo<'info>,
    rent_to: AccountInfo<'info>,
    token_program: &Interface<'info, TokenInterface>,
) -> Result<u64> {
    let seed = escrow.seed.to_le_bytes();
    let bump = [escrow.bump];
    let signer_seeds: [&[&[u8]]; 1] = [&[ESCROW_SEED, escrow.maker.as_ref(), &seed, &bump]];

    let amount = vault.amount;

    let accounts = TransferChecked {
        from: vault.to_account_info(),
        mint: mint.to_account_info(),
        to,
        authority: escrow.to_account_info(),
    };
    let ctx =
        CpiContext::new_with_signer(token_program.to_account_info(), accounts, &signer_seeds);
    transfer_checked(ctx, amount, mint.decimals)?;

    let accounts = CloseAccount {
        account: vault.to_account_info(),
        destination: rent_to,
        authority: escrow.to_account_info(),
    };
    let ctx =
        CpiContext::new_with_signer(token_program.to_account_info(), accounts, &signer_seeds);
    close_account(ctx)?;

    Ok(amount)
}
