use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use super::release_vault;
use crate::{constants::ESCROW_SEED, errors::EscrowError, events::EscrowTaken, state::Escrow};

#[derive(Accounts)]
pub struct Take<'info> {
    #[account(mut)]
    pub taker: Signer<'info>,
    #[account(mut)]
    pub maker: SystemAccount<'info>,
    pub mint_a: Box<InterfaceAccount<'info, Mint>>,
    pub mint_b: Box<InterfaceAccount<'info, Mint>>,
    #[account(
        mut,
        close = maker,
        has_one = maker @ EscrowError::Unauthorized,
        has_one = mint_a @ EscrowError::MintMismatch,
        has_one = mint_b @ EscrowError::MintMismatch,
        seeds = [ESCROW_SEED, escrow.maker.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump
    )]
    pub escrow: Box<Account<'info, Escrow>>,
    #[account(
        mut,
        associated_token::mint = mint_a,
        associated_token::authority = escrow,
        associated_token::token_program = token_program,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = mint_a,
        associated_token::authority = taker,
        associated_token::token_program = token_program,
    )]
    pub taker_ata_a: Box<InterfaceAccount<'info, TokenAccount>>,
    #[account(
        mut,
        associated_token::mint = mint_b,
        associated_token::authority = taker,
        associated_token::token_program = token_program,
    )]
    pub taker_ata_b: Box<InterfaceAccount<'info, TokenAccount>>,
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = mint_b,
        associated_token::authority = maker,
        associated_token::token_program = token_program,
    )]
    pub maker_ata_b: Box<InterfaceAccount<'info, TokenAccount>>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Take<'info> {
    pub fn check_balance(&self) -> Result<()> {
        require_gte!(
            self.taker_ata_b.amount,
            self.escrow.receive,
            EscrowError::InsufficientBalance
        );
        Ok(())
    }

    /// Pay the maker the requested amount of mint B.
    pub fn deposit(&mut self) -> Result<()> {
        let transfer_accounts = TransferChecked {
            from: self.taker_ata_b.to_account_info(),
            mint: self.mint_b.to_account_info(),
            to: self.maker_ata_b.to_account_info(),
            authority: self.taker.to_account_info(),
        };

        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), transfer_accounts);

        transfer_checked(cpi_ctx, self.escrow.receive, self.mint_b.decimals)
    }

    /// Move the whole vault to the taker and hand the vault rent to the maker.
    pub fn withdraw_and_close_vault(&mut self) -> Result<()> {
        let amount = release_vault(
            &self.escrow,
            &self.vault,
            &self.mint_a,
            self.taker_ata_a.to_account_info(),
            self.maker.to_account_info(),
            &self.token_program,
        )?;

        msg!(
            "escrow {} taken by {}: paid {}, received {}",
            self.escrow.key(),
            self.taker.key(),
            self.escrow.receive,
            amount
        );
        emit!(EscrowTaken {
            escrow: self.escrow.key(),
            maker: self.maker.key(),
            taker: self.taker.key(),
            paid: self.escrow.receive,
            received: amount,
        });

        Ok(())
    }
}
