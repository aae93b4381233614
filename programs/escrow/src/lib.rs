use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
use contexts::*;

pub mod errors;
pub mod events;
pub mod pda;
pub mod state;


declare_id!("CDaQdxv38pU9X1siTfMgiztVPSu95KYCAEepfwhhTVjD");

#[program]
pub mod escrow {
    use super::*;

    /// Lock `deposit` of mint A in a fresh vault, asking `receive` of mint B in return.
    pub fn make(ctx: Context<Make>, seed: u64, deposit: u64, receive: u64) -> Result<()> {
        ctx.accounts.check_amounts(deposit, receive)?;
        ctx.accounts.save_escrow(seed, receive, &ctx.bumps)?;
        ctx.accounts.deposit(deposit)
    }

    /// Pay the maker and withdraw the vault. Closes the escrow.
    pub fn take(ctx: Context<Take>) -> Result<()> {
        ctx.accounts.check_balance()?;
        ctx.accounts.deposit()?;
        ctx.accounts.withdraw_and_close_vault()
    }

    /// Return the vault to the maker. Closes the escrow.
    pub fn refund(ctx: Context<Refund>) -> Result<()> {
        ctx.accounts.refund_and_close_vault()
    }
}
