use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Source token account cannot cover the transfer")]
    InsufficientBalance,
    #[msg("Signer is not the maker of this escrow")]
    Unauthorized,
    #[msg("Mint does not match the escrow")]
    MintMismatch,
}
