//! Address derivation shared by clients and tests. Both addresses are pure
//! functions of their inputs, so no lookup table is needed to find an escrow.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address_with_program_id;

use crate::constants::ESCROW_SEED;

/// Escrow PDA and its canonical bump for `(maker, seed)`.
pub fn escrow_address(maker: &Pubkey, seed: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[ESCROW_SEED, maker.as_ref(), &seed.to_le_bytes()],
        &crate::ID,
    )
}

/// The vault is the escrow's associated token account for the offered mint.
pub fn vault_address(escrow: &Pubkey, mint_a: &Pubkey, token_program: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(escrow, mint_a, token_program)
}
