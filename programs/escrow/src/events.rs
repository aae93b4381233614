use anchor_lang::prelude::*;

#[event]
pub struct EscrowMade {
    pub escrow: Pubkey,
    pub maker: Pubkey,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    pub seed: u64,
    pub deposit: u64,
    pub receive: u64,
}

/// `paid` is the mint B amount sent to the maker, `received` the vault balance sent to the taker.
#[event]
pub struct EscrowTaken {
    pub escrow: Pubkey,
    pub maker: Pubkey,
    pub taker: Pubkey,
    pub paid: u64,
    pub received: u64,
}

#[event]
pub struct EscrowRefunded {
    pub escrow: Pubkey,
    pub maker: Pubkey,
    pub refunded: u64,
}
