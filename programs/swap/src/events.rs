use anchor_lang::prelude::*;

#[event]
pub struct OfferMade {
    pub offer: Pubkey,
    pub maker: Pubkey,
    pub id: u64,
    pub token_mint_a: Pubkey,
    pub token_mint_b: Pubkey,
    pub token_a_offered_amount: u64,
    pub token_b_wanted_amount: u64,
}

#[event]
pub struct OfferTaken {
    pub offer: Pubkey,
    pub maker: Pubkey,
    pub taker: Pubkey,
    pub token_a_amount: u64,
    pub token_b_amount: u64,
}

#[event]
pub struct OfferRefunded {
    pub offer: Pubkey,
    pub maker: Pubkey,
    pub token_a_amount: u64,
}
