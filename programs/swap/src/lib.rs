use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("2xSfSmcDi39CegZvhc5qzzb4M63BMF76fkBaN1GqhAsj");

#[program]
pub mod swap {
    use super::*;

    /// Open an offer: maker deposits Token A into the vault and names the Token B price
    pub fn make_offer(
        ctx: Context<MakeOffer>,
        id: u64,
        token_a_offered_amount: u64,
        token_b_wanted_amount: u64,
    ) -> Result<()> {
        instructions::make_offer::handler(ctx, id, token_a_offered_amount, token_b_wanted_amount)
    }

    /// Settle an offer: taker pays Token B to the maker and receives the vaulted Token A
    pub fn take_offer(ctx: Context<TakeOffer>) -> Result<()> {
        instructions::take_offer::handler(ctx)
    }

    /// Cancel an offer: maker reclaims the vaulted Token A
    pub fn refund_offer(ctx: Context<RefundOffer>) -> Result<()> {
        instructions::refund_offer::handler(ctx)
    }
}
