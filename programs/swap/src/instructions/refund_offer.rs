use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    constants::OFFER_SEED,
    events::OfferRefunded,
    instructions::shared::{close_token_account, transfer_tokens},
    state::Offer,
};

#[derive(Accounts)]
pub struct RefundOffer<'info> {
    /// The maker who opened the offer; only they can cancel it
    #[account(mut)]
    pub maker: Signer<'info>,

    /// Token A mint
    pub token_mint_a: InterfaceAccount<'info, Mint>,

    /// Maker's associated token account for Token A (receives the refund)
    #[account(
        init_if_needed,
        payer = maker,
        associated_token::mint = token_mint_a,
        associated_token::authority = maker,
        associated_token::token_program = token_program,
    )]
    pub maker_token_account_a: InterfaceAccount<'info, TokenAccount>,

    /// Offer account storing the exchange terms (closed to the maker)
    #[account(
        mut,
        close = maker,
        has_one = maker,
        has_one = token_mint_a,
        seeds = [OFFER_SEED, maker.key().as_ref(), offer.id.to_le_bytes().as_ref()],
        bump = offer.bump,
    )]
    pub offer: Account<'info, Offer>,

    /// Vault holding Token A (authority is the offer PDA)
    #[account(
        mut,
        associated_token::mint = token_mint_a,
        associated_token::authority = offer,
        associated_token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> RefundOffer<'info> {
    /// Return all Token A from the vault to the maker and close the vault
    pub fn refund_and_close_vault(&mut self) -> Result<()> {
        let id_bytes = self.offer.id.to_le_bytes();
        let signer_seeds: &[&[&[u8]]] = &[&[
            OFFER_SEED,
            self.maker.key.as_ref(),
            id_bytes.as_ref(),
            &[self.offer.bump],
        ]];

        transfer_tokens(
            &self.vault,
            &self.maker_token_account_a,
            self.vault.amount,
            &self.token_mint_a,
            &self.offer.to_account_info(),
            &self.token_program,
            Some(signer_seeds),
        )?;

        close_token_account(
            &self.vault,
            &self.maker.to_account_info(),
            &self.offer.to_account_info(),
            &self.token_program,
            signer_seeds,
        )
    }
}

/// Handler for the refund_offer instruction
pub fn handler(ctx: Context<RefundOffer>) -> Result<()> {
    let token_a_amount = ctx.accounts.vault.amount;

    ctx.accounts.refund_and_close_vault()?;

    msg!("Offer {} refunded: {} of token A", ctx.accounts.offer.id, token_a_amount);
    emit!(OfferRefunded {
        offer: ctx.accounts.offer.key(),
        maker: ctx.accounts.maker.key(),
        token_a_amount,
    });

    Ok(())
}
