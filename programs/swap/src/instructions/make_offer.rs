use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    constants::OFFER_SEED, errors::EscrowError, events::OfferMade,
    instructions::shared::transfer_tokens, state::Offer,
};

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct MakeOffer<'info> {
    /// The maker who sets the exchange terms and deposits Token A
    #[account(mut)]
    pub maker: Signer<'info>,

    /// Token A mint (the token the maker will deposit)
    #[account(mint::token_program = token_program)]
    pub token_mint_a: InterfaceAccount<'info, Mint>,

    /// Token B mint (the token the maker wants to receive)
    #[account(mint::token_program = token_program)]
    pub token_mint_b: InterfaceAccount<'info, Mint>,

    /// Maker's associated token account for Token A (source of the deposit)
    #[account(
        mut,
        associated_token::mint = token_mint_a,
        associated_token::authority = maker,
        associated_token::token_program = token_program,
    )]
    pub maker_token_account_a: InterfaceAccount<'info, TokenAccount>,

    /// Offer account; `init` fails if this (maker, id) pair is already open
    #[account(
        init,
        payer = maker,
        space = Offer::SPACE,
        seeds = [OFFER_SEED, maker.key().as_ref(), id.to_le_bytes().as_ref()],
        bump,
    )]
    pub offer: Account<'info, Offer>,

    /// Vault owned by the offer PDA, holds the deposited Token A
    #[account(
        init,
        payer = maker,
        associated_token::mint = token_mint_a,
        associated_token::authority = offer,
        associated_token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> MakeOffer<'info> {
    /// Record the exchange terms in the offer account
    pub fn save_offer(
        &mut self,
        id: u64,
        token_b_wanted_amount: u64,
        bumps: &MakeOfferBumps,
    ) -> Result<()> {
        self.offer.set_inner(Offer {
            id,
            maker: self.maker.key(),
            token_mint_a: self.token_mint_a.key(),
            token_mint_b: self.token_mint_b.key(),
            token_b_wanted_amount,
            bump: bumps.offer,
        });
        Ok(())
    }

    /// Transfer Token A from the maker to the vault
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        require_gte!(
            self.maker_token_account_a.amount,
            amount,
            EscrowError::InsufficientMakerBalance
        );

        transfer_tokens(
            &self.maker_token_account_a,
            &self.vault,
            amount,
            &self.token_mint_a,
            &self.maker.to_account_info(),
            &self.token_program,
            None,
        )
    }
}

/// Handler for the make_offer instruction
pub fn handler(
    ctx: Context<MakeOffer>,
    id: u64,
    token_a_offered_amount: u64,
    token_b_wanted_amount: u64,
) -> Result<()> {
    require_gt!(token_a_offered_amount, 0, EscrowError::InvalidAmount);
    require_gt!(token_b_wanted_amount, 0, EscrowError::InvalidAmount);
    require_keys_neq!(
        ctx.accounts.token_mint_a.key(),
        ctx.accounts.token_mint_b.key(),
        EscrowError::SameTokenMints
    );

    ctx.accounts.save_offer(id, token_b_wanted_amount, &ctx.bumps)?;
    ctx.accounts.deposit(token_a_offered_amount)?;

    msg!(
        "Offer {} opened: {} of token A for {} of token B",
        id,
        token_a_offered_amount,
        token_b_wanted_amount
    );
    emit!(OfferMade {
        offer: ctx.accounts.offer.key(),
        maker: ctx.accounts.maker.key(),
        id,
        token_mint_a: ctx.accounts.token_mint_a.key(),
        token_mint_b: ctx.accounts.token_mint_b.key(),
        token_a_offered_amount,
        token_b_wanted_amount,
    });

    Ok(())
}
